//! Search query construction.
//!
//! Turns a question string into the fully-formed search-results URL.
//! Uses the HTML-only DuckDuckGo endpoint, which requires no JavaScript
//! and is tolerant of automated requests.

use url::form_urlencoded;

/// The search-results endpoint queried once per question.
pub const SEARCH_ENDPOINT: &str = "https://html.duckduckgo.com/html/";

/// Build the search-results URL for a question.
///
/// Deterministic and pure: the trimmed question is form-encoded (spaces
/// become `+`, reserved characters are percent-encoded) and embedded in
/// the provider's `q` parameter. Never fails — an empty question produces
/// a valid URL with an empty query.
pub fn search_url(question: &str) -> String {
    let encoded: String = form_urlencoded::Serializer::new(String::new())
        .append_pair("q", question.trim())
        .finish();
    format!("{SEARCH_ENDPOINT}?{encoded}")
}
