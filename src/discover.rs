//! Candidate source discovery from a search-results page.
//!
//! Issues one fetch of the search-results page at crawl depth 0 — the
//! search engine itself is never crawled recursively, since its other
//! links lead to unrelated result pages rather than the target content.
//! Every anchor in the markup is considered; links are unwrapped from the
//! engine's redirect scheme, filtered to the content domain, deduplicated,
//! and capped at `max_sources` in first-seen order.

use std::collections::HashSet;

use scraper::{Html, Selector};
use url::Url;

use crate::config::ResolveConfig;
use crate::error::{ResolveError, Result};
use crate::query;

/// The content domain candidate pages must belong to.
pub const CONTENT_DOMAIN: &str = "quizlet.com";

/// Path segment of the domain's create-a-new-set page, which never
/// contains answers and is excluded from discovery.
const NEW_SET_SEGMENT: &str = "create-set";

/// Discover candidate content pages for a question.
///
/// Fetches the search-results page once and parses it with
/// [`parse_candidates`]. Emission order follows the order links appear in
/// the page markup; callers must not rely on it being stable across runs,
/// since it depends on live search results.
///
/// # Errors
///
/// Returns [`ResolveError::Discovery`] if the search-results fetch fails —
/// a hard failure that aborts resolution of the question, since no
/// candidates exist.
pub async fn discover(
    client: &reqwest::Client,
    question: &str,
    config: &ResolveConfig,
) -> Result<Vec<String>> {
    let url = query::search_url(question);
    tracing::trace!(%url, "discovery fetch");

    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|e| ResolveError::Discovery(format!("search request failed: {e}")))?
        .error_for_status()
        .map_err(|e| ResolveError::Discovery(format!("search HTTP error: {e}")))?;

    let html = response
        .text()
        .await
        .map_err(|e| ResolveError::Discovery(format!("search response read failed: {e}")))?;

    tracing::trace!(bytes = html.len(), "search response received");

    parse_candidates(&html, config.max_sources)
}

/// Parse a search-results page into candidate content-page URLs.
///
/// Extracted as a separate function for testability with mock HTML.
/// Accepts a link only if it unwraps to the content domain and does not
/// reference the new-set page. Duplicates (after unwrapping) are dropped;
/// at most `max_sources` candidates are returned, first seen kept.
pub(crate) fn parse_candidates(html: &str, max_sources: usize) -> Result<Vec<String>> {
    let document = Html::parse_document(html);

    let anchor_sel = Selector::parse("a[href]")
        .map_err(|e| ResolveError::Parse(format!("invalid anchor selector: {e:?}")))?;

    let mut seen: HashSet<String> = HashSet::new();
    let mut candidates = Vec::new();

    for element in document.select(&anchor_sel) {
        let href = match element.value().attr("href") {
            Some(h) => h,
            None => continue,
        };

        let url = match unwrap_redirect(href) {
            Some(u) => u,
            None => continue,
        };

        if !is_content_page(&url) {
            continue;
        }

        if !seen.insert(url.clone()) {
            continue;
        }

        candidates.push(url);
        if candidates.len() >= max_sources {
            break;
        }
    }

    tracing::debug!(count = candidates.len(), "candidate sources discovered");
    Ok(candidates)
}

/// Extract the actual destination from the search engine's redirect wrapper.
///
/// Outbound links look like `//duckduckgo.com/l/?uddg=https%3A%2F%2F...&rut=...`;
/// the `uddg` query parameter holds the percent-encoded destination.
/// Direct links pass through unchanged. Unparseable hrefs yield `None`.
fn unwrap_redirect(href: &str) -> Option<String> {
    // Handle protocol-relative URLs
    let full_href = if href.starts_with("//") {
        format!("https:{href}")
    } else {
        href.to_string()
    };

    let parsed = Url::parse(&full_href).ok()?;

    if parsed.host_str() == Some("duckduckgo.com") && parsed.path().starts_with("/l/") {
        parsed
            .query_pairs()
            .find(|(key, _)| key == "uddg")
            .map(|(_, value)| value.into_owned())
    } else {
        Some(full_href)
    }
}

/// Whether a URL points at an answer-bearing page on the content domain.
fn is_content_page(url: &str) -> bool {
    let Ok(parsed) = Url::parse(url) else {
        return false;
    };
    let Some(host) = parsed.host_str() else {
        return false;
    };

    let on_domain = host == CONTENT_DOMAIN || host.ends_with(&format!(".{CONTENT_DOMAIN}"));
    on_domain && !parsed.path().contains(NEW_SET_SEGMENT)
}
