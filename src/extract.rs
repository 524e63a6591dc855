//! Candidate page fetching and term-block extraction.
//!
//! Fetches one candidate content page at crawl depth 0 (no links are
//! followed from content pages) and extracts every term block into a
//! [`TermCard`]. Extraction is best-effort: a malformed block is skipped,
//! and a page with no term blocks yields an empty list, not an error.

use scraper::{Html, Selector};

use crate::error::{ResolveError, Result};
use crate::types::TermCard;

/// CSS selector for a term block on a content page.
const TERM_BLOCK_SEL: &str = ".SetPageTerm";
/// CSS selector for the prompt side of a term block.
const PROMPT_SEL: &str = ".SetPageTerm-wordText";
/// CSS selector for the definition side of a term block.
const ANSWER_SEL: &str = ".SetPageTerm-definitionText";

/// A source of term cards for a candidate page URL.
///
/// The production implementation is [`HttpTermFetcher`]; tests substitute
/// fixtures through this seam. Implementations must be `Send + Sync` for
/// concurrent fetching across candidate sources.
pub trait TermFetcher: Send + Sync {
    /// Fetch one candidate page and extract its term cards.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::Fetch`] if the page cannot be retrieved.
    /// Parse-level faults inside the page are absorbed, not reported.
    fn fetch_terms(
        &self,
        url: &str,
    ) -> impl std::future::Future<Output = Result<Vec<TermCard>>> + Send;
}

/// HTTP-backed [`TermFetcher`] sharing one configured client.
///
/// The client carries the browser-like request headers applied at
/// construction time; nothing is re-registered per candidate.
pub struct HttpTermFetcher {
    client: reqwest::Client,
}

impl HttpTermFetcher {
    /// Wrap an already-configured client (see [`crate::http::build_client`]).
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl TermFetcher for HttpTermFetcher {
    async fn fetch_terms(&self, url: &str) -> Result<Vec<TermCard>> {
        tracing::trace!(url, "candidate fetch");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ResolveError::Fetch(format!("request to {url} failed: {e}")))?
            .error_for_status()
            .map_err(|e| ResolveError::Fetch(format!("HTTP error from {url}: {e}")))?;

        let html = response
            .text()
            .await
            .map_err(|e| ResolveError::Fetch(format!("response read from {url} failed: {e}")))?;

        parse_term_html(&html)
    }
}

/// Parse a content page into term cards.
///
/// Extracted as a separate function for testability with mock HTML.
/// One card per term block with both a non-empty prompt and a non-empty
/// answer; blocks missing either side are skipped best-effort.
pub(crate) fn parse_term_html(html: &str) -> Result<Vec<TermCard>> {
    let document = Html::parse_document(html);

    let block_sel = Selector::parse(TERM_BLOCK_SEL)
        .map_err(|e| ResolveError::Parse(format!("invalid term block selector: {e:?}")))?;
    let prompt_sel = Selector::parse(PROMPT_SEL)
        .map_err(|e| ResolveError::Parse(format!("invalid prompt selector: {e:?}")))?;
    let answer_sel = Selector::parse(ANSWER_SEL)
        .map_err(|e| ResolveError::Parse(format!("invalid answer selector: {e:?}")))?;

    let mut cards = Vec::new();

    for block in document.select(&block_sel) {
        let prompt = match block.select(&prompt_sel).next() {
            Some(el) => el.text().collect::<String>().trim().to_owned(),
            None => continue,
        };
        if prompt.is_empty() {
            continue;
        }

        let answer = match block.select(&answer_sel).next() {
            Some(el) => el.text().collect::<String>().trim().to_owned(),
            None => continue,
        };
        if answer.is_empty() {
            continue;
        }

        cards.push(TermCard { prompt, answer });
    }

    tracing::debug!(count = cards.len(), "term cards extracted");
    Ok(cards)
}
