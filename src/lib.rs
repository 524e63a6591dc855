//! # termtally
//!
//! Majority-vote answer lookup for flashcard-style questions.
//!
//! Given a question, termtally searches the web for candidate flashcard
//! pages on the target content domain, scrapes each page's term blocks
//! concurrently, and returns the answer whose prompt matches the question
//! most often across all pages.
//!
//! ## Design
//!
//! - One search-results fetch per question at crawl depth 0; candidate
//!   links are unwrapped from the engine's redirect scheme, filtered to
//!   the content domain, deduplicated, and capped
//! - Candidate pages are fetched concurrently under a fixed parallelism
//!   ceiling; extraction is best-effort CSS-selector scraping
//! - Aggregation is single-consumer: workers return plain card lists and
//!   a streaming tally picks the answer that first reaches the top count
//! - A failing candidate is a warning, not a failure — answers found on
//!   healthy sources are still returned
//!
//! ## Security
//!
//! - No API keys or secrets to leak
//! - No network listeners — requests go out, nothing comes in unsolicited
//! - Questions are logged only at trace level
//! - No results are cached or persisted across runs

pub mod aggregate;
pub mod config;
pub mod discover;
pub mod error;
pub mod extract;
pub mod http;
pub mod query;
pub mod resolver;
pub mod types;

pub use aggregate::AnswerTally;
pub use config::ResolveConfig;
pub use error::{ResolveError, Result};
pub use extract::{HttpTermFetcher, TermFetcher};
pub use resolver::{resolve, resolve_sources};
pub use types::{Resolution, TermCard};

/// Resolve a question with sensible default configuration.
///
/// Convenience wrapper around [`resolve`] using [`ResolveConfig::default()`].
///
/// # Errors
///
/// Same as [`resolve`].
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> termtally::Result<()> {
/// let resolution = termtally::resolve_default("capital of france").await?;
/// if resolution.found() {
///     println!("{}", resolution.answer);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn resolve_default(question: &str) -> Result<Resolution> {
    resolve(question, &ResolveConfig::default()).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn resolve_validates_config_zero_max_sources() {
        let config = ResolveConfig {
            max_sources: 0,
            ..Default::default()
        };
        let result = resolve("test", &config).await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("max_sources"));
    }

    #[tokio::test]
    async fn resolve_validates_config_zero_concurrency() {
        let config = ResolveConfig {
            concurrency: 0,
            ..Default::default()
        };
        let result = resolve("test", &config).await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("concurrency"));
    }

    #[tokio::test]
    async fn resolve_validates_config_zero_timeout() {
        let result = resolve(
            "test",
            &ResolveConfig {
                timeout_seconds: 0,
                ..Default::default()
            },
        )
        .await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("timeout"));
    }
}
