//! Resolution coordinator: concurrent fan-out over candidate sources,
//! single-consumer aggregation, last-error reporting.
//!
//! Builds the query, discovers candidates, fetches them concurrently
//! under a fixed parallelism ceiling, and reduces extracted term cards
//! into the running tally *in completion order on one task* — workers
//! return plain card lists with no shared-state side effects, so the
//! tally needs no lock and the first-to-the-lead tie-break stays
//! deterministic for a given arrival order.

use futures::stream::{self, StreamExt};

use crate::aggregate::AnswerTally;
use crate::config::ResolveConfig;
use crate::discover;
use crate::error::{ResolveError, Result};
use crate::extract::{HttpTermFetcher, TermFetcher};
use crate::http;
use crate::types::Resolution;

/// Resolve one question end to end: query, discovery, concurrent fetch,
/// aggregation.
///
/// A single failing candidate does not erase answers found on the
/// others — the resolver waits for the whole batch (bounded by
/// `max_sources`) and reports the last fetch failure as
/// [`Resolution::warning`] next to the aggregated answer. No retries are
/// performed; each candidate is attempted exactly once.
///
/// # Errors
///
/// Returns [`ResolveError::Config`] for an invalid configuration and
/// [`ResolveError::Discovery`] if the search-results fetch itself fails —
/// in that case no candidates exist and resolution is aborted.
pub async fn resolve(question: &str, config: &ResolveConfig) -> Result<Resolution> {
    config.validate()?;
    let question = question.trim();
    tracing::trace!(question, "resolving");

    let client = http::build_client(config)?;
    let sources = discover::discover(&client, question, config).await?;
    if sources.is_empty() {
        tracing::debug!(question, "no candidate sources discovered");
        return Ok(Resolution::empty());
    }

    let fetcher = HttpTermFetcher::new(client);
    Ok(resolve_sources(question, &sources, &fetcher, config).await)
}

/// Fan out fetches over known candidate sources and aggregate the winner.
///
/// The core of the coordinator, generic over [`TermFetcher`] so tests can
/// drive it with fixture pages. At most `config.concurrency` fetches run
/// at once; completions are drained by this task and applied to the tally
/// in arrival order. The function returns only after every dispatched
/// fetch has finished — no result is read while workers are in flight.
pub async fn resolve_sources<F>(
    question: &str,
    sources: &[String],
    fetcher: &F,
    config: &ResolveConfig,
) -> Resolution
where
    F: TermFetcher,
{
    let mut tally = AnswerTally::new(question);
    let mut last_error: Option<ResolveError> = None;

    // buffer_unordered(0) would stall forever; clamp for callers that
    // bypass config validation.
    let ceiling = config.concurrency.max(1);

    let mut outcomes = stream::iter(sources)
        .map(|url| async move { (url.as_str(), fetcher.fetch_terms(url).await) })
        .buffer_unordered(ceiling);

    while let Some((url, outcome)) = outcomes.next().await {
        match outcome {
            Ok(cards) => {
                tracing::debug!(url, count = cards.len(), "candidate extracted");
                tally.observe_all(&cards);
            }
            Err(err) => {
                tracing::warn!(url, error = %err, "candidate fetch failed");
                last_error = Some(err);
            }
        }
    }

    Resolution {
        answer: tally.leader().to_owned(),
        warning: last_error,
    }
}
