//! Error types for answer resolution.
//!
//! All errors use stable string messages suitable for display to users
//! and programmatic handling. Extraction-level faults (a malformed term
//! block on an otherwise healthy page) are not errors at all — they are
//! skipped during parsing.

/// Errors that can occur while resolving an answer for one question.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// The search-results fetch itself failed. Hard: no candidate sources
    /// exist, so resolution of that question is aborted.
    #[error("discovery failed: {0}")]
    Discovery(String),

    /// An individual candidate page fetch failed. Soft: recorded as the
    /// most recent failure and surfaced alongside whatever answer the
    /// remaining sources produced.
    #[error("fetch failed: {0}")]
    Fetch(String),

    /// An HTTP client could not be constructed or a transport-level
    /// operation failed outside discovery/fetch.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Failed to parse an HTML response or a CSS selector.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid resolver configuration.
    #[error("config error: {0}")]
    Config(String),
}

/// Convenience type alias for resolution results.
pub type Result<T> = std::result::Result<T, ResolveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_discovery() {
        let err = ResolveError::Discovery("search request refused".into());
        assert_eq!(err.to_string(), "discovery failed: search request refused");
    }

    #[test]
    fn display_fetch() {
        let err = ResolveError::Fetch("503 from content page".into());
        assert_eq!(err.to_string(), "fetch failed: 503 from content page");
    }

    #[test]
    fn display_http() {
        let err = ResolveError::Http("connection refused".into());
        assert_eq!(err.to_string(), "HTTP error: connection refused");
    }

    #[test]
    fn display_parse() {
        let err = ResolveError::Parse("unexpected HTML structure".into());
        assert_eq!(err.to_string(), "parse error: unexpected HTML structure");
    }

    #[test]
    fn display_config() {
        let err = ResolveError::Config("max_sources must be > 0".into());
        assert_eq!(err.to_string(), "config error: max_sources must be > 0");
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ResolveError>();
    }
}
