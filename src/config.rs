//! Resolver configuration with sensible defaults.
//!
//! [`ResolveConfig`] controls how many candidate pages are considered per
//! question, how many are fetched concurrently, and how requests present
//! themselves. The defaults are tuned for polite scraping of a single
//! content domain.

use crate::error::ResolveError;

/// Configuration for resolving one question.
///
/// Use [`Default::default()`] for sensible defaults, or construct with
/// field overrides for custom behaviour.
#[derive(Debug, Clone)]
pub struct ResolveConfig {
    /// Maximum number of candidate content pages discovered per question.
    /// First-seen order decides which candidates are kept at the cap.
    pub max_sources: usize,
    /// Maximum number of candidate pages fetched concurrently.
    pub concurrency: usize,
    /// Per-request HTTP timeout in seconds. Applies to the discovery fetch
    /// and to each candidate page fetch; batch semantics are unchanged —
    /// the resolver still waits for every dispatched fetch to finish.
    pub timeout_seconds: u64,
    /// Custom User-Agent string. If `None`, rotates through a built-in
    /// list of realistic browser User-Agents.
    pub user_agent: Option<String>,
}

impl Default for ResolveConfig {
    fn default() -> Self {
        Self {
            max_sources: 5,
            concurrency: 5,
            timeout_seconds: 8,
            user_agent: None,
        }
    }
}

impl ResolveConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `max_sources` must be greater than 0
    /// - `concurrency` must be greater than 0
    /// - `timeout_seconds` must be greater than 0
    pub fn validate(&self) -> Result<(), ResolveError> {
        if self.max_sources == 0 {
            return Err(ResolveError::Config(
                "max_sources must be greater than 0".into(),
            ));
        }
        if self.concurrency == 0 {
            return Err(ResolveError::Config(
                "concurrency must be greater than 0".into(),
            ));
        }
        if self.timeout_seconds == 0 {
            return Err(ResolveError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_sensible_values() {
        let config = ResolveConfig::default();
        assert_eq!(config.max_sources, 5);
        assert_eq!(config.concurrency, 5);
        assert_eq!(config.timeout_seconds, 8);
        assert!(config.user_agent.is_none());
    }

    #[test]
    fn valid_config_passes_validation() {
        let config = ResolveConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_max_sources_rejected() {
        let config = ResolveConfig {
            max_sources: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("max_sources"));
    }

    #[test]
    fn zero_concurrency_rejected() {
        let config = ResolveConfig {
            concurrency: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("concurrency"));
    }

    #[test]
    fn zero_timeout_rejected() {
        let config = ResolveConfig {
            timeout_seconds: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("timeout_seconds"));
    }

    #[test]
    fn custom_user_agent() {
        let config = ResolveConfig {
            user_agent: Some("CustomBot/1.0".into()),
            ..Default::default()
        };
        assert_eq!(config.user_agent.as_deref(), Some("CustomBot/1.0"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn single_source_single_worker_valid() {
        let config = ResolveConfig {
            max_sources: 1,
            concurrency: 1,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
