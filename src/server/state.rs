//! Application state shared across requests.
//!
//! Exactly two things are shared, both immutable after startup: the
//! extraction configuration and one `reqwest::Client` whose connection pool
//! is reused across requests. The client carries the configured API timeout
//! so no individual call site has to remember it.

use crate::config::ExtractionConfig;
use crate::error::ExtractError;
use std::time::Duration;

pub struct AppState {
    pub config: ExtractionConfig,
    pub http: reqwest::Client,
}

impl AppState {
    /// Build the shared state from a validated configuration.
    pub fn new(config: ExtractionConfig) -> Result<Self, ExtractError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.api_timeout_secs))
            .build()
            .map_err(|e| ExtractError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { config, http })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_from_valid_config() {
        let config = ExtractionConfig::builder()
            .api_key("sk-test")
            .api_timeout_secs(5)
            .build()
            .unwrap();
        let state = AppState::new(config).unwrap();
        assert_eq!(state.config.api_timeout_secs, 5);
    }
}
