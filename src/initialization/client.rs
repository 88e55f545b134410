//! HTTP client initialization.

use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::Config;
use crate::error_handling::InitializationError;

/// Initializes the HTTP client that is this invocation's session.
///
/// Creates a `reqwest::Client` configured with:
/// - Cookie store enabled (this is what makes session warming work: the
///   bot-mitigation cookies collected on the warming GET ride along on the
///   GraphQL POSTs)
/// - User-Agent and per-request timeout from the config
/// - Rustls TLS backend
///
/// The client is created once per invocation and owned by a single execution
/// path; nothing about it persists across invocations.
///
/// # Errors
///
/// Returns [`InitializationError::HttpClientError`] if client creation fails.
pub fn init_client(config: &Config) -> Result<reqwest::Client, InitializationError> {
    let client = ClientBuilder::new()
        .cookie_store(true)
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_client_with_defaults() {
        let config = Config::default();
        assert!(init_client(&config).is_ok());
    }

    #[test]
    fn test_init_client_with_custom_timeout_and_agent() {
        let config = Config {
            timeout_seconds: 1,
            user_agent: "rmp_lookup_test/1.0".to_string(),
            ..Config::default()
        };
        assert!(init_client(&config).is_ok());
    }
}
