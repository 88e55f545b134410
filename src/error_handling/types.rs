//! Error type definitions.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// What the last failed attempt looked like.
///
/// Only the final attempt's diagnostic is retained; earlier failures within
/// the same invocation are overwritten as the retry loop advances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The endpoint URL that produced this response.
    pub host: String,
    /// HTTP status code, or `None` when the attempt failed at the transport
    /// layer (timeout, connection error) before any status arrived.
    pub status: Option<u16>,
    /// First 500 characters of the response body, or the transport error
    /// message when no body was received.
    pub body_excerpt: String,
}

impl Diagnostic {
    /// Status code as printable text, `-` when no status was received.
    pub fn status_label(&self) -> String {
        match self.status {
            Some(code) => code.to_string(),
            None => "-".to_string(),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "last host {} answered with status {}, body: {}",
            self.host,
            self.status_label(),
            self.body_excerpt
        )
    }
}

/// Error types for the lookup itself.
#[derive(Error, Debug)]
pub enum LookupError {
    /// Every host and attempt was exhausted without a usable JSON response.
    ///
    /// Carries the diagnostic of the final attempt only. Bot mitigation on
    /// the origin is the usual cause.
    #[error(
        "no usable response from any endpoint; {diagnostic}. \
         The site's bot mitigation is the likely cause: retry in a few minutes or from a different network."
    )]
    Exhausted {
        /// Diagnostic from the final failed attempt.
        diagnostic: Diagnostic,
    },
}

impl LookupError {
    /// The diagnostic of the final failed attempt.
    pub fn diagnostic(&self) -> &Diagnostic {
        match self {
            LookupError::Exhausted { diagnostic } => diagnostic,
        }
    }
}
