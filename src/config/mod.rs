//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (endpoints, timeouts, retry budget)
//! - Fixed HTTP header values for the upstream site
//! - CLI option types and parsing

mod constants;
mod headers;
mod types;

// Re-export all constants
pub use constants::*;
pub use headers::*;
pub use types::{Config, Endpoints, LogFormat, LogLevel};
