//! Error types and diagnostics.
//!
//! All network and parsing failures are contained inside the dispatcher and
//! classifier; the only error that crosses the library boundary is
//! [`LookupError`], carrying the diagnostic of the final failed attempt.

mod types;

pub use types::{Diagnostic, InitializationError, LookupError};
