//! rmp_lookup library: resilient professor lookup over a bot-protected
//! GraphQL endpoint.
//!
//! This library provides the network-access core of the lookup tool: it
//! encodes legacy school ids as relay-style identifiers, warms a cookie
//! session against the origin's bot-mitigation layer, posts a fixed GraphQL
//! search document to an ordered list of candidate hosts with a bounded
//! retry budget, and classifies each response as structured data or an
//! opaque challenge page.
//!
//! # Example
//!
//! ```no_run
//! use rmp_lookup::config::Endpoints;
//! use rmp_lookup::{encode_school_id, initialization::init_client, run_search};
//! use rmp_lookup::{Config, SearchRequest};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     query: "Jane Doe".to_string(),
//!     ..Default::default()
//! };
//! let client = init_client(&config)?;
//! let request = SearchRequest::new(&config.query, encode_school_id(Some("18443")));
//!
//! let records = run_search(&client, &Endpoints::default(), &request).await?;
//! for record in &records {
//!     println!("{}", record.display_name());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context. Dispatch is strictly sequential: one request in flight at a
//! time, at most four query round-trips per invocation.

#![warn(missing_docs)]

mod classify;
pub mod config;
mod dispatch;
mod error_handling;
pub mod format;
pub mod initialization;
mod models;
mod relay;
mod session;

// Re-export public API
pub use config::{Config, Endpoints, LogFormat, LogLevel};
pub use dispatch::run_search;
pub use error_handling::{Diagnostic, InitializationError, LookupError};
pub use models::{SchoolRecord, SearchRequest, TeacherRecord};
pub use relay::encode_school_id;
pub use session::warm_session;
