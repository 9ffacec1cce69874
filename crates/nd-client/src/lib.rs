//! nd-client: typed HTTP services for the Newsdesk API.
//!
//! Thin request plumbing over the REST endpoints plus the streaming answers
//! decoder. These are simple, focused methods: typed parameters in, decoded
//! JSON out, failures propagated. Caching, retries, and orchestration are
//! deliberately left to the callers.

pub mod answers;
pub mod config;
pub mod error;
pub mod http;
pub mod mock;
pub mod ndjson;
pub mod services;

pub use answers::{decode_chat_stream, AnswersService};
pub use config::{ApiConfig, Config};
pub use error::Error;
pub use http::ApiClient;
