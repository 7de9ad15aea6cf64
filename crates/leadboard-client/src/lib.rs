//! HTTP client for the leadboard backend API
//!
//! The gateway translates typed calls into requests against a fixed base
//! URL. No retries, no caching, no authentication, no request
//! cancellation: every fetch is a brand-new independent request.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod api_client;

pub use api_client::ApiClient;
