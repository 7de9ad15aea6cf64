//! Server-rendered dashboard for the leadboard lead manager
//!
//! A single-page dashboard over a fixed lead backend: a filterable table,
//! aggregate charts with summary stat cards, best-effort usage tracking,
//! and an optional AI assistant. All state lives server-side in a
//! [`controller::DashboardController`]; interactions are small requests
//! that dispatch one action and redirect back to the page.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod components;
pub mod controller;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod state;
pub mod templates;

pub use controller::{DashboardController, UiAction};
pub use routes::build_router;
pub use server::AppState;
pub use state::{FetchPhase, Transition, ViewState};
