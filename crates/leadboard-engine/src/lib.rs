//! Derived-view engine for the leadboard dashboard
//!
//! Pure, synchronous, total functions over the in-memory lead snapshot:
//! aggregate statistics and insertion-ordered groupings for the charts.
//! Identical input always produces identical output; nothing here performs
//! I/O or holds state.
//!
//! Row-level filtering is deliberately absent: industry and size filtering
//! is delegated to the backend via query parameters, and the client does
//! not re-filter the returned set.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod grouping;
pub mod stats;

pub use grouping::{by_industry, by_source};
pub use stats::{LeadStats, compute};
