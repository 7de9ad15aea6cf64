//! Presentation components
//!
//! Each component is a pure function from typed inputs to an HTML
//! fragment; the page handler composes the fragments into the shell.

pub mod charts;
pub mod filters;
pub mod lead_table;
pub mod stat_cards;

pub use charts::render_charts;
pub use filters::{INDUSTRIES, SizeFilterStyle, render_filters};
pub use lead_table::render_lead_table;
pub use stat_cards::render_stat_cards;
