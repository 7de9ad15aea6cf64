//! HTTP handlers for the dashboard pages and JSON endpoints

pub mod api;
pub mod pages;
