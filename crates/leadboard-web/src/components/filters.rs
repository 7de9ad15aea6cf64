//! The filter bar above the lead table

use leadboard_core::{Error, FilterState, Result};
use serde::Deserialize;
use tera::Tera;

/// Industries offered by the industry dropdown
pub const INDUSTRIES: &[&str] = &[
    "Technology",
    "Manufacturing",
    "Healthcare",
    "Finance",
    "Retail",
    "Social",
];

/// Which size control the filter bar renders.
///
/// The paired number inputs are the canonical control; the slider is an
/// alternative that only edits the upper bound within a fixed domain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeFilterStyle {
    /// Paired min/max number inputs
    #[default]
    Range,
    /// Single-thumb range slider over the upper bound
    Slider,
}

/// Render the filter bar for the current selection
///
/// # Errors
///
/// Returns [`Error::Render`] if the template fails to render.
pub fn render_filters(
    tera: &Tera,
    filters: &FilterState,
    style: SizeFilterStyle,
    slider_domain_max: u32,
) -> Result<String> {
    let style_name = match style {
        SizeFilterStyle::Range => "range",
        SizeFilterStyle::Slider => "slider",
    };
    let slider_value = filters
        .size_max
        .unwrap_or(slider_domain_max)
        .min(slider_domain_max);

    let mut context = tera::Context::new();
    context.insert("industries", INDUSTRIES);
    context.insert("selected_industry", &filters.industry);
    context.insert("size_min", &bound_field(filters.size_min));
    context.insert("size_max", &bound_field(filters.size_max));
    context.insert("style", style_name);
    context.insert("slider_value", &slider_value);
    context.insert("slider_domain_max", &slider_domain_max);

    tera.render("filters.html", &context)
        .map_err(|e| Error::Render(e.to_string()))
}

/// An unset bound renders as an empty number field
fn bound_field(bound: Option<u32>) -> String {
    bound.map(|value| value.to_string()).unwrap_or_default()
}
