//! Summary stat cards shown above the charts

use leadboard_core::{Error, Result};
use leadboard_engine::LeadStats;
use serde::Serialize;
use tera::Tera;

#[derive(Debug, Serialize)]
struct Card {
    label: &'static str,
    value: String,
}

/// Render the total-count and average-size cards
///
/// # Errors
///
/// Returns [`Error::Render`] if the template fails to render.
pub fn render_stat_cards(tera: &Tera, stats: &LeadStats) -> Result<String> {
    let cards = [
        Card {
            label: "Total Leads",
            value: stats.total_count.to_string(),
        },
        Card {
            label: "Average Company Size",
            value: stats.average_size.to_string(),
        },
    ];

    let mut context = tera::Context::new();
    context.insert("cards", &cards);

    tera.render("stat_cards.html", &context)
        .map_err(|e| Error::Render(e.to_string()))
}
