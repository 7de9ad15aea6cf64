//! Aggregate chart fragments
//!
//! Source counts render as a proportional stacked bar (percent of total);
//! industry counts render as horizontal bars scaled against the largest
//! group.

use leadboard_core::{ChartKind, Error, Lead, Result};
use leadboard_engine::{by_industry, by_source};
use serde::Serialize;
use tera::Tera;

/// One chart segment or bar
#[derive(Debug, Serialize)]
struct Segment {
    label: String,
    count: usize,
    /// Preformatted so whole numbers render without a trailing ".0"
    percent: String,
}

/// Render the chart selected by `kind` over the snapshot
///
/// # Errors
///
/// Returns [`Error::Render`] if the template fails to render.
pub fn render_charts(tera: &Tera, kind: ChartKind, leads: &[Lead]) -> Result<String> {
    let (title, segments) = match kind {
        ChartKind::Source => ("Leads by Source", source_segments(leads)),
        ChartKind::Industry => ("Leads by Industry", industry_segments(leads)),
    };

    let mut context = tera::Context::new();
    context.insert("kind", &kind.to_string());
    context.insert("title", title);
    context.insert("segments", &segments);

    tera.render("charts.html", &context)
        .map_err(|e| Error::Render(e.to_string()))
}

/// Each source as a share of the whole snapshot
fn source_segments(leads: &[Lead]) -> Vec<Segment> {
    let groups = by_source(leads);
    let total = leads.len();
    if total == 0 {
        return Vec::new();
    }

    groups
        .into_iter()
        .map(|(label, count)| Segment {
            label,
            count,
            percent: format_percent(percent_of(count, total)),
        })
        .collect()
}

/// Each industry scaled against the largest industry group
fn industry_segments(leads: &[Lead]) -> Vec<Segment> {
    let groups = by_industry(leads);
    let Some(max) = groups.values().copied().max() else {
        return Vec::new();
    };

    groups
        .into_iter()
        .map(|(label, count)| Segment {
            label,
            count,
            percent: format_percent(percent_of(count, max)),
        })
        .collect()
}

#[allow(clippy::cast_precision_loss)]
fn percent_of(count: usize, denominator: usize) -> f64 {
    (count as f64) * 100.0 / (denominator as f64)
}

/// One decimal place, with whole numbers rendered bare ("50", "33.3")
fn format_percent(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if (rounded - rounded.trunc()).abs() < f64::EPSILON {
        format!("{rounded:.0}")
    } else {
        format!("{rounded:.1}")
    }
}
