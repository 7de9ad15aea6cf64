//! The filterable lead table

use crate::state::{FetchPhase, ViewState};
use leadboard_core::types::ENRICHMENT_FAILED;
use leadboard_core::{Error, Lead, Result};
use serde::Serialize;
use tera::Tera;

/// One rendered table row
#[derive(Debug, Serialize)]
struct Row {
    name: String,
    company: String,
    industry: String,
    size: u32,
    source: String,
    created: String,
    quality_label: String,
    quality_class: String,
    summary: String,
}

impl Row {
    fn from_lead(lead: &Lead) -> Self {
        let (quality_label, quality_class) = match lead.quality.as_deref() {
            // Enrichment was attempted and failed for this row
            Some(ENRICHMENT_FAILED) => ("Failed".to_string(), "failed".to_string()),
            Some(label) => (label.to_string(), label.to_lowercase()),
            // Enrichment result not present for this row
            None => ("...".to_string(), "pending".to_string()),
        };

        Self {
            name: lead.name.clone(),
            company: lead.company.clone(),
            industry: lead.industry.clone(),
            size: lead.size,
            source: lead.source.clone(),
            created: lead.created_at.format("%Y-%m-%d").to_string(),
            quality_label,
            quality_class,
            summary: lead.summary.clone().unwrap_or_else(|| "...".to_string()),
        }
    }
}

/// Render the lead table for the current state.
///
/// While a fetch is in flight the body is `skeleton_rows` placeholder
/// rows; an empty snapshot renders a single empty-state row.
///
/// # Errors
///
/// Returns [`Error::Render`] if the template fails to render.
pub fn render_lead_table(tera: &Tera, state: &ViewState, skeleton_rows: usize) -> Result<String> {
    let rows: Vec<Row> = state.leads.iter().map(Row::from_lead).collect();

    let mut context = tera::Context::new();
    context.insert("loading", &(state.phase == FetchPhase::Loading));
    context.insert("skeleton_rows", &skeleton_rows);
    context.insert("enrich", &state.enrich);
    context.insert("rows", &rows);

    tera.render("lead_table.html", &context)
        .map_err(|e| Error::Render(e.to_string()))
}
