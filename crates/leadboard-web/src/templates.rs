//! Embedded Tera templates
//!
//! Templates are compiled into the binary so the dashboard ships as a
//! single executable with no asset directory to deploy.

use leadboard_core::{Error, Result};
use tera::Tera;

/// Build the template registry from the embedded sources
///
/// # Errors
///
/// Returns [`Error::Render`] if any template fails to parse.
pub fn build_templates() -> Result<Tera> {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        ("dashboard.html", include_str!("../templates/dashboard.html")),
        (
            "lead_table.html",
            include_str!("../templates/lead_table.html"),
        ),
        ("charts.html", include_str!("../templates/charts.html")),
        ("filters.html", include_str!("../templates/filters.html")),
        (
            "stat_cards.html",
            include_str!("../templates/stat_cards.html"),
        ),
    ])
    .map_err(|e| Error::Render(e.to_string()))?;
    Ok(tera)
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_templates_parse() {
        let tera = build_templates().unwrap();
        let names: Vec<&str> = tera.get_template_names().collect();

        for expected in [
            "dashboard.html",
            "lead_table.html",
            "charts.html",
            "filters.html",
            "stat_cards.html",
        ] {
            assert!(names.contains(&expected), "missing template {expected}");
        }
    }
}
