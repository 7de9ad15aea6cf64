//! Page and interaction handlers
//!
//! The dashboard is a single server-rendered page. Interactions arrive as
//! small GET/POST requests that dispatch one action and redirect back to
//! the page, so every screen is reachable by URL.

use crate::components::{
    SizeFilterStyle, render_charts, render_filters, render_lead_table, render_stat_cards,
};
use crate::controller::UiAction;
use crate::server::AppState;
use crate::state::ViewState;
use axum::Form;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use leadboard_core::types::coerce_size;
use leadboard_core::{ChartKind, Error, FilterUpdate, Result, ViewMode};
use leadboard_engine::compute;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{error, warn};

/// Query parameters of the dashboard page itself
#[derive(Debug, Default, Deserialize)]
pub struct DashboardParams {
    /// Which size control the filter bar renders
    #[serde(default)]
    pub style: SizeFilterStyle,
}

/// Render the dashboard for the current view state
pub async fn dashboard(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DashboardParams>,
) -> Response {
    let view = state.controller.snapshot().await;

    match render_dashboard(&state, &view, params.style) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            error!(error = %e, "dashboard rendering failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "rendering failed").into_response()
        }
    }
}

/// Compose the page shell from the component fragments
fn render_dashboard(
    state: &AppState,
    view: &ViewState,
    style: SizeFilterStyle,
) -> Result<String> {
    let mut context = tera::Context::new();
    context.insert("view_mode", &view.view_mode.to_string());
    context.insert("chart_kind", &view.chart_kind.to_string());
    context.insert("enrich", &view.enrich);
    context.insert("error", &view.error);
    context.insert("answer", &view.answer);

    match view.view_mode {
        ViewMode::Table => {
            context.insert(
                "filters",
                &render_filters(
                    &state.templates,
                    &view.filters,
                    style,
                    state.config.ui.slider_domain_max,
                )?,
            );
            context.insert(
                "content",
                &render_lead_table(&state.templates, view, state.config.ui.skeleton_rows)?,
            );
        }
        ViewMode::Charts => {
            context.insert(
                "stats",
                &render_stat_cards(&state.templates, &compute(&view.leads))?,
            );
            context.insert(
                "content",
                &render_charts(&state.templates, view.chart_kind, &view.leads)?,
            );
        }
    }

    state
        .templates
        .render("dashboard.html", &context)
        .map_err(|e| Error::Render(e.to_string()))
}

/// Query parameters for the view-mode switch
#[derive(Debug, Deserialize)]
pub struct ViewParams {
    /// Target view mode
    pub mode: ViewMode,
}

/// Switch between table and charts
pub async fn set_view(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ViewParams>,
) -> Redirect {
    state
        .controller
        .dispatch(UiAction::SetViewMode(params.mode))
        .await;
    Redirect::to("/")
}

/// Query parameters for the chart switch
#[derive(Debug, Deserialize)]
pub struct ChartParams {
    /// Target chart
    pub kind: ChartKind,
}

/// Switch the visible chart
pub async fn set_chart(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ChartParams>,
) -> Redirect {
    state
        .controller
        .dispatch(UiAction::SetChartKind(params.kind))
        .await;
    Redirect::to("/")
}

/// Query parameters for the enrichment toggle
#[derive(Debug, Deserialize)]
pub struct EnrichParams {
    /// Whether enrichment should be requested on subsequent fetches
    pub enabled: bool,
}

/// Toggle AI enrichment and refetch
pub async fn set_enrich(
    State(state): State<Arc<AppState>>,
    Query(params): Query<EnrichParams>,
) -> Redirect {
    state
        .controller
        .dispatch(UiAction::SetEnrich(params.enabled))
        .await;
    Redirect::to("/")
}

/// Raw filter form fields. Size bounds arrive as raw strings so that a
/// cleared field can be told apart from an absent one.
#[derive(Debug, Default, Deserialize)]
pub struct FilterParams {
    /// Selected industry ("" clears the filter)
    pub industry: Option<String>,
    /// Raw lower size bound
    pub size_min: Option<String>,
    /// Raw upper size bound
    pub size_max: Option<String>,
}

/// Apply a filter edit and refetch
pub async fn apply_filters(
    State(state): State<Arc<AppState>>,
    Query(params): Query<FilterParams>,
) -> Redirect {
    let update = FilterUpdate {
        industry: params.industry,
        size_min: params.size_min.map(|raw| coerce_size(&raw)),
        size_max: params.size_max.map(|raw| coerce_size(&raw)),
    };

    state
        .controller
        .dispatch(UiAction::UpdateFilters(update))
        .await;
    Redirect::to("/")
}

/// Query parameters for the slider variant
#[derive(Debug, Deserialize)]
pub struct SliderParams {
    /// Requested upper size bound
    pub value: u32,
}

/// Apply a slider edit and refetch, staying in slider style
pub async fn apply_slider(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SliderParams>,
) -> Redirect {
    state
        .controller
        .dispatch(UiAction::SliderEdit(params.value))
        .await;
    Redirect::to("/?style=slider")
}

/// Re-issue the current query
pub async fn refresh(State(state): State<Arc<AppState>>) -> Redirect {
    state.controller.dispatch(UiAction::Refresh).await;
    Redirect::to("/")
}

/// Form body of the assistant question box
#[derive(Debug, Deserialize)]
pub struct AskForm {
    /// Natural-language question
    pub question: String,
}

/// Ask the assistant; the answer lands in the view state
pub async fn ask(State(state): State<Arc<AppState>>, Form(form): Form<AskForm>) -> Redirect {
    if let Err(e) = state.controller.ask(&form.question).await {
        warn!(error = %e, "assistant question failed");
    }
    Redirect::to("/")
}
