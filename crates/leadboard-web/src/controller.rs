//! Dashboard controller: dispatches user actions, owns the view state
//!
//! All mutation funnels through [`DashboardController::dispatch`]. Fetches
//! are not cancelled or deduplicated; concurrent fetches resolve in
//! completion order and the last write wins.

use crate::state::{FETCH_ERROR_MESSAGE, Transition, ViewState};
use leadboard_client::ApiClient;
use leadboard_core::config::UiConfig;
use leadboard_core::{ChartKind, FilterUpdate, Result, ViewMode};
use serde_json::json;
use tokio::sync::RwLock;
use tracing::{info, warn};

/// A user interaction with the dashboard
#[derive(Debug, Clone, PartialEq)]
pub enum UiAction {
    /// Switch between table and charts
    SetViewMode(ViewMode),
    /// Switch the visible chart
    SetChartKind(ChartKind),
    /// Toggle AI enrichment
    SetEnrich(bool),
    /// Edit the filter selection
    UpdateFilters(FilterUpdate),
    /// Move the size range slider's upper bound
    SliderEdit(u32),
    /// Re-issue the current query
    Refresh,
}

/// Owns the view state and the backend gateway
pub struct DashboardController {
    client: ApiClient,
    ui: UiConfig,
    state: RwLock<ViewState>,
}

impl std::fmt::Debug for DashboardController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DashboardController")
            .field("base_url", &self.client.base_url())
            .finish_non_exhaustive()
    }
}

impl DashboardController {
    /// Create a controller with a fresh default state
    #[must_use]
    pub fn new(client: ApiClient, ui: UiConfig) -> Self {
        Self {
            client,
            ui,
            state: RwLock::new(ViewState::new()),
        }
    }

    /// Clone the current view state
    pub async fn snapshot(&self) -> ViewState {
        self.state.read().await.clone()
    }

    /// Issue the startup fetch with the default filter selection
    pub async fn initial_fetch(&self) {
        self.refetch().await;
    }

    /// Apply a user action. Filter edits, enrichment toggles and refreshes
    /// re-issue the backend query; presentation switches do not.
    pub async fn dispatch(&self, action: UiAction) {
        match action {
            UiAction::SetViewMode(mode) => {
                self.client
                    .spawn_track("toggle_view", metadata(&[("view", json!(mode.to_string()))]));
                self.state.write().await.apply(Transition::SetViewMode(mode));
            }
            UiAction::SetChartKind(kind) => {
                self.state.write().await.apply(Transition::SetChartKind(kind));
            }
            UiAction::SetEnrich(enabled) => {
                self.client
                    .spawn_track("toggle_enrich", metadata(&[("enabled", json!(enabled))]));
                self.state.write().await.apply(Transition::SetEnrich(enabled));
                self.refetch().await;
            }
            UiAction::UpdateFilters(update) => {
                if update.is_empty() {
                    return;
                }
                self.track_filter_edit(&update);
                self.state
                    .write()
                    .await
                    .apply(Transition::UpdateFilters(update));
                self.refetch().await;
            }
            UiAction::SliderEdit(value) => {
                let clamped = value.min(self.ui.slider_domain_max);
                self.client.spawn_track(
                    "filter",
                    metadata(&[("filterType", json!("sizeMax")), ("value", json!(clamped))]),
                );
                self.state.write().await.apply(Transition::SliderEdit {
                    value,
                    domain_max: self.ui.slider_domain_max,
                });
                self.refetch().await;
            }
            UiAction::Refresh => {
                self.client.spawn_track("refresh", serde_json::Map::new());
                self.refetch().await;
            }
        }
    }

    /// Ask the assistant about the current snapshot and remember the answer
    ///
    /// # Errors
    ///
    /// Propagates the gateway error; the stored answer is left untouched on
    /// failure.
    pub async fn ask(&self, question: &str) -> Result<String> {
        let leads = self.state.read().await.leads.clone();
        let answer = self.client.ask_assistant(question, &leads).await?;
        self.state
            .write()
            .await
            .apply(Transition::AssistantAnswered(Some(answer.clone())));
        Ok(answer)
    }

    /// One tracking event per edited filter field
    fn track_filter_edit(&self, update: &FilterUpdate) {
        if let Some(ref industry) = update.industry {
            self.client.spawn_track(
                "filter",
                metadata(&[("filterType", json!("industry")), ("value", json!(industry))]),
            );
        }
        if let Some(size_min) = update.size_min {
            self.client.spawn_track(
                "filter",
                metadata(&[("filterType", json!("sizeMin")), ("value", json!(size_min))]),
            );
        }
        if let Some(size_max) = update.size_max {
            self.client.spawn_track(
                "filter",
                metadata(&[("filterType", json!("sizeMax")), ("value", json!(size_max))]),
            );
        }
    }

    /// Fetch with the current selection and fold the result into the state.
    ///
    /// The query is captured and the fetch marked in-flight under a single
    /// write lock, then the lock is released for the await.
    async fn refetch(&self) {
        let query = {
            let mut state = self.state.write().await;
            state.apply(Transition::BeginFetch);
            state.filters.to_query(state.enrich)
        };

        match self.client.fetch_leads(&query).await {
            Ok(leads) => {
                info!(count = leads.len(), "lead snapshot replaced");
                self.state
                    .write()
                    .await
                    .apply(Transition::FetchSucceeded(leads));
            }
            Err(e) => {
                warn!(error = %e, "lead fetch failed");
                self.state
                    .write()
                    .await
                    .apply(Transition::FetchFailed(FETCH_ERROR_MESSAGE.to_string()));
            }
        }
    }
}

/// Build an event metadata bag from key/value pairs
fn metadata(pairs: &[(&str, serde_json::Value)]) -> serde_json::Map<String, serde_json::Value> {
    pairs
        .iter()
        .map(|(key, value)| ((*key).to_string(), value.clone()))
        .collect()
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use crate::state::FetchPhase;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, Request, ResponseTemplate};

    fn lead_json(id: i64, size: u32) -> serde_json::Value {
        json!({
            "id": id,
            "name": format!("Lead {id}"),
            "company": format!("Company {id}"),
            "industry": "Technology",
            "size": size,
            "source": "Organic",
            "created_at": "2024-03-15T14:25:30Z"
        })
    }

    async fn controller_against(server: &MockServer) -> DashboardController {
        DashboardController::new(ApiClient::new(server.uri()), UiConfig::default())
    }

    fn lead_requests(requests: &[Request]) -> Vec<&Request> {
        requests
            .iter()
            .filter(|r| r.url.path() == "/api/leads")
            .collect()
    }

    #[tokio::test]
    async fn test_initial_fetch_uses_default_filters() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/leads"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!([lead_json(1, 100)])),
            )
            .mount(&server)
            .await;

        let controller = controller_against(&server).await;
        controller.initial_fetch().await;

        let state = controller.snapshot().await;
        assert_eq!(state.phase, FetchPhase::Ready);
        assert_eq!(state.leads.len(), 1);

        let requests = server.received_requests().await.unwrap();
        let fetches = lead_requests(&requests);
        assert_eq!(fetches.len(), 1);
        let query = fetches[0].url.query().unwrap_or_default();
        assert!(query.contains("enrich=false"));
        assert!(query.contains("sizeMin=0"));
        assert!(query.contains("sizeMax=1000"));
        assert!(!query.contains("industry"));
    }

    #[tokio::test]
    async fn test_fetch_failure_sets_message_and_keeps_snapshot() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/leads"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!([lead_json(1, 100)])),
            )
            .expect(1)
            .mount(&server)
            .await;

        let controller = controller_against(&server).await;
        controller.initial_fetch().await;

        // Backend goes away; the refresh must fail
        server.reset().await;
        Mock::given(method("GET"))
            .and(path("/api/leads"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        controller.dispatch(UiAction::Refresh).await;

        let state = controller.snapshot().await;
        assert_eq!(state.phase, FetchPhase::Error);
        assert_eq!(state.error.as_deref(), Some(FETCH_ERROR_MESSAGE));
        assert_eq!(state.leads.len(), 1);
    }

    #[tokio::test]
    async fn test_enrich_toggle_refetches_with_enrichment() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/leads"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let controller = controller_against(&server).await;
        controller.initial_fetch().await;
        controller.dispatch(UiAction::SetEnrich(true)).await;

        let requests = server.received_requests().await.unwrap();
        let fetches = lead_requests(&requests);
        assert_eq!(fetches.len(), 2);
        assert!(fetches[1].url.query().unwrap_or_default().contains("enrich=true"));
    }

    #[tokio::test]
    async fn test_view_mode_switch_does_not_refetch() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/leads"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let controller = controller_against(&server).await;
        controller.initial_fetch().await;
        controller
            .dispatch(UiAction::SetViewMode(ViewMode::Charts))
            .await;
        controller
            .dispatch(UiAction::SetChartKind(ChartKind::Industry))
            .await;

        let state = controller.snapshot().await;
        assert_eq!(state.view_mode, ViewMode::Charts);
        assert_eq!(state.chart_kind, ChartKind::Industry);

        let requests = server.received_requests().await.unwrap();
        assert_eq!(lead_requests(&requests).len(), 1);
    }

    #[tokio::test]
    async fn test_filter_edit_refetches_with_new_selection() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/leads"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let controller = controller_against(&server).await;
        controller.initial_fetch().await;
        controller
            .dispatch(UiAction::UpdateFilters(FilterUpdate {
                industry: Some("Finance".to_string()),
                size_min: Some(Some(50)),
                ..FilterUpdate::default()
            }))
            .await;

        let requests = server.received_requests().await.unwrap();
        let fetches = lead_requests(&requests);
        assert_eq!(fetches.len(), 2);
        let query = fetches[1].url.query().unwrap_or_default();
        assert!(query.contains("industry=Finance"));
        assert!(query.contains("sizeMin=50"));
        assert!(query.contains("sizeMax=1000"));
    }

    #[tokio::test]
    async fn test_empty_filter_update_is_a_no_op() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/leads"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let controller = controller_against(&server).await;
        controller.initial_fetch().await;
        controller
            .dispatch(UiAction::UpdateFilters(FilterUpdate::default()))
            .await;

        let requests = server.received_requests().await.unwrap();
        assert_eq!(lead_requests(&requests).len(), 1);
    }

    #[tokio::test]
    async fn test_slider_edit_clamps_and_refetches() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/leads"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let controller = controller_against(&server).await;
        controller.initial_fetch().await;
        // UiConfig::default() caps the slider domain at 500
        controller.dispatch(UiAction::SliderEdit(9_000)).await;

        let state = controller.snapshot().await;
        assert_eq!(state.filters.size_max, Some(500));

        let requests = server.received_requests().await.unwrap();
        let fetches = lead_requests(&requests);
        assert_eq!(fetches.len(), 2);
        assert!(fetches[1].url.query().unwrap_or_default().contains("sizeMax=500"));
    }

    #[tokio::test]
    async fn test_reversed_bounds_are_swapped_in_the_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/leads"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let controller = controller_against(&server).await;
        controller
            .dispatch(UiAction::UpdateFilters(FilterUpdate {
                size_min: Some(Some(800)),
                size_max: Some(Some(200)),
                ..FilterUpdate::default()
            }))
            .await;

        // The stored selection keeps what the user typed
        let state = controller.snapshot().await;
        assert_eq!(state.filters.size_min, Some(800));
        assert_eq!(state.filters.size_max, Some(200));

        // The issued request is repaired
        let requests = server.received_requests().await.unwrap();
        let fetches = lead_requests(&requests);
        let query = fetches[0].url.query().unwrap_or_default();
        assert!(query.contains("sizeMin=200"));
        assert!(query.contains("sizeMax=800"));
    }

    #[tokio::test]
    async fn test_ask_stores_answer() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/ask"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"answer": "No leads yet."})),
            )
            .mount(&server)
            .await;

        let controller = controller_against(&server).await;
        let answer = controller.ask("How many leads?").await.unwrap();
        assert_eq!(answer, "No leads yet.");

        let state = controller.snapshot().await;
        assert_eq!(state.answer.as_deref(), Some("No leads yet."));
    }

    #[tokio::test]
    async fn test_ask_failure_leaves_answer_untouched() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/ask"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let controller = controller_against(&server).await;
        assert!(controller.ask("How many leads?").await.is_err());
        assert_eq!(controller.snapshot().await.answer, None);
    }
}
