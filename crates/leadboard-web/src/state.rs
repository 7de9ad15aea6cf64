//! Dashboard view state and its transition function
//!
//! The state is a single value mutated only through [`ViewState::apply`],
//! so every observable screen is reachable by replaying transitions.

use leadboard_core::{ChartKind, FilterState, FilterUpdate, Lead, ViewMode};

/// User-facing copy shown when a lead fetch fails
pub const FETCH_ERROR_MESSAGE: &str = "Failed to fetch leads. Is the backend server running?";

/// Lifecycle of the lead snapshot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FetchPhase {
    /// No fetch has started yet
    #[default]
    Idle,
    /// A fetch is in flight; the table renders skeleton rows
    Loading,
    /// The last fetch succeeded and `leads` is current
    Ready,
    /// The last fetch failed; `error` carries the user-facing message
    Error,
}

/// Everything the dashboard needs to render one screen
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    /// Where the current fetch cycle stands
    pub phase: FetchPhase,

    /// The most recent successful snapshot. A failed fetch keeps the
    /// previous snapshot; it is only replaced wholesale on success.
    pub leads: Vec<Lead>,

    /// User-facing error message, set on fetch failure
    pub error: Option<String>,

    /// Table or charts
    pub view_mode: ViewMode,

    /// Which chart is visible in charts mode
    pub chart_kind: ChartKind,

    /// Whether AI enrichment is requested on fetch
    pub enrich: bool,

    /// Current filter selection
    pub filters: FilterState,

    /// Last assistant answer, if a question has been asked
    pub answer: Option<String>,
}

impl ViewState {
    /// Fresh state with default filters applied
    #[must_use]
    pub fn new() -> Self {
        Self {
            filters: FilterState::default(),
            ..Self::default()
        }
    }
}

/// A single state transition
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    /// A fetch was issued
    BeginFetch,
    /// The fetch completed; replace the snapshot wholesale
    FetchSucceeded(Vec<Lead>),
    /// The fetch failed with a user-facing message
    FetchFailed(String),
    /// Switch between table and charts
    SetViewMode(ViewMode),
    /// Switch the visible chart
    SetChartKind(ChartKind),
    /// Toggle enrichment on subsequent fetches
    SetEnrich(bool),
    /// Merge a partial filter edit
    UpdateFilters(FilterUpdate),
    /// Range-slider edit of the upper size bound
    SliderEdit {
        /// Requested upper bound
        value: u32,
        /// Fixed slider domain maximum
        domain_max: u32,
    },
    /// The assistant answered (or the answer was cleared)
    AssistantAnswered(Option<String>),
}

impl ViewState {
    /// Apply one transition in place
    pub fn apply(&mut self, transition: Transition) {
        match transition {
            Transition::BeginFetch => {
                self.phase = FetchPhase::Loading;
                self.error = None;
            }
            Transition::FetchSucceeded(leads) => {
                self.phase = FetchPhase::Ready;
                self.leads = leads;
                self.error = None;
            }
            Transition::FetchFailed(message) => {
                self.phase = FetchPhase::Error;
                self.error = Some(message);
            }
            Transition::SetViewMode(mode) => {
                self.view_mode = mode;
            }
            Transition::SetChartKind(kind) => {
                self.chart_kind = kind;
            }
            Transition::SetEnrich(enabled) => {
                self.enrich = enabled;
            }
            Transition::UpdateFilters(update) => {
                self.filters.apply(update);
            }
            Transition::SliderEdit { value, domain_max } => {
                self.filters.apply_slider_edit(value, domain_max);
            }
            Transition::AssistantAnswered(answer) => {
                self.answer = answer;
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    fn lead(id: i64) -> Lead {
        Lead {
            id,
            name: format!("Lead {id}"),
            company: format!("Company {id}"),
            industry: "Technology".to_string(),
            size: 100,
            source: "Organic".to_string(),
            created_at: Utc::now(),
            quality: None,
            summary: None,
        }
    }

    #[test]
    fn test_new_state_uses_default_filters() {
        let state = ViewState::new();
        assert_eq!(state.phase, FetchPhase::Idle);
        assert_eq!(state.filters, FilterState::default());
        assert_eq!(state.view_mode, ViewMode::Table);
        assert_eq!(state.chart_kind, ChartKind::Source);
        assert!(!state.enrich);
    }

    #[test]
    fn test_begin_fetch_clears_error_but_keeps_snapshot() {
        let mut state = ViewState::new();
        state.apply(Transition::FetchSucceeded(vec![lead(1)]));
        state.apply(Transition::FetchFailed(FETCH_ERROR_MESSAGE.to_string()));

        state.apply(Transition::BeginFetch);

        assert_eq!(state.phase, FetchPhase::Loading);
        assert_eq!(state.error, None);
        assert_eq!(state.leads.len(), 1);
    }

    #[test]
    fn test_success_replaces_snapshot_wholesale() {
        let mut state = ViewState::new();
        state.apply(Transition::FetchSucceeded(vec![lead(1), lead(2)]));
        state.apply(Transition::FetchSucceeded(vec![lead(3)]));

        assert_eq!(state.phase, FetchPhase::Ready);
        assert_eq!(state.leads.len(), 1);
        assert_eq!(state.leads[0].id, 3);
    }

    #[test]
    fn test_failure_keeps_previous_snapshot() {
        let mut state = ViewState::new();
        state.apply(Transition::FetchSucceeded(vec![lead(1)]));
        state.apply(Transition::FetchFailed(FETCH_ERROR_MESSAGE.to_string()));

        assert_eq!(state.phase, FetchPhase::Error);
        assert_eq!(state.error.as_deref(), Some(FETCH_ERROR_MESSAGE));
        assert_eq!(state.leads.len(), 1);
    }

    #[test]
    fn test_view_mode_change_touches_nothing_else() {
        let mut state = ViewState::new();
        state.apply(Transition::FetchSucceeded(vec![lead(1)]));

        state.apply(Transition::SetViewMode(ViewMode::Charts));

        assert_eq!(state.view_mode, ViewMode::Charts);
        assert_eq!(state.phase, FetchPhase::Ready);
        assert_eq!(state.leads.len(), 1);
        assert_eq!(state.filters, FilterState::default());
    }

    #[test]
    fn test_filter_update_merges_partial_edit() {
        let mut state = ViewState::new();
        state.apply(Transition::UpdateFilters(FilterUpdate {
            industry: Some("Finance".to_string()),
            ..FilterUpdate::default()
        }));

        assert_eq!(state.filters.industry, "Finance");
        // Untouched bounds keep their defaults
        assert_eq!(state.filters.size_min, Some(0));
        assert_eq!(state.filters.size_max, Some(1_000));
    }

    #[test]
    fn test_slider_edit_clamps_to_domain() {
        let mut state = ViewState::new();
        state.apply(Transition::SliderEdit {
            value: 9_999,
            domain_max: 500,
        });
        assert_eq!(state.filters.size_max, Some(500));

        state.apply(Transition::SliderEdit {
            value: 250,
            domain_max: 500,
        });
        assert_eq!(state.filters.size_max, Some(250));
        // The lower bound is untouched by slider edits
        assert_eq!(state.filters.size_min, Some(0));
    }

    #[test]
    fn test_enrich_toggle_is_state_only() {
        let mut state = ViewState::new();
        state.apply(Transition::SetEnrich(true));
        assert!(state.enrich);
        assert_eq!(state.phase, FetchPhase::Idle);
    }

    #[test]
    fn test_assistant_answer_set_and_cleared() {
        let mut state = ViewState::new();
        state.apply(Transition::AssistantAnswered(Some("42 leads".to_string())));
        assert_eq!(state.answer.as_deref(), Some("42 leads"));

        state.apply(Transition::AssistantAnswered(None));
        assert_eq!(state.answer, None);
    }
}
