//! Core data types for the leadboard dashboard

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lead identifier type (assigned by the backend)
pub type LeadId = i64;

/// Quality sentinel the backend uses to signal a failed per-lead enrichment.
/// This is data, not an error: the row renders an inline failure marker.
pub const ENRICHMENT_FAILED: &str = "Error";

/// Size bound substituted when the minimum is unset at fetch time
pub const DEFAULT_SIZE_MIN: u32 = 0;

/// Size bound substituted when the maximum is unset at fetch time
pub const DEFAULT_SIZE_MAX: u32 = 10_000;

/// A sales lead as returned by the backend.
///
/// The client receives read-only snapshots and never mutates individual
/// leads; the whole list is replaced wholesale on every successful fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    /// Unique identifier, assigned by the backend
    pub id: LeadId,

    /// Contact name
    pub name: String,

    /// Company name
    pub company: String,

    /// Industry (open-ended set, e.g. "Technology", "Finance")
    pub industry: String,

    /// Company size (employee count)
    pub size: u32,

    /// Acquisition channel: "Organic", "PPC", "Referral", "Email", "Social"
    pub source: String,

    /// When the lead was created (ISO-8601 on the wire)
    pub created_at: DateTime<Utc>,

    /// AI quality label ("High", "Medium", "Low", or [`ENRICHMENT_FAILED`]).
    /// Present only when the set was fetched with enrichment requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality: Option<String>,

    /// AI-generated one-line company summary; present only with enrichment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl Lead {
    /// Whether enrichment was attempted for this lead but failed
    #[must_use]
    pub fn enrichment_failed(&self) -> bool {
        self.quality.as_deref() == Some(ENRICHMENT_FAILED)
    }
}

/// Dashboard view mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Filterable lead table
    #[default]
    Table,
    /// Aggregate charts
    Charts,
}

impl std::fmt::Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Table => write!(f, "table"),
            Self::Charts => write!(f, "charts"),
        }
    }
}

/// Which aggregate chart is shown in charts mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    /// Proportional breakdown by acquisition source
    #[default]
    Source,
    /// Count breakdown by industry
    Industry,
}

impl std::fmt::Display for ChartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Source => write!(f, "source"),
            Self::Industry => write!(f, "industry"),
        }
    }
}

/// The user's current filter selection.
///
/// `size_min` and `size_max` are independently editable and may describe a
/// reversed range; [`LeadQuery::normalized`] repairs that at fetch time.
/// `None` means "unset" and is substituted with [`DEFAULT_SIZE_MIN`] /
/// [`DEFAULT_SIZE_MAX`] when a query is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    /// Industry to match exactly; empty string means no industry filter
    pub industry: String,

    /// Inclusive lower bound on company size
    pub size_min: Option<u32>,

    /// Inclusive upper bound on company size
    pub size_max: Option<u32>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            industry: String::new(),
            size_min: Some(0),
            size_max: Some(1_000),
        }
    }
}

impl FilterState {
    /// Merge a partial update into this state
    pub fn apply(&mut self, update: FilterUpdate) {
        if let Some(industry) = update.industry {
            self.industry = industry;
        }
        if let Some(size_min) = update.size_min {
            self.size_min = size_min;
        }
        if let Some(size_max) = update.size_max {
            self.size_max = size_max;
        }
    }

    /// Apply a range-slider edit: the slider only moves the upper bound,
    /// clamped to its fixed domain, and the lower bound keeps its prior
    /// value.
    pub fn apply_slider_edit(&mut self, value: u32, domain_max: u32) {
        self.size_max = Some(value.min(domain_max));
    }

    /// Build the backend query for the current selection.
    ///
    /// An empty industry is omitted from the request rather than sent as an
    /// empty string; unset size bounds are substituted with the defaults.
    #[must_use]
    pub fn to_query(&self, enrich: bool) -> LeadQuery {
        LeadQuery {
            enrich,
            industry: if self.industry.is_empty() {
                None
            } else {
                Some(self.industry.clone())
            },
            size_min: Some(self.size_min.unwrap_or(DEFAULT_SIZE_MIN)),
            size_max: Some(self.size_max.unwrap_or(DEFAULT_SIZE_MAX)),
        }
        .normalized()
    }
}

/// A partial filter edit. The outer `Option` means "leave untouched"; for
/// the size bounds the inner `Option` distinguishes a new value from an
/// explicit clear back to "unset".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterUpdate {
    /// New industry selection ("" clears the filter)
    pub industry: Option<String>,

    /// New lower size bound
    pub size_min: Option<Option<u32>>,

    /// New upper size bound
    pub size_max: Option<Option<u32>>,
}

impl FilterUpdate {
    /// Whether this update changes anything at all
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.industry.is_none() && self.size_min.is_none() && self.size_max.is_none()
    }
}

/// Query parameters for `GET /api/leads`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadQuery {
    /// Request server-side AI enrichment
    #[serde(default)]
    pub enrich: bool,

    /// Exact-match industry filter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,

    /// Inclusive minimum company size
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_min: Option<u32>,

    /// Inclusive maximum company size
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_max: Option<u32>,
}

impl LeadQuery {
    /// Repair a reversed size range by swapping the bounds, so the issued
    /// request is always well-formed. Everything else passes through.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        if let (Some(min), Some(max)) = (self.size_min, self.size_max)
            && min > max
        {
            self.size_min = Some(max);
            self.size_max = Some(min);
        }
        self
    }
}

/// A usage-tracking event posted to `POST /api/events`.
///
/// The metadata bag is a semantically open key/value map; the schema is
/// deliberately not closed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackedEvent {
    /// Client identity; the backend defaults this to "anonymous"
    #[serde(rename = "userId")]
    pub user_id: String,

    /// Action name (e.g. "filter", "toggle_view", "refresh")
    pub action: String,

    /// Arbitrary JSON-serializable metadata
    pub metadata: serde_json::Map<String, serde_json::Value>,

    /// Client-generated timestamp
    pub timestamp: DateTime<Utc>,
}

impl TrackedEvent {
    /// Create an anonymous event stamped with the current time
    #[must_use]
    pub fn new(
        action: impl Into<String>,
        metadata: serde_json::Map<String, serde_json::Value>,
    ) -> Self {
        Self {
            user_id: "anonymous".to_string(),
            action: action.into(),
            metadata,
            timestamp: Utc::now(),
        }
    }
}

/// Request body for the optional `POST /api/ask` endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskRequest {
    /// Natural-language question about the current leads
    pub question: String,

    /// The current lead snapshot, sent along for context
    pub leads: Vec<Lead>,
}

/// Response body from `POST /api/ask`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskResponse {
    /// Free-text answer
    pub answer: String,
}

/// Coerce raw size-filter input to a non-negative integer.
///
/// Empty or unparsable input is treated as "unset", matching the behavior
/// of a cleared number field.
#[must_use]
pub fn coerce_size(input: &str) -> Option<u32> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}
