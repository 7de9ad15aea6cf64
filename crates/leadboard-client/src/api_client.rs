//! HTTP client for communicating with the lead backend

use leadboard_core::types::{AskRequest, AskResponse};
use leadboard_core::{Error, Lead, LeadQuery, Result, TrackedEvent};
use reqwest::Client;
use tracing::debug;

/// API client for making HTTP requests against the fixed backend origin
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// The configured backend origin
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the lead collection matching the query.
    ///
    /// Absent optional fields are omitted from the request rather than sent
    /// as empty. The full matching collection is returned; there is no
    /// client-side pagination.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Network`] on transport failure or a non-success
    /// status. The caller owns user-facing messaging; there is no retry.
    pub async fn fetch_leads(&self, query: &LeadQuery) -> Result<Vec<Lead>> {
        let mut url = format!("{}/api/leads", self.base_url);

        let mut query_params = vec![format!("enrich={}", query.enrich)];

        if let Some(ref industry) = query.industry {
            query_params.push(format!("industry={}", urlencoding::encode(industry)));
        }
        if let Some(size_min) = query.size_min {
            query_params.push(format!("sizeMin={size_min}"));
        }
        if let Some(size_max) = query.size_max {
            query_params.push(format!("sizeMax={size_max}"));
        }

        url.push('?');
        url.push_str(&query_params.join("&"));

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Network(format!("Failed to fetch leads: {e}")))?;

        if !response.status().is_success() {
            return Err(Error::Network(format!(
                "Backend returned error: {}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| Error::Network(format!("Failed to parse leads response: {e}")))
    }

    /// Post a usage-tracking event, best-effort.
    ///
    /// Failures are logged at debug level and swallowed: analytics must
    /// never block or fail the primary flow.
    pub async fn record_event(&self, event: &TrackedEvent) {
        let url = format!("{}/api/events", self.base_url);

        match self.client.post(&url).json(event).send().await {
            Ok(response) if !response.status().is_success() => {
                debug!(status = %response.status(), action = %event.action, "event post rejected");
            }
            Ok(_) => {}
            Err(e) => {
                debug!(error = %e, action = %event.action, "event post failed");
            }
        }
    }

    /// Fire a tracking event on a detached task so the caller never waits
    /// on the analytics side channel.
    pub fn spawn_track(
        &self,
        action: impl Into<String>,
        metadata: serde_json::Map<String, serde_json::Value>,
    ) {
        let client = self.clone();
        let event = TrackedEvent::new(action, metadata);
        tokio::spawn(async move {
            client.record_event(&event).await;
        });
    }

    /// Ask the optional AI assistant a question about the current snapshot
    ///
    /// # Errors
    ///
    /// Returns [`Error::Network`] on transport failure or a non-success
    /// status; no retry, no streaming.
    pub async fn ask_assistant(&self, question: impl Into<String>, leads: &[Lead]) -> Result<String> {
        let url = format!("{}/api/ask", self.base_url);
        let request = AskRequest {
            question: question.into(),
            leads: leads.to_vec(),
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::Network(format!("Failed to reach assistant: {e}")))?;

        if !response.status().is_success() {
            return Err(Error::Network(format!(
                "Assistant returned error: {}",
                response.status()
            )));
        }

        let answer: AskResponse = response
            .json()
            .await
            .map_err(|e| Error::Network(format!("Failed to parse assistant response: {e}")))?;

        Ok(answer.answer)
    }
}
