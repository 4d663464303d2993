//! Port for best-effort interaction logging.
//!
//! Defines the [`InteractionLogger`] trait for recording completed
//! interactions (query, classification, final answer) to a structured store.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! diagnostic messages, while this port captures one machine-readable record
//! per answered query. The `record` method is synchronous and infallible by
//! contract so logging can never block or fail the response path; adapters
//! swallow their own errors.

use chrono::{DateTime, Utc};
use cityline_domain::{ClassifiedQuery, FinalResponse};
use serde::{Deserialize, Serialize};

/// One completed interaction, written after the final response is ready.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractionRecord {
    /// Caller-supplied user id, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// The raw query text as received
    pub raw_query: String,
    /// Classified intent tag
    pub intent: String,
    /// Classified urgency tag
    pub urgency: String,
    /// Classified complexity tag
    pub complexity: String,
    /// Final answer text returned to the caller
    pub response_content: String,
    /// Aggregate confidence of the final answer
    pub confidence: f64,
    /// Data sources behind the answer
    pub data_sources: Vec<String>,
    /// Agents that collaborated on the answer
    pub collaborating_agents: Vec<String>,
    /// UTC time the record was created
    pub timestamp: DateTime<Utc>,
}

impl InteractionRecord {
    /// Build a record from a classified query and its final response.
    pub fn new(
        user_id: Option<&str>,
        query: &ClassifiedQuery,
        response: &FinalResponse,
    ) -> Self {
        Self {
            user_id: user_id.map(str::to_string),
            raw_query: query.text.clone(),
            intent: query.intent.clone(),
            urgency: query.urgency.to_string(),
            complexity: query.complexity.to_string(),
            response_content: response.content.clone(),
            confidence: response.confidence,
            data_sources: response.data_sources.clone(),
            collaborating_agents: response.collaborating_agents.clone(),
            timestamp: Utc::now(),
        }
    }
}

/// Port for recording completed interactions.
///
/// Fire-and-forget: implementations must never block the response path and
/// must swallow their own failures (log and continue).
pub trait InteractionLogger: Send + Sync {
    /// Record one completed interaction.
    fn record(&self, record: InteractionRecord);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoInteractionLogger;

impl InteractionLogger for NoInteractionLogger {
    fn record(&self, _record: InteractionRecord) {}
}
