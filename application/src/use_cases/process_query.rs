//! Query orchestration use case
//!
//! Wires the whole pipeline together: classify the text, resolve an
//! allocation plan, dispatch the allocated agents concurrently, synthesize
//! their answers, and record the interaction. Every failure path collapses
//! into the fixed fallback response; callers never see an error.

use crate::ports::agent_service::AgentService;
use crate::ports::interaction_log::{InteractionLogger, InteractionRecord, NoInteractionLogger};
use crate::use_cases::dispatch::dispatch;
use chrono::{DateTime, Utc};
use cityline_domain::{
    fallback_response, resolve_allocation, synthesize, AgentRegistry, Classifier, ClassifiedQuery,
    DomainError, FinalResponse, KeywordClassifier, OrchestrationRule,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

/// Read-only snapshot for health dashboards.
#[derive(Debug, Clone, Serialize)]
pub struct OrchestratorStatus {
    pub registered_agent_count: usize,
    pub active_agent_count: usize,
    pub rule_count: usize,
    /// When the catalog and rule set were last (re)built
    pub last_update: DateTime<Utc>,
}

/// The multi-agent query orchestrator.
///
/// Holds the read-only agent registry and rule set (built once at startup and
/// injected, never mutated afterwards) plus the collaborator ports. Requests
/// share no mutable state, so one orchestrator serves any number of
/// concurrent callers.
pub struct QueryOrchestrator {
    registry: Arc<AgentRegistry>,
    rules: Vec<OrchestrationRule>,
    classifier: Box<dyn Classifier>,
    service: Arc<dyn AgentService>,
    logger: Arc<dyn InteractionLogger>,
    built_at: DateTime<Utc>,
}

impl QueryOrchestrator {
    /// Create an orchestrator with the keyword classifier and no interaction
    /// logging. Collaborators are injected; nothing is global.
    pub fn new(
        registry: Arc<AgentRegistry>,
        rules: Vec<OrchestrationRule>,
        service: Arc<dyn AgentService>,
    ) -> Self {
        Self {
            registry,
            rules,
            classifier: Box::new(KeywordClassifier::new()),
            service,
            logger: Arc::new(NoInteractionLogger),
            built_at: Utc::now(),
        }
    }

    /// Replace the classification strategy
    pub fn with_classifier(mut self, classifier: Box<dyn Classifier>) -> Self {
        self.classifier = classifier;
        self
    }

    /// Attach an interaction logger
    pub fn with_logger(mut self, logger: Arc<dyn InteractionLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Answer a query, returning the full synthesized response.
    ///
    /// Never fails: allocation and synthesis errors collapse into the fixed
    /// fallback response, and the interaction log is best-effort.
    pub async fn process_query(&self, text: &str, user_id: Option<&str>) -> FinalResponse {
        let query = self.classifier.classify(text);
        info!(
            intent = %query.intent,
            urgency = %query.urgency,
            complexity = %query.complexity,
            "query classified"
        );

        let response = match self.orchestrate(&query).await {
            Ok(response) => response,
            Err(error) => {
                warn!(error = %error, "orchestration failed, returning fallback response");
                fallback_response()
            }
        };

        // Best-effort, after the answer is ready. Handed to the blocking pool
        // so a slow log sink cannot stall the caller; adapters swallow their
        // own failures.
        let record = InteractionRecord::new(user_id, &query, &response);
        let logger = Arc::clone(&self.logger);
        tokio::task::spawn_blocking(move || logger.record(record));

        response
    }

    /// Answer a query, returning only the answer text.
    pub async fn submit_query(&self, text: &str, user_id: Option<&str>) -> String {
        self.process_query(text, user_id).await.content
    }

    /// Read-only status snapshot.
    pub fn status(&self) -> OrchestratorStatus {
        OrchestratorStatus {
            registered_agent_count: self.registry.len(),
            active_agent_count: self.registry.active_count(),
            rule_count: self.rules.len(),
            last_update: self.built_at,
        }
    }

    async fn orchestrate(&self, query: &ClassifiedQuery) -> Result<FinalResponse, DomainError> {
        let plan = resolve_allocation(query, &self.registry, &self.rules)?;
        info!(
            scenario = plan.scenario.as_deref().unwrap_or("default"),
            strategy = %plan.strategy,
            agents = plan.allocations.len(),
            timeout_ms = plan.timeout.as_millis() as u64,
            "allocation resolved"
        );

        let responses = dispatch(
            Arc::clone(&self.service),
            &self.registry,
            &plan.allocations,
            query,
            plan.timeout,
        )
        .await;

        synthesize(&responses, &plan.allocations)
    }
}
