//! Shared test doubles for the use-case tests

use crate::ports::agent_service::{AgentService, AgentServiceError};
use async_trait::async_trait;
use cityline_domain::{well_known, Agent, AgentRegistry, AgentResponse, ClassifiedQuery};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

/// The standard five-agent registry used across use-case tests.
pub(crate) fn registry() -> AgentRegistry {
    AgentRegistry::new(vec![
        Agent::new(well_known::GOVERNMENT, "Government Services")
            .with_specialties(vec!["visa".into(), "license".into(), "permit".into()])
            .with_confidence(0.9),
        Agent::new(well_known::TRANSPORT, "Transport & Mobility")
            .with_specialties(vec!["metro".into(), "taxi".into(), "traffic".into()])
            .with_confidence(0.85),
        Agent::new(well_known::LIFESTYLE, "Lifestyle & Tourism")
            .with_specialties(vec!["restaurant".into(), "event".into(), "beach".into()])
            .with_confidence(0.8),
        Agent::new(well_known::ENVIRONMENT, "Environment & Weather")
            .with_specialties(vec!["weather".into(), "temperature".into(), "forecast".into()])
            .with_confidence(0.87),
        Agent::new(well_known::BUSINESS, "Business & Economy")
            .with_specialties(vec!["business".into(), "company".into(), "trade".into()])
            .with_confidence(0.85),
    ])
}

/// Per-agent scripted behavior
pub(crate) enum MockBehavior {
    Reply {
        content: String,
        confidence: f64,
        delay: Duration,
    },
    Fail,
    Hang,
}

/// Scripted agent service: each agent id gets a behavior; unknown ids fail.
/// Invocations are recorded so tests can assert who was actually called.
pub(crate) struct MockAgentService {
    behaviors: HashMap<String, MockBehavior>,
    calls: Mutex<Vec<String>>,
}

impl MockAgentService {
    pub(crate) fn new() -> Self {
        Self {
            behaviors: HashMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn reply(self, agent_id: &str, content: &str, confidence: f64) -> Self {
        self.reply_after(agent_id, content, confidence, Duration::ZERO)
    }

    pub(crate) fn reply_after(
        mut self,
        agent_id: &str,
        content: &str,
        confidence: f64,
        delay: Duration,
    ) -> Self {
        self.behaviors.insert(
            agent_id.to_string(),
            MockBehavior::Reply {
                content: content.to_string(),
                confidence,
                delay,
            },
        );
        self
    }

    pub(crate) fn fail(mut self, agent_id: &str) -> Self {
        self.behaviors
            .insert(agent_id.to_string(), MockBehavior::Fail);
        self
    }

    pub(crate) fn hang(mut self, agent_id: &str) -> Self {
        self.behaviors
            .insert(agent_id.to_string(), MockBehavior::Hang);
        self
    }

    pub(crate) fn was_called(&self, agent_id: &str) -> bool {
        self.calls.lock().unwrap().iter().any(|c| c == agent_id)
    }
}

#[async_trait]
impl AgentService for MockAgentService {
    async fn process_query(
        &self,
        agent: &Agent,
        _query: &ClassifiedQuery,
    ) -> Result<AgentResponse, AgentServiceError> {
        self.calls.lock().unwrap().push(agent.id.to_string());

        match self.behaviors.get(agent.id.as_str()) {
            Some(MockBehavior::Reply {
                content,
                confidence,
                delay,
            }) => {
                if !delay.is_zero() {
                    tokio::time::sleep(*delay).await;
                }
                Ok(AgentResponse::new(content.clone(), *confidence)
                    .with_data_sources(vec![format!("{}_source", agent.id)]))
            }
            Some(MockBehavior::Fail) => Err(AgentServiceError::Other(format!(
                "scripted failure for {}",
                agent.id
            ))),
            Some(MockBehavior::Hang) => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Err(AgentServiceError::Timeout)
            }
            None => Err(AgentServiceError::Unavailable(agent.id.to_string())),
        }
    }
}
