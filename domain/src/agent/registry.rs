//! Read-only agent registry

use super::entities::{Agent, AgentStatus};
use super::value_objects::AgentId;
use std::collections::HashMap;

/// Read-only catalog of specialized agents.
///
/// Built once at startup and injected into the orchestrator; shared across
/// requests without locking because it is never mutated afterwards. Insertion
/// order is preserved so every iteration over the catalog is deterministic.
#[derive(Debug, Clone)]
pub struct AgentRegistry {
    agents: Vec<Agent>,
    index: HashMap<AgentId, usize>,
}

impl AgentRegistry {
    /// Build a registry from a list of agents.
    ///
    /// If the same id appears twice, the first entry wins.
    pub fn new(agents: Vec<Agent>) -> Self {
        let mut deduped: Vec<Agent> = Vec::with_capacity(agents.len());
        let mut index = HashMap::new();
        for agent in agents {
            if index.contains_key(&agent.id) {
                continue;
            }
            index.insert(agent.id.clone(), deduped.len());
            deduped.push(agent);
        }
        Self {
            agents: deduped,
            index,
        }
    }

    /// Look up an agent by id
    pub fn get(&self, id: &AgentId) -> Option<&Agent> {
        self.index.get(id).map(|&i| &self.agents[i])
    }

    /// All registered agents, in insertion order
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    /// Agents with status `active`, in insertion order
    pub fn active_agents(&self) -> impl Iterator<Item = &Agent> {
        self.agents.iter().filter(|a| a.status.is_active())
    }

    /// Agents whose specialty tags appear as case-insensitive substrings of
    /// the given query text, in insertion order
    pub fn candidates_for(&self, text: &str) -> Vec<&Agent> {
        let lower = text.to_lowercase();
        self.agents
            .iter()
            .filter(|a| a.is_relevant_to(&lower))
            .collect()
    }

    /// Whether the id names a registered agent with status `active`
    pub fn is_eligible(&self, id: &AgentId) -> bool {
        self.get(id)
            .map(|a| a.status.is_active())
            .unwrap_or(false)
    }

    /// Number of registered agents
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Number of agents with status `active`
    pub fn active_count(&self) -> usize {
        self.active_agents().count()
    }
}
