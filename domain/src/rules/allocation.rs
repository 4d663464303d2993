//! Agent allocation - one agent's assignment for one query

use crate::agent::value_objects::AgentId;
use serde::{Deserialize, Serialize};

/// Role an agent plays within one allocation plan.
///
/// A resolved plan contains at most one `Primary`; synthesis requires exactly
/// one to succeed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AgentRole {
    Primary,
    #[default]
    Supporting,
    Validator,
    Specialist,
}

impl std::fmt::Display for AgentRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            AgentRole::Primary => "primary",
            AgentRole::Supporting => "supporting",
            AgentRole::Validator => "validator",
            AgentRole::Specialist => "specialist",
        };
        write!(f, "{}", s)
    }
}

impl std::str::FromStr for AgentRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "primary" => Ok(AgentRole::Primary),
            "supporting" => Ok(AgentRole::Supporting),
            "validator" => Ok(AgentRole::Validator),
            "specialist" => Ok(AgentRole::Specialist),
            _ => Err(format!(
                "unknown agent role: {}. Valid: primary, supporting, validator, specialist",
                s
            )),
        }
    }
}

/// Assignment of one agent to one role and weight for a single query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentAllocation {
    /// The allocated agent
    pub agent_id: AgentId,
    /// Role within this plan
    pub role: AgentRole,
    /// Contribution weight in [0, 1], used for aggregate confidence
    pub weight: f64,
}

impl AgentAllocation {
    /// Create an allocation with an explicit role. Weight is clamped to [0, 1].
    pub fn new(agent_id: impl Into<AgentId>, role: AgentRole, weight: f64) -> Self {
        Self {
            agent_id: agent_id.into(),
            role,
            weight: weight.clamp(0.0, 1.0),
        }
    }

    /// Shorthand for a primary allocation
    pub fn primary(agent_id: impl Into<AgentId>, weight: f64) -> Self {
        Self::new(agent_id, AgentRole::Primary, weight)
    }

    /// Shorthand for a supporting allocation
    pub fn supporting(agent_id: impl Into<AgentId>, weight: f64) -> Self {
        Self::new(agent_id, AgentRole::Supporting, weight)
    }

    /// Shorthand for a validator allocation
    pub fn validator(agent_id: impl Into<AgentId>, weight: f64) -> Self {
        Self::new(agent_id, AgentRole::Validator, weight)
    }

    /// Whether this allocation carries the primary role
    pub fn is_primary(&self) -> bool {
        self.role == AgentRole::Primary
    }
}
