//! Agent entity and status

use super::value_objects::AgentId;
use serde::{Deserialize, Serialize};

/// Lifecycle status of an agent.
///
/// Transitions (`active -> learning -> offline`) are advisory and happen only
/// through configuration reloads, never during request handling. Only
/// `Active` agents are eligible for allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AgentStatus {
    #[default]
    Active,
    Learning,
    Offline,
}

impl AgentStatus {
    /// Whether this status makes the agent eligible for allocation
    pub fn is_active(&self) -> bool {
        matches!(self, AgentStatus::Active)
    }
}

impl std::fmt::Display for AgentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            AgentStatus::Active => "active",
            AgentStatus::Learning => "learning",
            AgentStatus::Offline => "offline",
        };
        write!(f, "{}", s)
    }
}

impl std::str::FromStr for AgentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(AgentStatus::Active),
            "learning" => Ok(AgentStatus::Learning),
            "offline" => Ok(AgentStatus::Offline),
            _ => Err(format!(
                "unknown agent status: {}. Valid: active, learning, offline",
                s
            )),
        }
    }
}

/// A specialized domain responder.
///
/// Created once at startup from static configuration and never mutated while
/// handling requests, so the registry can be shared across requests without
/// locking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    /// Stable identifier
    pub id: AgentId,
    /// Human-readable display name
    pub name: String,
    /// Specialty tags, matched as case-insensitive substrings of query text
    pub specialties: Vec<String>,
    /// Free-form capability descriptors for status/introspection surfaces
    pub capabilities: Vec<String>,
    /// Lifecycle status
    pub status: AgentStatus,
    /// Baseline confidence in [0, 1] this agent reports for its answers
    pub base_confidence: f64,
}

impl Agent {
    /// Create an active agent with no specialties and a neutral confidence
    pub fn new(id: impl Into<AgentId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            specialties: Vec::new(),
            capabilities: Vec::new(),
            status: AgentStatus::Active,
            base_confidence: 0.5,
        }
    }

    /// Set the specialty tags
    pub fn with_specialties(mut self, specialties: Vec<String>) -> Self {
        self.specialties = specialties;
        self
    }

    /// Set the capability descriptors
    pub fn with_capabilities(mut self, capabilities: Vec<String>) -> Self {
        self.capabilities = capabilities;
        self
    }

    /// Set the lifecycle status
    pub fn with_status(mut self, status: AgentStatus) -> Self {
        self.status = status;
        self
    }

    /// Set the baseline confidence, clamped to [0, 1]
    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.base_confidence = confidence.clamp(0.0, 1.0);
        self
    }

    /// Whether any specialty tag appears in the given lower-cased text
    pub fn is_relevant_to(&self, text_lower: &str) -> bool {
        self.specialties
            .iter()
            .any(|s| text_lower.contains(&s.to_lowercase()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agent_builder() {
        let agent = Agent::new("environment-weather", "Environment & Weather")
            .with_specialties(vec!["weather".into(), "air quality".into()])
            .with_confidence(0.85);

        assert_eq!(agent.id.as_str(), "environment-weather");
        assert_eq!(agent.status, AgentStatus::Active);
        assert!((agent.base_confidence - 0.85).abs() < f64::EPSILON);
    }

    #[test]
    fn test_confidence_clamped() {
        let agent = Agent::new("a", "A").with_confidence(1.7);
        assert_eq!(agent.base_confidence, 1.0);
        let agent = Agent::new("a", "A").with_confidence(-0.2);
        assert_eq!(agent.base_confidence, 0.0);
    }

    #[test]
    fn test_relevance_is_substring_based() {
        let agent =
            Agent::new("t", "T").with_specialties(vec!["metro".into(), "Parking".into()]);
        assert!(agent.is_relevant_to("where is the nearest metro station"));
        assert!(agent.is_relevant_to("parking rules downtown"));
        assert!(!agent.is_relevant_to("weather tomorrow"));
    }

    #[test]
    fn test_status_parse() {
        assert_eq!("active".parse::<AgentStatus>().ok(), Some(AgentStatus::Active));
        assert_eq!("OFFLINE".parse::<AgentStatus>().ok(), Some(AgentStatus::Offline));
        assert!("sleeping".parse::<AgentStatus>().is_err());
    }

    #[test]
    fn test_only_active_is_eligible() {
        assert!(AgentStatus::Active.is_active());
        assert!(!AgentStatus::Learning.is_active());
        assert!(!AgentStatus::Offline.is_active());
    }
}
