//! Raw TOML configuration data types
//!
//! These structs mirror the exact structure of the config file. Enum-like
//! fields (status, role, strategy, urgency, complexity) are kept as strings
//! and parsed on conversion; unknown values fall back to their defaults with
//! a warning instead of rejecting the whole file.

use cityline_domain::{
    Agent, AgentAllocation, AgentRegistry, AgentRole, AgentStatus, Complexity, OrchestrationRule,
    ResponseStrategy, RuleCondition, Urgency, DEFAULT_DISPATCH_TIMEOUT,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;

/// Complete file configuration (raw TOML structure)
///
/// # Example
///
/// ```toml
/// [[agents]]
/// id = "environment-weather"
/// name = "Environment & Weather"
/// specialties = ["weather", "forecast"]
/// confidence = 0.87
///
/// [[rules]]
/// scenario = "critical_urgency"
/// priority = 100
/// timeout_secs = 3
/// strategy = "hierarchical"
///
/// [rules.condition]
/// min_urgency = "critical"
///
/// [[rules.allocations]]
/// agent = "government-services"
/// role = "primary"
/// weight = 0.5
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Agent catalog
    pub agents: Vec<FileAgentEntry>,
    /// Orchestration rules, evaluated in file order
    pub rules: Vec<FileRuleEntry>,
    /// Behavior settings
    pub behavior: FileBehaviorConfig,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            agents: default_agents(),
            rules: default_rules(),
            behavior: FileBehaviorConfig::default(),
        }
    }
}

impl FileConfig {
    /// Build the agent registry from the catalog entries.
    pub fn to_registry(&self) -> AgentRegistry {
        AgentRegistry::new(self.agents.iter().map(FileAgentEntry::to_agent).collect())
    }

    /// Build the ordered rule list.
    pub fn to_rules(&self) -> Vec<OrchestrationRule> {
        self.rules.iter().map(FileRuleEntry::to_rule).collect()
    }
}

/// One `[[agents]]` entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAgentEntry {
    pub id: String,
    pub name: String,
    pub specialties: Vec<String>,
    pub capabilities: Vec<String>,
    /// "active", "learning" or "offline"
    pub status: String,
    /// Baseline confidence in [0, 1]
    pub confidence: f64,
}

impl Default for FileAgentEntry {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            specialties: Vec::new(),
            capabilities: Vec::new(),
            status: "active".to_string(),
            confidence: 0.5,
        }
    }
}

impl FileAgentEntry {
    fn to_agent(&self) -> Agent {
        let status = match self.status.parse::<AgentStatus>() {
            Ok(status) => status,
            Err(_) => {
                warn!(
                    agent = %self.id,
                    value = %self.status,
                    "unknown agent status, falling back to 'active'"
                );
                AgentStatus::Active
            }
        };
        Agent::new(self.id.as_str(), self.name.as_str())
            .with_specialties(self.specialties.clone())
            .with_capabilities(self.capabilities.clone())
            .with_status(status)
            .with_confidence(self.confidence)
    }
}

/// One `[[rules]]` entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRuleEntry {
    pub scenario: String,
    pub priority: u8,
    pub condition: FileConditionEntry,
    pub allocations: Vec<FileAllocationEntry>,
    /// "unanimous", "majority", "expert" or "hierarchical"
    pub strategy: String,
    pub timeout_secs: u64,
}

impl Default for FileRuleEntry {
    fn default() -> Self {
        Self {
            scenario: String::new(),
            priority: 0,
            condition: FileConditionEntry::default(),
            allocations: Vec::new(),
            strategy: "majority".to_string(),
            timeout_secs: DEFAULT_DISPATCH_TIMEOUT.as_secs(),
        }
    }
}

impl FileRuleEntry {
    fn to_rule(&self) -> OrchestrationRule {
        let strategy = match self.strategy.parse::<ResponseStrategy>() {
            Ok(strategy) => strategy,
            Err(_) => {
                warn!(
                    rule = %self.scenario,
                    value = %self.strategy,
                    "unknown response strategy, falling back to 'majority'"
                );
                ResponseStrategy::default()
            }
        };
        OrchestrationRule::new(self.scenario.as_str(), self.condition.to_condition(&self.scenario))
            .with_priority(self.priority)
            .with_allocations(
                self.allocations
                    .iter()
                    .map(|a| a.to_allocation(&self.scenario))
                    .collect(),
            )
            .with_strategy(strategy)
            .with_timeout(Duration::from_secs(self.timeout_secs))
    }
}

/// A rule's `[rules.condition]` table
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConditionEntry {
    /// "low", "medium", "high" or "critical"
    pub min_urgency: Option<String>,
    /// Any of "simple", "moderate", "complex", "multi_domain"
    pub complexity_any_of: Vec<String>,
    /// Agent id the intent weight threshold applies to
    pub min_intent_weight_agent: Option<String>,
    /// Strict lower bound on that agent's mapped intent weight
    pub min_intent_weight: Option<f64>,
}

impl FileConditionEntry {
    fn to_condition(&self, scenario: &str) -> RuleCondition {
        let mut condition = RuleCondition::any();

        if let Some(raw) = &self.min_urgency {
            match raw.parse::<Urgency>() {
                Ok(urgency) => condition = condition.with_min_urgency(urgency),
                Err(_) => warn!(
                    rule = %scenario,
                    value = %raw,
                    "unknown urgency in condition, ignoring the clause"
                ),
            }
        }

        let complexity: Vec<Complexity> = self
            .complexity_any_of
            .iter()
            .filter_map(|raw| match raw.parse::<Complexity>() {
                Ok(complexity) => Some(complexity),
                Err(_) => {
                    warn!(
                        rule = %scenario,
                        value = %raw,
                        "unknown complexity in condition, skipping the value"
                    );
                    None
                }
            })
            .collect();
        if !complexity.is_empty() {
            condition = condition.with_complexity_any_of(complexity);
        }

        if let (Some(agent), Some(threshold)) =
            (&self.min_intent_weight_agent, self.min_intent_weight)
        {
            condition = condition.with_min_intent_weight(agent.as_str(), threshold);
        }

        condition
    }
}

/// One `[[rules.allocations]]` entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAllocationEntry {
    pub agent: String,
    /// "primary", "supporting", "validator" or "specialist"
    pub role: String,
    pub weight: f64,
}

impl Default for FileAllocationEntry {
    fn default() -> Self {
        Self {
            agent: String::new(),
            role: "supporting".to_string(),
            weight: 0.0,
        }
    }
}

impl FileAllocationEntry {
    fn to_allocation(&self, scenario: &str) -> AgentAllocation {
        let role = match self.role.parse::<AgentRole>() {
            Ok(role) => role,
            Err(_) => {
                warn!(
                    rule = %scenario,
                    agent = %self.agent,
                    value = %self.role,
                    "unknown agent role, falling back to 'supporting'"
                );
                AgentRole::default()
            }
        };
        AgentAllocation::new(self.agent.as_str(), role, self.weight)
    }
}

/// `[behavior]` section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBehaviorConfig {
    /// Append one JSON line per answered query to this file when set
    pub interaction_log: Option<PathBuf>,
    /// Default user id attached to interactions when the caller gives none
    pub default_user: Option<String>,
}

fn default_agents() -> Vec<FileAgentEntry> {
    vec![
        FileAgentEntry {
            id: "government-services".to_string(),
            name: "Government Services".to_string(),
            specialties: [
                "visa",
                "emirates id",
                "passport",
                "license",
                "permit",
                "fine",
                "municipality",
            ]
            .map(String::from)
            .to_vec(),
            capabilities: ["document renewals", "civic procedures"]
                .map(String::from)
                .to_vec(),
            confidence: 0.9,
            ..Default::default()
        },
        FileAgentEntry {
            id: "transport-mobility".to_string(),
            name: "Transport & Mobility".to_string(),
            specialties: ["metro", "bus", "taxi", "tram", "parking", "traffic", "road"]
                .map(String::from)
                .to_vec(),
            capabilities: ["route planning", "transit status"]
                .map(String::from)
                .to_vec(),
            confidence: 0.85,
            ..Default::default()
        },
        FileAgentEntry {
            id: "lifestyle-tourism".to_string(),
            name: "Lifestyle & Tourism".to_string(),
            specialties: [
                "restaurant",
                "event",
                "shopping",
                "beach",
                "hotel",
                "entertainment",
                "tourism",
            ]
            .map(String::from)
            .to_vec(),
            capabilities: ["recommendations", "visitor guidance"]
                .map(String::from)
                .to_vec(),
            confidence: 0.8,
            ..Default::default()
        },
        FileAgentEntry {
            id: "environment-weather".to_string(),
            name: "Environment & Weather".to_string(),
            specialties: [
                "weather",
                "temperature",
                "forecast",
                "rain",
                "humidity",
                "sandstorm",
                "air quality",
            ]
            .map(String::from)
            .to_vec(),
            capabilities: ["current conditions", "forecasts"]
                .map(String::from)
                .to_vec(),
            confidence: 0.87,
            ..Default::default()
        },
        FileAgentEntry {
            id: "business-economy".to_string(),
            name: "Business & Economy".to_string(),
            specialties: [
                "business",
                "company",
                "startup",
                "trade",
                "investment",
                "free zone",
            ]
            .map(String::from)
            .to_vec(),
            capabilities: ["company setup", "market overview"]
                .map(String::from)
                .to_vec(),
            confidence: 0.85,
            ..Default::default()
        },
    ]
}

fn default_rules() -> Vec<FileRuleEntry> {
    vec![
        FileRuleEntry {
            scenario: "critical_urgency".to_string(),
            priority: 100,
            condition: FileConditionEntry {
                min_urgency: Some("critical".to_string()),
                ..Default::default()
            },
            allocations: vec![
                FileAllocationEntry {
                    agent: "government-services".to_string(),
                    role: "primary".to_string(),
                    weight: 0.5,
                },
                FileAllocationEntry {
                    agent: "transport-mobility".to_string(),
                    role: "supporting".to_string(),
                    weight: 0.3,
                },
                FileAllocationEntry {
                    agent: "environment-weather".to_string(),
                    role: "supporting".to_string(),
                    weight: 0.2,
                },
            ],
            strategy: "hierarchical".to_string(),
            timeout_secs: 3,
        },
        FileRuleEntry {
            scenario: "complex_multi_domain".to_string(),
            priority: 10,
            condition: FileConditionEntry {
                complexity_any_of: vec!["multi_domain".to_string()],
                ..Default::default()
            },
            allocations: vec![
                FileAllocationEntry {
                    agent: "government-services".to_string(),
                    role: "primary".to_string(),
                    weight: 0.3,
                },
                FileAllocationEntry {
                    agent: "business-economy".to_string(),
                    role: "supporting".to_string(),
                    weight: 0.25,
                },
                FileAllocationEntry {
                    agent: "transport-mobility".to_string(),
                    role: "supporting".to_string(),
                    weight: 0.2,
                },
                FileAllocationEntry {
                    agent: "lifestyle-tourism".to_string(),
                    role: "supporting".to_string(),
                    weight: 0.15,
                },
                FileAllocationEntry {
                    agent: "environment-weather".to_string(),
                    role: "validator".to_string(),
                    weight: 0.1,
                },
            ],
            strategy: "expert".to_string(),
            timeout_secs: 8,
        },
        FileRuleEntry {
            scenario: "business_focus".to_string(),
            priority: 5,
            condition: FileConditionEntry {
                min_intent_weight_agent: Some("business-economy".to_string()),
                min_intent_weight: Some(0.7),
                ..Default::default()
            },
            allocations: vec![
                FileAllocationEntry {
                    agent: "business-economy".to_string(),
                    role: "primary".to_string(),
                    weight: 0.8,
                },
                FileAllocationEntry {
                    agent: "government-services".to_string(),
                    role: "supporting".to_string(),
                    weight: 0.4,
                },
            ],
            strategy: "expert".to_string(),
            timeout_secs: 5,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use cityline_domain::well_known;

    #[test]
    fn test_default_catalog_has_five_active_agents() {
        let registry = FileConfig::default().to_registry();
        assert_eq!(registry.len(), 5);
        assert_eq!(registry.active_count(), 5);
        for id in [
            well_known::GOVERNMENT,
            well_known::TRANSPORT,
            well_known::LIFESTYLE,
            well_known::ENVIRONMENT,
            well_known::BUSINESS,
        ] {
            assert!(registry.get(&id.into()).is_some(), "missing agent {}", id);
        }
    }

    #[test]
    fn test_default_rules_order_and_shape() {
        let rules = FileConfig::default().to_rules();
        let scenarios: Vec<&str> = rules.iter().map(|r| r.scenario.as_str()).collect();
        assert_eq!(
            scenarios,
            vec!["critical_urgency", "complex_multi_domain", "business_focus"]
        );

        let multi = &rules[1];
        assert_eq!(multi.allocations.len(), 5);
        assert!(multi.allocations[0].is_primary());
        assert_eq!(multi.strategy, ResponseStrategy::Expert);
        assert_eq!(multi.timeout, Duration::from_secs(8));
    }

    #[test]
    fn test_agents_deserialize_from_toml() {
        let toml_str = r#"
[[agents]]
id = "environment-weather"
name = "Environment & Weather"
specialties = ["weather"]
confidence = 0.9

[[agents]]
id = "transport-mobility"
name = "Transport & Mobility"
status = "offline"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let registry = config.to_registry();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.active_count(), 1);
        let env = registry.get(&well_known::ENVIRONMENT.into()).unwrap();
        assert!((env.base_confidence - 0.9).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rule_deserializes_with_condition_and_allocations() {
        let toml_str = r#"
[[rules]]
scenario = "critical"
priority = 99
strategy = "hierarchical"
timeout_secs = 3

[rules.condition]
min_urgency = "critical"
complexity_any_of = ["complex", "multi_domain"]

[[rules.allocations]]
agent = "government-services"
role = "primary"
weight = 0.5
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let rules = config.to_rules();
        assert_eq!(rules.len(), 1);
        let rule = &rules[0];
        assert_eq!(rule.condition.min_urgency, Some(Urgency::Critical));
        assert_eq!(
            rule.condition.complexity_any_of,
            vec![Complexity::Complex, Complexity::MultiDomain]
        );
        assert_eq!(rule.allocations.len(), 1);
        assert_eq!(rule.strategy, ResponseStrategy::Hierarchical);
    }

    #[test]
    fn test_unknown_enum_values_fall_back_with_defaults() {
        let toml_str = r#"
[[agents]]
id = "a"
name = "A"
status = "sleeping"

[[rules]]
scenario = "odd"
strategy = "median"

[[rules.allocations]]
agent = "a"
role = "boss"
weight = 0.4
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let registry = config.to_registry();
        assert_eq!(registry.active_count(), 1);
        let rule = &config.to_rules()[0];
        assert_eq!(rule.strategy, ResponseStrategy::Majority);
        assert_eq!(rule.allocations[0].role, AgentRole::Supporting);
    }

    #[test]
    fn test_behavior_section_defaults_off() {
        let config = FileConfig::default();
        assert!(config.behavior.interaction_log.is_none());
        assert!(config.behavior.default_user.is_none());
    }

    #[test]
    fn test_default_config_round_trips_through_toml() {
        let serialized = toml::to_string(&FileConfig::default()).unwrap();
        let parsed: FileConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.agents.len(), 5);
        assert_eq!(parsed.rules.len(), 3);
    }
}
