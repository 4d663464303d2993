//! Orchestration rules - named scenarios mapping query traits to a plan
//!
//! Rules are evaluated in list order with first-match-wins semantics; the
//! numeric priority field is informational only. Conditions are explicit data
//! rather than closures so the rule set can be loaded from configuration and
//! the tie-break order stays a testable contract.

use super::allocation::AgentAllocation;
use crate::agent::value_objects::AgentId;
use crate::query::{ClassifiedQuery, Complexity, Urgency};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How a scenario intends its agents' answers to be combined.
///
/// Carried on rules as scenario metadata and surfaced in logs. The synthesis
/// algorithm itself is uniform across strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStrategy {
    /// All allocated agents are expected to agree
    Unanimous,
    /// Most allocated agents are expected to agree
    #[default]
    Majority,
    /// The primary agent's expertise leads, others enrich
    Expert,
    /// Roles form a strict hierarchy (primary, then supporting, then validator)
    Hierarchical,
}

impl ResponseStrategy {
    /// Human-readable description of this strategy
    pub fn description(&self) -> &'static str {
        match self {
            ResponseStrategy::Unanimous => "unanimous (all agents agree)",
            ResponseStrategy::Majority => "majority (most agents agree)",
            ResponseStrategy::Expert => "expert (primary leads)",
            ResponseStrategy::Hierarchical => "hierarchical (roles in strict order)",
        }
    }
}

impl std::fmt::Display for ResponseStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Matches the serde lowercase tag so config, logs, and parsing align
        let s = match self {
            ResponseStrategy::Unanimous => "unanimous",
            ResponseStrategy::Majority => "majority",
            ResponseStrategy::Expert => "expert",
            ResponseStrategy::Hierarchical => "hierarchical",
        };
        write!(f, "{}", s)
    }
}

impl std::str::FromStr for ResponseStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unanimous" => Ok(ResponseStrategy::Unanimous),
            "majority" => Ok(ResponseStrategy::Majority),
            "expert" => Ok(ResponseStrategy::Expert),
            "hierarchical" => Ok(ResponseStrategy::Hierarchical),
            _ => Err(format!(
                "unknown response strategy: {}. Valid: unanimous, majority, expert, hierarchical",
                s
            )),
        }
    }
}

/// Threshold over the intent weight map: "the mapped weight for this agent is
/// strictly greater than the threshold".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentWeightThreshold {
    pub agent_id: AgentId,
    pub threshold: f64,
}

/// Conjunctive predicate over a classified query and its intent weight map.
///
/// Every present field must hold for the condition to match; an empty
/// condition matches everything and makes a rule a catch-all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RuleCondition {
    /// Query urgency must be at least this level
    pub min_urgency: Option<Urgency>,
    /// Query complexity must be one of these
    pub complexity_any_of: Vec<Complexity>,
    /// Intent weight map must assign more than `threshold` to `agent_id`
    pub min_intent_weight: Option<IntentWeightThreshold>,
}

impl RuleCondition {
    /// Condition that matches every query
    pub fn any() -> Self {
        Self::default()
    }

    /// Require at least this urgency
    pub fn with_min_urgency(mut self, urgency: Urgency) -> Self {
        self.min_urgency = Some(urgency);
        self
    }

    /// Require the complexity to be one of the given values
    pub fn with_complexity_any_of(mut self, complexity: Vec<Complexity>) -> Self {
        self.complexity_any_of = complexity;
        self
    }

    /// Require the intent weight map to assign more than `threshold` to the agent
    pub fn with_min_intent_weight(mut self, agent_id: impl Into<AgentId>, threshold: f64) -> Self {
        self.min_intent_weight = Some(IntentWeightThreshold {
            agent_id: agent_id.into(),
            threshold,
        });
        self
    }

    /// Evaluate the condition against a query and its intent weight map
    pub fn matches(&self, query: &ClassifiedQuery, weights: &[(AgentId, f64)]) -> bool {
        if let Some(min) = self.min_urgency {
            if query.urgency < min {
                return false;
            }
        }

        if !self.complexity_any_of.is_empty()
            && !self.complexity_any_of.contains(&query.complexity)
        {
            return false;
        }

        if let Some(threshold) = &self.min_intent_weight {
            let weight = weights
                .iter()
                .find(|(id, _)| *id == threshold.agent_id)
                .map(|(_, w)| *w)
                .unwrap_or(0.0);
            if weight <= threshold.threshold {
                return false;
            }
        }

        true
    }
}

/// A named orchestration scenario: when its condition matches, its allocation
/// plan, response strategy, and timeout apply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrchestrationRule {
    /// Scenario identifier, used in logs and the interaction record
    pub scenario: String,
    /// Informational priority; selection order is the list order
    pub priority: u8,
    /// When this scenario applies
    pub condition: RuleCondition,
    /// Ordered allocation plan returned verbatim on match
    pub allocations: Vec<AgentAllocation>,
    /// How the scenario intends responses to be combined
    pub strategy: ResponseStrategy,
    /// Dispatch time budget for this scenario
    pub timeout: Duration,
}

impl OrchestrationRule {
    pub fn new(scenario: impl Into<String>, condition: RuleCondition) -> Self {
        Self {
            scenario: scenario.into(),
            priority: 0,
            condition,
            allocations: Vec::new(),
            strategy: ResponseStrategy::default(),
            timeout: super::DEFAULT_DISPATCH_TIMEOUT,
        }
    }

    pub fn with_priority(mut self, priority: u8) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_allocations(mut self, allocations: Vec<AgentAllocation>) -> Self {
        self.allocations = allocations;
        self
    }

    pub fn with_strategy(mut self, strategy: ResponseStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(urgency: Urgency, complexity: Complexity) -> ClassifiedQuery {
        ClassifiedQuery::new("text", "general_inquiry", urgency, complexity)
    }

    #[test]
    fn test_empty_condition_matches_everything() {
        let cond = RuleCondition::any();
        assert!(cond.matches(&query(Urgency::Low, Complexity::Simple), &[]));
        assert!(cond.matches(&query(Urgency::Critical, Complexity::MultiDomain), &[]));
    }

    #[test]
    fn test_min_urgency() {
        let cond = RuleCondition::any().with_min_urgency(Urgency::High);
        assert!(!cond.matches(&query(Urgency::Medium, Complexity::Simple), &[]));
        assert!(cond.matches(&query(Urgency::High, Complexity::Simple), &[]));
        assert!(cond.matches(&query(Urgency::Critical, Complexity::Simple), &[]));
    }

    #[test]
    fn test_complexity_any_of() {
        let cond = RuleCondition::any()
            .with_complexity_any_of(vec![Complexity::Complex, Complexity::MultiDomain]);
        assert!(!cond.matches(&query(Urgency::Low, Complexity::Simple), &[]));
        assert!(cond.matches(&query(Urgency::Low, Complexity::MultiDomain), &[]));
    }

    #[test]
    fn test_min_intent_weight_is_strict() {
        let cond = RuleCondition::any().with_min_intent_weight("business-economy", 0.7);
        let q = query(Urgency::Low, Complexity::Simple);

        let strong = [(AgentId::new("business-economy"), 0.8)];
        let exact = [(AgentId::new("business-economy"), 0.7)];
        let other = [(AgentId::new("transport-mobility"), 0.9)];

        assert!(cond.matches(&q, &strong));
        assert!(!cond.matches(&q, &exact));
        assert!(!cond.matches(&q, &other));
    }

    #[test]
    fn test_conditions_are_conjunctive() {
        let cond = RuleCondition::any()
            .with_min_urgency(Urgency::Medium)
            .with_complexity_any_of(vec![Complexity::Complex]);
        assert!(!cond.matches(&query(Urgency::Medium, Complexity::Simple), &[]));
        assert!(!cond.matches(&query(Urgency::Low, Complexity::Complex), &[]));
        assert!(cond.matches(&query(Urgency::Medium, Complexity::Complex), &[]));
    }

    #[test]
    fn test_strategy_parse_roundtrip() {
        for s in [
            ResponseStrategy::Unanimous,
            ResponseStrategy::Majority,
            ResponseStrategy::Expert,
            ResponseStrategy::Hierarchical,
        ] {
            assert_eq!(s.to_string().parse::<ResponseStrategy>().ok(), Some(s));
        }
        assert!("median".parse::<ResponseStrategy>().is_err());
    }

    #[test]
    fn test_rule_builder_defaults() {
        let rule = OrchestrationRule::new("catch_all", RuleCondition::any());
        assert_eq!(rule.timeout, crate::rules::DEFAULT_DISPATCH_TIMEOUT);
        assert_eq!(rule.strategy, ResponseStrategy::Majority);
        assert!(rule.allocations.is_empty());
    }
}
