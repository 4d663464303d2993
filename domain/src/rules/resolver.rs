//! Allocation resolution
//!
//! Rules are scanned in list order; the first matching condition supplies the
//! plan. When nothing matches, a default plan is derived from the naive
//! intent-to-agent weight map. Either way the plan is filtered down to active
//! registered agents and normalized to carry at most one primary.

use super::allocation::{AgentAllocation, AgentRole};
use super::rule::{OrchestrationRule, ResponseStrategy};
use super::DEFAULT_DISPATCH_TIMEOUT;
use crate::agent::registry::AgentRegistry;
use crate::agent::value_objects::AgentId;
use crate::agent::well_known;
use crate::core::error::DomainError;
use crate::query::ClassifiedQuery;
use std::time::Duration;

/// Weight above which a default allocation is marked primary.
pub const PRIMARY_WEIGHT_THRESHOLD: f64 = 0.7;

/// The outcome of allocation resolution: the plan plus the scenario metadata
/// the dispatcher needs (time budget and strategy).
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPlan {
    /// Scenario id of the matched rule; `None` for the default allocation
    pub scenario: Option<String>,
    /// Response strategy of the matched rule, or the default
    pub strategy: ResponseStrategy,
    /// Ordered allocation plan, at most one primary
    pub allocations: Vec<AgentAllocation>,
    /// Dispatch time budget
    pub timeout: Duration,
}

impl ResolvedPlan {
    /// The primary allocation, if the plan has one
    pub fn primary(&self) -> Option<&AgentAllocation> {
        self.allocations.iter().find(|a| a.is_primary())
    }
}

/// Naive intent-to-agent weight map.
///
/// Deterministic and ordered: the same intent always yields the same pairs in
/// the same order. Substring matching on the intent tag keeps the map robust
/// to new tags a future classifier might emit (any `*business*` intent still
/// weighs the business agent).
pub fn intent_weights(intent: &str) -> Vec<(AgentId, f64)> {
    let mut weights: Vec<(AgentId, f64)> = Vec::new();

    if intent.contains("weather") || intent.contains("environment") {
        push_weight(&mut weights, well_known::ENVIRONMENT, 0.9);
    }
    if intent.contains("government") {
        push_weight(&mut weights, well_known::GOVERNMENT, 0.85);
        push_weight(&mut weights, well_known::BUSINESS, 0.3);
    }
    if intent.contains("transport") {
        push_weight(&mut weights, well_known::TRANSPORT, 0.85);
    }
    if intent.contains("business") {
        push_weight(&mut weights, well_known::BUSINESS, 0.8);
        push_weight(&mut weights, well_known::GOVERNMENT, 0.5);
    }
    if intent.contains("lifestyle") || intent.contains("tourism") {
        push_weight(&mut weights, well_known::LIFESTYLE, 0.8);
    }

    // general_inquiry and anything unrecognized
    if weights.is_empty() {
        push_weight(&mut weights, well_known::LIFESTYLE, 0.5);
        push_weight(&mut weights, well_known::GOVERNMENT, 0.4);
    }

    weights
}

/// Append an entry unless the agent is already weighted; first entry wins.
fn push_weight(weights: &mut Vec<(AgentId, f64)>, id: &str, weight: f64) {
    let id = AgentId::new(id);
    if !weights.iter().any(|(existing, _)| *existing == id) {
        weights.push((id, weight));
    }
}

/// Resolve an allocation plan for a classified query.
///
/// Rule evaluation is first-match-wins over the list order; the rule's
/// numeric priority is never consulted. Errors with
/// [`DomainError::EmptyAllocation`] when the selected (or default) plan has no
/// eligible agents left.
pub fn resolve_allocation(
    query: &ClassifiedQuery,
    registry: &AgentRegistry,
    rules: &[OrchestrationRule],
) -> Result<ResolvedPlan, DomainError> {
    let weights = intent_weights(&query.intent);

    for rule in rules {
        if rule.condition.matches(query, &weights) {
            let allocations = normalize(filter_eligible(rule.allocations.clone(), registry));
            if allocations.is_empty() {
                return Err(DomainError::EmptyAllocation);
            }
            return Ok(ResolvedPlan {
                scenario: Some(rule.scenario.clone()),
                strategy: rule.strategy,
                allocations,
                timeout: rule.timeout,
            });
        }
    }

    let allocations = normalize(default_allocations(&weights, registry));
    if allocations.is_empty() {
        return Err(DomainError::EmptyAllocation);
    }
    Ok(ResolvedPlan {
        scenario: None,
        strategy: ResponseStrategy::default(),
        allocations,
        timeout: DEFAULT_DISPATCH_TIMEOUT,
    })
}

/// Build the default plan from the intent weight map: one allocation per map
/// entry, primary when the weight exceeds the threshold.
fn default_allocations(
    weights: &[(AgentId, f64)],
    registry: &AgentRegistry,
) -> Vec<AgentAllocation> {
    weights
        .iter()
        .filter(|(id, _)| registry.is_eligible(id))
        .map(|(id, weight)| {
            let role = if *weight > PRIMARY_WEIGHT_THRESHOLD {
                AgentRole::Primary
            } else {
                AgentRole::Supporting
            };
            AgentAllocation::new(id.clone(), role, *weight)
        })
        .collect()
}

/// Drop allocations whose agent is unknown or not active.
fn filter_eligible(
    allocations: Vec<AgentAllocation>,
    registry: &AgentRegistry,
) -> Vec<AgentAllocation> {
    allocations
        .into_iter()
        .filter(|a| registry.is_eligible(&a.agent_id))
        .collect()
}

/// Enforce the at-most-one-primary invariant: the first primary in plan order
/// keeps the role, later ones are demoted to supporting.
fn normalize(mut allocations: Vec<AgentAllocation>) -> Vec<AgentAllocation> {
    let mut primary_seen = false;
    for allocation in &mut allocations {
        if allocation.is_primary() {
            if primary_seen {
                allocation.role = AgentRole::Supporting;
            }
            primary_seen = true;
        }
    }
    allocations
}
