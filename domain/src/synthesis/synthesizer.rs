//! Response synthesizer
//!
//! Merges the per-agent response map into one [`FinalResponse`]. Output text
//! ordering follows the allocation list, never arrival order, so the result
//! is reproducible no matter which agent answered first.

use super::response::{AgentResponse, EmotionalTone, FinalResponse};
use crate::agent::value_objects::AgentId;
use crate::core::error::DomainError;
use crate::rules::allocation::AgentAllocation;
use std::collections::{BTreeSet, HashMap};

/// Data-source tag carried by the system fallback response.
pub const FALLBACK_DATA_SOURCE: &str = "fallback_system";

/// Fixed fallback answer used when orchestration cannot complete normally.
pub const FALLBACK_CONTENT: &str = "I'm sorry, I couldn't reach the right city services \
to answer that right now. Please try again in a moment, or rephrase your question.";

/// The system fallback response: a fixed, always-valid answer.
///
/// Returned whenever allocation or synthesis fails; the caller never sees an
/// error, only this response.
pub fn fallback_response() -> FinalResponse {
    FinalResponse {
        content: FALLBACK_CONTENT.to_string(),
        confidence: 0.5,
        data_sources: vec![FALLBACK_DATA_SOURCE.to_string()],
        collaborating_agents: Vec::new(),
        follow_up_questions: Vec::new(),
        tone: EmotionalTone::Empathetic,
        responders: Vec::new(),
    }
}

/// Merge per-agent responses into one final answer.
///
/// Fails with [`DomainError::NoPrimaryResponse`] when the allocation list has
/// no primary or the primary agent produced no response; the caller converts
/// that into the fallback response.
pub fn synthesize(
    responses: &HashMap<AgentId, AgentResponse>,
    allocations: &[AgentAllocation],
) -> Result<FinalResponse, DomainError> {
    // First primary in allocation order; plans built by the resolver carry at
    // most one.
    let primary_allocation = allocations
        .iter()
        .find(|a| a.is_primary())
        .ok_or(DomainError::NoPrimaryResponse)?;
    let primary = responses
        .get(&primary_allocation.agent_id)
        .ok_or(DomainError::NoPrimaryResponse)?;

    let mut content = primary.content.clone();
    let additions: Vec<&str> = allocations
        .iter()
        .filter(|a| a.agent_id != primary_allocation.agent_id)
        .filter_map(|a| responses.get(&a.agent_id))
        .filter(|r| !r.content.is_empty() && r.content != primary.content)
        .map(|r| r.content.as_str())
        .collect();

    if !additions.is_empty() {
        content.push_str("\n\nAdditional information:");
        for addition in additions {
            content.push_str("\n- ");
            content.push_str(addition);
        }
    }

    let confidence = aggregate_confidence(responses, allocations);

    let mut sources = BTreeSet::new();
    let mut collaborators = BTreeSet::new();
    let mut responders = Vec::new();
    for allocation in allocations {
        if let Some(response) = responses.get(&allocation.agent_id) {
            sources.extend(response.data_sources.iter().cloned());
            collaborators.extend(response.collaborating_agents.iter().cloned());
            responders.push(allocation.agent_id.clone());
        }
    }

    Ok(FinalResponse {
        content,
        confidence,
        data_sources: sources.into_iter().collect(),
        collaborating_agents: collaborators.into_iter().collect(),
        follow_up_questions: primary.follow_up_questions.clone(),
        tone: primary.tone,
        responders,
    })
}

/// Weighted average of responder confidences.
///
/// Only agents that produced a response contribute; their allocation weights
/// form the denominator. A zero weight sum falls back to the unweighted mean
/// of the responders' raw confidences, which for a single zero-weight
/// responder is exactly that responder's confidence.
fn aggregate_confidence(
    responses: &HashMap<AgentId, AgentResponse>,
    allocations: &[AgentAllocation],
) -> f64 {
    let mut weighted_sum = 0.0;
    let mut weight_sum = 0.0;
    let mut raw = Vec::new();

    for allocation in allocations {
        if let Some(response) = responses.get(&allocation.agent_id) {
            weighted_sum += response.confidence * allocation.weight;
            weight_sum += allocation.weight;
            raw.push(response.confidence);
        }
    }

    if raw.is_empty() {
        return 0.0;
    }

    let confidence = if weight_sum > f64::EPSILON {
        weighted_sum / weight_sum
    } else {
        raw.iter().sum::<f64>() / raw.len() as f64
    };
    confidence.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::allocation::AgentRole;

    fn id(s: &str) -> AgentId {
        AgentId::new(s)
    }

    fn respond(pairs: Vec<(&str, AgentResponse)>) -> HashMap<AgentId, AgentResponse> {
        pairs.into_iter().map(|(k, v)| (id(k), v)).collect()
    }

    #[test]
    fn test_primary_content_leads() {
        let allocations = vec![
            AgentAllocation::primary("gov", 0.6),
            AgentAllocation::supporting("transport", 0.4),
        ];
        let responses = respond(vec![
            ("gov", AgentResponse::new("Renew online.", 0.9)),
            ("transport", AgentResponse::new("Metro nearby.", 0.8)),
        ]);

        let result = synthesize(&responses, &allocations).unwrap();
        assert!(result.content.starts_with("Renew online."));
        assert!(result.content.contains("Additional information:"));
        assert!(result.content.contains("Metro nearby."));
    }

    #[test]
    fn test_missing_primary_is_synthesis_error() {
        let allocations = vec![
            AgentAllocation::primary("gov", 0.6),
            AgentAllocation::supporting("transport", 0.4),
        ];
        let responses = respond(vec![("transport", AgentResponse::new("Metro nearby.", 0.8))]);

        let err = synthesize(&responses, &allocations).unwrap_err();
        assert!(matches!(err, DomainError::NoPrimaryResponse));
    }

    #[test]
    fn test_no_primary_allocation_is_synthesis_error() {
        let allocations = vec![AgentAllocation::supporting("transport", 0.4)];
        let responses = respond(vec![("transport", AgentResponse::new("Metro nearby.", 0.8))]);
        assert!(synthesize(&responses, &allocations).is_err());
    }

    #[test]
    fn test_additions_follow_allocation_order() {
        // The allocation list says transport before lifestyle; output order
        // must match even though the map iterates arbitrarily.
        let allocations = vec![
            AgentAllocation::primary("gov", 0.5),
            AgentAllocation::supporting("transport", 0.3),
            AgentAllocation::supporting("lifestyle", 0.2),
        ];
        let responses = respond(vec![
            ("lifestyle", AgentResponse::new("Beaches are open.", 0.7)),
            ("gov", AgentResponse::new("Permit approved.", 0.9)),
            ("transport", AgentResponse::new("Take the tram.", 0.8)),
        ]);

        let result = synthesize(&responses, &allocations).unwrap();
        let transport_pos = result.content.find("Take the tram.").unwrap();
        let lifestyle_pos = result.content.find("Beaches are open.").unwrap();
        assert!(transport_pos < lifestyle_pos);
    }

    #[test]
    fn test_empty_and_duplicate_content_skipped() {
        let allocations = vec![
            AgentAllocation::primary("gov", 0.5),
            AgentAllocation::supporting("skipped", 0.3),
            AgentAllocation::supporting("echo", 0.2),
        ];
        let responses = respond(vec![
            ("gov", AgentResponse::new("Permit approved.", 0.9)),
            ("skipped", AgentResponse::empty()),
            ("echo", AgentResponse::new("Permit approved.", 0.6)),
        ]);

        let result = synthesize(&responses, &allocations).unwrap();
        assert!(!result.content.contains("Additional information:"));
    }

    #[test]
    fn test_weighted_confidence() {
        let allocations = vec![
            AgentAllocation::primary("a", 0.6),
            AgentAllocation::supporting("b", 0.2),
        ];
        let responses = respond(vec![
            ("a", AgentResponse::new("A", 0.9)),
            ("b", AgentResponse::new("B", 0.5)),
        ]);

        let result = synthesize(&responses, &allocations).unwrap();
        let expected = (0.9 * 0.6 + 0.5 * 0.2) / 0.8;
        assert!((result.confidence - expected).abs() < 1e-9);
    }

    #[test]
    fn test_confidence_ignores_absent_agents() {
        let allocations = vec![
            AgentAllocation::primary("a", 0.5),
            AgentAllocation::supporting("gone", 0.5),
        ];
        let responses = respond(vec![("a", AgentResponse::new("A", 0.8))]);

        let result = synthesize(&responses, &allocations).unwrap();
        assert!((result.confidence - 0.8).abs() < 1e-9);
        assert_eq!(result.responders, vec![id("a")]);
    }

    #[test]
    fn test_zero_weight_sole_responder_keeps_raw_confidence() {
        let allocations = vec![AgentAllocation::new("a", AgentRole::Primary, 0.0)];
        let responses = respond(vec![("a", AgentResponse::new("A", 0.65))]);

        let result = synthesize(&responses, &allocations).unwrap();
        assert!((result.confidence - 0.65).abs() < 1e-9);
    }

    #[test]
    fn test_confidence_stays_in_unit_interval() {
        let allocations = vec![
            AgentAllocation::primary("a", 1.0),
            AgentAllocation::supporting("b", 1.0),
        ];
        let responses = respond(vec![
            ("a", AgentResponse::new("A", 1.0)),
            ("b", AgentResponse::new("B", 1.0)),
        ]);
        let result = synthesize(&responses, &allocations).unwrap();
        assert!(result.confidence >= 0.0 && result.confidence <= 1.0);
    }

    #[test]
    fn test_sources_and_collaborators_unioned_sorted() {
        let allocations = vec![
            AgentAllocation::primary("a", 0.5),
            AgentAllocation::supporting("b", 0.5),
        ];
        let responses = respond(vec![
            (
                "a",
                AgentResponse::new("A", 0.8)
                    .with_data_sources(vec!["weather_api".into(), "almanac".into()])
                    .with_collaborators(vec!["b".into()]),
            ),
            (
                "b",
                AgentResponse::new("B", 0.7)
                    .with_data_sources(vec!["almanac".into(), "transit_schedule".into()]),
            ),
        ]);

        let result = synthesize(&responses, &allocations).unwrap();
        assert_eq!(
            result.data_sources,
            vec!["almanac", "transit_schedule", "weather_api"]
        );
        assert_eq!(result.collaborating_agents, vec!["b"]);
    }

    #[test]
    fn test_follow_ups_and_tone_from_primary_only() {
        let allocations = vec![
            AgentAllocation::primary("a", 0.5),
            AgentAllocation::supporting("b", 0.5),
        ];
        let responses = respond(vec![
            (
                "a",
                AgentResponse::new("A", 0.8)
                    .with_follow_ups(vec!["Need the exact office address?".into()])
                    .with_tone(EmotionalTone::Informative),
            ),
            (
                "b",
                AgentResponse::new("B", 0.7)
                    .with_follow_ups(vec!["Want taxi fares too?".into()])
                    .with_tone(EmotionalTone::Welcoming),
            ),
        ]);

        let result = synthesize(&responses, &allocations).unwrap();
        assert_eq!(
            result.follow_up_questions,
            vec!["Need the exact office address?"]
        );
        assert_eq!(result.tone, EmotionalTone::Informative);
    }

    #[test]
    fn test_fallback_response_shape() {
        let fallback = fallback_response();
        assert_eq!(fallback.content, FALLBACK_CONTENT);
        assert!((fallback.confidence - 0.5).abs() < f64::EPSILON);
        assert_eq!(fallback.data_sources, vec![FALLBACK_DATA_SOURCE]);
        assert_eq!(fallback.tone, EmotionalTone::Empathetic);
        assert!(fallback.responders.is_empty());
    }
}
