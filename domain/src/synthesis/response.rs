//! Response value objects

use crate::agent::value_objects::AgentId;
use serde::{Deserialize, Serialize};

/// Tone tag attached to an answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EmotionalTone {
    #[default]
    Neutral,
    Informative,
    Empathetic,
    Urgent,
    Welcoming,
}

impl std::fmt::Display for EmotionalTone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            EmotionalTone::Neutral => "neutral",
            EmotionalTone::Informative => "informative",
            EmotionalTone::Empathetic => "empathetic",
            EmotionalTone::Urgent => "urgent",
            EmotionalTone::Welcoming => "welcoming",
        };
        write!(f, "{}", s)
    }
}

/// One agent's answer for one query.
///
/// Produced by the external collaborator behind the `AgentService` port and
/// consumed immediately by the synthesizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentResponse {
    /// Answer text; empty when the agent was skipped as irrelevant
    pub content: String,
    /// Self-reported confidence in [0, 1]
    pub confidence: f64,
    /// Tags naming the data sources behind the answer
    #[serde(default)]
    pub data_sources: Vec<String>,
    /// Ids of agents this agent consulted
    #[serde(default)]
    pub collaborating_agents: Vec<String>,
    /// Follow-up questions the agent suggests asking the user
    #[serde(default)]
    pub follow_up_questions: Vec<String>,
    /// Tone tag
    #[serde(default)]
    pub tone: EmotionalTone,
}

impl AgentResponse {
    /// Create a response with content and confidence (clamped to [0, 1])
    pub fn new(content: impl Into<String>, confidence: f64) -> Self {
        Self {
            content: content.into(),
            confidence: confidence.clamp(0.0, 1.0),
            data_sources: Vec::new(),
            collaborating_agents: Vec::new(),
            follow_up_questions: Vec::new(),
            tone: EmotionalTone::default(),
        }
    }

    /// Empty zero-confidence response recorded for agents skipped by the
    /// relevance pre-check
    pub fn empty() -> Self {
        Self::new("", 0.0)
    }

    pub fn with_data_sources(mut self, sources: Vec<String>) -> Self {
        self.data_sources = sources;
        self
    }

    pub fn with_collaborators(mut self, collaborators: Vec<String>) -> Self {
        self.collaborating_agents = collaborators;
        self
    }

    pub fn with_follow_ups(mut self, questions: Vec<String>) -> Self {
        self.follow_up_questions = questions;
        self
    }

    pub fn with_tone(mut self, tone: EmotionalTone) -> Self {
        self.tone = tone;
        self
    }

    /// Whether this response carries no content
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// The synthesized answer returned to the caller.
///
/// Content leads with the primary agent's answer; other agents' distinct
/// answers follow in allocation order. Data sources and collaborators are the
/// sorted de-duplicated union across all responses; follow-ups and tone come
/// only from the primary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalResponse {
    /// Merged answer text
    pub content: String,
    /// Weighted aggregate confidence in [0, 1]
    pub confidence: f64,
    /// Sorted union of data-source tags
    pub data_sources: Vec<String>,
    /// Sorted union of collaborating agent ids
    pub collaborating_agents: Vec<String>,
    /// Follow-up questions from the primary response
    pub follow_up_questions: Vec<String>,
    /// Tone of the primary response
    pub tone: EmotionalTone,
    /// Agents that contributed a response, in allocation order
    pub responders: Vec<AgentId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_builder() {
        let r = AgentResponse::new("Metro runs 05:00 to midnight.", 0.85)
            .with_data_sources(vec!["transit_schedule".into()])
            .with_tone(EmotionalTone::Informative);
        assert!(!r.is_empty());
        assert_eq!(r.tone, EmotionalTone::Informative);
    }

    #[test]
    fn test_empty_response() {
        let r = AgentResponse::empty();
        assert!(r.is_empty());
        assert_eq!(r.confidence, 0.0);
    }

    #[test]
    fn test_confidence_clamped() {
        assert_eq!(AgentResponse::new("x", 2.0).confidence, 1.0);
        assert_eq!(AgentResponse::new("x", -1.0).confidence, 0.0);
    }

    #[test]
    fn test_tone_serde_tag() {
        let json = serde_json::to_string(&EmotionalTone::Empathetic).unwrap();
        assert_eq!(json, "\"empathetic\"");
    }
}
