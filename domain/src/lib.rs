//! Domain layer for cityline
//!
//! This crate contains the core business logic for the multi-agent query
//! orchestration engine. It has no dependencies on infrastructure or
//! presentation concerns, and no async code: classification, allocation
//! resolution, and synthesis are all pure computations.
//!
//! # Core Concepts
//!
//! ## Classification
//!
//! Free-text input is turned into a [`ClassifiedQuery`] (intent, urgency,
//! complexity) by a [`Classifier`]. The baseline [`KeywordClassifier`] is an
//! ordered first-match keyword heuristic; the trait exists so a learned
//! classifier can replace it without touching the orchestration flow.
//!
//! ## Allocation
//!
//! An ordered list of [`OrchestrationRule`]s maps query traits to a plan of
//! [`AgentAllocation`]s (who answers, in what role, with what weight). When no
//! rule matches, a default plan is derived from a naive intent-to-agent
//! weight map.
//!
//! ## Synthesis
//!
//! Per-agent [`AgentResponse`]s are merged into one [`FinalResponse`] with a
//! weighted aggregate confidence. The primary agent's answer leads; other
//! answers are appended in allocation order.

pub mod agent;
pub mod classify;
pub mod core;
pub mod query;
pub mod rules;
pub mod synthesis;

// Re-export commonly used types
pub use agent::{
    entities::{Agent, AgentStatus},
    registry::AgentRegistry,
    value_objects::AgentId,
    well_known,
};
pub use classify::{keyword::KeywordClassifier, Classifier};
pub use core::error::DomainError;
pub use query::{ClassifiedQuery, Complexity, Urgency};
pub use rules::{
    allocation::{AgentAllocation, AgentRole},
    resolver::{intent_weights, resolve_allocation, ResolvedPlan, PRIMARY_WEIGHT_THRESHOLD},
    rule::{IntentWeightThreshold, OrchestrationRule, ResponseStrategy, RuleCondition},
    DEFAULT_DISPATCH_TIMEOUT,
};
pub use synthesis::{
    response::{AgentResponse, EmotionalTone, FinalResponse},
    synthesizer::{fallback_response, synthesize, FALLBACK_CONTENT, FALLBACK_DATA_SOURCE},
};
