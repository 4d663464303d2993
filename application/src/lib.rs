//! Application layer for cityline
//!
//! This crate contains the orchestration use cases and the ports external
//! collaborators implement. It depends only on the domain layer.
//!
//! The central type is [`QueryOrchestrator`]: classify the text, resolve an
//! allocation plan, dispatch the allocated agents concurrently, synthesize
//! their answers, and fall back to a fixed response when any of that fails.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    agent_service::{AgentService, AgentServiceError},
    interaction_log::{InteractionLogger, InteractionRecord, NoInteractionLogger},
};
pub use use_cases::{
    dispatch::dispatch,
    process_query::{OrchestratorStatus, QueryOrchestrator},
};
