//! Specialized agent service port
//!
//! Defines the contract every domain responder (government, transport,
//! lifestyle, environment, business, ...) must satisfy. Implementations live
//! in the infrastructure layer and are resolved through the agent registry by
//! agent id.

use async_trait::async_trait;
use cityline_domain::{Agent, AgentResponse, ClassifiedQuery};
use thiserror::Error;

/// Errors a specialized agent call can fail with.
///
/// The dispatcher treats every variant uniformly: the agent is recorded as
/// absent from the response set and the rest of the batch continues.
#[derive(Error, Debug)]
pub enum AgentServiceError {
    #[error("agent {0} is unavailable")]
    Unavailable(String),

    #[error("agent call timed out")]
    Timeout,

    #[error("malformed agent response: {0}")]
    MalformedResponse(String),

    #[error("agent call failed: {0}")]
    Other(String),
}

/// A specialized domain responder.
///
/// One implementation per domain; the orchestrator never depends on which
/// concrete responder is behind the port.
#[async_trait]
pub trait AgentService: Send + Sync {
    /// Produce this agent's answer for the query.
    ///
    /// May fail with any recoverable error; must not panic.
    async fn process_query(
        &self,
        agent: &Agent,
        query: &ClassifiedQuery,
    ) -> Result<AgentResponse, AgentServiceError>;
}
