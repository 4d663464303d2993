//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// Classification deliberately has no error variant: malformed or empty input
/// degrades to the default intent/urgency/complexity instead of failing.
/// Per-agent dispatch failures are absorbed into the response map, so the only
/// domain failures are allocation and synthesis; both collapse into the system
/// fallback response at the orchestrator boundary.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("no agents could be allocated for this query")]
    EmptyAllocation,

    #[error("no response from the primary agent")]
    NoPrimaryResponse,
}
