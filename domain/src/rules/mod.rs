//! Orchestration rules and allocation resolution

pub mod allocation;
pub mod resolver;
pub mod rule;

pub use allocation::{AgentAllocation, AgentRole};
pub use resolver::{resolve_allocation, ResolvedPlan};
pub use rule::{OrchestrationRule, ResponseStrategy, RuleCondition};

use std::time::Duration;

/// Dispatch time budget applied when no rule supplies one (default and
/// fallback allocations).
pub const DEFAULT_DISPATCH_TIMEOUT: Duration = Duration::from_secs(5);
