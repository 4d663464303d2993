//! Agent catalog - specialized domain responders and their metadata

pub mod entities;
pub mod registry;
pub mod value_objects;

pub use entities::{Agent, AgentStatus};
pub use registry::AgentRegistry;
pub use value_objects::AgentId;

/// Well-known agent ids used by the built-in catalog, the intent weight map,
/// and the default rule set.
pub mod well_known {
    pub const GOVERNMENT: &str = "government-services";
    pub const TRANSPORT: &str = "transport-mobility";
    pub const LIFESTYLE: &str = "lifestyle-tourism";
    pub const ENVIRONMENT: &str = "environment-weather";
    pub const BUSINESS: &str = "business-economy";
}
