//! Infrastructure layer for cityline
//!
//! Adapters behind the application-layer ports: configuration loading, the
//! built-in city knowledge agent service, and the JSONL interaction log sink.

pub mod agents;
pub mod config;
pub mod logging;

pub use agents::CityAgentService;
pub use config::{ConfigLoader, FileConfig};
pub use logging::JsonlInteractionLogger;
