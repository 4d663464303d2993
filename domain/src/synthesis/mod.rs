//! Response synthesis - merging per-agent answers into one

pub mod response;
pub mod synthesizer;

pub use response::{AgentResponse, EmotionalTone, FinalResponse};
pub use synthesizer::{fallback_response, synthesize};
