//! Configuration loading and raw file structures

pub mod file_config;
pub mod loader;

pub use file_config::{
    FileAgentEntry, FileAllocationEntry, FileBehaviorConfig, FileConditionEntry, FileConfig,
    FileRuleEntry,
};
pub use loader::ConfigLoader;
