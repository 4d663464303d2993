//! Query types - the structured output of classification

pub mod entities;
pub mod value_objects;

pub use entities::ClassifiedQuery;
pub use value_objects::{Complexity, Urgency};
