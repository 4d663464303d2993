//! Query classification
//!
//! The [`Classifier`] trait is the seam between the orchestrator and the
//! classification strategy. The baseline [`keyword::KeywordClassifier`] is a
//! deterministic keyword heuristic; a learned model can be swapped in behind
//! the same trait without touching the orchestration flow.

pub mod keyword;

use crate::query::ClassifiedQuery;

/// Strategy for deriving a structured query from raw text
///
/// Implementations must be pure: the same text always yields the same result,
/// and classification never fails. Malformed or empty input degrades to the
/// defaults (`general_inquiry`, low urgency, simple complexity).
pub trait Classifier: Send + Sync {
    /// Classify raw user text into a structured query
    fn classify(&self, text: &str) -> ClassifiedQuery;
}
