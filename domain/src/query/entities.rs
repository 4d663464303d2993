//! Classified query entity

use super::value_objects::{Complexity, Urgency};
use serde::{Deserialize, Serialize};

/// A classified query - the structured form of one user request
///
/// Created once per incoming request by the classifier, never mutated, and
/// discarded when the request completes. The intent is an open string tag
/// (for example `weather_inquiry` or `general_inquiry`) rather than a closed
/// enum, so configuration and future classifiers can introduce new intents
/// without a domain change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedQuery {
    /// The original, unmodified user text
    pub text: String,
    /// Primary intent tag
    pub intent: String,
    /// How quickly the query needs an answer
    pub urgency: Urgency,
    /// How much cross-domain knowledge the query requires
    pub complexity: Complexity,
}

impl ClassifiedQuery {
    /// Create a classified query
    pub fn new(
        text: impl Into<String>,
        intent: impl Into<String>,
        urgency: Urgency,
        complexity: Complexity,
    ) -> Self {
        Self {
            text: text.into(),
            intent: intent.into(),
            urgency,
            complexity,
        }
    }

    /// Lower-cased view of the query text, used for keyword matching
    pub fn text_lower(&self) -> String {
        self.text.to_lowercase()
    }
}
