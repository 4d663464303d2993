//! Keyword-based query classifier
//!
//! Intent and urgency are resolved by ordered first-match scans over keyword
//! tables; complexity comes from counting distinct domain keywords and the
//! token count. Tie-break behavior is the table order itself, which the tests
//! below pin.

use super::Classifier;
use crate::query::{ClassifiedQuery, Complexity, Urgency};

/// Ordered (intent tag, keyword set) rules. First rule with any keyword
/// present in the lower-cased text wins.
const INTENT_RULES: &[(&str, &[&str])] = &[
    (
        "weather_inquiry",
        &["weather", "temperature", "forecast", "rain", "humidity", "sandstorm"],
    ),
    (
        "government_services",
        &["visa", "emirates id", "passport", "license", "permit", "fine", "government"],
    ),
    (
        "transport_inquiry",
        &["metro", "bus", "taxi", "tram", "parking", "traffic", "road"],
    ),
    (
        "business_inquiry",
        &["business", "company", "startup", "trade", "investment", "free zone"],
    ),
    (
        "lifestyle_inquiry",
        &["restaurant", "event", "shopping", "beach", "hotel", "entertainment"],
    ),
];

/// Urgency buckets scanned in strict descending severity order.
const CRITICAL_KEYWORDS: &[&str] = &["emergency", "urgent", "immediately", "accident", "danger"];
const HIGH_KEYWORDS: &[&str] = &["asap", "right away", "deadline", "expiring", "quickly"];
const MEDIUM_KEYWORDS: &[&str] = &["soon", "this week", "tomorrow"];

/// Domain keywords used for the complexity estimate. Distinct matches are
/// counted, so repeating one keyword does not raise complexity.
const DOMAIN_KEYWORDS: &[&str] = &[
    "weather",
    "temperature",
    "forecast",
    "visa",
    "passport",
    "license",
    "permit",
    "government",
    "metro",
    "bus",
    "taxi",
    "traffic",
    "parking",
    "business",
    "company",
    "investment",
    "restaurant",
    "event",
    "beach",
    "shopping",
    "hotel",
];

/// Deterministic keyword classifier - the baseline classification strategy
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordClassifier;

impl KeywordClassifier {
    pub fn new() -> Self {
        Self
    }

    fn detect_intent(text: &str) -> &'static str {
        for (intent, keywords) in INTENT_RULES {
            if keywords.iter().any(|k| text.contains(k)) {
                return intent;
            }
        }
        "general_inquiry"
    }

    fn detect_urgency(text: &str) -> Urgency {
        if CRITICAL_KEYWORDS.iter().any(|k| text.contains(k)) {
            Urgency::Critical
        } else if HIGH_KEYWORDS.iter().any(|k| text.contains(k)) {
            Urgency::High
        } else if MEDIUM_KEYWORDS.iter().any(|k| text.contains(k)) {
            Urgency::Medium
        } else {
            Urgency::Low
        }
    }

    fn detect_complexity(text: &str, token_count: usize) -> Complexity {
        let domain_matches = DOMAIN_KEYWORDS
            .iter()
            .filter(|k| text.contains(*k))
            .count();

        if domain_matches > 2 {
            Complexity::MultiDomain
        } else if domain_matches > 1 || token_count > 15 {
            Complexity::Complex
        } else if token_count > 8 {
            Complexity::Moderate
        } else {
            Complexity::Simple
        }
    }
}

impl Classifier for KeywordClassifier {
    fn classify(&self, text: &str) -> ClassifiedQuery {
        let lower = text.to_lowercase();
        let token_count = lower.split_whitespace().count();

        ClassifiedQuery::new(
            text,
            Self::detect_intent(&lower),
            Self::detect_urgency(&lower),
            Self::detect_complexity(&lower, token_count),
        )
    }
}
