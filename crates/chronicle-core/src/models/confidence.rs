use std::fmt;

use serde::{Deserialize, Serialize};

/// Confidence score clamped to [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Confidence(f64);

impl Confidence {
    /// Create a new Confidence, clamping to [0.0, 1.0].
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

impl From<f64> for Confidence {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Confidence> for f64 {
    fn from(c: Confidence) -> Self {
        c.0
    }
}

/// The score bundle attached to an accepted relation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceScore {
    /// Score from the rule-based validator.
    pub rule_score: Confidence,
    /// Entailment probability; present only when the oracle answered
    /// for this pair.
    pub ml_score: Option<Confidence>,
    /// The score acceptance is decided on.
    pub combined_score: Confidence,
}

impl ConfidenceScore {
    /// Rule-only score: combined is the rule score itself.
    pub fn rule_only(rule: Confidence) -> Self {
        Self {
            rule_score: rule,
            ml_score: None,
            combined_score: rule,
        }
    }

    /// Rule plus entailment blend.
    pub fn blended(rule: Confidence, ml: Confidence, combined: Confidence) -> Self {
        Self {
            rule_score: rule,
            ml_score: Some(ml),
            combined_score: combined,
        }
    }
}
