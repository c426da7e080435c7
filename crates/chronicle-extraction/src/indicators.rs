//! Cause/effect indicator-lexicon counting.
//!
//! Action tokens ("bombardment", "advance") mark likely cause spans;
//! consequence tokens ("casualties", "retreated") mark likely effect
//! spans. Counting is case-insensitive substring containment.

use chronicle_core::config::Lexicon;

/// Counts indicator hits for candidate role assignment and scoring.
#[derive(Debug, Clone)]
pub struct IndicatorLexicon {
    cause: Vec<String>,
    effect: Vec<String>,
}

impl IndicatorLexicon {
    pub fn new(lexicon: &Lexicon) -> Self {
        Self {
            cause: lexicon.cause_indicators.iter().map(|t| t.to_lowercase()).collect(),
            effect: lexicon.effect_indicators.iter().map(|t| t.to_lowercase()).collect(),
        }
    }

    /// Number of distinct cause-indicator terms present in the sentence.
    pub fn cause_hits(&self, sentence: &str) -> usize {
        count_hits(&self.cause, sentence)
    }

    /// Number of distinct effect-indicator terms present in the sentence.
    pub fn effect_hits(&self, sentence: &str) -> usize {
        count_hits(&self.effect, sentence)
    }
}

fn count_hits(terms: &[String], sentence: &str) -> usize {
    let lowered = sentence.to_lowercase();
    terms.iter().filter(|t| lowered.contains(t.as_str())).count()
}
