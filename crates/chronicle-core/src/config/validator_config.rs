use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Weights of the rule-score composite.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    /// Explicit causal language in the cause span.
    pub cause_connective: f64,
    /// Explicit causal language in the effect span.
    pub effect_connective: f64,
    /// Contribution per shared entity, up to `entity_cap`.
    pub entity_step: f64,
    pub entity_cap: f64,
    /// Similarity inside the core band.
    pub core_band: f64,
    /// Similarity inside the outer band remainder.
    pub outer_band: f64,
    /// Per indicator-lexicon class present in the matching span.
    pub indicator: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            cause_connective: defaults::DEFAULT_WEIGHT_CAUSE_CONNECTIVE,
            effect_connective: defaults::DEFAULT_WEIGHT_EFFECT_CONNECTIVE,
            entity_step: defaults::DEFAULT_WEIGHT_ENTITY_STEP,
            entity_cap: defaults::DEFAULT_WEIGHT_ENTITY_CAP,
            core_band: defaults::DEFAULT_WEIGHT_CORE_BAND,
            outer_band: defaults::DEFAULT_WEIGHT_OUTER_BAND,
            indicator: defaults::DEFAULT_WEIGHT_INDICATOR,
        }
    }
}

/// Rule-based validator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Minimum confidence for acceptance. Externally configurable.
    pub min_confidence: f64,
    /// Closed similarity band; below is unrelated, above is a
    /// near-duplicate paraphrase, both rejected.
    pub similarity_low: f64,
    pub similarity_high: f64,
    /// Inner band granting the full position bonus.
    pub core_band_low: f64,
    pub core_band_high: f64,
    /// Sentences shorter than this are never paired.
    pub min_sentence_len: usize,
    /// Minimum entities shared between the two spans.
    pub min_shared_entities: usize,
    pub weights: ScoreWeights,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            min_confidence: defaults::DEFAULT_MIN_CONFIDENCE,
            similarity_low: defaults::DEFAULT_SIMILARITY_LOW,
            similarity_high: defaults::DEFAULT_SIMILARITY_HIGH,
            core_band_low: defaults::DEFAULT_CORE_BAND_LOW,
            core_band_high: defaults::DEFAULT_CORE_BAND_HIGH,
            min_sentence_len: defaults::DEFAULT_MIN_SENTENCE_LEN,
            min_shared_entities: defaults::DEFAULT_MIN_SHARED_ENTITIES,
            weights: ScoreWeights::default(),
        }
    }
}

impl ValidatorConfig {
    /// Check invariants. Runs before any processing starts; an invalid
    /// threshold or band is fatal.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.min_confidence) {
            return Err(ConfigError::InvalidThreshold {
                value: self.min_confidence,
            });
        }
        let band_ok = 0.0 <= self.similarity_low
            && self.similarity_low < self.similarity_high
            && self.similarity_high <= 1.0;
        if !band_ok {
            return Err(ConfigError::InvalidSimilarityBand {
                low: self.similarity_low,
                high: self.similarity_high,
            });
        }
        Ok(())
    }
}
