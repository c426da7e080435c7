use serde::{Deserialize, Serialize};

use super::{defaults, EntailmentConfig, ValidatorConfig};
use crate::errors::ConfigError;

/// Which score source drives acceptance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreMode {
    /// Rule-based validation only.
    #[default]
    RuleOnly,
    /// Rule-based validation plus entailment rescoring with the named
    /// oracle model.
    Hybrid { model: String },
}

impl ScoreMode {
    pub fn is_hybrid(&self) -> bool {
        matches!(self, ScoreMode::Hybrid { .. })
    }
}

/// How rule and entailment scores combine into the final confidence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlendPolicy {
    /// Arithmetic mean of rule and entailment scores.
    #[default]
    Average,
    /// The larger of the two scores.
    Max,
}

impl BlendPolicy {
    /// Combine a rule score with an entailment probability.
    pub fn combine(self, rule: f64, ml: f64) -> f64 {
        match self {
            BlendPolicy::Average => (rule + ml) / 2.0,
            BlendPolicy::Max => rule.max(ml),
        }
    }
}

/// Top-level pipeline configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub mode: ScoreMode,
    pub blend: BlendPolicy,
    pub validator: ValidatorConfig,
    pub entailment: EntailmentConfig,
    /// Oracle calls per rescoring batch.
    pub rescore_batch_size: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            mode: ScoreMode::default(),
            blend: BlendPolicy::default(),
            validator: ValidatorConfig::default(),
            entailment: EntailmentConfig::default(),
            rescore_batch_size: defaults::DEFAULT_RESCORE_BATCH_SIZE,
        }
    }
}

impl PipelineConfig {
    /// Default configuration with a different acceptance threshold.
    pub fn with_min_confidence(min_confidence: f64) -> Self {
        let mut config = Self::default();
        config.validator.min_confidence = min_confidence;
        config
    }

    /// Check all invariants. Fatal before any processing starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validator.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_blend_is_the_mean() {
        assert!((BlendPolicy::Average.combine(0.9, 0.5) - 0.7).abs() < 1e-12);
    }

    #[test]
    fn max_blend_keeps_the_larger() {
        assert_eq!(BlendPolicy::Max.combine(0.9, 0.5), 0.9);
        assert_eq!(BlendPolicy::Max.combine(0.2, 0.5), 0.5);
    }

    #[test]
    fn score_mode_round_trips_through_json() {
        let mode = ScoreMode::Hybrid {
            model: "distilbart-mnli".to_string(),
        };
        let json = serde_json::to_string(&mode).unwrap();
        assert_eq!(serde_json::from_str::<ScoreMode>(&json).unwrap(), mode);
    }

    #[test]
    fn default_mode_is_rule_only() {
        assert!(!PipelineConfig::default().mode.is_hybrid());
    }
}
