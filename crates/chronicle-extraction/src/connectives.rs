//! Causal-connective detection.
//!
//! Two fixed pattern lists drive matching: forward connectives split the
//! sentence into cause (left) and effect (right), reverse connectives
//! flip the assignment. Matching is case-insensitive and
//! first-match-per-pattern; a sentence carrying several distinct
//! connectives yields several matches.

use regex::{Regex, RegexBuilder};

use chronicle_core::config::Lexicon;
use chronicle_core::errors::ConfigError;
use chronicle_core::models::{CausalMatch, Direction};

/// Compiled connective patterns.
pub struct ConnectiveMatcher {
    forward: Vec<Regex>,
    reverse: Vec<Regex>,
}

impl ConnectiveMatcher {
    /// Compile the lexicon's connective patterns. Patterns come from
    /// configuration, so a malformed one is a config error.
    pub fn new(lexicon: &Lexicon) -> Result<Self, ConfigError> {
        Ok(Self {
            forward: compile_all(&lexicon.forward_connectives)?,
            reverse: compile_all(&lexicon.reverse_connectives)?,
        })
    }

    /// All connective matches in a sentence, at most one per pattern.
    pub fn detect(&self, sentence: &str) -> Vec<CausalMatch> {
        let mut matches = Vec::new();
        for (direction, patterns) in [
            (Direction::Forward, &self.forward),
            (Direction::Reverse, &self.reverse),
        ] {
            for pattern in patterns {
                let Some(m) = pattern.find(sentence) else {
                    continue;
                };
                let left = sentence[..m.start()].trim();
                let right = sentence[m.end()..].trim();
                let (cause_span, effect_span) = match direction {
                    Direction::Forward => (left, right),
                    Direction::Reverse => (right, left),
                };
                matches.push(CausalMatch {
                    cause_span: cause_span.to_string(),
                    effect_span: effect_span.to_string(),
                    direction,
                    connective: m.as_str().to_lowercase(),
                });
            }
        }
        matches
    }

    /// First connective match, used to flag candidate sentences.
    /// Forward patterns are probed before reverse ones.
    pub fn probe(&self, sentence: &str) -> Option<(Direction, String)> {
        for (direction, patterns) in [
            (Direction::Forward, &self.forward),
            (Direction::Reverse, &self.reverse),
        ] {
            for pattern in patterns {
                if let Some(m) = pattern.find(sentence) {
                    return Some((direction, m.as_str().to_lowercase()));
                }
            }
        }
        None
    }
}

fn compile_all(patterns: &[String]) -> Result<Vec<Regex>, ConfigError> {
    patterns
        .iter()
        .map(|pattern| {
            RegexBuilder::new(pattern)
                .case_insensitive(true)
                .build()
                .map_err(|e| ConfigError::InvalidPattern {
                    pattern: pattern.clone(),
                    reason: e.to_string(),
                })
        })
        .collect()
}
