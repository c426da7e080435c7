//! Rule-based validation: the core accept/reject decision for one
//! candidate pair.
//!
//! All conditions are mandatory and checked in order: cross-file origin,
//! span length, explicit causal language on at least one side,
//! entity-overlap grounding, the similarity confidence band, and finally
//! the composite score threshold. Rejection is the expected majority
//! outcome of the combinatorial scan and is plain control flow, never an
//! error.

use std::collections::BTreeSet;

use chronicle_core::config::ValidatorConfig;
use chronicle_core::models::{Confidence, Entity};
use chronicle_extraction::TfIdfModel;

use crate::scanner::SentenceCandidate;

/// Why a candidate pair was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    SameFile,
    TooShort,
    NoCausalLanguage,
    InsufficientOverlap,
    BelowSimilarityBand,
    AboveSimilarityBand,
    BelowThreshold,
}

/// Per-reason rejection counters, aggregated across scan workers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RejectionCounts {
    pub same_file: usize,
    pub too_short: usize,
    pub no_causal_language: usize,
    pub insufficient_overlap: usize,
    pub below_similarity_band: usize,
    pub above_similarity_band: usize,
    pub below_threshold: usize,
}

impl RejectionCounts {
    pub fn record(&mut self, reason: Rejection) {
        match reason {
            Rejection::SameFile => self.same_file += 1,
            Rejection::TooShort => self.too_short += 1,
            Rejection::NoCausalLanguage => self.no_causal_language += 1,
            Rejection::InsufficientOverlap => self.insufficient_overlap += 1,
            Rejection::BelowSimilarityBand => self.below_similarity_band += 1,
            Rejection::AboveSimilarityBand => self.above_similarity_band += 1,
            Rejection::BelowThreshold => self.below_threshold += 1,
        }
    }

    pub fn merge(&mut self, other: Self) {
        self.same_file += other.same_file;
        self.too_short += other.too_short;
        self.no_causal_language += other.no_causal_language;
        self.insufficient_overlap += other.insufficient_overlap;
        self.below_similarity_band += other.below_similarity_band;
        self.above_similarity_band += other.above_similarity_band;
        self.below_threshold += other.below_threshold;
    }

    pub fn total(&self) -> usize {
        self.same_file
            + self.too_short
            + self.no_causal_language
            + self.insufficient_overlap
            + self.below_similarity_band
            + self.above_similarity_band
            + self.below_threshold
    }
}

/// Validation outcome for one candidate pair.
#[derive(Debug, Clone)]
pub enum Verdict {
    Accepted {
        rule_score: Confidence,
        shared_entities: BTreeSet<Entity>,
    },
    Rejected(Rejection),
}

/// The rule-based validator.
///
/// Holds a read-only reference to the fitted similarity model; a pair's
/// verdict is a pure function of its two sentences and that model, so
/// one validator is safely shared across all scan workers.
pub struct RuleValidator<'a> {
    config: ValidatorConfig,
    model: &'a TfIdfModel,
}

impl<'a> RuleValidator<'a> {
    pub fn new(config: ValidatorConfig, model: &'a TfIdfModel) -> Self {
        Self { config, model }
    }

    /// Decide one candidate pair.
    pub fn validate(
        &self,
        cause: &SentenceCandidate<'_>,
        effect: &SentenceCandidate<'_>,
    ) -> Verdict {
        // 1. The cross-file invariant, never relaxed.
        if cause.sentence.doc_id == effect.sentence.doc_id {
            return Verdict::Rejected(Rejection::SameFile);
        }

        // 2. Fragments below the length floor carry too little context.
        if cause.sentence.text.len() < self.config.min_sentence_len
            || effect.sentence.text.len() < self.config.min_sentence_len
        {
            return Verdict::Rejected(Rejection::TooShort);
        }

        // 3. At least one side must carry explicit causal language.
        if !cause.has_causal() && !effect.has_causal() {
            return Verdict::Rejected(Rejection::NoCausalLanguage);
        }

        // 4. Entity overlap grounds the pair in shared context.
        let shared_entities: BTreeSet<Entity> = cause
            .entities
            .intersection(&effect.entities)
            .cloned()
            .collect();
        if shared_entities.len() < self.config.min_shared_entities {
            return Verdict::Rejected(Rejection::InsufficientOverlap);
        }

        // 5. Similarity band: below is unrelated, above is a
        //    near-duplicate paraphrase.
        let similarity = self
            .model
            .similarity(cause.sentence.text, effect.sentence.text);
        if similarity < self.config.similarity_low {
            return Verdict::Rejected(Rejection::BelowSimilarityBand);
        }
        if similarity > self.config.similarity_high {
            return Verdict::Rejected(Rejection::AboveSimilarityBand);
        }

        // 6. Composite score against the acceptance threshold.
        let score = self.score(cause, effect, shared_entities.len(), similarity);
        if score < self.config.min_confidence {
            return Verdict::Rejected(Rejection::BelowThreshold);
        }

        Verdict::Accepted {
            rule_score: Confidence::new(score),
            shared_entities,
        }
    }

    /// Additive composite: connective strength, entity overlap, position
    /// in the similarity band, indicator bonuses. Capped at 1.0.
    fn score(
        &self,
        cause: &SentenceCandidate<'_>,
        effect: &SentenceCandidate<'_>,
        shared_count: usize,
        similarity: f64,
    ) -> f64 {
        let w = &self.config.weights;
        let mut score = 0.0;

        if cause.has_causal() {
            score += w.cause_connective;
        }
        if effect.has_causal() {
            score += w.effect_connective;
        }

        score += (w.entity_step * shared_count as f64).min(w.entity_cap);

        if (self.config.core_band_low..=self.config.core_band_high).contains(&similarity) {
            score += w.core_band;
        } else {
            score += w.outer_band;
        }

        if cause.cause_hits > 0 {
            score += w.indicator;
        }
        if effect.effect_hits > 0 {
            score += w.indicator;
        }

        score.min(1.0)
    }
}
