//! Candidate indexing and the pruned cross-document pair scan.
//!
//! Indexing keeps only sentences that could participate in a causal
//! pair: long enough, and carrying causal language or at least one
//! indicator hit. The scan prunes same-document pairs and disjoint
//! entity sets before any scoring work, then fans out over cause
//! candidates with read-only access to the fitted model.

use std::collections::HashSet;

use rayon::prelude::*;
use tracing::{debug, info};

use chronicle_core::models::{
    CandidatePair, CausalRelation, ConfidenceScore, Direction, Entity, SentenceRef,
};
use chronicle_extraction::{ConnectiveMatcher, EntityExtractor, IndicatorLexicon};

use crate::validator::{RejectionCounts, RuleValidator, Verdict};

/// Per-sentence features computed once before the scan.
#[derive(Debug, Clone)]
pub struct SentenceCandidate<'a> {
    pub sentence: SentenceRef<'a>,
    pub entities: HashSet<Entity>,
    /// Direction of the first connective match, if any.
    pub direction: Option<Direction>,
    pub cause_hits: usize,
    pub effect_hits: usize,
}

impl SentenceCandidate<'_> {
    pub fn has_causal(&self) -> bool {
        self.direction.is_some()
    }
}

/// Index of cause-role and effect-role candidates over the corpus.
///
/// A sentence may play both roles: an explicitly causal sentence is
/// always a potential effect partner, and its indicator balance or a
/// forward connective also makes it a potential cause.
pub struct CandidateIndex<'a> {
    pub sentences: Vec<SentenceCandidate<'a>>,
    /// Indices into `sentences` for each role.
    pub causes: Vec<usize>,
    pub effects: Vec<usize>,
}

impl<'a> CandidateIndex<'a> {
    pub fn build(
        sentences: &[SentenceRef<'a>],
        entities: &EntityExtractor,
        connectives: &ConnectiveMatcher,
        indicators: &IndicatorLexicon,
        min_sentence_len: usize,
    ) -> Self {
        let mut kept = Vec::new();
        for &sentence in sentences {
            if sentence.text.len() < min_sentence_len {
                continue;
            }
            let direction = connectives.probe(sentence.text).map(|(d, _)| d);
            let cause_hits = indicators.cause_hits(sentence.text);
            let effect_hits = indicators.effect_hits(sentence.text);
            if direction.is_none() && cause_hits == 0 && effect_hits == 0 {
                continue;
            }
            kept.push(SentenceCandidate {
                sentence,
                entities: entities.extract(sentence.text),
                direction,
                cause_hits,
                effect_hits,
            });
        }

        let mut causes = Vec::new();
        let mut effects = Vec::new();
        for (i, candidate) in kept.iter().enumerate() {
            if candidate.cause_hits > candidate.effect_hits
                || candidate.direction == Some(Direction::Forward)
            {
                causes.push(i);
            }
            if candidate.effect_hits > candidate.cause_hits || candidate.direction.is_some() {
                effects.push(i);
            }
        }

        debug!(
            indexed = kept.len(),
            causes = causes.len(),
            effects = effects.len(),
            "candidate index built"
        );
        Self {
            sentences: kept,
            causes,
            effects,
        }
    }
}

/// Aggregate scan statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Pairs that reached the validator.
    pub pairs_considered: usize,
    /// Pairs skipped before any scoring work.
    pub pairs_pruned: usize,
    pub accepted: usize,
    pub rejections: RejectionCounts,
}

impl ScanStats {
    fn merge(&mut self, other: Self) {
        self.pairs_considered += other.pairs_considered;
        self.pairs_pruned += other.pairs_pruned;
        self.accepted += other.accepted;
        self.rejections.merge(other.rejections);
    }
}

/// Run the pruned all-pairs scan.
///
/// Each pair's verdict is a pure function of its two sentences and the
/// fitted model, so the scan parallelizes over cause candidates with no
/// locking. Result order follows the cause-candidate order and is
/// deterministic.
pub fn scan_pairs(
    index: &CandidateIndex<'_>,
    validator: &RuleValidator<'_>,
) -> (Vec<CausalRelation>, ScanStats) {
    let per_cause: Vec<(Vec<CausalRelation>, ScanStats)> = index
        .causes
        .par_iter()
        .map(|&cause_idx| {
            let cause = &index.sentences[cause_idx];
            let mut relations = Vec::new();
            let mut stats = ScanStats::default();

            for &effect_idx in &index.effects {
                if effect_idx == cause_idx {
                    continue;
                }
                let effect = &index.sentences[effect_idx];

                // Prune before any NLP work: same-document pairs and
                // pairs with no possible entity overlap.
                let pair = CandidatePair {
                    cause: cause.sentence,
                    effect: effect.sentence,
                };
                if !pair.is_cross_file() {
                    stats.pairs_pruned += 1;
                    continue;
                }
                if cause.entities.is_disjoint(&effect.entities) {
                    stats.pairs_pruned += 1;
                    continue;
                }

                stats.pairs_considered += 1;
                match validator.validate(cause, effect) {
                    Verdict::Accepted {
                        rule_score,
                        shared_entities,
                    } => {
                        stats.accepted += 1;
                        relations.push(CausalRelation {
                            cause_file: cause.sentence.doc_id.to_string(),
                            cause_index: cause.sentence.index,
                            cause_text: cause.sentence.text.to_string(),
                            effect_file: effect.sentence.doc_id.to_string(),
                            effect_index: effect.sentence.index,
                            effect_text: effect.sentence.text.to_string(),
                            shared_entities,
                            scores: ConfidenceScore::rule_only(rule_score),
                        });
                    }
                    Verdict::Rejected(reason) => stats.rejections.record(reason),
                }
            }

            (relations, stats)
        })
        .collect();

    let mut relations = Vec::new();
    let mut stats = ScanStats::default();
    for (mut chunk, chunk_stats) in per_cause {
        relations.append(&mut chunk);
        stats.merge(chunk_stats);
    }

    info!(
        accepted = relations.len(),
        considered = stats.pairs_considered,
        pruned = stats.pairs_pruned,
        rejected = stats.rejections.total(),
        "pair scan complete"
    );
    (relations, stats)
}
