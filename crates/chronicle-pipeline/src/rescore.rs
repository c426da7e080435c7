//! Entailment rescoring: blends an external NLI probability into each
//! rule-accepted relation.
//!
//! The oracle is queried in batches rather than per pair, and every
//! failure — timeout, transport error, unavailable model — degrades that
//! pair to its rule score. Degradation is logged and recorded, never
//! fatal.

use chrono::Utc;
use tracing::{debug, warn};

use chronicle_core::config::BlendPolicy;
use chronicle_core::models::{CausalRelation, Confidence, ConfidenceScore, DegradationEvent};
use chronicle_entailment::{frame_query, EntailmentOracle};

/// Outcome of the rescoring stage.
#[derive(Debug, Clone, Default)]
pub struct RescoreReport {
    /// Relations that received an entailment score.
    pub rescored: usize,
    /// Relations kept on their rule score after an oracle failure.
    pub degraded: usize,
    pub events: Vec<DegradationEvent>,
}

/// Batched entailment rescoring over rule-accepted relations.
pub struct Rescorer<'a> {
    oracle: &'a dyn EntailmentOracle,
    policy: BlendPolicy,
    batch_size: usize,
}

impl<'a> Rescorer<'a> {
    pub fn new(oracle: &'a dyn EntailmentOracle, policy: BlendPolicy, batch_size: usize) -> Self {
        Self {
            oracle,
            policy,
            batch_size: batch_size.max(1),
        }
    }

    /// Rescore all relations. Order is preserved.
    pub fn rescore(&self, relations: Vec<CausalRelation>) -> (Vec<CausalRelation>, RescoreReport) {
        let mut report = RescoreReport::default();

        if !self.oracle.is_available() {
            warn!(
                oracle = self.oracle.name(),
                "entailment oracle unavailable, keeping rule scores"
            );
            report.degraded = relations.len();
            report.events.push(DegradationEvent {
                component: "entailment".to_string(),
                failure: format!("{} unavailable", self.oracle.name()),
                fallback_used: "rule_score".to_string(),
                timestamp: Utc::now(),
            });
            return (relations, report);
        }

        let total = relations.len();
        let mut out = Vec::with_capacity(total);
        let mut remaining = relations;

        while !remaining.is_empty() {
            let tail = remaining.split_off(remaining.len().min(self.batch_size));
            let batch = std::mem::replace(&mut remaining, tail);

            let queries: Vec<(String, String)> = batch
                .iter()
                .map(|r| frame_query(&r.cause_text, &r.effect_text))
                .collect();
            let answers = self.oracle.entail_batch(&queries);

            for (mut relation, answer) in batch.into_iter().zip(answers) {
                match answer {
                    Ok(probability) => {
                        let rule = relation.scores.rule_score;
                        let ml = Confidence::new(probability);
                        let combined =
                            Confidence::new(self.policy.combine(rule.value(), ml.value()));
                        relation.scores = ConfidenceScore::blended(rule, ml, combined);
                        report.rescored += 1;
                    }
                    Err(error) => {
                        warn!(
                            oracle = self.oracle.name(),
                            error = %error,
                            "entailment call failed, degrading to rule score"
                        );
                        report.degraded += 1;
                        report.events.push(DegradationEvent {
                            component: "entailment".to_string(),
                            failure: error.to_string(),
                            fallback_used: "rule_score".to_string(),
                            timestamp: Utc::now(),
                        });
                    }
                }
                out.push(relation);
            }
            debug!(done = out.len(), total, "rescoring progress");
        }

        (out, report)
    }
}
