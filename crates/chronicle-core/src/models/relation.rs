use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::models::{ConfidenceScore, Entity};

/// A validated, accepted cross-file causal relation.
///
/// Immutable once created; the final graph is assembled from these in a
/// single pass. Invariant: `cause_file != effect_file`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CausalRelation {
    pub cause_file: String,
    pub cause_index: usize,
    pub cause_text: String,
    pub effect_file: String,
    pub effect_index: usize,
    pub effect_text: String,
    /// Entities common to both sentences, ordered for deterministic
    /// output.
    pub shared_entities: BTreeSet<Entity>,
    pub scores: ConfidenceScore,
}

impl CausalRelation {
    /// The shared entity tokens, in sorted order.
    pub fn shared_context(&self) -> Vec<&str> {
        self.shared_entities.iter().map(|e| e.text.as_str()).collect()
    }
}
