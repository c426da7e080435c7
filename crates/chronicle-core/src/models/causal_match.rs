use serde::{Deserialize, Serialize};

/// Direction of a causal connective.
///
/// Forward connectives ("led to") put the cause on the left of the
/// connective; reverse connectives ("because of") put it on the right.
/// Direction affects span assignment only, never validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Forward,
    Reverse,
}

/// One causal-connective match inside a sentence.
///
/// A sentence may yield zero or more of these; a sentence without any
/// match is still usable as the similarity/entity partner of an
/// explicitly causal sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CausalMatch {
    pub cause_span: String,
    pub effect_span: String,
    pub direction: Direction,
    /// The connective text as matched, lowercased.
    pub connective: String,
}
