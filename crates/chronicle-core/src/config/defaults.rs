//! Named defaults for configuration structs.

/// Minimum combined confidence for an accepted relation.
pub const DEFAULT_MIN_CONFIDENCE: f64 = 0.85;

/// Similarity below this is treated as unrelated.
pub const DEFAULT_SIMILARITY_LOW: f64 = 0.15;

/// Similarity above this is treated as near-duplicate paraphrase.
pub const DEFAULT_SIMILARITY_HIGH: f64 = 0.65;

/// Lower edge of the inner band granting the full position bonus.
pub const DEFAULT_CORE_BAND_LOW: f64 = 0.25;

/// Upper edge of the inner band granting the full position bonus.
pub const DEFAULT_CORE_BAND_HIGH: f64 = 0.50;

/// Sentences shorter than this (in bytes) never become candidates.
pub const DEFAULT_MIN_SENTENCE_LEN: usize = 50;

/// Minimum entities shared between the two spans of a pair.
pub const DEFAULT_MIN_SHARED_ENTITIES: usize = 2;

/// Score weight: explicit causal language in the cause span.
pub const DEFAULT_WEIGHT_CAUSE_CONNECTIVE: f64 = 0.35;

/// Score weight: explicit causal language in the effect span.
pub const DEFAULT_WEIGHT_EFFECT_CONNECTIVE: f64 = 0.30;

/// Score contribution per shared entity.
pub const DEFAULT_WEIGHT_ENTITY_STEP: f64 = 0.15;

/// Cap on the entity-overlap contribution.
pub const DEFAULT_WEIGHT_ENTITY_CAP: f64 = 0.30;

/// Bonus for similarity inside the core band.
pub const DEFAULT_WEIGHT_CORE_BAND: f64 = 0.25;

/// Bonus for similarity inside the outer band remainder.
pub const DEFAULT_WEIGHT_OUTER_BAND: f64 = 0.10;

/// Bonus per indicator-lexicon class present in the matching span.
pub const DEFAULT_WEIGHT_INDICATOR: f64 = 0.05;

/// Oracle calls per rescoring batch.
pub const DEFAULT_RESCORE_BATCH_SIZE: usize = 16;

/// Per-call entailment oracle timeout.
pub const DEFAULT_ORACLE_TIMEOUT_SECS: u64 = 30;

/// Default entailment inference endpoint.
pub const DEFAULT_ORACLE_ENDPOINT: &str = "http://127.0.0.1:8090/v1/entailment";
