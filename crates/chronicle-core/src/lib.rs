//! # chronicle-core
//!
//! Foundation crate for the chronicle cross-document causal pipeline.
//! Defines all models, errors, configuration, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;

// Re-export the most commonly used types at the crate root.
pub use config::{BlendPolicy, EntailmentConfig, Lexicon, PipelineConfig, ScoreMode, ValidatorConfig};
pub use errors::{ChronicleError, ChronicleResult};
pub use models::{
    CausalGraph, CausalMatch, CausalRelation, Confidence, ConfidenceScore, Direction, Document,
    Entity, EntityKind, SentenceRef,
};
