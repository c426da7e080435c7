//! Error taxonomy for the chronicle pipeline.
//!
//! Each domain gets its own enum; `ChronicleError` is the umbrella every
//! public fallible API returns. Validator rejections are control flow,
//! not errors, and never appear here.

mod config_error;
mod corpus_error;
mod entailment_error;
mod similarity_error;

pub use config_error::ConfigError;
pub use corpus_error::CorpusError;
pub use entailment_error::EntailmentError;
pub use similarity_error::SimilarityError;

/// Umbrella error for all chronicle crates.
#[derive(Debug, thiserror::Error)]
pub enum ChronicleError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Corpus(#[from] CorpusError),

    #[error(transparent)]
    Similarity(#[from] SimilarityError),

    #[error(transparent)]
    Entailment(#[from] EntailmentError),

    #[error("serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used across the workspace.
pub type ChronicleResult<T> = Result<T, ChronicleError>;
