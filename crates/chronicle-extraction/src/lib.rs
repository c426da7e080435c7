//! # chronicle-extraction
//!
//! Sentence-level feature extraction for the causal pipeline: entity
//! extraction, causal-connective detection, indicator-lexicon counting,
//! and corpus-level tf-idf similarity. Everything here is pure and
//! side-effect free; all vocabulary comes in through the [`Lexicon`]
//! configuration.
//!
//! [`Lexicon`]: chronicle_core::config::Lexicon

pub mod connectives;
pub mod entities;
pub mod indicators;
pub mod similarity;

pub use connectives::ConnectiveMatcher;
pub use entities::EntityExtractor;
pub use indicators::IndicatorLexicon;
pub use similarity::TfIdfModel;
