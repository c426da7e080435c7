//! Data model for the causal pipeline. One type family per file.

mod candidate;
mod causal_match;
mod confidence;
mod degradation_event;
mod document;
mod entity;
mod graph;
mod relation;

pub use candidate::CandidatePair;
pub use causal_match::{CausalMatch, Direction};
pub use confidence::{Confidence, ConfidenceScore};
pub use degradation_event::DegradationEvent;
pub use document::{Document, SentenceRef};
pub use entity::{Entity, EntityKind};
pub use graph::{CausalGraph, GraphNode, NodeRole};
pub use relation::CausalRelation;
