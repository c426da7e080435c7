use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::CausalRelation;

/// Role a node plays, fixed when its id is first assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeRole {
    Cause,
    Effect,
}

/// One node of the assembled graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    /// Stable run-order id: `C{n}` for causes, `E{n}` for effects.
    pub id: String,
    pub text: String,
    pub file: String,
    pub role: NodeRole,
}

/// The final deduplicated causal graph.
///
/// Built by a single pass over the accepted relation list and never
/// mutated afterward. Node identity derives from normalized text plus
/// file, so identical texts within one file collapse to one node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CausalGraph {
    /// Stable node id → node, ordered by id for deterministic output.
    pub nodes: BTreeMap<String, GraphNode>,
    /// Accepted relations in final deduplicated order.
    pub edges: Vec<CausalRelation>,
}
