//! Graph assembly: deduplication and stable node-id assignment.
//!
//! Nodes are keyed by (file, normalized text): identical cause/effect
//! texts within one file collapse to a single node, while the same text
//! in two files stays two nodes. Ids `C{n}`/`E{n}` come from one shared
//! run-order counter, a node keeps the id and role of its first
//! assignment, and construction never back-tracks.

use std::collections::{BTreeMap, HashMap, HashSet};

use petgraph::graph::{DiGraph, NodeIndex};
use tracing::info;

use chronicle_core::constants::NODE_KEY_TEXT_LEN;
use chronicle_core::models::{CausalGraph, CausalRelation, GraphNode, NodeRole};

type NodeKey = (String, String);
type EdgeKey = (NodeKey, NodeKey);

/// Single-pass graph builder over the accepted relation list.
pub struct GraphAssembler {
    graph: DiGraph<GraphNode, f64>,
    node_index: HashMap<NodeKey, NodeIndex>,
    edge_keys: HashSet<EdgeKey>,
    next_id: usize,
    edges: Vec<CausalRelation>,
}

impl GraphAssembler {
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            node_index: HashMap::new(),
            edge_keys: HashSet::new(),
            next_id: 1,
            edges: Vec::new(),
        }
    }

    /// Assemble relations into the final graph in one pass.
    pub fn assemble(relations: &[CausalRelation]) -> CausalGraph {
        let mut assembler = Self::new();
        let mut duplicates = 0usize;
        for relation in relations {
            if !assembler.insert(relation) {
                duplicates += 1;
            }
        }
        info!(
            nodes = assembler.node_count(),
            edges = assembler.edge_count(),
            duplicates,
            "graph assembled"
        );
        assembler.finish()
    }

    /// Insert one relation. Returns false for duplicate edges, so
    /// re-running with overlapping document windows cannot double an
    /// edge.
    pub fn insert(&mut self, relation: &CausalRelation) -> bool {
        let cause_key = node_key(&relation.cause_file, &relation.cause_text);
        let effect_key = node_key(&relation.effect_file, &relation.effect_text);
        if !self
            .edge_keys
            .insert((cause_key.clone(), effect_key.clone()))
        {
            return false;
        }

        let cause_idx = self.ensure_node(
            cause_key,
            &relation.cause_file,
            &relation.cause_text,
            NodeRole::Cause,
        );
        let effect_idx = self.ensure_node(
            effect_key,
            &relation.effect_file,
            &relation.effect_text,
            NodeRole::Effect,
        );
        self.graph
            .add_edge(cause_idx, effect_idx, relation.scores.combined_score.value());
        self.edges.push(relation.clone());
        true
    }

    fn ensure_node(&mut self, key: NodeKey, file: &str, text: &str, role: NodeRole) -> NodeIndex {
        if let Some(&idx) = self.node_index.get(&key) {
            return idx;
        }
        let prefix = match role {
            NodeRole::Cause => 'C',
            NodeRole::Effect => 'E',
        };
        let id = format!("{prefix}{}", self.next_id);
        self.next_id += 1;
        let idx = self.graph.add_node(GraphNode {
            id,
            text: text.to_string(),
            file: file.to_string(),
            role,
        });
        self.node_index.insert(key, idx);
        idx
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Freeze into the serializable graph model.
    pub fn finish(self) -> CausalGraph {
        let mut nodes = BTreeMap::new();
        for node in self.graph.node_weights() {
            nodes.insert(node.id.clone(), node.clone());
        }
        CausalGraph {
            nodes,
            edges: self.edges,
        }
    }
}

impl Default for GraphAssembler {
    fn default() -> Self {
        Self::new()
    }
}

/// Node identity: file plus normalized text (trimmed, lowercased,
/// truncated).
fn node_key(file: &str, text: &str) -> NodeKey {
    let normalized: String = text
        .trim()
        .to_lowercase()
        .chars()
        .take(NODE_KEY_TEXT_LEN)
        .collect();
    (file.to_string(), normalized)
}
