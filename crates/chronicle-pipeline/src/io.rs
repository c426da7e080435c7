//! Corpus input and relation/graph output.
//!
//! Input is a JSON array of `{file_id, sentences, date?}` documents.
//! Malformed entries are skipped and counted, never fatal; only an
//! unreadable file or an entirely unusable corpus is an error.

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

use chronicle_core::constants::MAPPING_TEXT_LEN;
use chronicle_core::errors::{ChronicleResult, CorpusError};
use chronicle_core::models::{CausalGraph, CausalRelation, Document, SentenceRef};

/// Counters from corpus loading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CorpusStats {
    pub loaded: usize,
    pub skipped: usize,
}

/// The loaded, immutable corpus.
#[derive(Debug, Clone)]
pub struct Corpus {
    pub documents: Vec<Document>,
    pub stats: CorpusStats,
}

impl Corpus {
    /// Wrap already-parsed documents, e.g. in tests.
    pub fn from_documents(documents: Vec<Document>) -> Self {
        let stats = CorpusStats {
            loaded: documents.len(),
            skipped: 0,
        };
        Self { documents, stats }
    }

    /// Sentence references across all documents, in corpus order.
    pub fn sentence_refs(&self) -> Vec<SentenceRef<'_>> {
        self.documents
            .iter()
            .flat_map(|doc| {
                doc.sentences.iter().enumerate().map(move |(index, text)| SentenceRef {
                    doc_id: &doc.id,
                    index,
                    text,
                })
            })
            .collect()
    }

    pub fn sentence_count(&self) -> usize {
        self.documents.iter().map(|d| d.sentences.len()).sum()
    }
}

/// Load a corpus file, skipping malformed entries.
pub fn load_corpus(path: &Path) -> ChronicleResult<Corpus> {
    let raw = fs::read_to_string(path).map_err(|e| CorpusError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_corpus(&raw, &path.display().to_string())
}

/// Parse corpus JSON. Exposed separately for in-memory inputs.
pub fn parse_corpus(raw: &str, origin: &str) -> ChronicleResult<Corpus> {
    let value: Value = serde_json::from_str(raw).map_err(|e| CorpusError::NotAnArray {
        path: origin.to_string(),
        reason: e.to_string(),
    })?;
    let Value::Array(entries) = value else {
        return Err(CorpusError::NotAnArray {
            path: origin.to_string(),
            reason: "top-level value is not an array".to_string(),
        }
        .into());
    };

    let mut documents = Vec::with_capacity(entries.len());
    let mut skipped = 0usize;
    for entry in &entries {
        match document_from_value(entry) {
            Some(doc) => documents.push(doc),
            None => {
                skipped += 1;
                warn!(origin, "skipping malformed corpus entry");
            }
        }
    }
    if documents.is_empty() {
        return Err(CorpusError::NoUsableDocuments { skipped }.into());
    }

    info!(loaded = documents.len(), skipped, "corpus loaded");
    let stats = CorpusStats {
        loaded: documents.len(),
        skipped,
    };
    Ok(Corpus { documents, stats })
}

/// A document needs a string `file_id` and an all-string `sentences`
/// array; anything else disqualifies the whole entry.
fn document_from_value(value: &Value) -> Option<Document> {
    let entry = value.as_object()?;
    let id = entry.get("file_id")?.as_str()?;
    let raw_sentences = entry.get("sentences")?.as_array()?;
    let mut sentences = Vec::with_capacity(raw_sentences.len());
    for sentence in raw_sentences {
        sentences.push(sentence.as_str()?.to_string());
    }
    let date = entry.get("date").and_then(Value::as_str).map(str::to_string);
    Some(Document {
        id: id.to_string(),
        sentences,
        date,
    })
}

/// One output relation for the visualization collaborator.
#[derive(Debug, Serialize)]
pub struct RelationRecord<'a> {
    pub cause_file: &'a str,
    pub cause_text: &'a str,
    pub effect_file: &'a str,
    pub effect_text: &'a str,
    pub rule_score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ml_score: Option<f64>,
    pub combined_score: f64,
    pub shared_context: Vec<&'a str>,
}

/// Project relations into their serialized form.
pub fn relation_records(relations: &[CausalRelation]) -> Vec<RelationRecord<'_>> {
    relations
        .iter()
        .map(|r| RelationRecord {
            cause_file: &r.cause_file,
            cause_text: &r.cause_text,
            effect_file: &r.effect_file,
            effect_text: &r.effect_text,
            rule_score: r.scores.rule_score.value(),
            ml_score: r.scores.ml_score.map(|c| c.value()),
            combined_score: r.scores.combined_score.value(),
            shared_context: r.shared_context(),
        })
        .collect()
}

/// Write the relation list as JSON.
pub fn write_relations(path: &Path, relations: &[CausalRelation]) -> ChronicleResult<()> {
    let json = serde_json::to_string_pretty(&relation_records(relations))?;
    fs::write(path, json)?;
    info!(path = %path.display(), relations = relations.len(), "relations written");
    Ok(())
}

/// Human-readable node mapping: one `"{id} [{file}]: {text}"` line per
/// node, ordered by id.
pub fn node_mapping(graph: &CausalGraph) -> String {
    let mut out = String::new();
    for node in graph.nodes.values() {
        let text: String = node.text.chars().take(MAPPING_TEXT_LEN).collect();
        let suffix = if node.text.chars().count() > MAPPING_TEXT_LEN {
            "..."
        } else {
            ""
        };
        out.push_str(&format!("{} [{}]: {}{}\n", node.id, node.file, text, suffix));
    }
    out
}

/// Write the node mapping beside the relation output.
pub fn write_node_mapping(path: &Path, graph: &CausalGraph) -> ChronicleResult<()> {
    fs::write(path, node_mapping(graph))?;
    info!(path = %path.display(), nodes = graph.nodes.len(), "node mapping written");
    Ok(())
}
