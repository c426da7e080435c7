use serde::{Deserialize, Serialize};

/// A single source document: an identifier plus its pre-tokenized
/// sentences. Immutable once loaded; the corpus owns all sentence text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Stable identifier, typically the source filename.
    #[serde(rename = "file_id")]
    pub id: String,
    /// Sentences in document order.
    pub sentences: Vec<String>,
    /// Document date, kept verbatim from the source when present.
    pub date: Option<String>,
}

/// A lightweight pointer to one sentence of a loaded document.
///
/// Borrows corpus text instead of copying it; candidate generation and
/// validation work entirely on these references.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentenceRef<'a> {
    pub doc_id: &'a str,
    pub index: usize,
    pub text: &'a str,
}
