/// Corpus loading errors.
///
/// Individually malformed entries are skipped and counted rather than
/// raised; only an unreadable or entirely unusable corpus is an error.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("failed to read corpus file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("corpus {path} is not a JSON array: {reason}")]
    NotAnArray { path: String, reason: String },

    #[error("corpus contains no usable documents ({skipped} entries skipped)")]
    NoUsableDocuments { skipped: usize },
}
