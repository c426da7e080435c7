/// Configuration errors. All fatal and reported before any processing.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("confidence threshold {value} outside [0, 1]")]
    InvalidThreshold { value: f64 },

    #[error("similarity band [{low}, {high}] is not a valid sub-interval of [0, 1]")]
    InvalidSimilarityBand { low: f64, high: f64 },

    #[error("invalid connective pattern {pattern:?}: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("failed to read lexicon file {path}: {source}")]
    LexiconIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse lexicon {path}: {reason}")]
    LexiconParse { path: String, reason: String },
}
