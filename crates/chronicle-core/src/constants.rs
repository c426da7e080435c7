/// Chronicle system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Node identity keys truncate normalized text to this many characters.
pub const NODE_KEY_TEXT_LEN: usize = 100;

/// Character cap on the premise side of an entailment query.
pub const PREMISE_MAX_CHARS: usize = 150;

/// Character cap on the effect text inside an entailment hypothesis.
pub const HYPOTHESIS_MAX_CHARS: usize = 120;

/// Node mapping lines truncate node text to this many characters.
pub const MAPPING_TEXT_LEN: usize = 150;
