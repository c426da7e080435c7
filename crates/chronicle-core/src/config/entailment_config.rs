use serde::{Deserialize, Serialize};

use super::defaults;

/// Entailment oracle client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EntailmentConfig {
    /// Inference endpoint premise/hypothesis queries are posted to.
    pub endpoint: String,
    /// Per-call timeout; expiry degrades the pair to its rule score
    /// instead of stalling the run.
    pub timeout_secs: u64,
}

impl Default for EntailmentConfig {
    fn default() -> Self {
        Self {
            endpoint: defaults::DEFAULT_ORACLE_ENDPOINT.to_string(),
            timeout_secs: defaults::DEFAULT_ORACLE_TIMEOUT_SECS,
        }
    }
}
