/// Entailment oracle errors.
///
/// Never fatal to a run: the rescoring stage converts any of these into
/// the degrade-to-rule-score path.
#[derive(Debug, thiserror::Error)]
pub enum EntailmentError {
    #[error("entailment oracle {provider} is unavailable")]
    Unavailable { provider: String },

    #[error("entailment request timed out after {seconds}s")]
    Timeout { seconds: u64 },

    #[error("entailment request failed: {reason}")]
    Request { reason: String },

    #[error("malformed entailment response: {reason}")]
    InvalidResponse { reason: String },
}
