use crate::models::SentenceRef;

/// A transient cross-document pairing of a potential cause sentence with
/// a potential effect sentence. Generated during the scan and discarded
/// once scored; only accepted relations persist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidatePair<'a> {
    pub cause: SentenceRef<'a>,
    pub effect: SentenceRef<'a>,
}

impl CandidatePair<'_> {
    /// The defining filter of the whole pipeline: cause and effect must
    /// come from two distinct documents. Never relaxed.
    pub fn is_cross_file(&self) -> bool {
        self.cause.doc_id != self.effect.doc_id
    }
}
