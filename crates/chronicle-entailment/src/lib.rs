//! # chronicle-entailment
//!
//! The pluggable natural-language-inference oracle behind the optional
//! rescoring stage. The oracle estimates how strongly a cause span
//! supports an effect span; callers convert failures into the
//! degrade-to-rule-score path, so nothing here is ever fatal to a run.

pub mod providers;

use chronicle_core::constants::{HYPOTHESIS_MAX_CHARS, PREMISE_MAX_CHARS};
use chronicle_core::errors::ChronicleResult;

/// External natural-language-inference scoring oracle.
///
/// Implementations must be shareable across scan workers.
pub trait EntailmentOracle: Send + Sync {
    /// Probability in [0, 1] that the premise entails the hypothesis.
    fn entail(&self, premise: &str, hypothesis: &str) -> ChronicleResult<f64>;

    /// Answer a batch of queries, one result per query.
    ///
    /// The default issues one call per query; providers with a batch
    /// endpoint should override this.
    fn entail_batch(&self, queries: &[(String, String)]) -> Vec<ChronicleResult<f64>> {
        queries
            .iter()
            .map(|(premise, hypothesis)| self.entail(premise, hypothesis))
            .collect()
    }

    /// Provider name, used in logs and degradation events.
    fn name(&self) -> &str;

    /// Whether the oracle can currently answer queries.
    fn is_available(&self) -> bool;
}

/// Frame a cause/effect pair as a premise/hypothesis query.
///
/// The premise is the cause span and the hypothesis restates the effect
/// as its consequence, both length-capped so oversized sentences do not
/// blow the oracle's input window.
pub fn frame_query(cause: &str, effect: &str) -> (String, String) {
    let premise = truncate_chars(cause, PREMISE_MAX_CHARS).to_string();
    let hypothesis = format!(
        "As a result, {}",
        truncate_chars(effect, HYPOTHESIS_MAX_CHARS)
    );
    (premise, hypothesis)
}

/// Truncate on a character boundary.
fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
