//! Pipeline orchestration.
//!
//! A run is strictly sequential at the stage level: load → fit →
//! scan → (rescore) → assemble. Only the tf-idf fit must complete
//! before scoring begins; everything after it reads shared state
//! immutably.

use std::cmp::Ordering;

use tracing::info;

use chronicle_core::config::{Lexicon, PipelineConfig, ScoreMode};
use chronicle_core::errors::ChronicleResult;
use chronicle_core::models::{CausalGraph, CausalRelation};
use chronicle_entailment::providers::HttpNliOracle;
use chronicle_entailment::EntailmentOracle;
use chronicle_extraction::{ConnectiveMatcher, EntityExtractor, IndicatorLexicon, TfIdfModel};

use crate::graph::GraphAssembler;
use crate::io::Corpus;
use crate::rescore::{Rescorer, RescoreReport};
use crate::scanner::{scan_pairs, CandidateIndex, ScanStats};
use crate::validator::RuleValidator;

/// Run-level statistics.
#[derive(Debug, Clone, Default)]
pub struct EngineReport {
    pub sentences: usize,
    pub cause_candidates: usize,
    pub effect_candidates: usize,
    pub scan: ScanStats,
    /// Present only when the rescoring stage ran.
    pub rescore: Option<RescoreReport>,
    pub accepted: usize,
}

/// Result of one pipeline run.
#[derive(Debug, Clone)]
pub struct ExtractionOutcome {
    /// Accepted relations in final deterministic order.
    pub relations: Vec<CausalRelation>,
    pub graph: CausalGraph,
    pub report: EngineReport,
}

/// The cross-document extraction engine.
///
/// Construction validates configuration: an invalid threshold is fatal
/// before any processing starts.
#[derive(Debug)]
pub struct ExtractionEngine {
    config: PipelineConfig,
    lexicon: Lexicon,
}

impl ExtractionEngine {
    pub fn new(config: PipelineConfig, lexicon: Lexicon) -> ChronicleResult<Self> {
        config.validate()?;
        Ok(Self { config, lexicon })
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run the pipeline, constructing the HTTP oracle when hybrid mode
    /// is configured.
    pub fn run(&self, corpus: &Corpus) -> ChronicleResult<ExtractionOutcome> {
        match &self.config.mode {
            ScoreMode::RuleOnly => self.run_with_oracle(corpus, None),
            ScoreMode::Hybrid { model } => {
                let oracle = HttpNliOracle::new(&self.config.entailment, model.clone())?;
                self.run_with_oracle(corpus, Some(&oracle))
            }
        }
    }

    /// Run with an explicit oracle, or none to disable rescoring.
    /// Exposed so callers can plug alternative oracle implementations.
    pub fn run_with_oracle(
        &self,
        corpus: &Corpus,
        oracle: Option<&dyn EntailmentOracle>,
    ) -> ChronicleResult<ExtractionOutcome> {
        let sentences = corpus.sentence_refs();

        // The fit is the only sequential dependency of the scan.
        let model = TfIdfModel::fit(sentences.iter().map(|s| s.text))?;

        let entities = EntityExtractor::new(&self.lexicon);
        let connectives = ConnectiveMatcher::new(&self.lexicon)?;
        let indicators = IndicatorLexicon::new(&self.lexicon);

        let index = CandidateIndex::build(
            &sentences,
            &entities,
            &connectives,
            &indicators,
            self.config.validator.min_sentence_len,
        );
        let validator = RuleValidator::new(self.config.validator.clone(), &model);
        let (mut relations, scan) = scan_pairs(&index, &validator);

        let rescore = match (&self.config.mode, oracle) {
            (ScoreMode::Hybrid { .. }, Some(oracle)) => {
                let rescorer =
                    Rescorer::new(oracle, self.config.blend, self.config.rescore_batch_size);
                let (rescored, report) = rescorer.rescore(relations);
                relations = rescored;
                // The threshold applies to the combined score, trading
                // recall for precision independently of the rule stage.
                relations.retain(|r| {
                    r.scores.combined_score.value() >= self.config.validator.min_confidence
                });
                Some(report)
            }
            _ => None,
        };

        sort_relations(&mut relations);
        let graph = GraphAssembler::assemble(&relations);

        let report = EngineReport {
            sentences: sentences.len(),
            cause_candidates: index.causes.len(),
            effect_candidates: index.effects.len(),
            scan,
            rescore,
            accepted: relations.len(),
        };
        info!(
            relations = relations.len(),
            nodes = graph.nodes.len(),
            "pipeline run complete"
        );
        Ok(ExtractionOutcome {
            relations,
            graph,
            report,
        })
    }
}

/// Deterministic final ordering: combined score descending, then source
/// positions. Keeps node-id assignment identical across identical runs.
fn sort_relations(relations: &mut [CausalRelation]) {
    relations.sort_by(|a, b| {
        b.scores
            .combined_score
            .value()
            .partial_cmp(&a.scores.combined_score.value())
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.cause_file.cmp(&b.cause_file))
            .then_with(|| a.cause_index.cmp(&b.cause_index))
            .then_with(|| a.effect_file.cmp(&b.effect_file))
            .then_with(|| a.effect_index.cmp(&b.effect_index))
    });
}
