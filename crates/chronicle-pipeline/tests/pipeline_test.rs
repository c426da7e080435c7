//! Scenario tests for the full pipeline over the small WWI corpus.

use chronicle_core::config::{BlendPolicy, Lexicon, PipelineConfig, ScoreMode};
use chronicle_core::errors::{ChronicleError, ChronicleResult, ConfigError, EntailmentError, SimilarityError};
use chronicle_core::models::Document;
use chronicle_entailment::EntailmentOracle;
use chronicle_pipeline::io::Corpus;
use chronicle_pipeline::{ExtractionEngine, ExtractionOutcome};

const DIARY: &str = "diary_smith.txt";
const HISTORY: &str = "history_fourth_army.txt";

fn fixture_corpus() -> Corpus {
    // Surface pipeline tracing when RUST_LOG is set during test runs.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
    Corpus::from_documents(test_fixtures::wwi_small_documents())
}

fn rule_only_engine() -> ExtractionEngine {
    ExtractionEngine::new(PipelineConfig::default(), Lexicon::default()).unwrap()
}

fn hybrid_engine(blend: BlendPolicy) -> ExtractionEngine {
    let config = PipelineConfig {
        mode: ScoreMode::Hybrid {
            model: "distilbart-mnli".to_string(),
        },
        blend,
        ..Default::default()
    };
    ExtractionEngine::new(config, Lexicon::default()).unwrap()
}

fn run_rule_only() -> ExtractionOutcome {
    rule_only_engine().run(&fixture_corpus()).unwrap()
}

/// Oracle returning a fixed entailment probability.
struct FixedOracle(f64);

impl EntailmentOracle for FixedOracle {
    fn entail(&self, _premise: &str, _hypothesis: &str) -> ChronicleResult<f64> {
        Ok(self.0)
    }
    fn name(&self) -> &str {
        "fixed-mock"
    }
    fn is_available(&self) -> bool {
        true
    }
}

/// Oracle whose every call fails.
struct FailingOracle;

impl EntailmentOracle for FailingOracle {
    fn entail(&self, _premise: &str, _hypothesis: &str) -> ChronicleResult<f64> {
        Err(EntailmentError::Timeout { seconds: 30 }.into())
    }
    fn name(&self) -> &str {
        "failing-mock"
    }
    fn is_available(&self) -> bool {
        true
    }
}

/// Oracle that reports itself unavailable.
struct UnavailableOracle;

impl EntailmentOracle for UnavailableOracle {
    fn entail(&self, _premise: &str, _hypothesis: &str) -> ChronicleResult<f64> {
        Err(EntailmentError::Unavailable {
            provider: "offline-mock".to_string(),
        }
        .into())
    }
    fn name(&self) -> &str {
        "offline-mock"
    }
    fn is_available(&self) -> bool {
        false
    }
}

// =========================================================================
// Acceptance scenario: the cross-file Amiens pair.
// =========================================================================

#[test]
fn amiens_pair_is_accepted_with_high_rule_score() {
    let outcome = run_rule_only();
    assert_eq!(outcome.relations.len(), 1);

    let relation = &outcome.relations[0];
    assert_eq!(relation.cause_file, DIARY);
    assert_eq!(relation.effect_file, HISTORY);
    assert!(relation.cause_text.contains("German infantry"));
    assert!(relation.effect_text.contains("led to"));
    assert!(
        relation.scores.rule_score.value() >= 0.85,
        "rule score {} below the acceptance floor",
        relation.scores.rule_score
    );
    assert_eq!(relation.shared_context(), vec!["1918", "amiens"]);
}

#[test]
fn rule_only_scores_carry_no_ml_component() {
    let outcome = run_rule_only();
    for relation in &outcome.relations {
        assert!(relation.scores.ml_score.is_none());
        assert_eq!(relation.scores.combined_score, relation.scores.rule_score);
    }
}

// =========================================================================
// Invariants over every accepted relation.
// =========================================================================

#[test]
fn accepted_relations_are_cross_file() {
    let outcome = run_rule_only();
    for relation in &outcome.relations {
        assert_ne!(relation.cause_file, relation.effect_file);
    }
}

#[test]
fn accepted_relations_share_at_least_two_entities() {
    let outcome = run_rule_only();
    for relation in &outcome.relations {
        assert!(relation.shared_entities.len() >= 2);
    }
}

#[test]
fn accepted_relations_sit_inside_the_similarity_band() {
    use chronicle_extraction::TfIdfModel;

    let corpus = fixture_corpus();
    let sentences = corpus.sentence_refs();
    let model = TfIdfModel::fit(sentences.iter().map(|s| s.text)).unwrap();

    let outcome = rule_only_engine().run(&corpus).unwrap();
    for relation in &outcome.relations {
        let sim = model.similarity(&relation.cause_text, &relation.effect_text);
        assert!(
            (0.15..=0.65).contains(&sim),
            "similarity {sim} outside the confidence band"
        );
    }
}

#[test]
fn accepted_relations_meet_the_configured_threshold() {
    let outcome = run_rule_only();
    for relation in &outcome.relations {
        assert!(relation.scores.combined_score.value() >= 0.85);
    }
}

// =========================================================================
// Rejection scenarios.
// =========================================================================

#[test]
fn same_file_pair_is_rejected_solely_for_its_origin() {
    // The two Ypres sentences share three entities, both carry causal
    // language, and their similarity sits inside the band — but they
    // live in the same diary, so no relation may link them.
    let outcome = run_rule_only();
    assert!(!outcome
        .relations
        .iter()
        .any(|r| r.cause_text.contains("Ypres") || r.effect_text.contains("Ypres")));

    // Moving one of them into its own document makes the pair valid,
    // confirming same-file origin was the only obstacle.
    let mut documents = test_fixtures::wwi_small_documents();
    let moved = documents[0].sentences.pop().unwrap();
    documents.push(Document {
        id: "diary_smith_part2.txt".to_string(),
        sentences: vec![moved],
        date: None,
    });
    let outcome = rule_only_engine()
        .run(&Corpus::from_documents(documents))
        .unwrap();
    assert!(outcome
        .relations
        .iter()
        .any(|r| r.cause_text.contains("Ypres") && r.effect_text.contains("Ypres")));
}

#[test]
fn near_duplicate_pair_is_rejected_above_the_band() {
    // The Verdun sentences differ by one word, share four entities and
    // causal language, but read as paraphrases of each other.
    let outcome = run_rule_only();
    assert!(!outcome
        .relations
        .iter()
        .any(|r| r.cause_file == "letter_jones.txt" || r.effect_file == "letter_jones.txt"));
    assert!(
        outcome.report.scan.rejections.above_similarity_band >= 2,
        "both orientations of the Verdun pair should reject above the band"
    );
}

#[test]
fn raising_the_threshold_empties_the_result() {
    let config = PipelineConfig::with_min_confidence(0.99);
    let engine = ExtractionEngine::new(config, Lexicon::default()).unwrap();
    let outcome = engine.run(&fixture_corpus()).unwrap();
    assert!(outcome.relations.is_empty());
    assert!(outcome.report.scan.rejections.below_threshold >= 1);
}

// =========================================================================
// Idempotence and determinism.
// =========================================================================

#[test]
fn identical_runs_produce_identical_graphs() {
    let first = run_rule_only();
    let second = run_rule_only();
    assert_eq!(first.relations, second.relations);
    assert_eq!(first.graph, second.graph);
}

#[test]
fn node_ids_are_stable_run_order_identifiers() {
    let outcome = run_rule_only();
    let ids: Vec<&str> = outcome.graph.nodes.keys().map(String::as_str).collect();
    assert_eq!(ids, vec!["C1", "E2"]);
    assert_eq!(outcome.graph.nodes["C1"].file, DIARY);
    assert_eq!(outcome.graph.nodes["E2"].file, HISTORY);
}

// =========================================================================
// Hybrid mode and degradation.
// =========================================================================

#[test]
fn hybrid_average_blends_rule_and_ml_scores() {
    let engine = hybrid_engine(BlendPolicy::Average);
    let outcome = engine
        .run_with_oracle(&fixture_corpus(), Some(&FixedOracle(0.9)))
        .unwrap();
    assert_eq!(outcome.relations.len(), 1);

    let scores = &outcome.relations[0].scores;
    let ml = scores.ml_score.expect("oracle answered");
    assert!((ml.value() - 0.9).abs() < 1e-12);
    let expected = (scores.rule_score.value() + 0.9) / 2.0;
    assert!((scores.combined_score.value() - expected).abs() < 1e-12);
}

#[test]
fn low_entailment_drops_the_relation_under_average_blend() {
    let engine = hybrid_engine(BlendPolicy::Average);
    let outcome = engine
        .run_with_oracle(&fixture_corpus(), Some(&FixedOracle(0.1)))
        .unwrap();
    assert!(outcome.relations.is_empty());
    assert!(outcome.graph.edges.is_empty());
}

#[test]
fn max_blend_keeps_the_relation_despite_low_entailment() {
    let engine = hybrid_engine(BlendPolicy::Max);
    let outcome = engine
        .run_with_oracle(&fixture_corpus(), Some(&FixedOracle(0.1)))
        .unwrap();
    assert_eq!(outcome.relations.len(), 1);
    let scores = &outcome.relations[0].scores;
    assert_eq!(scores.combined_score, scores.rule_score);
}

#[test]
fn failing_oracle_degrades_to_rule_scores() {
    let rule_only = run_rule_only();

    let engine = hybrid_engine(BlendPolicy::Average);
    let outcome = engine
        .run_with_oracle(&fixture_corpus(), Some(&FailingOracle))
        .unwrap();

    // Degradation never changes which pairs pass the rule stage.
    assert_eq!(outcome.relations, rule_only.relations);
    for relation in &outcome.relations {
        assert!(relation.scores.ml_score.is_none());
        assert_eq!(relation.scores.combined_score, relation.scores.rule_score);
    }

    let report = outcome.report.rescore.expect("rescoring ran");
    assert_eq!(report.rescored, 0);
    assert_eq!(report.degraded, 1);
    assert_eq!(report.events.len(), 1);
    assert_eq!(report.events[0].fallback_used, "rule_score");
}

#[test]
fn unavailable_oracle_degrades_without_being_queried() {
    let rule_only = run_rule_only();

    let engine = hybrid_engine(BlendPolicy::Average);
    let outcome = engine
        .run_with_oracle(&fixture_corpus(), Some(&UnavailableOracle))
        .unwrap();

    assert_eq!(outcome.relations, rule_only.relations);
    let report = outcome.report.rescore.expect("rescoring ran");
    assert_eq!(report.degraded, 1);
    assert_eq!(report.events.len(), 1);
}

// =========================================================================
// Fatal configuration and corpus errors.
// =========================================================================

#[test]
fn invalid_threshold_is_fatal_before_processing() {
    let config = PipelineConfig::with_min_confidence(1.5);
    let err = ExtractionEngine::new(config, Lexicon::default()).unwrap_err();
    assert!(matches!(
        err,
        ChronicleError::Config(ConfigError::InvalidThreshold { .. })
    ));
}

#[test]
fn empty_corpus_fails_the_similarity_fit() {
    let corpus = Corpus::from_documents(vec![Document {
        id: "empty.txt".to_string(),
        sentences: Vec::new(),
        date: None,
    }]);
    let err = rule_only_engine().run(&corpus).unwrap_err();
    assert!(matches!(
        err,
        ChronicleError::Similarity(SimilarityError::EmptyCorpus)
    ));
}

// =========================================================================
// Output formats.
// =========================================================================

#[test]
fn relation_output_round_trips_as_json() {
    use chronicle_pipeline::io::write_relations;

    let outcome = run_rule_only();
    let path = std::env::temp_dir().join(format!(
        "chronicle_relations_{}.json",
        std::process::id()
    ));
    write_relations(&path, &outcome.relations).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let records = parsed.as_array().unwrap();
    assert_eq!(records.len(), 1);

    let record = &records[0];
    assert_eq!(record["cause_file"], DIARY);
    assert!(record["combined_score"].as_f64().unwrap() >= 0.85);
    assert!(record.get("ml_score").is_none(), "rule-only output omits ml_score");
    let context: Vec<&str> = record["shared_context"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert_eq!(context, vec!["1918", "amiens"]);

    std::fs::remove_file(&path).ok();
}

#[test]
fn node_mapping_lists_every_node() {
    use chronicle_pipeline::io::node_mapping;

    let outcome = run_rule_only();
    let mapping = node_mapping(&outcome.graph);
    assert!(mapping.contains(&format!("C1 [{DIARY}]: German infantry")));
    assert!(mapping.contains(&format!("E2 [{HISTORY}]: Intense fighting")));
}
