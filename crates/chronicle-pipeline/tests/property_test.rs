//! Property tests over scoring, tokenization, and graph assembly.

use std::collections::BTreeSet;

use proptest::prelude::*;

use chronicle_core::config::BlendPolicy;
use chronicle_core::models::{CausalRelation, Confidence, ConfidenceScore, Entity, EntityKind};
use chronicle_extraction::TfIdfModel;
use chronicle_pipeline::GraphAssembler;

// =========================================================================
// Confidence and blending.
// =========================================================================

proptest! {
    #[test]
    fn confidence_always_lands_in_the_unit_interval(value in -10.0f64..10.0) {
        let c = Confidence::new(value);
        prop_assert!((0.0..=1.0).contains(&c.value()));
    }

    #[test]
    fn average_blend_stays_between_its_inputs(rule in 0.0f64..=1.0, ml in 0.0f64..=1.0) {
        let combined = BlendPolicy::Average.combine(rule, ml);
        prop_assert!(combined >= rule.min(ml) - 1e-12);
        prop_assert!(combined <= rule.max(ml) + 1e-12);
    }

    #[test]
    fn max_blend_never_lowers_the_rule_score(rule in 0.0f64..=1.0, ml in 0.0f64..=1.0) {
        prop_assert!(BlendPolicy::Max.combine(rule, ml) >= rule);
    }
}

// =========================================================================
// Tokenization.
// =========================================================================

proptest! {
    #[test]
    fn tokens_are_lowercase_and_longer_than_two_chars(text in "[A-Za-z0-9 ,.'!?-]{0,200}") {
        for token in TfIdfModel::tokenize(&text) {
            prop_assert!(token.len() > 2);
            prop_assert_eq!(token.clone(), token.to_lowercase());
        }
    }

    #[test]
    fn self_similarity_is_at_most_one(
        sentences in prop::collection::vec("[a-z ]{10,60}", 1..8),
        probe in "[a-z ]{10,60}",
    ) {
        let model = TfIdfModel::fit(sentences.iter().map(String::as_str)).unwrap();
        let sim = model.similarity(&probe, &probe);
        prop_assert!(sim <= 1.0 + 1e-9);
    }
}

// =========================================================================
// Graph assembly.
// =========================================================================

fn relation_strategy() -> impl Strategy<Value = CausalRelation> {
    let file = prop::sample::select(vec!["a.txt", "b.txt", "c.txt"]);
    let text = prop::sample::select(vec![
        "The barrage began before dawn.",
        "The line broke under pressure.",
        "The retreat followed at once.",
        "The bridge was demolished.",
    ]);
    (file.clone(), text.clone(), file, text, 0.85f64..=1.0).prop_map(
        |(cause_file, cause_text, effect_file, effect_text, score)| {
            let mut shared = BTreeSet::new();
            shared.insert(Entity::new("somme", EntityKind::Place));
            shared.insert(Entity::new("1916", EntityKind::Date));
            CausalRelation {
                cause_file: cause_file.to_string(),
                cause_index: 0,
                cause_text: cause_text.to_string(),
                effect_file: effect_file.to_string(),
                effect_index: 0,
                effect_text: effect_text.to_string(),
                shared_entities: shared,
                scores: ConfidenceScore::rule_only(Confidence::new(score)),
            }
        },
    )
}

proptest! {
    /// Re-assembling a graph's own edge list reproduces the graph:
    /// dedup plus stable id assignment is a fixpoint.
    #[test]
    fn assembly_is_idempotent(relations in prop::collection::vec(relation_strategy(), 0..20)) {
        let first = GraphAssembler::assemble(&relations);
        let second = GraphAssembler::assemble(&first.edges);
        prop_assert_eq!(first, second);
    }

    /// Duplicating the input never grows the graph.
    #[test]
    fn duplicates_never_grow_the_graph(relations in prop::collection::vec(relation_strategy(), 0..12)) {
        let once = GraphAssembler::assemble(&relations);

        let mut doubled = relations.clone();
        doubled.extend(relations.iter().cloned());
        let twice = GraphAssembler::assemble(&doubled);

        prop_assert_eq!(once.nodes.len(), twice.nodes.len());
        prop_assert_eq!(once.edges.len(), twice.edges.len());
    }
}
