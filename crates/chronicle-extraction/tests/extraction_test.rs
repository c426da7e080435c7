//! Cross-module extraction tests over realistic sentences.

use chronicle_core::config::Lexicon;
use chronicle_core::models::Direction;
use chronicle_extraction::{ConnectiveMatcher, EntityExtractor, IndicatorLexicon, TfIdfModel};

const CAUSE_SENTENCE: &str =
    "German infantry advanced under heavy rifle fire near Amiens in 1918.";
const EFFECT_SENTENCE: &str =
    "Intense fighting near Amiens led to heavy British losses in the 1918 campaign.";

#[test]
fn amiens_sentences_share_exactly_two_entities() {
    let extractor = EntityExtractor::new(&Lexicon::default());
    let cause = extractor.extract(CAUSE_SENTENCE);
    let effect = extractor.extract(EFFECT_SENTENCE);

    let mut shared: Vec<String> = cause
        .intersection(&effect)
        .map(|e| e.text.clone())
        .collect();
    shared.sort();
    assert_eq!(shared, vec!["1918".to_string(), "amiens".to_string()]);
}

#[test]
fn only_the_effect_sentence_carries_causal_language() {
    let matcher = ConnectiveMatcher::new(&Lexicon::default()).unwrap();
    assert!(matcher.probe(CAUSE_SENTENCE).is_none());

    let (direction, connective) = matcher.probe(EFFECT_SENTENCE).unwrap();
    assert_eq!(direction, Direction::Forward);
    assert_eq!(connective, "led to");
}

#[test]
fn indicator_roles_line_up_with_the_pair() {
    let indicators = IndicatorLexicon::new(&Lexicon::default());
    assert!(indicators.cause_hits(CAUSE_SENTENCE) > 0, "\"advanced\" is an action token");
    assert!(indicators.effect_hits(EFFECT_SENTENCE) > 0, "\"losses\" is a consequence token");
}

#[test]
fn pair_similarity_sits_inside_the_confidence_band() {
    // A small surrounding corpus keeps the idf weights realistic.
    let model = TfIdfModel::fit([
        CAUSE_SENTENCE,
        EFFECT_SENTENCE,
        "We spent the morning mending wire and writing letters home to our families.",
        "The weather turned cold and the roads were thick with mud by evening.",
        "The official account records the movements of the Fourth Army in great detail.",
        "Supply columns moved slowly along the crowded roads behind the forward positions.",
    ])
    .unwrap();

    let sim = model.similarity(CAUSE_SENTENCE, EFFECT_SENTENCE);
    assert!(
        (0.15..=0.65).contains(&sim),
        "similarity {sim} outside the confidence band"
    );
}
