//! Entity extraction: gazetteer lookup, date and military-unit
//! recognizers, a capitalized proper-noun fallback, and a stoplist
//! filter.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use chronicle_core::config::Lexicon;
use chronicle_core::models::{Entity, EntityKind};

/// "month YYYY" dates.
static MONTH_YEAR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(?:january|february|march|april|may|june|july|august|september|october|november|december)\s+\d{4}\b",
    )
    .unwrap()
});

/// Bare four-digit years.
static YEAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\d{4}\b").unwrap());

/// Numbered military units ("5th battalion", "2 brigade").
static UNIT_NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b\d+(?:st|nd|rd|th)?\s+(?:battalion|brigade|division|regiment)\b").unwrap()
});

/// Capitalized proper nouns of four or more letters.
static PROPER_NOUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b[A-Z][a-z]{3,}\b").unwrap());

/// Extracts normalized entities from a sentence.
///
/// Pure: no side effects. An empty result is not an error — it means
/// entity overlap is impossible for that sentence.
pub struct EntityExtractor {
    gazetteer: Vec<(String, EntityKind)>,
    stoplist: HashSet<String>,
}

impl EntityExtractor {
    pub fn new(lexicon: &Lexicon) -> Self {
        let mut gazetteer = Vec::new();
        for (terms, kind) in [
            (&lexicon.places, EntityKind::Place),
            (&lexicon.organizations, EntityKind::Organization),
            (&lexicon.units, EntityKind::Unit),
        ] {
            gazetteer.extend(terms.iter().map(|t| (t.to_lowercase(), kind)));
        }
        Self {
            gazetteer,
            stoplist: lexicon.stoplist.iter().map(|t| t.to_lowercase()).collect(),
        }
    }

    /// Extract the entity set of a sentence.
    ///
    /// Gazetteer terms match as substrings of the lowercased sentence;
    /// recognizers run afterwards, and the stoplist filter is applied
    /// last. Insertion order matters: the first kind seen for a token
    /// wins, so gazetteer classifications take precedence over the
    /// proper-noun fallback.
    pub fn extract(&self, sentence: &str) -> HashSet<Entity> {
        let lowered = sentence.to_lowercase();
        let mut entities = HashSet::new();

        for (term, kind) in &self.gazetteer {
            if lowered.contains(term.as_str()) {
                entities.insert(Entity::new(term, *kind));
            }
        }
        for m in MONTH_YEAR_RE.find_iter(&lowered) {
            entities.insert(Entity::new(m.as_str(), EntityKind::Date));
        }
        for m in YEAR_RE.find_iter(&lowered) {
            entities.insert(Entity::new(m.as_str(), EntityKind::Date));
        }
        for m in UNIT_NUMBER_RE.find_iter(&lowered) {
            entities.insert(Entity::new(m.as_str(), EntityKind::Unit));
        }
        // Proper nouns need the original casing.
        for m in PROPER_NOUN_RE.find_iter(sentence) {
            entities.insert(Entity::new(m.as_str(), EntityKind::Other));
        }

        entities.retain(|e| !self.stoplist.contains(&e.text));
        entities
    }
}
