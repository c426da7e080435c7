use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Vocabulary driving extraction: connective patterns, gazetteer,
/// stoplist, and indicator lexicons.
///
/// This is data, not code — deserializable from TOML so vocabularies and
/// patterns can be tuned without touching pipeline logic. The default
/// carries the built-in WWI-era vocabulary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Lexicon {
    /// Regex patterns splitting cause (left) from effect (right).
    pub forward_connectives: Vec<String>,
    /// Regex patterns splitting effect (left) from cause (right).
    pub reverse_connectives: Vec<String>,
    /// Known place names, matched as lowercase substrings.
    pub places: Vec<String>,
    /// Nationalities and organizations, matched as lowercase substrings.
    pub organizations: Vec<String>,
    /// Military-unit nouns, matched as lowercase substrings.
    pub units: Vec<String>,
    /// Generic tokens dropped from entity sets: they would satisfy the
    /// overlap requirement between unrelated sentences.
    pub stoplist: Vec<String>,
    /// Action tokens indicating a cause span.
    pub cause_indicators: Vec<String>,
    /// Consequence tokens indicating an effect span.
    pub effect_indicators: Vec<String>,
}

impl Lexicon {
    /// Parse a lexicon from TOML text.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        toml::from_str(raw).map_err(|e| ConfigError::LexiconParse {
            path: "<inline>".to_string(),
            reason: e.to_string(),
        })
    }

    /// Load a lexicon from a TOML file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::LexiconIo {
            path: path.display().to_string(),
            source: e,
        })?;
        toml::from_str(&raw).map_err(|e| ConfigError::LexiconParse {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            forward_connectives: to_strings(&[
                r"\b(caused|led to|resulted in|triggered|sparked|brought about)\b",
                r"\b(consequently|therefore|thus|hence|as a result)\b",
                r"\b(in response to|following|after the|due to the)\b",
                r"\bwhen\s+.{10,60}\s*,\s*.{10,60}(then|we|they|he|she|it)\b",
                r"\bbecause\s+(of\s+)?(the|this|their|our|his|her)\b",
            ]),
            reverse_connectives: to_strings(&[
                r"\b(because|due to|owing to|on account of)\b",
                r"\b(as a result of|in consequence of)\b",
                r"\b(was caused by|resulted from)\b",
            ]),
            places: to_strings(&[
                "somme",
                "verdun",
                "ypres",
                "passchendaele",
                "marne",
                "gallipoli",
                "dardanelles",
                "jutland",
                "arras",
                "cambrai",
                "vimy",
                "amiens",
                "messines",
                "belleau",
                "meuse-argonne",
                "caporetto",
                "tannenberg",
                "france",
                "belgium",
                "flanders",
                "picardy",
                "alsace",
                "lorraine",
                "serbia",
                "gallipoli peninsula",
                "mesopotamia",
                "palestine",
                "sinai",
                "egypt",
                "salonika",
                "cape helles",
                "anzac cove",
            ]),
            organizations: to_strings(&[
                "australian",
                "british",
                "french",
                "german",
                "turkish",
                "anzac",
            ]),
            units: to_strings(&[
                "battalion",
                "brigade",
                "division",
                "regiment",
                "corps",
                "army",
                "artillery",
                "infantry",
                "cavalry",
            ]),
            stoplist: to_strings(&[
                "battle",
                "war",
                "fight",
                "attack",
                "front",
                "line",
                "trench",
                "soldier",
                "officer",
                "men",
                "man",
                "enemy",
                "troops",
                "forces",
                "the",
                "they",
                "we",
                "he",
                "she",
                "it",
                "when",
                "then",
                "after",
                "before",
                "during",
                "about",
                "with",
                "from",
                "into",
                "over",
                "wounded",
                "killed",
                "dead",
                "hospital",
                "ambulance",
                "casualty",
                "shell",
                "gun",
                "rifle",
                "bomb",
                "bullet",
                "fire",
                "shot",
            ]),
            cause_indicators: to_strings(&[
                "bombardment",
                "shelling",
                "artillery fire",
                "machine gun fire",
                "gas attack",
                "offensive",
                "assault",
                "raid",
                "advance",
                "counter-attack",
                "barrage",
                "explosion",
                "ambush",
                "charge",
                "opened fire",
                "attacked",
                "bombed",
                "torpedoed",
                "mined",
            ]),
            effect_indicators: to_strings(&[
                "casualties",
                "losses",
                "killed",
                "wounded",
                "injured",
                "died",
                "destroyed",
                "captured",
                "retreated",
                "surrendered",
                "evacuated",
                "hospitalized",
                "amputation",
                "shell shock",
                "blinded",
                "gassed",
                "reinforcements",
                "relief",
                "treatment",
                "operation",
            ]),
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
