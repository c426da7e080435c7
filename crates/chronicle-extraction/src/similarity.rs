//! Corpus-level tf-idf similarity.
//!
//! The model is fitted once per run over the full sentence set and then
//! shared read-only by every scan worker. Refitting per pair would be
//! correctness-neutral but wasteful.

use std::collections::{HashMap, HashSet};

use tracing::info;

use chronicle_core::errors::SimilarityError;

/// Fitted tf-idf model over the corpus vocabulary.
///
/// Deterministic given a fixed corpus: identical sentence sets produce
/// identical scores.
#[derive(Debug, Clone)]
pub struct TfIdfModel {
    idf: HashMap<String, f64>,
    sentence_count: usize,
}

impl TfIdfModel {
    /// Fit document frequencies over the corpus sentences.
    ///
    /// An empty corpus is fatal: no similarity scoring is possible.
    pub fn fit<'a, I>(sentences: I) -> Result<Self, SimilarityError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut df: HashMap<String, usize> = HashMap::new();
        let mut count = 0usize;
        for sentence in sentences {
            count += 1;
            let unique: HashSet<String> = Self::tokenize(sentence).into_iter().collect();
            for token in unique {
                *df.entry(token).or_default() += 1;
            }
        }
        if count == 0 {
            return Err(SimilarityError::EmptyCorpus);
        }
        let idf: HashMap<String, f64> = df
            .into_iter()
            .map(|(token, freq)| (token, (count as f64 / (1.0 + freq as f64)).ln()))
            .collect();
        info!(
            sentences = count,
            vocabulary = idf.len(),
            "fitted tf-idf model"
        );
        Ok(Self {
            idf,
            sentence_count: count,
        })
    }

    /// Lowercase alphanumeric tokens longer than two characters.
    pub fn tokenize(text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        lowered
            .split(|c: char| !c.is_alphanumeric() && c != '_')
            .filter(|token| token.len() > 2)
            .map(str::to_string)
            .collect()
    }

    /// Sparse tf-idf vector for a text span.
    ///
    /// Term frequency is normalized by the span's maximum raw count;
    /// terms unseen at fit time weigh zero.
    pub fn vector(&self, text: &str) -> HashMap<String, f64> {
        let tokens = Self::tokenize(text);
        if tokens.is_empty() {
            return HashMap::new();
        }
        let mut tf: HashMap<String, f64> = HashMap::new();
        for token in tokens {
            *tf.entry(token).or_default() += 1.0;
        }
        let max = tf.values().copied().fold(0.0f64, f64::max);
        tf.into_iter()
            .map(|(token, count)| {
                let idf = self.idf.get(&token).copied().unwrap_or(0.0);
                let weight = (count / max) * idf;
                (token, weight)
            })
            .collect()
    }

    /// Cosine similarity of the two spans' vectors. Empty or zero-norm
    /// vectors score 0.0.
    pub fn similarity(&self, a: &str, b: &str) -> f64 {
        cosine(&self.vector(a), &self.vector(b))
    }

    /// Number of sentences the model was fitted on.
    pub fn sentence_count(&self) -> usize {
        self.sentence_count
    }

    /// Fitted vocabulary size.
    pub fn vocabulary_len(&self) -> usize {
        self.idf.len()
    }
}

fn cosine(v1: &HashMap<String, f64>, v2: &HashMap<String, f64>) -> f64 {
    if v1.is_empty() || v2.is_empty() {
        return 0.0;
    }
    let dot: f64 = v1
        .iter()
        .filter_map(|(token, x)| v2.get(token).map(|y| x * y))
        .sum();
    let m1 = v1.values().map(|x| x * x).sum::<f64>().sqrt();
    let m2 = v2.values().map(|x| x * x).sum::<f64>().sqrt();
    if m1 > 0.0 && m2 > 0.0 {
        dot / (m1 * m2)
    } else {
        0.0
    }
}
