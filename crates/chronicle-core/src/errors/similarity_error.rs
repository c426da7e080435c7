/// Similarity model errors.
#[derive(Debug, thiserror::Error)]
pub enum SimilarityError {
    #[error("cannot fit tf-idf model: corpus has no sentences")]
    EmptyCorpus,
}
