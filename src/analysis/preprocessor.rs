/// Text normalization capability consumed by the index builder and the
/// query pipeline. Implementations are created once by the application and
/// injected; the core never owns a language model.
pub trait Preprocessor: Send + Sync {
    /// Ordered sequence of normalized terms. Duplicates are meaningful.
    fn lemmatize(&self, text: &str) -> Vec<String>;

    /// Normalize a single query term into index space: its first emitted
    /// term. `None` when the preprocessor drops it (a stop word, say).
    fn normalize_term(&self, raw: &str) -> Option<String> {
        self.lemmatize(raw).into_iter().next()
    }
}
