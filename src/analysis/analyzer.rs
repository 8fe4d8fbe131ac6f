use std::collections::HashMap;
use std::sync::Arc;
use rust_stemmers::Algorithm;
use crate::analysis::filter::TokenFilter;
use crate::analysis::filters::alphabetic::AlphabeticFilter;
use crate::analysis::filters::stemmer::StemmerFilter;
use crate::analysis::filters::stopword::StopWordFilter;
use crate::analysis::preprocessor::Preprocessor;
use crate::analysis::token::Token;
use crate::analysis::tokenizer::{StandardTokenizer, Tokenizer};
use crate::core::error::{Error, ErrorKind, Result};

/// Text analysis pipeline
pub struct Analyzer {
    pub tokenizer: Box<dyn Tokenizer>,
    pub filters: Vec<Box<dyn TokenFilter>>,
    pub name: String,
}

impl Analyzer {
    pub fn new(name: String, tokenizer: Box<dyn Tokenizer>) -> Self {
        Analyzer {
            tokenizer,
            filters: Vec::new(),
            name,
        }
    }

    pub fn add_filter(mut self, filter: Box<dyn TokenFilter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Stage names in order, e.g. `standard > alphabetic > stop_words`
    pub fn pipeline(&self) -> String {
        std::iter::once(self.tokenizer.name())
            .chain(self.filters.iter().map(|filter| filter.name()))
            .collect::<Vec<_>>()
            .join(" > ")
    }

    pub fn analyze(&self, text: &str) -> Vec<Token> {
        let mut tokens = self.tokenizer.tokenize(text);

        for filter in &self.filters {
            tokens = filter.filter(tokens);
        }

        tokens
    }

    /// Tokenize and lowercase, nothing else
    pub fn simple() -> Self {
        Self::simple_with_case(true)
    }

    pub fn simple_with_case(lowercase: bool) -> Self {
        Analyzer::new("simple".to_string(), tokenizer(lowercase))
    }

    /// Create standard analyzer for English
    pub fn standard_english() -> Self {
        Self::english_with_case(true)
    }

    pub fn english_with_case(lowercase: bool) -> Self {
        Analyzer::new("english".to_string(), tokenizer(lowercase))
            .add_filter(Box::new(AlphabeticFilter))
            .add_filter(Box::new(StopWordFilter::english()))
            .add_filter(Box::new(StemmerFilter::new(Algorithm::English)))
    }

    /// Portuguese pipeline: letters only, stop words removed, Snowball stems
    pub fn portuguese() -> Self {
        Self::portuguese_with_case(true)
    }

    pub fn portuguese_with_case(lowercase: bool) -> Self {
        Analyzer::new("portuguese".to_string(), tokenizer(lowercase))
            .add_filter(Box::new(AlphabeticFilter))
            .add_filter(Box::new(StopWordFilter::portuguese()))
            .add_filter(Box::new(StemmerFilter::new(Algorithm::Portuguese)))
    }
}

fn tokenizer(lowercase: bool) -> Box<dyn Tokenizer> {
    Box::new(StandardTokenizer {
        lowercase,
        ..StandardTokenizer::default()
    })
}

impl Preprocessor for Analyzer {
    fn lemmatize(&self, text: &str) -> Vec<String> {
        self.analyze(text)
            .into_iter()
            .map(|token| token.text)
            .collect()
    }
}

/// Registry for managing analyzers
pub struct AnalyzerRegistry {
    analyzers: HashMap<String, Arc<Analyzer>>,
}

impl AnalyzerRegistry {
    pub fn new() -> Self {
        Self::with_case(true)
    }

    /// Built-in analyzers, honouring the case-normalization setting
    pub fn with_case(lowercase: bool) -> Self {
        let mut registry = AnalyzerRegistry {
            analyzers: HashMap::new(),
        };

        registry.register("simple", Analyzer::simple_with_case(lowercase));
        registry.register("english", Analyzer::english_with_case(lowercase));
        registry.register("portuguese", Analyzer::portuguese_with_case(lowercase));
        registry
    }

    pub fn register(&mut self, name: &str, analyzer: Analyzer) {
        self.analyzers.insert(name.to_string(), Arc::new(analyzer));
    }

    pub fn get(&self, name: &str) -> Result<Arc<Analyzer>> {
        self.analyzers.get(name)
            .cloned()
            .ok_or_else(|| {
                let mut known: Vec<&str> = self.analyzers.keys().map(String::as_str).collect();
                known.sort_unstable();
                Error::new(
                    ErrorKind::InvalidArgument,
                    format!("analyzer '{}' not found (known: {})", name, known.join(", ")),
                )
            })
    }
}

impl Default for AnalyzerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_keeps_duplicates() {
        let terms = Analyzer::simple().lemmatize("Cat bird CAT");
        assert_eq!(terms, vec!["cat", "bird", "cat"]);
    }

    #[test]
    fn test_english_pipeline() {
        let terms = Analyzer::standard_english().lemmatize("The cats are running 42 times");
        assert_eq!(terms, vec!["cat", "run", "time"]);
    }

    #[test]
    fn test_portuguese_drops_stop_words_and_punctuation() {
        let terms = Analyzer::portuguese().lemmatize("O gato, e o cão!");
        assert_eq!(terms.len(), 2);
        assert!(!terms.iter().any(|t| t == "o" || t == "e"));
    }

    #[test]
    fn test_case_preserved_when_disabled() {
        let terms = Analyzer::simple_with_case(false).lemmatize("Lisboa");
        assert_eq!(terms, vec!["Lisboa"]);
    }

    #[test]
    fn test_case_preserving_english_drops_capitalized_stop_words() {
        let terms = Analyzer::english_with_case(false).lemmatize("The Cats");
        assert_eq!(terms.len(), 1);
        assert!(terms[0].starts_with("Cat"));
    }

    #[test]
    fn test_pipeline_names_stages() {
        assert_eq!(Analyzer::simple().pipeline(), "standard");
        assert_eq!(
            Analyzer::portuguese().pipeline(),
            "standard > alphabetic > stop_words > stemmer"
        );
    }

    #[test]
    fn test_normalize_term() {
        let analyzer = Analyzer::standard_english();
        assert_eq!(analyzer.normalize_term("running").as_deref(), Some("run"));
        assert_eq!(analyzer.normalize_term("the"), None);
    }

    #[test]
    fn test_registry_lookup() {
        let registry = AnalyzerRegistry::new();
        assert_eq!(registry.get("english").unwrap().name, "english");

        let err = registry.get("klingon").err().unwrap();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(err.context.contains("portuguese"));
    }
}
