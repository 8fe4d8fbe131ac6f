use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};
use crate::analysis::analyzer::AnalyzerRegistry;
use crate::analysis::preprocessor::Preprocessor;
use crate::core::config::Config;
use crate::core::error::Result;
use crate::corpus::manifest::{read_query, Corpus};
use crate::index::index_writer::IndexWriter;
use crate::index::inverted::InvertedIndex;
use crate::index::serializer;
use crate::query::ast::Query;
use crate::query::parser::QueryParser;
use crate::search::executor::QueryExecutor;
use crate::search::results::{self, SearchResults};

/// One corpus, one frozen index, and the pieces needed to query it.
pub struct Database {
    config: Config,
    corpus: Corpus,
    preprocessor: Arc<dyn Preprocessor>,
    query_parser: QueryParser,
    executor: QueryExecutor,
}

impl Database {
    /// Load the manifest and build the index with the configured analyzer.
    pub fn open(manifest: &Path, config: Config) -> Result<Self> {
        let analyzer = AnalyzerRegistry::with_case(config.lowercase).get(&config.analyzer)?;
        let corpus = Corpus::from_manifest(manifest)?;
        info!(
            manifest = %manifest.display(),
            documents = corpus.len(),
            analyzer = %config.analyzer,
            pipeline = %analyzer.pipeline(),
            "corpus loaded"
        );
        Self::build(corpus, analyzer, config)
    }

    pub fn build(corpus: Corpus, preprocessor: Arc<dyn Preprocessor>, config: Config) -> Result<Self> {
        let index = IndexWriter::build(preprocessor.clone(), &corpus)?;
        let executor = QueryExecutor::new(Arc::new(index), corpus.universe());

        Ok(Self {
            query_parser: QueryParser::with_case(config.lowercase),
            config,
            corpus,
            preprocessor,
            executor,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn index(&self) -> &InvertedIndex {
        &self.executor.index
    }

    /// Parse, then bring each term into index space. A term the
    /// preprocessor drops becomes the empty term, which no index holds, so
    /// it matches nothing (and its negation matches everything).
    pub fn parse_query(&self, query_str: &str) -> Result<Query> {
        let query = self.query_parser.parse(query_str)?;
        if !self.config.analyze_query_terms {
            return Ok(query);
        }
        Ok(query.map_terms(|term| {
            self.preprocessor.normalize_term(term).unwrap_or_else(|| {
                debug!(term, "query term dropped by the preprocessor");
                String::new()
            })
        }))
    }

    pub fn search(&self, query_str: &str) -> Result<SearchResults> {
        let query = self.parse_query(query_str)?;
        if query.is_empty() {
            warn!("empty query, nothing matches");
        }

        for atom in query.atoms().filter(|atom| !self.index().contains_term(&atom.term)) {
            info!(term = %atom.term, negated = atom.negated, "term not in index");
        }

        let results = self.executor.execute_query(&query);
        info!(query = %query, hits = results.total_hits(), took_ms = results.took_ms, "search finished");
        Ok(results)
    }

    pub fn save_index(&self) -> Result<()> {
        serializer::save_index(self.index(), &self.config.index_path)
    }

    pub fn save_results(&self, results: &SearchResults) -> Result<()> {
        results::save_results(results, &self.corpus, self.config.result_paths, &self.config.result_path)
    }

    /// The whole batch job: read the query, build, persist the index, answer
    /// the query, persist the answer. An unreadable query file stops before
    /// any output; a malformed query stops before the result file.
    pub fn run(manifest: &Path, query_file: &Path, config: Config) -> Result<SearchResults> {
        let query = read_query(query_file)?;

        let db = Database::open(manifest, config)?;
        db.save_index()?;

        let results = db.search(&query)?;
        db.save_results(&results)?;
        Ok(results)
    }
}
