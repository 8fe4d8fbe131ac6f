use std::sync::Arc;
use roaring::RoaringBitmap;
use tracing::debug;
use crate::index::inverted::InvertedIndex;
use crate::query::ast::{AndGroup, Atom, Query};
use crate::search::results::SearchResults;

/// Resolves a parsed query to a document set by set algebra over postings
pub struct QueryExecutor {
    pub index: Arc<InvertedIndex>,
    universe: RoaringBitmap,
}

impl QueryExecutor {
    /// `universe` is the full id set `{1..N}` that negation complements
    pub fn new(index: Arc<InvertedIndex>, universe: RoaringBitmap) -> Self {
        QueryExecutor { index, universe }
    }

    pub fn execute_query(&self, query: &Query) -> SearchResults {
        let start = std::time::Instant::now();
        let matches = self.evaluate(query);

        SearchResults {
            matches,
            took_ms: start.elapsed().as_millis() as u64,
        }
    }

    /// Union of the groups; an empty query matches nothing
    pub fn evaluate(&self, query: &Query) -> RoaringBitmap {
        let mut result = RoaringBitmap::new();
        for group in &query.groups {
            result |= self.evaluate_group(group);
        }
        debug!(query = %query, hits = result.len(), "query evaluated");
        result
    }

    /// Left-to-right intersection; an empty group is the universe
    pub fn evaluate_group(&self, group: &AndGroup) -> RoaringBitmap {
        let mut atoms = group.atoms.iter();
        let Some(first) = atoms.next() else {
            return self.universe.clone();
        };

        let mut result = self.evaluate_atom(first);
        for atom in atoms {
            if result.is_empty() {
                break;
            }
            result &= self.evaluate_atom(atom);
        }
        result
    }

    /// Negation is taken against the universe before any combination,
    /// so an unknown negated term yields every document.
    pub fn evaluate_atom(&self, atom: &Atom) -> RoaringBitmap {
        let matched = self.index.matching_docs(&atom.term) & &self.universe;
        if atom.negated {
            &self.universe - matched
        } else {
            matched
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyzer::Analyzer;
    use crate::core::types::DocId;
    use crate::corpus::manifest::Corpus;
    use crate::index::index_writer::IndexWriter;
    use crate::query::parser::QueryParser;

    fn executor() -> QueryExecutor {
        let mut writer = IndexWriter::new(Arc::new(Analyzer::simple()));
        writer.index_document(DocId(1), "cat dog");
        writer.index_document(DocId(2), "dog bird");
        writer.index_document(DocId(3), "cat bird cat");
        QueryExecutor::new(Arc::new(writer.finish()), (1..=3u32).collect())
    }

    fn eval(executor: &QueryExecutor, query: &str) -> Vec<u32> {
        let query = QueryParser::new().parse(query).unwrap();
        executor.evaluate(&query).iter().collect()
    }

    #[test]
    fn test_scenario() {
        let ex = executor();
        assert_eq!(eval(&ex, "cat"), vec![1, 3]);
        assert_eq!(eval(&ex, "!cat"), vec![2]);
        assert_eq!(eval(&ex, "cat dog"), vec![1]);
        assert_eq!(eval(&ex, "cat | bird"), vec![1, 2, 3]);
    }

    #[test]
    fn test_unknown_terms() {
        let ex = executor();
        assert!(eval(&ex, "zzznoexist").is_empty());
        assert_eq!(eval(&ex, "!zzznoexist"), vec![1, 2, 3]);
        assert_eq!(eval(&ex, "cat !zzznoexist"), vec![1, 3]);
    }

    #[test]
    fn test_negation_before_intersection() {
        let ex = executor();
        // (NOT cat) AND (NOT dog) = {2} ∩ {3} = ∅, not NOT(cat AND dog)
        assert!(eval(&ex, "!cat !dog").is_empty());
        assert_eq!(eval(&ex, "!cat bird"), vec![2]);
        assert_eq!(eval(&ex, "bird !cat"), vec![2]);
    }

    #[test]
    fn test_set_laws_per_term() {
        let ex = executor();
        let all = vec![1, 2, 3];
        for t in ["cat", "dog", "bird", "fish"] {
            let pos: Vec<u32> = eval(&ex, t);
            let neg: Vec<u32> = eval(&ex, &format!("!{}", t));
            let expected: Vec<u32> = all.iter().copied().filter(|d| !pos.contains(d)).collect();
            assert_eq!(neg, expected, "term {}", t);

            for u in ["cat", "dog", "bird", "fish"] {
                let a = ex.evaluate(&QueryParser::new().parse(t).unwrap());
                let b = ex.evaluate(&QueryParser::new().parse(u).unwrap());
                assert_eq!(eval(&ex, &format!("{} {}", t, u)), (&a & &b).iter().collect::<Vec<_>>());
                assert_eq!(eval(&ex, &format!("{} | {}", t, u)), (&a | &b).iter().collect::<Vec<_>>());
            }
        }
    }

    #[test]
    fn test_empty_query_and_group() {
        let ex = executor();
        assert!(ex.evaluate(&Query::default()).is_empty());
        assert_eq!(ex.evaluate_group(&AndGroup::default()).len(), 3);
    }

    #[test]
    fn test_documents_without_terms_join_negations() {
        let mut writer = IndexWriter::new(Arc::new(Analyzer::simple()));
        writer.index_document(DocId(1), "cat");
        let corpus = Corpus::from_paths(["a.txt", "b.txt"]);
        let ex = QueryExecutor::new(Arc::new(writer.finish()), corpus.universe());
        assert_eq!(eval(&ex, "!cat"), vec![2]);
    }
}
