use std::borrow::Borrow;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use roaring::RoaringBitmap;
use crate::core::stats::IndexStats;
use crate::index::posting::{Posting, PostingList};

/// Term representation: a normalized index key
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Term(String);

impl Term {
    pub fn new(text: &str) -> Self {
        Term(text.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Term {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Case-insensitive order, ties broken by the raw bytes so it is total
pub fn term_order(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Inverted index structure. Read-only once the writer hands it out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvertedIndex {
    pub(crate) postings: HashMap<Term, PostingList>,
    pub(crate) doc_count: usize,
    pub(crate) total_tokens: usize,
}

impl InvertedIndex {
    pub fn new() -> Self {
        InvertedIndex {
            postings: HashMap::new(),
            doc_count: 0,
            total_tokens: 0,
        }
    }

    pub(crate) fn insert_posting(&mut self, term: &str, posting: Posting) {
        match self.postings.get_mut(term) {
            Some(list) => list.add_posting(posting),
            None => {
                let mut list = PostingList::new();
                list.add_posting(posting);
                self.postings.insert(Term::new(term), list);
            }
        }
    }

    pub fn search_term(&self, term: &str) -> Option<&PostingList> {
        self.postings.get(term)
    }

    /// Postings for `term`; an absent term has an empty posting sequence.
    pub fn postings(&self, term: &str) -> &[Posting] {
        self.search_term(term)
            .map(|list| list.postings.as_slice())
            .unwrap_or(&[])
    }

    pub fn matching_docs(&self, term: &str) -> RoaringBitmap {
        self.search_term(term)
            .map(PostingList::doc_ids)
            .unwrap_or_default()
    }

    pub fn contains_term(&self, term: &str) -> bool {
        self.postings.contains_key(term)
    }

    /// Get an iterator over all terms in the index
    pub fn terms(&self) -> impl Iterator<Item = &Term> {
        self.postings.keys()
    }

    /// Terms with their postings, in serialization order
    pub fn sorted_entries(&self) -> Vec<(&Term, &PostingList)> {
        let mut entries: Vec<_> = self.postings.iter().collect();
        entries.sort_by(|(a, _), (b, _)| term_order(a.as_str(), b.as_str()));
        entries
    }

    pub fn doc_count(&self) -> usize {
        self.doc_count
    }

    pub fn len(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            documents: self.doc_count,
            unique_terms: self.postings.len(),
            total_postings: self.postings.values().map(PostingList::len).sum(),
            total_tokens: self.total_tokens,
        }
    }
}
