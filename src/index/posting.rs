use roaring::RoaringBitmap;
use serde::{Serialize, Deserialize};
use crate::core::types::DocId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Posting {
    pub doc_id: DocId,
    pub term_freq: u32,       // Term frequency in document
}

impl Posting {
    pub fn new(doc_id: DocId, term_freq: u32) -> Self {
        Posting { doc_id, term_freq }
    }
}

/// Posting list for a term
/// Note: Sorted by doc_id, at most one posting per document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostingList {
    pub postings: Vec<Posting>,  // Sorted by doc_id
}

impl PostingList {
    pub fn new() -> Self {
        PostingList {
            postings: Vec::new(),
        }
    }

    pub fn add_posting(&mut self, posting: Posting) {
        // Documents usually arrive in id order, so this is an append
        if self.postings.last().is_none_or(|last| last.doc_id < posting.doc_id) {
            self.postings.push(posting);
            return;
        }

        match self.postings.binary_search_by_key(&posting.doc_id, |p| p.doc_id) {
            Ok(pos) => {
                // Update existing posting
                self.postings[pos] = posting;
            }
            Err(pos) => {
                self.postings.insert(pos, posting);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    pub fn doc_ids(&self) -> RoaringBitmap {
        self.postings.iter().map(|p| p.doc_id.value()).collect()
    }
}
