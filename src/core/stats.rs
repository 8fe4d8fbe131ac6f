use std::fmt;
use serde::{Serialize, Deserialize};

/// Index statistics, logged after a build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IndexStats {
    pub documents: usize,
    pub unique_terms: usize,
    pub total_postings: usize,
    pub total_tokens: usize,
}

impl fmt::Display for IndexStats {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} documents, {} terms, {} postings, {} tokens",
            self.documents, self.unique_terms, self.total_postings, self.total_tokens
        )
    }
}
