use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};
use crate::analysis::preprocessor::Preprocessor;
use crate::corpus::manifest::Corpus;
use crate::core::error::Result;
use crate::core::types::DocId;
use crate::index::inverted::InvertedIndex;
use crate::index::posting::Posting;
use crate::index::serializer::is_storable_term;

/// IndexWriter owns the inverted index while it is being built.
/// `finish` freezes it; nothing reads the index before that.
pub struct IndexWriter {
    pub preprocessor: Arc<dyn Preprocessor>,
    inverted_index: InvertedIndex,
}

impl IndexWriter {
    pub fn new(preprocessor: Arc<dyn Preprocessor>) -> Self {
        IndexWriter {
            preprocessor,
            inverted_index: InvertedIndex::new(),
        }
    }

    /// Index one document's text under `doc_id`
    pub fn index_document(&mut self, doc_id: DocId, text: &str) {
        let terms = self.preprocessor.lemmatize(text);

        // Single pass tally, one posting per distinct term
        let mut term_freqs: HashMap<&str, u32> = HashMap::new();
        let mut kept = 0;
        for term in &terms {
            if !is_storable_term(term) {
                debug!(doc = %doc_id, term = ?term, "term dropped, not representable in the index file");
                continue;
            }
            *term_freqs.entry(term.as_str()).or_insert(0) += 1;
            kept += 1;
        }

        debug!(doc = %doc_id, tokens = kept, distinct = term_freqs.len(), "document indexed");

        for (term, freq) in term_freqs {
            self.inverted_index.insert_posting(term, Posting::new(doc_id, freq));
        }

        self.inverted_index.total_tokens += kept;
        self.inverted_index.doc_count = self.inverted_index.doc_count.max(doc_id.value() as usize);
    }

    /// Read and index every document. The first unreadable document aborts
    /// the build; no partial index escapes.
    pub fn index_corpus(&mut self, corpus: &Corpus) -> Result<()> {
        for doc in corpus.documents() {
            let text = doc.read_text()?;
            self.index_document(doc.id, &text);
        }
        self.inverted_index.doc_count = self.inverted_index.doc_count.max(corpus.len());
        Ok(())
    }

    /// Freeze the index
    pub fn finish(self) -> InvertedIndex {
        let index = self.inverted_index;
        info!("index built: {}", index.stats());
        index
    }

    pub fn build(preprocessor: Arc<dyn Preprocessor>, corpus: &Corpus) -> Result<InvertedIndex> {
        let mut writer = IndexWriter::new(preprocessor);
        writer.index_corpus(corpus)?;
        Ok(writer.finish())
    }
}
