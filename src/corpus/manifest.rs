use std::fs;
use std::path::{Path, PathBuf};
use roaring::RoaringBitmap;
use tracing::debug;
use crate::core::error::{Error, ErrorKind, Result};
use crate::core::types::{DocId, Document};

/// Ordered document list; position `i` holds the document with id `i + 1`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    documents: Vec<Document>,
}

impl Corpus {
    /// Read a manifest: one document path per line, ids assigned in order.
    pub fn from_manifest(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| {
            Error::new(
                ErrorKind::MissingManifest,
                format!("{}: {}", path.display(), e),
            )
        })?;

        let corpus = Self::parse_manifest(&text);
        debug!(manifest = %path.display(), documents = corpus.len(), "manifest loaded");
        Ok(corpus)
    }

    /// Blank lines are skipped and do not consume an id.
    pub fn parse_manifest(text: &str) -> Self {
        Self::from_paths(
            text.lines()
                .map(str::trim_end)
                .filter(|line| !line.trim_start().is_empty()),
        )
    }

    pub fn from_paths<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let documents = paths.into_iter()
            .enumerate()
            .map(|(i, path)| Document::new(DocId::new(i as u32 + 1), path))
            .collect();

        Corpus { documents }
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn get(&self, id: DocId) -> Option<&Document> {
        let index = (id.value() as usize).checked_sub(1)?;
        self.documents.get(index)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Every id in the corpus, `{1..N}`
    pub fn universe(&self) -> RoaringBitmap {
        let mut all = RoaringBitmap::new();
        if !self.documents.is_empty() {
            all.insert_range(1..=self.documents.len() as u32);
        }
        all
    }
}

/// The whole query file, trimmed. Newlines act as ordinary whitespace.
pub fn read_query(path: &Path) -> Result<String> {
    let text = fs::read_to_string(path).map_err(|e| {
        Error::new(ErrorKind::Io, format!("query file {}: {}", path.display(), e))
    })?;
    Ok(text.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_follow_manifest_order() {
        let corpus = Corpus::parse_manifest("docs/a.txt  \n\ndocs/b.txt\r\n   \ndocs/c.txt");
        assert_eq!(corpus.len(), 3);
        assert_eq!(corpus.get(DocId(1)).unwrap().path, PathBuf::from("docs/a.txt"));
        assert_eq!(corpus.get(DocId(2)).unwrap().path, PathBuf::from("docs/b.txt"));
        assert_eq!(corpus.get(DocId(3)).unwrap().path, PathBuf::from("docs/c.txt"));
        assert!(corpus.get(DocId(0)).is_none());
        assert!(corpus.get(DocId(4)).is_none());
    }

    #[test]
    fn test_universe() {
        let corpus = Corpus::from_paths(["a", "b", "c"]);
        assert_eq!(corpus.universe().iter().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert!(Corpus::default().universe().is_empty());
    }

    #[test]
    fn test_missing_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let err = Corpus::from_manifest(&dir.path().join("nope.txt")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingManifest);
    }

    #[test]
    fn test_read_query_trims() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("query.txt");
        fs::write(&path, "\n  cat\ndog | !bird \n\n").unwrap();
        assert_eq!(read_query(&path).unwrap(), "cat\ndog | !bird");
    }
}
