use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use roaring::RoaringBitmap;
use tracing::info;
use crate::core::config::ResultPathStyle;
use crate::core::error::{Error, ErrorKind, Result};
use crate::core::types::DocId;
use crate::corpus::manifest::Corpus;

/// Search results container
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResults {
    pub matches: RoaringBitmap,
    pub took_ms: u64,
}

impl SearchResults {
    pub fn total_hits(&self) -> u64 {
        self.matches.len()
    }

    /// Matching ids, ascending
    pub fn doc_ids(&self) -> impl Iterator<Item = DocId> + '_ {
        self.matches.iter().map(DocId::new)
    }
}

/// Count on the first line, then one document per line in id order.
pub fn write_results<W: Write>(
    results: &SearchResults,
    corpus: &Corpus,
    style: ResultPathStyle,
    mut writer: W,
) -> Result<()> {
    writeln!(writer, "{}", results.total_hits())?;

    for doc_id in results.doc_ids() {
        let doc = corpus.get(doc_id).ok_or_else(|| {
            Error::new(
                ErrorKind::InvalidArgument,
                format!("document {} is not in the corpus", doc_id),
            )
        })?;

        match style {
            ResultPathStyle::Full => writeln!(writer, "{}", doc.path().display())?,
            ResultPathStyle::FileName => writeln!(writer, "{}", doc.file_name())?,
        }
    }

    writer.flush()?;
    Ok(())
}

pub fn save_results(
    results: &SearchResults,
    corpus: &Corpus,
    style: ResultPathStyle,
    path: &Path,
) -> Result<()> {
    let file = File::create(path).map_err(|e| {
        Error::new(ErrorKind::Io, format!("result file {}: {}", path.display(), e))
    })?;
    write_results(results, corpus, style, BufWriter::new(file))?;
    info!(path = %path.display(), hits = results.total_hits(), "results written");
    Ok(())
}
