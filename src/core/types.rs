use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use serde::{Serialize, Deserialize};
use crate::core::error::{Error, ErrorKind, Result};

/// Document id, assigned from 1 in manifest order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DocId(pub u32);

impl DocId {
    pub fn new(id: u32) -> Self {
        DocId(id)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl From<u32> for DocId {
    fn from(id: u32) -> Self {
        DocId(id)
    }
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocId,
    pub path: PathBuf,
}

impl Document {
    pub fn new(id: DocId, path: impl Into<PathBuf>) -> Self {
        Document {
            id,
            path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.to_string_lossy().into_owned())
    }

    /// Read the full document text; any failure is a missing document.
    pub fn read_text(&self) -> Result<String> {
        fs::read_to_string(&self.path).map_err(|e| {
            Error::new(
                ErrorKind::MissingDocument,
                format!("document {} ({}): {}", self.id, self.path.display(), e),
            )
        })
    }
}
