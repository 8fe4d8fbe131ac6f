use std::fs;
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use crate::core::error::Result;

/// How matched documents are named in the result file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultPathStyle {
    #[default]
    Full,       // Path exactly as listed in the manifest
    FileName,   // Final path component only
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub index_path: PathBuf,
    pub result_path: PathBuf,

    // Preprocessing
    pub analyzer: String,
    pub lowercase: bool,
    pub analyze_query_terms: bool,

    pub result_paths: ResultPathStyle,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            index_path: PathBuf::from("indice.txt"),
            result_path: PathBuf::from("resposta.txt"),
            analyzer: "portuguese".to_string(),
            lowercase: true,
            analyze_query_terms: true,
            result_paths: ResultPathStyle::Full,
        }
    }
}

impl Config {
    /// Load a JSON config; missing fields fall back to defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ErrorKind;

    #[test]
    fn test_partial_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "analyzer": "simple", "result_paths": "file_name" }"#).unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.analyzer, "simple");
        assert_eq!(config.result_paths, ResultPathStyle::FileName);
        assert_eq!(config.index_path, PathBuf::from("indice.txt"));
        assert!(config.lowercase);
    }

    #[test]
    fn test_malformed_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ analyzer = simple }").unwrap();

        let err = Config::from_file(&path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
    }
}
