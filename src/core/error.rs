use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Io,
    Parse,
    InvalidArgument,
    MissingManifest,
    MissingDocument,
    DanglingOperator,
    DanglingNegation,
}

#[derive(Debug)]
pub struct Error {
    pub kind: ErrorKind,
    pub context: String,
}

impl Error {
    pub fn new(kind: ErrorKind, context: String) -> Self {
        Error { kind, context }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Malformed query text, as opposed to an unreadable input or output.
    pub fn is_query_error(&self) -> bool {
        matches!(self.kind, ErrorKind::DanglingOperator | ErrorKind::DanglingNegation)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.context)
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error {
            kind: ErrorKind::Io,
            context: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error {
            kind: ErrorKind::Parse,
            context: format!("config: {}", err),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::new(ErrorKind::MissingManifest, "corpus.txt".to_string());
        assert_eq!(err.to_string(), "MissingManifest: corpus.txt");
    }

    #[test]
    fn test_query_errors() {
        assert!(Error::new(ErrorKind::DanglingNegation, String::new()).is_query_error());
        assert!(Error::new(ErrorKind::DanglingOperator, String::new()).is_query_error());
        assert!(!Error::new(ErrorKind::MissingDocument, String::new()).is_query_error());
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: Error = io.into();
        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(err.context.contains("gone"));
    }
}
