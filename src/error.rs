//! Error type for engine operations

use std::io;
use std::path::PathBuf;

/// Errors reported by the word graph and the word engine
///
/// File problems are always recoverable: the engine reports them and keeps
/// its previous state. The strict-mode variants only appear when
/// [`EngineConfig::strict`](crate::EngineConfig) is enabled.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Can't open file '{}': {source}", .path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("error reading '{}': {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("error writing '{}': {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("malformed DAWG file '{}': {reason}", .path.display())]
    MalformedDawg { path: PathBuf, reason: String },

    #[error("graph needs {0} edges, more than the DAWG format can address")]
    DawgTooLarge(usize),

    #[error("invalid word '{word}' at line {line}")]
    InvalidWord { word: String, line: usize },

    #[error("stem '{stem}' at line {line} has length {found}, expected {expected}")]
    StemLengthMismatch {
        stem: String,
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("invalid count '{value}' at line {line}")]
    InvalidCount { value: String, line: usize },

    #[error("unknown word group '{0}'")]
    UnknownGroup(String),

    #[error("word group '{0}' is not backed by a word list")]
    NotListGroup(String),

    #[error("invalid search condition '{0}'")]
    InvalidCondition(String),

    #[error("a definitions load is already in progress")]
    DefinitionsLoadInProgress,

    #[error("no definitions load is in progress")]
    NoDefinitionsLoad,

    #[error("definitions loader stopped before finishing")]
    LoaderDisconnected,

    #[error("can't start definitions loader: {0}")]
    SpawnLoader(#[source] io::Error),
}

impl Error {
    pub(crate) fn open(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn malformed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::MalformedDawg {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_error_names_file() {
        let err = Error::open(
            "/no/such/file.txt",
            io::Error::new(io::ErrorKind::NotFound, "not found"),
        );
        let message = err.to_string();
        assert!(message.starts_with("Can't open file '/no/such/file.txt'"));
        assert!(message.contains("not found"));
    }

    #[test]
    fn malformed_error_carries_reason() {
        let err = Error::malformed("words.dawg", "truncated edge table");
        assert_eq!(
            err.to_string(),
            "malformed DAWG file 'words.dawg': truncated edge table"
        );
    }

    #[test]
    fn stem_mismatch_message() {
        let err = Error::StemLengthMismatch {
            stem: "ABCDEFG".into(),
            line: 4,
            expected: 6,
            found: 7,
        };
        assert_eq!(
            err.to_string(),
            "stem 'ABCDEFG' at line 4 has length 7, expected 6"
        );
    }
}
