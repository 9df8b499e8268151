//! Error types for bm.
//!
//! Only conditions that stop forward progress live here. Decode anomalies never
//! become errors (they decode to `InputEvent::Unknown`), and degraded resources
//! such as a missing clipboard tool are logged instead.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BmError {
    /// Bad command line (unknown flag, conflicting modes).
    #[error("{0}")]
    Usage(String),

    #[error("No bookmarks found")]
    NoBookmarks,

    /// A path given on the command line could not be resolved.
    #[error("could not resolve `{}`: {source}", .path.display())]
    PathResolve {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not determine the home directory")]
    NoHome,

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, BmError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(BmError::NoBookmarks.to_string(), "No bookmarks found");

        let err = BmError::PathResolve {
            path: PathBuf::from("/nope"),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        };
        assert_eq!(
            err.to_string(),
            "could not resolve `/nope`: No such file or directory"
        );
    }

    #[test]
    fn test_io_conversion() {
        let err: BmError = io::Error::new(io::ErrorKind::Other, "boom").into();
        assert!(matches!(err, BmError::Io(_)));
        assert_eq!(err.to_string(), "boom");
    }
}
