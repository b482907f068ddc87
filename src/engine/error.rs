// ============================================================================
// Filter Errors
// I/O failures that end a filter run
// ============================================================================

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read {input}: {source}")]
    Read {
        input: String,
        #[source]
        source: io::Error,
    },

    #[error("cannot write output: {0}")]
    Write(#[source] io::Error),
}

impl FilterError {
    /// The downstream reader closed the pipe, e.g. `fixlog | head`
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, FilterError::Write(e) if e.kind() == io::ErrorKind::BrokenPipe)
    }
}

pub type FilterResult<T> = Result<T, FilterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FilterError::Open {
            path: PathBuf::from("missing.log"),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file"),
        };
        assert_eq!(err.to_string(), "cannot open missing.log: No such file");

        let err = FilterError::Config("Input file name cannot be empty".to_string());
        assert_eq!(
            err.to_string(),
            "invalid configuration: Input file name cannot be empty"
        );
    }

    #[test]
    fn test_broken_pipe() {
        assert!(FilterError::Write(io::ErrorKind::BrokenPipe.into()).is_broken_pipe());
        assert!(!FilterError::Write(io::ErrorKind::Other.into()).is_broken_pipe());
        assert!(!FilterError::Read {
            input: "<stdin>".to_string(),
            source: io::ErrorKind::BrokenPipe.into(),
        }
        .is_broken_pipe());
    }
}
