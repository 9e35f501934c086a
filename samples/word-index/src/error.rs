//! Error type for reading input into a word index

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading text into a [`WordIndex`](crate::WordIndex).
#[derive(Debug, Error)]
pub enum IndexError {
    /// An input file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        /// Path of the file that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Standard input could not be read
    #[error("failed to read standard input: {0}")]
    Stdin(#[source] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_read_error_message_names_the_path() {
        let error = IndexError::Read {
            path: PathBuf::from("missing.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(error.to_string(), "failed to read missing.txt: not found");
    }

    #[rstest]
    fn test_stdin_error_message() {
        let error = IndexError::Stdin(io::Error::other("closed"));
        assert_eq!(error.to_string(), "failed to read standard input: closed");
    }
}
