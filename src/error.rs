//! Error types for cipherbench.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type for cipherbench operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while provisioning, transforming or timing a cipher.
#[derive(Debug, Error)]
pub enum Error {
    /// Key or IV length does not match what the cipher configuration requires.
    #[error("invalid key material for {config}: got {key_len}-byte key and {iv_len}-byte IV")]
    InvalidKeyMaterial {
        config: String,
        key_len: usize,
        iv_len: usize,
    },

    /// Decrypt input is not a whole number of blocks or carries bad padding.
    #[error("malformed ciphertext")]
    MalformedCiphertext,

    /// Opening, reading or writing a file failed.
    #[error("I/O failure on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing a report row to the output sink failed.
    #[error("failed to write report: {0}")]
    Report(#[source] io::Error),
}

impl Error {
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
