//! Guarded loading of diff inputs.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

/// Errors raised while loading an input file.
#[derive(Debug, Error)]
pub enum InputError {
    /// The file exceeds the configured size limit.
    #[error("{path}: file is {actual_bytes} bytes, over the {max_bytes} byte limit")]
    TooLarge {
        /// Path of the refused file.
        path: PathBuf,
        /// Configured limit in bytes.
        max_bytes: u64,
        /// Size reported by the filesystem.
        actual_bytes: u64,
    },
    /// The file contents are not valid UTF-8.
    #[error("{path}: not valid UTF-8 text")]
    NotText {
        /// Path of the refused file.
        path: PathBuf,
    },
    /// The file could not be read at all.
    #[error("failed to read {path}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Reads a UTF-8 text file, refusing anything over `max_bytes`.
///
/// The size check runs on file metadata before any contents are read, so
/// an oversized file is rejected without being buffered.
pub fn read_text(path: &Path, max_bytes: u64) -> Result<String, InputError> {
    let metadata = fs::metadata(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    if metadata.len() > max_bytes {
        return Err(InputError::TooLarge {
            path: path.to_path_buf(),
            max_bytes,
            actual_bytes: metadata.len(),
        });
    }

    let bytes = fs::read(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "loaded input file");

    String::from_utf8(bytes).map_err(|_| InputError::NotText {
        path: path.to_path_buf(),
    })
}
