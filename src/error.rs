//! Error taxonomy for the storage engine.
//!
//! A single enum spans every failure mode surfaced by the frame codec, the
//! column codecs, the metadata document, and the table writer/reader. Callers
//! match on the variant when they need to distinguish a caller mistake
//! (`InvalidArgument`) from an environment problem (`Io`) from a format
//! problem (`Corrupt`).

use std::path::PathBuf;

/// Errors produced by the storage engine.
#[derive(Debug, thiserror::Error)]
pub enum SawError {
    /// A caller-supplied argument was missing or malformed: an empty parent
    /// directory, an unrecognized column type tag, a metadata record with a
    /// field that doesn't parse.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The underlying filesystem or stream failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file was structurally unreadable: a truncated frame, invalid
    /// modified-UTF-8, or a dictionary whose sections don't agree with the
    /// row count and unique-value count recorded in metadata.
    #[error("corrupt data: {0}")]
    Corrupt(String),

    /// Cooperative cancellation was observed and surfaced to the driver.
    #[error("interrupted")]
    Interrupted,

    /// A worker task failed for a reason that isn't I/O (a thread panicked,
    /// or its computation failed outright).
    #[error("internal error: {0}")]
    Internal(String),
}

impl SawError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SawError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<serde_json::Error> for SawError {
    fn from(err: serde_json::Error) -> Self {
        SawError::Corrupt(format!("malformed metadata document: {err}"))
    }
}

pub type Result<T> = std::result::Result<T, SawError>;
