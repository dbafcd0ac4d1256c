//! Error types for treesum
//!
//! Two layers:
//! - `RecordError`: a single record could not be tokenized or applied to the tree
//! - `TranscriptError`: everything that can stop a whole run (bad line, I/O, JSON)
//!
//! Every error is terminal for the build. Nothing is retried and no
//! default is substituted for a bad value.

use thiserror::Error;

/// A record-level failure, raised by the tokenizer or the tree builder.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// A numeric field is not a non-negative integer, or a required field is missing
    #[error("malformed record: {token:?}")]
    MalformedRecord { token: String },

    /// `cd ..` was issued while already at the root
    #[error("cannot navigate above the root directory")]
    NavigationUnderflow,

    /// Adding this file would push the total size past `u64::MAX`
    #[error("total size overflows at file {name:?}")]
    SizeOverflow { name: String },

    /// A `$` command other than `cd` or `ls`
    #[error("unknown command: {command:?}")]
    UnknownCommand { command: String },
}

impl RecordError {
    pub(crate) fn malformed(token: impl Into<String>) -> Self {
        Self::MalformedRecord {
            token: token.into(),
        }
    }
}

/// Top-level error type for loading a transcript and reporting on it.
#[derive(Error, Debug)]
pub enum TranscriptError {
    /// A record failed at a specific (1-based) transcript line
    #[error("line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: RecordError,
    },

    /// Reading the transcript failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing output failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TranscriptError {
    /// The record-level cause, if this error came from a transcript line.
    pub fn record_error(&self) -> Option<&RecordError> {
        match self {
            TranscriptError::Line { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Result type alias for transcript operations
pub type Result<T> = std::result::Result<T, TranscriptError>;
