//! Error types for evreg.

use thiserror::Error;

/// Why a single persisted line could not be turned into an event (or an event into a line).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("expected 5 fields, found {0}")]
    FieldCount(usize),

    #[error("unknown category tag '{0}'")]
    UnknownCategory(String),

    #[error("invalid timestamp '{0}', expected YYYY-MM-DD HH:MM")]
    BadTimestamp(String),

    #[error("invalid escape sequence in '{0}'")]
    BadEscape(String),

    #[error("line is not valid UTF-8")]
    NotUtf8,

    #[error("{0} contains a comma or line break")]
    DelimiterInField(&'static str),
}

/// Errors that can occur in evreg operations.
#[derive(Error, Debug)]
pub enum EvregError {
    #[error("Malformed record on line {line}: {source}")]
    MalformedRecord {
        line: usize,
        #[source]
        source: RecordError,
    },

    #[error("Cannot store event: {0}")]
    UnencodableEvent(#[source] RecordError),

    #[error("Index {index} out of range (0..{len})")]
    IndexOutOfRange { index: i64, len: usize },

    #[error("Invalid index '{0}'")]
    InvalidIndexInput(String),

    #[error("Invalid category '{0}'. Expected one of: PARTY, SPORT, SHOW, OTHER")]
    InvalidCategoryInput(String),

    #[error("Invalid date/time '{0}'. Expected YYYY-MM-DD HH:MM")]
    InvalidTimestampInput(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for evreg operations.
pub type EvregResult<T> = Result<T, EvregError>;
