use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors produced while loading, mutating or persisting records.
#[derive(Error, Debug)]
pub enum RecordError {
    /// The input could not be opened. Nothing was read.
    #[error("cannot read from {}: {source}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        source: io::Error,
    },

    /// The output could not be created. Nothing was written.
    #[error("cannot write to {}: {source}", path.display())]
    DestinationUnavailable {
        path: PathBuf,
        source: io::Error,
    },

    /// A line could not be parsed as the type its field requires.
    #[error("line {line}: field '{field}' has malformed value '{value}'")]
    MalformedField {
        line: usize,
        field: String,
        value: String,
    },

    /// The source ended in the middle of a record.
    #[error("line {line}: unexpected end of input while reading field '{field}'")]
    UnexpectedEnd {
        line: usize,
        field: String,
    },

    #[error("record count must not be negative, found {count}")]
    NegativeCount {
        count: i64,
    },

    /// Parsed values do not line up with the fields of the record being built.
    #[error("values do not match the {expected} fields of a {record}")]
    SchemaMismatch {
        record: &'static str,
        expected: usize,
    },

    /// A vehicle can only be driven a positive distance.
    #[error("distance must be positive, found {distance}")]
    InvalidDistance {
        distance: i64,
    },

    #[error("driving {distance} km would overflow odometer at {odometer} km")]
    OdometerOverflow {
        odometer: i64,
        distance: i64,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl RecordError {
    pub(crate) fn source_unavailable(path: &Path, source: io::Error) -> Self {
        RecordError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn destination_unavailable(path: &Path, source: io::Error) -> Self {
        RecordError::DestinationUnavailable {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn malformed_field(line: usize, field: &str, value: &str) -> Self {
        RecordError::MalformedField {
            line,
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    pub(crate) fn unexpected_end(line: usize, field: &str) -> Self {
        RecordError::UnexpectedEnd {
            line,
            field: field.to_string(),
        }
    }
}

/// Result type for record operations
pub type RecordResult<T> = Result<T, RecordError>;
