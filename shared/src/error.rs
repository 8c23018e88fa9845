//! Errors raised while reading mission documents and route stores.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A mission document is missing a required field or carries a value that
/// cannot be used.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("missing field `{field}` in {document}")]
    MissingField { document: String, field: String },

    #[error("invalid value for `{field}` in {document}: {reason}")]
    InvalidValue {
        document: String,
        field: String,
        reason: String,
    },

    #[error("malformed document {document}: {reason}")]
    Malformed { document: String, reason: String },

    #[error("cannot read document {document}")]
    Unreadable {
        document: String,
        #[source]
        source: io::Error,
    },
}

impl ValidationError {
    pub fn missing(document: &str, field: impl Into<String>) -> Self {
        ValidationError::MissingField {
            document: document.to_owned(),
            field: field.into(),
        }
    }

    pub fn invalid(document: &str, field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidValue {
            document: document.to_owned(),
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Name of the offending field, if the error is about a single field.
    pub fn field(&self) -> Option<&str> {
        match self {
            ValidationError::MissingField { field, .. }
            | ValidationError::InvalidValue { field, .. } => Some(field),
            _ => None,
        }
    }

    pub fn document(&self) -> &str {
        match self {
            ValidationError::MissingField { document, .. }
            | ValidationError::InvalidValue { document, .. }
            | ValidationError::Malformed { document, .. }
            | ValidationError::Unreadable { document, .. } => document,
        }
    }
}

/// The route store cannot be opened or queried.
#[derive(Debug, Error)]
pub enum DataSourceError {
    #[error("cannot open route store {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("route store {} failed", path.display())]
    Sqlite {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("route store {} failed", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("route store {} has no `{column}` column", path.display())]
    MissingColumn { path: PathBuf, column: &'static str },

    #[error("route store {} row {row}: {reason}", path.display())]
    InvalidRow {
        path: PathBuf,
        row: usize,
        reason: String,
    },

    #[error(
        "route store {} has a non-positive travel time {travel_time} between {origin} and {destination}",
        path.display()
    )]
    InvalidTravelTime {
        path: PathBuf,
        origin: String,
        destination: String,
        travel_time: i64,
    },
}
