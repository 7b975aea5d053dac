//! Error handling for the growth reference engine.
//!
//! Errors fall into three categories: data errors raised while loading the
//! reference tables (fatal at startup), validation errors caused by the
//! caller's request, and lookup misses where no tabulated row matches.

use std::path::PathBuf;

use arrow::error::ArrowError;

use crate::models::{Indicator, Sex};
use crate::reference::TableId;

/// Errors produced by table loading, request validation, lookup and scoring
#[derive(Debug, thiserror::Error)]
pub enum GrowthError {
    /// A reference file could not be opened or read
    #[error("IO error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Arrow error while parsing a reference file
    #[error("Arrow error: {0}")]
    Arrow(#[from] ArrowError),

    /// A reference table lacks a required column
    #[error("Invalid table {table}: missing {column} column")]
    MissingColumn { table: TableId, column: String },

    /// A reference table is structurally or numerically invalid
    #[error("Invalid table {table}: {message}")]
    MalformedTable { table: TableId, message: String },

    /// A row whose parameters make the LMS transform undefined
    #[error("Degenerate reference row at key {key}: L={l}, M={m}, S={s}")]
    DegenerateRow { key: f64, l: f64, m: f64, s: f64 },

    /// Sex was not recognised
    #[error("Unknown sex: {0}")]
    UnknownSex(String),

    /// Indicator was not recognised
    #[error("Unknown indicator: {0}")]
    UnknownIndicator(String),

    /// An age-indexed indicator was requested without years and months
    #[error("Provide both years and months")]
    MissingAge,

    /// The measurement (or lookup length) required by the indicator is absent
    #[error("{}", missing_measurement_message(.indicator))]
    MissingMeasurement { indicator: Indicator },

    /// A supplied value is out of range
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: &'static str, value: String },

    /// No tabulated row equals the lookup key
    #[error("No data for given age or length")]
    NoMatch { sex: Sex, indicator: Indicator, key: f64 },
}

/// Coarse grouping of errors used by the HTTP boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Reference data is missing or invalid
    Data,
    /// The request is incomplete or malformed
    Validation,
    /// The request is valid but the key is not tabulated
    NoMatch,
}

impl GrowthError {
    /// Category of this error
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::Io { .. }
            | Self::Arrow(_)
            | Self::MissingColumn { .. }
            | Self::MalformedTable { .. }
            | Self::DegenerateRow { .. } => ErrorCategory::Data,
            Self::UnknownSex(_)
            | Self::UnknownIndicator(_)
            | Self::MissingAge
            | Self::MissingMeasurement { .. }
            | Self::InvalidValue { .. } => ErrorCategory::Validation,
            Self::NoMatch { .. } => ErrorCategory::NoMatch,
        }
    }

    /// Build a malformed-table error
    pub fn malformed(table: TableId, message: impl Into<String>) -> Self {
        Self::MalformedTable {
            table,
            message: message.into(),
        }
    }

    /// Build an invalid-value error
    pub fn invalid_value(field: &'static str, value: impl ToString) -> Self {
        Self::InvalidValue {
            field,
            value: value.to_string(),
        }
    }
}

const fn missing_measurement_message(indicator: &Indicator) -> &'static str {
    match *indicator {
        Indicator::LengthForAge => "Provide length (cm)",
        Indicator::WeightForAge => "Provide weight (kg)",
        Indicator::WeightForLength => "Provide both length (cm) and weight (kg)",
    }
}

/// Result type for growth reference operations
pub type Result<T> = std::result::Result<T, GrowthError>;
