//! Error kinds for the load → filter → aggregate pipeline.
//!
//! Every failure the library can produce is a variant here; nothing is
//! retried or recovered internally. The binary converts to `anyhow` at the
//! top level and exits non-zero.

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum Error {
    /// The `--where` string contains none of `>`, `<`, `=`, or has an empty
    /// column side.
    #[error("invalid filter condition: {0:?}")]
    InvalidCondition(String),

    /// The `--aggregate` string is not of the form `column=function`.
    #[error("invalid aggregation spec: {0:?} (expected column=function)")]
    InvalidAggregateSpec(String),

    /// An operator outside `>`, `<`, `=` reached evaluation.
    #[error("unsupported operator: {0:?}")]
    UnsupportedOperator(String),

    /// An aggregation function outside avg/min/max.
    #[error("unsupported aggregation type: {0:?}")]
    UnsupportedAggregation(String),

    /// A condition or aggregation referenced a column no record has.
    #[error("column not found: {0:?}")]
    MissingColumn(String),

    /// A value in a numeric context could not be read as a number.
    #[error("non-numeric value {value:?} in column {column:?}")]
    NonNumericValue { column: String, value: String },

    /// avg/min/max over zero rows is undefined.
    #[error("cannot aggregate over an empty dataset")]
    EmptyAggregation,

    #[error("file not found: {0}")]
    FileNotFound(String),

    /// A data row's field count does not match the header. Row numbers are
    /// 1-based file lines, header included.
    #[error("row {row} has {found} fields, expected {expected}")]
    MalformedRow {
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error("failed to read input: {0}")]
    Read(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
