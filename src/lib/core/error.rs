//! Error types for the sigmat library

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatrixError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Header JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Matrix shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),

    #[error("Compression error: {0}")]
    Compression(gzp::GzpError),

    #[error("Malformed matrix file at line {line}: {message}")]
    Format { line: usize, message: String },

    #[error("'{0}' is not a valid group")]
    UnknownGroup(String),

    #[error("'{0}' is not a valid sample")]
    UnknownSample(String),

    #[error("Region '{0}' is not present in the first matrix")]
    UnknownRegion(String),

    #[error("Region name '{0}' occurs more than once; rows cannot be matched unambiguously")]
    DuplicateRegionName(String),

    #[error("You specified {actual} {kind} labels, but {expected} are required")]
    LabelCountMismatch {
        kind: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid {kind} boundaries {boundaries:?}: {reason}")]
    InvalidBoundaries {
        kind: &'static str,
        boundaries: Vec<usize>,
        reason: String,
    },

    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: String, actual: String },

    #[error("Empty input: {0}")]
    EmptyInput(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, MatrixError>;

impl From<gzp::GzpError> for MatrixError {
    fn from(err: gzp::GzpError) -> Self {
        match err {
            gzp::GzpError::Io(io_err) => MatrixError::Io(io_err),
            other => MatrixError::Compression(other),
        }
    }
}

impl MatrixError {
    pub(crate) fn format<S: Into<String>>(line: usize, message: S) -> Self {
        MatrixError::Format {
            line,
            message: message.into(),
        }
    }
}
