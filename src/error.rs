use thiserror::Error;

/// Errors raised while building or evaluating a network, or while emitting a
/// golden vector. All of them are programmer/configuration errors: the run
/// aborts and nothing is emitted.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum NnError {
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: String, actual: String },

    #[error("index ({row}, {col}) out of range for shape {rows}x{cols}")]
    IndexOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("invalid shape {rows}x{cols}: dimensions must be positive")]
    InvalidShape { rows: usize, cols: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("io error: {0}")]
    Io(String),
}

impl From<std::io::Error> for NnError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, NnError>;
