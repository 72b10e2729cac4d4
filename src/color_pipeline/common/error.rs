use std::fmt;

use thiserror::Error;

/// Which of the two charts an error originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartRole {
    Reference,
    Source,
}

impl fmt::Display for ChartRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartRole::Reference => write!(f, "reference"),
            ChartRole::Source => write!(f, "source"),
        }
    }
}

#[derive(Error, Debug)]
pub enum CcmError {
    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Line {line}: expected at least 4 comma-separated fields, found {found}")]
    MissingColumns { line: usize, found: usize },

    #[error("Line {line}, column {column}: cannot parse {value:?} as a number")]
    ParseError {
        line: usize,
        column: usize,
        value: String,
    },

    #[error("Expected {expected} chart rows, found {found}")]
    RowCount { expected: usize, found: usize },

    #[error("Invalid {role} chart: {source}")]
    InvalidChart {
        role: ChartRole,
        source: Box<CcmError>,
    },

    #[error("Patch {row}, channel {column}: value {value} is outside [0, 1]")]
    OutOfRange {
        row: usize,
        column: usize,
        value: f64,
    },

    #[error("Gamma must be a positive finite number, got {0}")]
    InvalidGamma(f64),

    #[error("Rank tolerance must be a finite non-negative number, got {0}")]
    InvalidRankTolerance(f64),

    #[error("Chart contains a non-finite value after conversion, cannot fit")]
    NonFiniteInput,

    #[error("Design matrix is singular or ill-conditioned (rank {rank} of 4, condition number {condition:e})")]
    DegenerateFit { rank: usize, condition: f64 },

    #[error("Invalid CCM table: {0}")]
    InvalidCcm(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CcmError>;
