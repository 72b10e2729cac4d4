//! Common utilities module
//!
//! This module contains the error type and matrix shapes shared across the pipeline.

pub mod error;
pub mod matrix;

pub use error::{CcmError, ChartRole, Result};
pub use matrix::{CcmMatrix, ChartMatrix, DesignMatrix, Matrix3, PATCH_COUNT};
