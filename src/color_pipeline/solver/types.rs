//! Solver configuration and result types

use crate::color_pipeline::ccm::types::Ccm;
use crate::color_pipeline::common::error::{CcmError, Result};

/// Default relative threshold on singular values of the design matrix.
pub const DEFAULT_RANK_TOLERANCE: f64 = 1e-10;

/// Largest design matrix condition number accepted by
/// [`SolveMethod::NormalEquations`]. Forming `AᵀA` squares it, and the square
/// must stay well below `1 / f64::EPSILON`.
pub const NORMAL_EQUATIONS_MAX_CONDITION: f64 = 1e6;

/// Rank tolerance must be finite and non-negative.
pub fn validate_rank_tolerance(tolerance: f64) -> Result<()> {
    if tolerance.is_finite() && tolerance >= 0.0 {
        Ok(())
    } else {
        Err(CcmError::InvalidRankTolerance(tolerance))
    }
}

/// Least-squares solve strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SolveMethod {
    /// Solve from the singular value decomposition of the design matrix
    #[default]
    Svd,
    /// Closed form `(AᵀA)⁻¹AᵀB`; squares the condition number
    NormalEquations,
}

/// Conditioning of the regression design matrix
#[derive(Debug, Clone, PartialEq)]
pub struct FitDiagnostics {
    /// Singular values in decreasing order
    pub singular_values: [f64; 4],
    /// Ratio of the largest to the smallest singular value
    pub condition_number: f64,
    /// Number of singular values above the rank threshold
    pub rank: usize,
}

/// Result of a successful fit
#[derive(Debug, Clone)]
pub struct CcmSolution {
    pub ccm: Ccm,
    pub diagnostics: FitDiagnostics,
}
