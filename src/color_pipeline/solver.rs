//! CCM solving module

mod least_squares;
pub mod types;

pub use least_squares::CcmSolver;
pub use types::{
    CcmSolution, DEFAULT_RANK_TOLERANCE, FitDiagnostics, NORMAL_EQUATIONS_MAX_CONDITION,
    SolveMethod, validate_rank_tolerance,
};
