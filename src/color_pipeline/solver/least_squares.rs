//! Least-squares fit of the affine color correction matrix.
//!
//! Given the source chart `S` and reference chart `B` in XYZ, the solver builds
//! the design matrix `A = [S | 1]` (24x4) and finds the 4x3 `M` minimizing
//! `‖A·M − B‖²`.
//!
//! The design matrix is checked for rank before solving. A chart whose patches
//! do not span the homogeneous XYZ space (repeated or collinear colors) has
//! no unique solution, and the fit fails with [`CcmError::DegenerateFit`].
//! The normal equations additionally reject ill-conditioned charts, since
//! `AᵀA` squares the condition number.

use tracing::{debug, instrument, warn};

use crate::color_pipeline::ccm::types::Ccm;
use crate::color_pipeline::chart::types::LinearChart;
use crate::color_pipeline::common::error::{CcmError, Result};
use crate::color_pipeline::common::matrix::{CcmMatrix, DesignMatrix};
use crate::color_pipeline::solver::types::{
    CcmSolution, DEFAULT_RANK_TOLERANCE, FitDiagnostics, NORMAL_EQUATIONS_MAX_CONDITION,
    SolveMethod, validate_rank_tolerance,
};

/// Fits a [`Ccm`] mapping one XYZ chart onto another.
#[derive(Debug, Clone, Copy)]
pub struct CcmSolver {
    method: SolveMethod,
    rank_tolerance: f64,
}

impl Default for CcmSolver {
    fn default() -> Self {
        Self::new(SolveMethod::default(), DEFAULT_RANK_TOLERANCE)
    }
}

impl CcmSolver {
    pub fn new(method: SolveMethod, rank_tolerance: f64) -> Self {
        Self {
            method,
            rank_tolerance,
        }
    }

    pub fn method(&self) -> SolveMethod {
        self.method
    }

    #[instrument(skip_all, fields(method = ?self.method))]
    pub fn solve(&self, source: &LinearChart, reference: &LinearChart) -> Result<CcmSolution> {
        validate_rank_tolerance(self.rank_tolerance)?;

        let design = source.homogeneous();
        if !design.iter().chain(reference.matrix().iter()).all(|v| v.is_finite()) {
            return Err(CcmError::NonFiniteInput);
        }

        let svd = design.svd(true, true);
        let mut singular_values = [0.0; 4];
        for (dst, &s) in singular_values.iter_mut().zip(svd.singular_values.iter()) {
            *dst = s;
        }
        singular_values.sort_by(|a, b| b.total_cmp(a));

        let largest = singular_values[0];
        let smallest = singular_values[3];
        let threshold = largest * self.rank_tolerance;
        let rank = singular_values.iter().filter(|&&s| s > threshold).count();
        let condition_number = if smallest > 0.0 {
            largest / smallest
        } else {
            f64::INFINITY
        };

        debug!(
            ?singular_values,
            condition = condition_number,
            rank,
            "Design matrix conditioning"
        );

        if largest <= 0.0 || rank < 4 {
            warn!(rank, "Chart patches do not span the fit space");
            return Err(CcmError::DegenerateFit {
                rank,
                condition: condition_number,
            });
        }

        let matrix: CcmMatrix = match self.method {
            SolveMethod::Svd => svd
                .solve(reference.matrix(), threshold)
                .map_err(|_| CcmError::DegenerateFit {
                    rank,
                    condition: condition_number,
                })?,
            SolveMethod::NormalEquations => {
                if condition_number > NORMAL_EQUATIONS_MAX_CONDITION {
                    warn!(
                        condition = condition_number,
                        "Chart too ill-conditioned for the normal equations"
                    );
                    return Err(CcmError::DegenerateFit {
                        rank,
                        condition: condition_number,
                    });
                }
                normal_equations(&design, reference).ok_or(CcmError::DegenerateFit {
                    rank,
                    condition: condition_number,
                })?
            }
        };

        Ok(CcmSolution {
            ccm: Ccm::from_matrix(matrix),
            diagnostics: FitDiagnostics {
                singular_values,
                condition_number,
                rank,
            },
        })
    }
}

/// `(AᵀA)⁻¹AᵀB`, or `None` when `AᵀA` is not invertible.
fn normal_equations(design: &DesignMatrix, reference: &LinearChart) -> Option<CcmMatrix> {
    let design_t = design.transpose();
    let gram = design_t * design;
    let pinv = gram.try_inverse()? * design_t;
    Some(pinv * reference.matrix())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color_pipeline::colorspace::primaries;
    use crate::color_pipeline::common::matrix::ChartMatrix;
    use crate::color_pipeline::test_support::colorchecker_chart;
    use approx::assert_relative_eq;

    fn colorchecker_xyz() -> LinearChart {
        LinearChart::from_matrix(primaries::rgb_to_xyz(colorchecker_chart().matrix()))
    }

    #[rustfmt::skip]
    fn known_transform() -> CcmMatrix {
        CcmMatrix::new(
             0.92,  0.05,   0.02,
             0.10,  1.08,  -0.03,
            -0.02,  0.04,   0.95,
             0.01, -0.005,  0.02,
        )
    }

    #[test]
    fn test_identical_charts_give_identity() {
        let xyz = colorchecker_xyz();
        for method in [SolveMethod::Svd, SolveMethod::NormalEquations] {
            let solution = CcmSolver::new(method, DEFAULT_RANK_TOLERANCE)
                .solve(&xyz, &xyz)
                .unwrap();
            assert_relative_eq!(*solution.ccm.matrix(), CcmMatrix::identity(), epsilon = 1e-9);
        }
    }

    #[test]
    fn test_recovers_known_affine_transform() {
        let source = colorchecker_xyz();
        let k = known_transform();
        let reference = LinearChart::from_matrix(source.homogeneous() * k);

        for method in [SolveMethod::Svd, SolveMethod::NormalEquations] {
            let solution = CcmSolver::new(method, DEFAULT_RANK_TOLERANCE)
                .solve(&source, &reference)
                .unwrap();
            assert_relative_eq!(*solution.ccm.matrix(), k, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_diagnostics_for_well_conditioned_chart() {
        let xyz = colorchecker_xyz();
        let solution = CcmSolver::default().solve(&xyz, &xyz).unwrap();
        let d = solution.diagnostics;
        assert_eq!(d.rank, 4);
        assert!(d.condition_number.is_finite());
        assert!(d.condition_number >= 1.0);
        assert!(d.singular_values.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_identical_patches_are_degenerate() {
        let uniform = LinearChart::from_matrix(ChartMatrix::from_element(0.5));
        for method in [SolveMethod::Svd, SolveMethod::NormalEquations] {
            let err = CcmSolver::new(method, DEFAULT_RANK_TOLERANCE)
                .solve(&uniform, &uniform)
                .unwrap_err();
            assert!(matches!(err, CcmError::DegenerateFit { rank: 1, .. }));
        }
    }

    #[test]
    fn test_gray_ramp_is_degenerate() {
        let gray = ChartMatrix::from_fn(|r, _| (r as f64 + 1.0) / 24.0);
        let xyz = LinearChart::from_matrix(primaries::rgb_to_xyz(&gray));
        let err = CcmSolver::default().solve(&xyz, &xyz).unwrap_err();
        assert!(matches!(err, CcmError::DegenerateFit { rank: 2, .. }));
    }

    #[test]
    fn test_non_finite_input_is_rejected() {
        let mut matrix = *colorchecker_xyz().matrix();
        matrix[(5, 1)] = f64::NAN;
        let broken = LinearChart::from_matrix(matrix);
        let err = CcmSolver::default().solve(&broken, &colorchecker_xyz()).unwrap_err();
        assert!(matches!(err, CcmError::NonFiniteInput));
    }

    /// Patches within `eps` of the plane `z = (x + y) / 2`.
    fn near_planar_xyz(eps: f64) -> LinearChart {
        LinearChart::from_matrix(ChartMatrix::from_fn(|r, c| {
            let i = r as f64;
            let x = (i * 0.37 + 0.1).fract();
            let y = (i * 0.61 + 0.3).fract();
            match c {
                0 => x,
                1 => y,
                _ => (x + y) / 2.0 + eps * (((r * 7) % 5) as f64 - 2.0),
            }
        }))
    }

    #[test]
    fn test_ill_conditioned_chart_rejected_by_normal_equations() {
        let source = near_planar_xyz(1e-8);
        let k = known_transform();
        let reference = LinearChart::from_matrix(source.homogeneous() * k);

        let solution = CcmSolver::new(SolveMethod::Svd, DEFAULT_RANK_TOLERANCE)
            .solve(&source, &reference)
            .unwrap();
        assert!(solution.diagnostics.condition_number > NORMAL_EQUATIONS_MAX_CONDITION);
        assert_relative_eq!(*solution.ccm.matrix(), k, epsilon = 1e-6);

        let err = CcmSolver::new(SolveMethod::NormalEquations, DEFAULT_RANK_TOLERANCE)
            .solve(&source, &reference)
            .unwrap_err();
        assert!(matches!(err, CcmError::DegenerateFit { rank: 4, .. }));
    }

    #[test]
    fn test_invalid_rank_tolerance() {
        let gray = ChartMatrix::from_fn(|r, _| (r as f64 + 1.0) / 24.0);
        let xyz = LinearChart::from_matrix(primaries::rgb_to_xyz(&gray));
        for tolerance in [-1.0, f64::NAN, f64::INFINITY] {
            for method in [SolveMethod::Svd, SolveMethod::NormalEquations] {
                let err = CcmSolver::new(method, tolerance).solve(&xyz, &xyz).unwrap_err();
                assert!(matches!(err, CcmError::InvalidRankTolerance(_)));
            }
        }
        assert!(validate_rank_tolerance(0.0).is_ok());
    }
}
