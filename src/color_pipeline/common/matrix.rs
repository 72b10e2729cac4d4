//! Fixed matrix shapes used by the pipeline.

use nalgebra::SMatrix;

/// Number of patches on a supported color chart.
pub const PATCH_COUNT: usize = 24;

/// 24x3 chart, one patch per row.
pub type ChartMatrix = SMatrix<f64, PATCH_COUNT, 3>;

/// 24x4 regression design matrix `[xyz | 1]`.
pub type DesignMatrix = SMatrix<f64, PATCH_COUNT, 4>;

/// 4x3 color correction matrix, last row is the intercept.
pub type CcmMatrix = SMatrix<f64, 4, 3>;

/// 3x3 primaries matrix.
pub type Matrix3 = SMatrix<f64, 3, 3>;
