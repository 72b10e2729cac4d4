//! Color correction matrix type

use std::fmt;

use crate::color_pipeline::chart::types::LinearChart;
use crate::color_pipeline::common::matrix::{CcmMatrix, Matrix3};

/// Affine 4x3 transform from source XYZ to reference XYZ.
///
/// A corrected patch is `[x y z 1] · M`: rows 0 to 2 hold the linear part and
/// row 3 holds the per-channel intercept.
#[derive(Debug, Clone, PartialEq)]
pub struct Ccm {
    matrix: CcmMatrix,
}

impl Ccm {
    pub fn from_matrix(matrix: CcmMatrix) -> Self {
        Self { matrix }
    }

    pub fn from_rows(rows: [[f64; 3]; 4]) -> Self {
        Self {
            matrix: CcmMatrix::from_fn(|r, c| rows[r][c]),
        }
    }

    /// Linear part is the identity, intercept is zero.
    pub fn identity() -> Self {
        Self {
            matrix: CcmMatrix::identity(),
        }
    }

    pub fn matrix(&self) -> &CcmMatrix {
        &self.matrix
    }

    pub fn linear(&self) -> Matrix3 {
        self.matrix.fixed_rows::<3>(0).into_owned()
    }

    pub fn offset(&self) -> [f64; 3] {
        [self.matrix[(3, 0)], self.matrix[(3, 1)], self.matrix[(3, 2)]]
    }

    pub fn rows(&self) -> [[f64; 3]; 4] {
        let mut rows = [[0.0; 3]; 4];
        for (r, row) in rows.iter_mut().enumerate() {
            for (c, value) in row.iter_mut().enumerate() {
                *value = self.matrix[(r, c)];
            }
        }
        rows
    }

    /// Corrects every patch of an XYZ chart.
    pub fn apply(&self, chart: &LinearChart) -> LinearChart {
        LinearChart::from_matrix(chart.homogeneous() * self.matrix)
    }
}

impl fmt::Display for Ccm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            writeln!(f, "[{:>12.6} {:>12.6} {:>12.6}]", row[0], row[1], row[2])?;
        }
        Ok(())
    }
}
