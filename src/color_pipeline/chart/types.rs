//! Color chart data types

use crate::color_pipeline::common::error::{CcmError, Result};
use crate::color_pipeline::common::matrix::{ChartMatrix, DesignMatrix, PATCH_COUNT};

/// Gamma-encoded device RGB measurements of a 24 patch chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    matrix: ChartMatrix,
}

impl Chart {
    /// Builds a chart from parsed rows.
    ///
    /// Fails with [`CcmError::RowCount`] unless exactly [`PATCH_COUNT`] rows are given.
    pub fn from_rows(rows: &[[f64; 3]]) -> Result<Self> {
        if rows.len() != PATCH_COUNT {
            return Err(CcmError::RowCount {
                expected: PATCH_COUNT,
                found: rows.len(),
            });
        }
        let matrix = ChartMatrix::from_fn(|r, c| rows[r][c]);
        Ok(Self { matrix })
    }

    pub fn from_matrix(matrix: ChartMatrix) -> Self {
        Self { matrix }
    }

    pub fn matrix(&self) -> &ChartMatrix {
        &self.matrix
    }

    pub fn patch(&self, index: usize) -> [f64; 3] {
        [
            self.matrix[(index, 0)],
            self.matrix[(index, 1)],
            self.matrix[(index, 2)],
        ]
    }
}

/// Chart values in linear CIE XYZ.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearChart {
    matrix: ChartMatrix,
}

impl LinearChart {
    pub fn from_matrix(matrix: ChartMatrix) -> Self {
        Self { matrix }
    }

    pub fn matrix(&self) -> &ChartMatrix {
        &self.matrix
    }

    pub fn patch(&self, index: usize) -> [f64; 3] {
        [
            self.matrix[(index, 0)],
            self.matrix[(index, 1)],
            self.matrix[(index, 2)],
        ]
    }

    /// Appends a column of ones, giving the regression design matrix.
    pub fn homogeneous(&self) -> DesignMatrix {
        DesignMatrix::from_fn(|r, c| if c < 3 { self.matrix[(r, c)] } else { 1.0 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_requires_full_chart() {
        let rows = vec![[0.1, 0.2, 0.3]; 23];
        let err = Chart::from_rows(&rows).unwrap_err();
        assert!(matches!(err, CcmError::RowCount { expected: 24, found: 23 }));
    }

    #[test]
    fn test_from_rows_preserves_order() {
        let rows: Vec<[f64; 3]> = (0..24).map(|i| [i as f64, 0.0, 1.0]).collect();
        let chart = Chart::from_rows(&rows).unwrap();
        assert_eq!(chart.patch(0), [0.0, 0.0, 1.0]);
        assert_eq!(chart.patch(23), [23.0, 0.0, 1.0]);
    }

    #[test]
    fn test_homogeneous_appends_ones() {
        let linear = LinearChart::from_matrix(ChartMatrix::from_element(0.25));
        let design = linear.homogeneous();
        for r in 0..PATCH_COUNT {
            assert_eq!(design[(r, 2)], 0.25);
            assert_eq!(design[(r, 3)], 1.0);
        }
    }
}
