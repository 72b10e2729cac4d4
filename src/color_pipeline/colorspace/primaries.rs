//! sRGB primaries with the D65 white point.

use crate::color_pipeline::common::matrix::{ChartMatrix, Matrix3};

/// Linear sRGB to CIE XYZ (D65).
#[rustfmt::skip]
pub fn srgb_to_xyz() -> Matrix3 {
    Matrix3::new(
        0.412391, 0.357584, 0.180481,
        0.212639, 0.715169, 0.072192,
        0.019331, 0.119195, 0.950532,
    )
}

/// CIE XYZ (D65) to linear sRGB.
#[rustfmt::skip]
pub fn xyz_to_srgb() -> Matrix3 {
    Matrix3::new(
         3.240970, -1.537383, -0.498611,
        -0.969244,  1.875968,  0.041555,
         0.055630, -0.203977,  1.056972,
    )
}

/// Multiplies every row vector of `chart` by `m`, i.e. `(m · chartᵀ)ᵀ`.
pub fn transform_rows(m: &Matrix3, chart: &ChartMatrix) -> ChartMatrix {
    chart * m.transpose()
}

/// Converts linear RGB rows to XYZ.
pub fn rgb_to_xyz(rgb: &ChartMatrix) -> ChartMatrix {
    transform_rows(&srgb_to_xyz(), rgb)
}

/// Converts XYZ rows to linear RGB.
pub fn xyz_to_rgb(xyz: &ChartMatrix) -> ChartMatrix {
    transform_rows(&xyz_to_srgb(), xyz)
}
