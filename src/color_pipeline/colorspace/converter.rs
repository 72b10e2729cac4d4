use tracing::{debug, instrument};

use crate::color_pipeline::chart::types::{Chart, LinearChart};
use crate::color_pipeline::colorspace::gamma::{self, InputDomain};
use crate::color_pipeline::colorspace::primaries;
use crate::color_pipeline::common::error::Result;
use crate::color_pipeline::common::matrix::{ChartMatrix, PATCH_COUNT};

/// Converts gamma-encoded sRGB charts to linear XYZ and back.
#[derive(Debug, Clone, Copy)]
pub struct ColorSpaceConverter {
    gamma: f64,
    domain: InputDomain,
}

impl ColorSpaceConverter {
    pub fn new(gamma: f64, domain: InputDomain) -> Result<Self> {
        gamma::validate_gamma(gamma)?;
        Ok(Self { gamma, domain })
    }

    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    pub fn domain(&self) -> InputDomain {
        self.domain
    }

    /// Raises every value to `gamma` after applying the input domain policy.
    pub fn degamma(&self, chart: &Chart) -> Result<ChartMatrix> {
        let source = chart.matrix();
        let mut linear = ChartMatrix::zeros();
        for row in 0..PATCH_COUNT {
            for column in 0..3 {
                let value = gamma::check_domain(source[(row, column)], self.domain, row, column)?;
                linear[(row, column)] = gamma::degamma(value, self.gamma);
            }
        }
        Ok(linear)
    }

    /// Degamma followed by the sRGB to XYZ matrix.
    #[instrument(skip(self, chart), fields(gamma = self.gamma))]
    pub fn to_linear_xyz(&self, chart: &Chart) -> Result<LinearChart> {
        let linear = self.degamma(chart)?;
        let xyz = primaries::rgb_to_xyz(&linear);
        debug!("Converted chart to XYZ, first patch {:?}", xyz.row(0));
        Ok(LinearChart::from_matrix(xyz))
    }

    /// XYZ to linear sRGB followed by gamma encoding. Out of gamut values are
    /// clamped to [0, 1].
    pub fn to_encoded_rgb(&self, chart: &LinearChart) -> Chart {
        let rgb = primaries::xyz_to_rgb(chart.matrix()).map(|v| gamma::regamma(v, self.gamma));
        Chart::from_matrix(rgb)
    }
}
