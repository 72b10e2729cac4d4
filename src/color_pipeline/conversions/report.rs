//! Per-patch residuals of a fitted CCM.

use tracing::{debug, info};

use crate::color_pipeline::ccm::types::Ccm;
use crate::color_pipeline::chart::types::{Chart, LinearChart};
use crate::color_pipeline::colorspace::ColorSpaceConverter;
use crate::color_pipeline::common::matrix::PATCH_COUNT;
use crate::color_pipeline::solver::{CcmSolution, FitDiagnostics};

/// How far one corrected source patch lands from its reference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatchResidual {
    pub index: usize,
    /// Euclidean distance in XYZ
    pub xyz_error: f64,
    /// Signed mean channel difference of the encoded RGB values, in percent
    pub match_percent: f64,
}

#[derive(Debug, Clone)]
pub struct FitReport {
    pub ccm: Ccm,
    pub diagnostics: FitDiagnostics,
    pub patches: Vec<PatchResidual>,
    pub rms_error: f64,
    pub max_error: f64,
}

impl FitReport {
    /// Applies the solved CCM to the source chart and compares the result with
    /// the reference, both in XYZ and in the encoded RGB of `reference_raw`.
    pub fn build(
        solution: CcmSolution,
        converter: &ColorSpaceConverter,
        source_xyz: &LinearChart,
        reference_xyz: &LinearChart,
        reference_raw: &Chart,
    ) -> Self {
        let corrected_xyz = solution.ccm.apply(source_xyz);
        let corrected_rgb = converter.to_encoded_rgb(&corrected_xyz);

        let patches: Vec<PatchResidual> = (0..PATCH_COUNT)
            .map(|index| {
                let diff = corrected_xyz.matrix().row(index) - reference_xyz.matrix().row(index);
                let rgb_diff = corrected_rgb.matrix().row(index) - reference_raw.matrix().row(index);
                PatchResidual {
                    index,
                    xyz_error: diff.norm(),
                    match_percent: rgb_diff.mean() * 100.0,
                }
            })
            .collect();

        let rms_error = (patches.iter().map(|p| p.xyz_error.powi(2)).sum::<f64>()
            / PATCH_COUNT as f64)
            .sqrt();
        let max_error = patches.iter().map(|p| p.xyz_error).fold(0.0, f64::max);

        Self {
            ccm: solution.ccm,
            diagnostics: solution.diagnostics,
            patches,
            rms_error,
            max_error,
        }
    }

    pub fn log_summary(&self) {
        for patch in &self.patches {
            debug!(
                patch = patch.index + 1,
                xyz_error = patch.xyz_error,
                match_percent = format_args!("{:+.2}", patch.match_percent),
                "Patch residual"
            );
        }
        info!(
            rms_error = self.rms_error,
            max_error = self.max_error,
            condition = self.diagnostics.condition_number,
            "Fit complete"
        );
    }
}
