//! Color correction pipeline module
//!
//! This module fits a color correction matrix between two measurements of a
//! 24 patch chart, with separate modules for chart loading, color space
//! conversion, the least-squares solve, and CCM output.

pub mod chart;
pub mod colorspace;
pub mod solver;
pub mod ccm;
pub mod conversions;
pub mod common;

#[cfg(test)]
pub(crate) mod test_support;

pub use common::{
    CcmError,
    ChartRole,
    Result,
};

pub use chart::{
    Chart,
    LinearChart,
    ChartReader,
    CsvChartReader,
};

pub use colorspace::{
    ColorSpaceConverter,
    InputDomain,
};

pub use solver::{
    CcmSolver,
    CcmSolution,
    FitDiagnostics,
    SolveMethod,
};

pub use ccm::{
    Ccm,
    CcmWriter,
    CsvCcmWriter,
    read_ccm,
};

pub use conversions::{
    CcmPipeline,
    FitReport,
    PatchResidual,
    PipelineConfig,
    PipelineConfigBuilder,
};
