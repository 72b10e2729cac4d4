//! Pipeline conversions module
//!
//! Orchestrates chart loading, XYZ conversion, the CCM fit, and output.

mod chart_to_ccm;
pub mod config;
pub mod report;


pub use chart_to_ccm::CcmPipeline;
pub use config::{PipelineConfig, PipelineConfigBuilder};
pub use report::{FitReport, PatchResidual};
