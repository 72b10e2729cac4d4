//! CCM pipeline configuration types

use crate::color_pipeline::colorspace::InputDomain;
use crate::color_pipeline::solver::{DEFAULT_RANK_TOLERANCE, SolveMethod};

/// Configuration for chart to CCM fitting
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Power applied to both charts to linearize them (1.0 = already linear)
    pub gamma: f64,
    /// Handling of chart values outside [0, 1]
    pub input_domain: InputDomain,
    /// Least-squares solve strategy
    pub method: SolveMethod,
    /// Singular values below `rank_tolerance * largest` count as zero
    pub rank_tolerance: f64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            gamma: 1.0,
            input_domain: InputDomain::Clamp,
            method: SolveMethod::Svd,
            rank_tolerance: DEFAULT_RANK_TOLERANCE,
        }
    }
}

impl PipelineConfig {
    pub fn builder() -> PipelineConfigBuilder {
        PipelineConfigBuilder::default()
    }
}

/// Builder for PipelineConfig
#[derive(Default)]
pub struct PipelineConfigBuilder {
    gamma: Option<f64>,
    input_domain: Option<InputDomain>,
    method: Option<SolveMethod>,
    rank_tolerance: Option<f64>,
}

impl PipelineConfigBuilder {
    pub fn gamma(mut self, gamma: f64) -> Self {
        self.gamma = Some(gamma);
        self
    }

    pub fn input_domain(mut self, domain: InputDomain) -> Self {
        self.input_domain = Some(domain);
        self
    }

    pub fn method(mut self, method: SolveMethod) -> Self {
        self.method = Some(method);
        self
    }

    pub fn rank_tolerance(mut self, tolerance: f64) -> Self {
        self.rank_tolerance = Some(tolerance);
        self
    }

    pub fn build(self) -> PipelineConfig {
        let default = PipelineConfig::default();
        PipelineConfig {
            gamma: self.gamma.unwrap_or(default.gamma),
            input_domain: self.input_domain.unwrap_or(default.input_domain),
            method: self.method.unwrap_or(default.method),
            rank_tolerance: self.rank_tolerance.unwrap_or(default.rank_tolerance),
        }
    }
}
