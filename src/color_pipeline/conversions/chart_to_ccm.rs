use std::io::Write;
use std::path::Path;

use tracing::{info, instrument};

use crate::color_pipeline::{
    ccm::{CcmWriter, CsvCcmWriter},
    chart::{Chart, ChartReader, CsvChartReader, LinearChart},
    colorspace::ColorSpaceConverter,
    common::error::{CcmError, ChartRole, Result},
    conversions::{config::PipelineConfig, report::FitReport},
    solver::{CcmSolver, validate_rank_tolerance},
};

pub struct CcmPipeline<R: ChartReader, W: CcmWriter> {
    reader: R,
    writer: W,
    config: PipelineConfig,
}

impl CcmPipeline<CsvChartReader, CsvCcmWriter> {
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            reader: CsvChartReader,
            writer: CsvCcmWriter,
            config,
        }
    }
}

impl<R: ChartReader, W: CcmWriter> CcmPipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: PipelineConfig) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    fn load_chart(&self, role: ChartRole, data: &str) -> Result<Chart> {
        self.reader.read_chart(data).map_err(|e| CcmError::InvalidChart {
            role,
            source: Box::new(e),
        })
    }

    fn linearize(
        &self,
        converter: &ColorSpaceConverter,
        role: ChartRole,
        chart: &Chart,
    ) -> Result<LinearChart> {
        converter.to_linear_xyz(chart).map_err(|e| CcmError::InvalidChart {
            role,
            source: Box::new(e),
        })
    }

    /// Fits the CCM mapping the source chart onto the reference chart.
    #[instrument(skip_all, fields(gamma = self.config.gamma))]
    pub fn compute(&self, reference_data: &str, source_data: &str) -> Result<FitReport> {
        info!("Starting CCM computation");

        let converter = ColorSpaceConverter::new(self.config.gamma, self.config.input_domain)?;
        validate_rank_tolerance(self.config.rank_tolerance)?;

        let (reference_raw, source_raw) = {
            let _span = tracing::info_span!("load_charts").entered();
            (
                self.load_chart(ChartRole::Reference, reference_data)?,
                self.load_chart(ChartRole::Source, source_data)?,
            )
        };

        let (reference_xyz, source_xyz) = {
            let _span = tracing::info_span!("convert_to_xyz").entered();
            (
                self.linearize(&converter, ChartRole::Reference, &reference_raw)?,
                self.linearize(&converter, ChartRole::Source, &source_raw)?,
            )
        };

        let solution = {
            let _span = tracing::info_span!("solve_ccm", method = ?self.config.method).entered();
            CcmSolver::new(self.config.method, self.config.rank_tolerance)
                .solve(&source_xyz, &reference_xyz)?
        };

        let report = {
            let _span = tracing::info_span!("fit_report").entered();
            FitReport::build(solution, &converter, &source_xyz, &reference_xyz, &reference_raw)
        };
        report.log_summary();

        Ok(report)
    }

    /// Like [`compute`](Self::compute), then writes the CCM table to `output`.
    pub fn compute_to_writer(
        &self,
        reference_data: &str,
        source_data: &str,
        output: &mut dyn Write,
    ) -> Result<FitReport> {
        let report = self.compute(reference_data, source_data)?;
        {
            let _span = tracing::info_span!("write_ccm").entered();
            self.writer.write_ccm(&report.ccm, output)?;
        }
        Ok(report)
    }

    /// Reads both chart files, fits, and writes the CCM to `output_path`.
    ///
    /// The output file is created only after a successful fit.
    #[instrument(skip(self, reference_path, source_path, output_path))]
    pub fn compute_files<P: AsRef<Path>, Q: AsRef<Path>, O: AsRef<Path>>(
        &self,
        reference_path: P,
        source_path: Q,
        output_path: O,
    ) -> Result<FitReport> {
        let reference_path = reference_path.as_ref();
        let source_path = source_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            reference = %reference_path.display(),
            source = %source_path.display(),
            output = %output_path.display(),
            "Computing CCM from files"
        );

        let (reference_data, source_data) = {
            let _span = tracing::info_span!("read_input_files").entered();
            (read_input(reference_path)?, read_input(source_path)?)
        };

        let report = self.compute(&reference_data, &source_data)?;

        let mut output_file = {
            let _span = tracing::info_span!("create_output_file").entered();
            std::fs::File::create(output_path).map_err(|e| {
                CcmError::OutputWriteError(format!("{}: {}", output_path.display(), e))
            })?
        };

        self.writer
            .write_ccm(&report.ccm, &mut output_file)
            .map_err(|e| match e {
                CcmError::OutputWriteError(msg) => {
                    CcmError::OutputWriteError(format!("{}: {}", output_path.display(), msg))
                }
                other => other,
            })?;

        info!(output = %output_path.display(), "CCM written");
        Ok(report)
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: PipelineConfig) {
        self.config = config;
    }
}

fn read_input(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .map_err(|e| CcmError::InputReadError(format!("{}: {}", path.display(), e)))
}
