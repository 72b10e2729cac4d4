//! computeCCM - fit a color correction matrix between two chart measurements

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{error, info};

use compute_ccm_rs::color_pipeline::{CcmPipeline, InputDomain, PipelineConfig, SolveMethod};
use compute_ccm_rs::logger;

#[derive(Parser)]
#[command(name = "computeCCM")]
#[command(author, version, about = "Compute a color correction matrix from two 24 patch charts")]
#[command(long_about = "
Fits the 4x3 affine matrix mapping the source chart onto the reference chart
in linear CIE XYZ, and writes it as a four line CSV table.

Chart files have one header line followed by 24 lines of `label,R,G,B`.

Examples:
  computeCCM reference.csv source.csv
  computeCCM reference.csv source.csv out.csv --gamma 2.2
  computeCCM reference.csv source.csv --strict --method normal -v
")]
struct Cli {
    /// Reference chart CSV
    reference: PathBuf,

    /// Source (measured) chart CSV
    source: PathBuf,

    /// Output CCM CSV
    #[arg(default_value = "ccm.csv")]
    output: PathBuf,

    /// Gamma value of reference and source data
    #[arg(short, long, default_value_t = 1.0, value_parser = parse_gamma)]
    gamma: f64,

    /// Reject chart values outside [0, 1] instead of clamping them
    #[arg(long)]
    strict: bool,

    /// Least-squares solve method
    #[arg(long, value_enum, default_value_t = Method::Svd)]
    method: Method,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Method {
    /// Singular value decomposition
    Svd,
    /// Normal equations (AᵀA)⁻¹AᵀB
    Normal,
}

impl From<Method> for SolveMethod {
    fn from(method: Method) -> Self {
        match method {
            Method::Svd => SolveMethod::Svd,
            Method::Normal => SolveMethod::NormalEquations,
        }
    }
}

fn parse_gamma(s: &str) -> std::result::Result<f64, String> {
    let gamma: f64 = s.parse().map_err(|e| format!("`{s}` is not a number: {e}"))?;
    if gamma.is_finite() && gamma > 0.0 {
        Ok(gamma)
    } else {
        Err(format!("gamma must be positive, got {s}"))
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = PipelineConfig::builder()
        .gamma(cli.gamma)
        .input_domain(if cli.strict {
            InputDomain::Reject
        } else {
            InputDomain::Clamp
        })
        .method(cli.method.into())
        .build();
    let pipeline = CcmPipeline::new(config);

    info!("Gamma: {}", pipeline.config().gamma);
    info!("Solve method: {:?}", pipeline.config().method);

    let report = pipeline
        .compute_files(&cli.reference, &cli.source, &cli.output)
        .with_context(|| {
            format!(
                "Failed to compute CCM from {} and {}",
                cli.reference.display(),
                cli.source.display()
            )
        })?;

    println!("CCM:");
    print!("{}", report.ccm);
    Ok(())
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };

    logger::init(cli.verbose);
    execute(&cli)
}

fn execute(cli: &Cli) -> ExitCode {
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
