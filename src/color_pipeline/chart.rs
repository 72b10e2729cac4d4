//! Color chart loading module
//!
//! This module parses 24 patch color chart tables into fixed-shape matrices.

mod reader;
mod csv_chart_reader;
pub mod types;

pub use reader::ChartReader;
pub use csv_chart_reader::CsvChartReader;
pub use types::{Chart, LinearChart};
