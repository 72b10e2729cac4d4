//! Chart reader for comma-separated patch tables.
//!
//! The expected layout is one header line followed by one line per patch:
//!
//! ```text
//! patch,R,G,B
//! dark skin,0.45,0.32,0.27
//! ...
//! ```
//!
//! The first field is a label and is ignored, as is anything after the blue
//! channel. Only the first 24 data lines are used.

use tracing::{debug, warn};

use crate::color_pipeline::chart::reader::ChartReader;
use crate::color_pipeline::chart::types::Chart;
use crate::color_pipeline::common::error::{CcmError, Result};
use crate::color_pipeline::common::matrix::PATCH_COUNT;

/// Minimum fields per data line: label plus three channels.
const MIN_FIELDS: usize = 4;

/// Reads charts from CSV text.
pub struct CsvChartReader;

impl ChartReader for CsvChartReader {
    /// Parses the header-prefixed CSV table into a [`Chart`].
    ///
    /// Rows are collected into a growable buffer first, so a short file fails
    /// with [`CcmError::RowCount`] instead of leaving patches unset.
    fn read_chart(&self, data: &str) -> Result<Chart> {
        let mut rows: Vec<[f64; 3]> = Vec::with_capacity(PATCH_COUNT);
        let mut lines = data.lines().enumerate().skip(1);

        for (index, line) in lines.by_ref() {
            if line.trim().is_empty() {
                continue;
            }
            rows.push(parse_patch_line(line, index + 1)?);
            if rows.len() == PATCH_COUNT {
                break;
            }
        }

        let ignored = lines.filter(|(_, l)| !l.trim().is_empty()).count();
        if ignored > 0 {
            warn!("Ignoring {} line(s) after the last chart patch", ignored);
        }

        debug!("Parsed {} chart rows", rows.len());
        Chart::from_rows(&rows)
    }
}

fn parse_patch_line(line: &str, line_number: usize) -> Result<[f64; 3]> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() < MIN_FIELDS {
        return Err(CcmError::MissingColumns {
            line: line_number,
            found: fields.len(),
        });
    }

    let mut rgb = [0.0; 3];
    for (channel, value) in rgb.iter_mut().enumerate() {
        let column = channel + 1;
        let text = fields[column].trim();
        *value = text
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| CcmError::ParseError {
                line: line_number,
                column: column + 1,
                value: text.to_string(),
            })?;
    }
    Ok(rgb)
}
