use crate::color_pipeline::ccm::types::Ccm;
use crate::color_pipeline::common::error::{CcmError, Result};

/// Parses a CCM table written by [`CsvCcmWriter`](crate::color_pipeline::ccm::CsvCcmWriter).
///
/// Expects exactly four non-blank lines of three numbers each.
pub fn read_ccm(data: &str) -> Result<Ccm> {
    let lines: Vec<(usize, &str)> = data
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .collect();

    if lines.len() != 4 {
        return Err(CcmError::InvalidCcm(format!(
            "expected 4 rows, found {}",
            lines.len()
        )));
    }

    let mut rows = [[0.0; 3]; 4];
    for (row, (index, line)) in rows.iter_mut().zip(lines) {
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.len() != 3 {
            return Err(CcmError::InvalidCcm(format!(
                "line {}: expected 3 values, found {}",
                index + 1,
                fields.len()
            )));
        }
        for (column, (value, text)) in row.iter_mut().zip(fields).enumerate() {
            *value = text.parse().map_err(|_| CcmError::ParseError {
                line: index + 1,
                column: column + 1,
                value: text.to_string(),
            })?;
        }
    }

    Ok(Ccm::from_rows(rows))
}
