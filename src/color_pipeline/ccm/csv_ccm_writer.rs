use std::io::Write;

use tracing::debug;

use crate::color_pipeline::ccm::types::Ccm;
use crate::color_pipeline::ccm::writer::CcmWriter;
use crate::color_pipeline::common::error::{CcmError, Result};

/// Writes the CCM as four headerless `c0,c1,c2` lines.
///
/// Floats use Rust's shortest round-trip formatting, so reading the table back
/// with [`read_ccm`](crate::color_pipeline::ccm::read_ccm) reproduces the matrix exactly.
pub struct CsvCcmWriter;

impl CcmWriter for CsvCcmWriter {
    fn write_ccm(&self, ccm: &Ccm, output: &mut dyn Write) -> Result<()> {
        let mut text = String::new();
        for row in ccm.rows() {
            text.push_str(&format!("{},{},{}\n", row[0], row[1], row[2]));
        }

        output
            .write_all(text.as_bytes())
            .and_then(|_| output.flush())
            .map_err(|e| CcmError::OutputWriteError(e.to_string()))?;

        debug!("Wrote CCM table, {} bytes", text.len());
        Ok(())
    }
}
