use std::io::Write;

use crate::color_pipeline::ccm::types::Ccm;
use crate::color_pipeline::common::error::Result;

pub trait CcmWriter {
    fn write_ccm(&self, ccm: &Ccm, output: &mut dyn Write) -> Result<()>;
}
