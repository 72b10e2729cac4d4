//! Color correction matrix module
//!
//! The fitted 4x3 transform and its CSV table format.

mod writer;
mod csv_ccm_writer;
mod csv_ccm_reader;
pub mod types;

pub use writer::CcmWriter;
pub use csv_ccm_writer::CsvCcmWriter;
pub use csv_ccm_reader::read_ccm;
pub use types::Ccm;
