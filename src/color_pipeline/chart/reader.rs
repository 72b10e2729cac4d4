use crate::color_pipeline::chart::types::Chart;
use crate::color_pipeline::common::error::Result;

pub trait ChartReader {
    fn read_chart(&self, data: &str) -> Result<Chart>;
}
