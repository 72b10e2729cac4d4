//! Shared fixtures for unit tests.

use crate::color_pipeline::chart::types::Chart;
use crate::color_pipeline::common::matrix::ChartMatrix;

/// Classic 24 patch ColorChecker in 8-bit sRGB.
pub const COLORCHECKER_SRGB8: [(&str, [u8; 3]); 24] = [
    ("dark skin", [115, 82, 68]),
    ("light skin", [194, 150, 130]),
    ("blue sky", [98, 122, 157]),
    ("foliage", [87, 108, 67]),
    ("blue flower", [133, 128, 177]),
    ("bluish green", [103, 189, 170]),
    ("orange", [214, 126, 44]),
    ("purplish blue", [80, 91, 166]),
    ("moderate red", [193, 90, 99]),
    ("purple", [94, 60, 108]),
    ("yellow green", [157, 188, 64]),
    ("orange yellow", [224, 163, 46]),
    ("blue", [56, 61, 150]),
    ("green", [70, 148, 73]),
    ("red", [175, 54, 60]),
    ("yellow", [231, 199, 31]),
    ("magenta", [187, 86, 149]),
    ("cyan", [8, 133, 161]),
    ("white", [243, 243, 242]),
    ("neutral 8", [200, 200, 200]),
    ("neutral 6.5", [160, 160, 160]),
    ("neutral 5", [122, 122, 121]),
    ("neutral 3.5", [85, 85, 85]),
    ("black", [52, 52, 52]),
];

pub fn colorchecker_rows() -> Vec<[f64; 3]> {
    COLORCHECKER_SRGB8
        .iter()
        .map(|(_, rgb)| rgb.map(|v| v as f64 / 255.0))
        .collect()
}

pub fn colorchecker_chart() -> Chart {
    Chart::from_rows(&colorchecker_rows()).expect("fixture has 24 rows")
}

/// A chart where every patch has the same value.
pub fn uniform_chart(rgb: [f64; 3]) -> Chart {
    Chart::from_matrix(ChartMatrix::from_fn(|_, c| rgb[c]))
}

/// Renders rows as a chart CSV with a header line.
pub fn chart_csv(rows: &[[f64; 3]]) -> String {
    let mut text = String::from("patch,R,G,B\n");
    for (i, rgb) in rows.iter().enumerate() {
        text.push_str(&format!("{},{},{},{}\n", i + 1, rgb[0], rgb[1], rgb[2]));
    }
    text
}

pub fn colorchecker_csv() -> String {
    chart_csv(&colorchecker_rows())
}
