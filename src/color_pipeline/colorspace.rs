//! Color space conversion module
//!
//! Gamma decoding and the fixed sRGB (D65) to CIE XYZ transform.

pub mod gamma;
pub mod primaries;
mod converter;

pub use converter::ColorSpaceConverter;
pub use gamma::InputDomain;
