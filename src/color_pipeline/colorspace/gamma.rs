//! Power-law gamma decoding and encoding.
//!
//! Values are expected to be normalized to [0, 1]. Negative bases have no real
//! power, so every value goes through an [`InputDomain`] check first.

use crate::color_pipeline::common::error::{CcmError, Result};

/// What to do with values outside [0, 1] before exponentiation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputDomain {
    /// Clamp values into [0, 1].
    #[default]
    Clamp,
    /// Fail with [`CcmError::OutOfRange`].
    Reject,
}

pub fn validate_gamma(gamma: f64) -> Result<()> {
    if gamma.is_finite() && gamma > 0.0 {
        Ok(())
    } else {
        Err(CcmError::InvalidGamma(gamma))
    }
}

/// Decodes a single value: `v^gamma`.
#[inline]
pub fn degamma(v: f64, gamma: f64) -> f64 {
    v.clamp(0.0, 1.0).powf(gamma)
}

/// Encodes a single linear value: `l^(1/gamma)`.
#[inline]
pub fn regamma(l: f64, gamma: f64) -> f64 {
    l.clamp(0.0, 1.0).powf(1.0 / gamma)
}

/// Applies the domain policy to one value. `row` and `column` are only used
/// for error reporting.
pub fn check_domain(value: f64, policy: InputDomain, row: usize, column: usize) -> Result<f64> {
    match policy {
        InputDomain::Clamp => Ok(value.clamp(0.0, 1.0)),
        InputDomain::Reject if (0.0..=1.0).contains(&value) => Ok(value),
        InputDomain::Reject => Err(CcmError::OutOfRange { row, column, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_unit_gamma_is_identity() {
        for v in [0.0, 0.18, 0.5, 1.0] {
            assert_eq!(degamma(v, 1.0), v);
        }
    }

    #[test]
    fn test_degamma_then_regamma_roundtrip() {
        for gamma in [0.45, 1.0, 2.2, 2.4] {
            for i in 0..=20 {
                let v = i as f64 / 20.0;
                assert_relative_eq!(regamma(degamma(v, gamma), gamma), v, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_degamma_clamps_negative() {
        assert_eq!(degamma(-0.2, 2.2), 0.0);
        assert_eq!(degamma(1.3, 2.2), 1.0);
    }

    #[test]
    fn test_validate_gamma() {
        assert!(validate_gamma(2.2).is_ok());
        assert!(matches!(validate_gamma(0.0), Err(CcmError::InvalidGamma(_))));
        assert!(validate_gamma(-1.0).is_err());
        assert!(validate_gamma(f64::NAN).is_err());
        assert!(validate_gamma(f64::INFINITY).is_err());
    }

    #[test]
    fn test_check_domain() {
        assert_eq!(check_domain(-0.1, InputDomain::Clamp, 0, 0).unwrap(), 0.0);
        assert_eq!(check_domain(0.4, InputDomain::Reject, 0, 0).unwrap(), 0.4);
        let err = check_domain(1.5, InputDomain::Reject, 3, 2).unwrap_err();
        assert!(matches!(err, CcmError::OutOfRange { row: 3, column: 2, .. }));
    }
}
