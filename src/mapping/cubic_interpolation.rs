//! Cubic-interpolation mapping
//!
//! Same IEEE-754 exponent split as the linear scheme, but the fractional
//! part of the log2 surrogate is a cubic polynomial
//! `P(s) = A*s^3 + B*s^2 + C*s` fitted to minimize the maximum relative
//! error on a single octave. `P(0) = 0` and `P(1) = 1`, so the surrogate is
//! continuous and monotone across octave boundaries.
//!
//! The polynomial's slope relative to log2 bottoms out at `C * ln 2`, so the
//! index multiplier is `1 / (C * ln(gamma))`: every bucket's value-range
//! ratio stays at most gamma and the alpha guarantee holds, with only about
//! 1% more buckets than the memory-optimal logarithmic scheme.

use crate::common::Result;
use crate::mapping::{error_midpoint, ieee_decompose, require_positive};

/// Cubic coefficients, minimax fit of log2 on one octave
const A: f64 = 6.0 / 35.0;
const B: f64 = -3.0 / 5.0;
const C: f64 = 10.0 / 7.0;

/// Value-to-index mapping with a cubically interpolated log2 surrogate
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CubicInterpolationMapping {
    relative_accuracy: f64,
    gamma: f64,
    /// Tightened index multiplier: 1 / (C * ln(gamma))
    interpolation_multiplier: f64,
}

impl CubicInterpolationMapping {
    /// Creates a cubic-interpolation mapping with the given relative accuracy
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `relative_accuracy` is outside (0, 1)
    pub fn new(relative_accuracy: f64) -> Result<Self> {
        crate::common::validation::validate_probability(relative_accuracy, "relative_accuracy")?;
        let gamma = (1.0 + relative_accuracy) / (1.0 - relative_accuracy);
        Ok(Self {
            relative_accuracy,
            gamma,
            interpolation_multiplier: 1.0 / (C * gamma.ln()),
        })
    }

    /// Returns the relative accuracy parameter (alpha)
    pub fn relative_accuracy(&self) -> f64 {
        self.relative_accuracy
    }

    /// Returns the bucket growth factor gamma
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Cubic log2 surrogate, exact at powers of two
    fn surrogate(value: f64) -> f64 {
        let (exponent, significand) = ieee_decompose(value);
        let s = significand - 1.0;
        exponent as f64 + ((A * s + B) * s + C) * s
    }

    /// Exact inverse of [`Self::surrogate`]: solves the cubic with Cardano's
    /// formula (the term under the square root stays positive on the whole
    /// octave, so there is a single real root)
    fn surrogate_inverse(surrogate: f64) -> f64 {
        let exponent = surrogate.floor();
        let target = surrogate - exponent;
        let delta_0 = B * B - 3.0 * A * C;
        let delta_1 = 2.0 * B * B * B - 9.0 * A * B * C - 27.0 * A * A * target;
        let cardano = ((delta_1 - (delta_1 * delta_1 - 4.0 * delta_0.powi(3)).sqrt()) / 2.0).cbrt();
        let s = -(B + cardano + delta_0 / cardano) / (3.0 * A);
        (1.0 + s) * f64::powi(2.0, exponent as i32)
    }

    /// Maps a positive value to its bucket index
    ///
    /// # Errors
    ///
    /// Returns `InvalidValue` if `value` is not strictly positive and finite
    pub fn index_of(&self, value: f64) -> Result<i32> {
        require_positive(value)?;
        Ok((Self::surrogate(value) * self.interpolation_multiplier).ceil() as i32)
    }

    /// Returns the representative value of bucket `index`
    ///
    /// Bucket endpoints come from the surrogate inverse at the bucket
    /// boundaries; the representative equalizes relative error to both.
    pub fn value_of(&self, index: i32) -> f64 {
        let upper = Self::surrogate_inverse(index as f64 / self.interpolation_multiplier);
        let lower = Self::surrogate_inverse((index - 1) as f64 / self.interpolation_multiplier);
        error_midpoint(lower, upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polynomial_endpoints() {
        // P(0) = 0 and P(1) = 1 keep the surrogate continuous across octaves
        assert!((A + B + C - 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_surrogate_inverse_round_trip() {
        for value in [0.004, 0.9, 1.0, 1.3, 1.9999, 7.5, 123456.0] {
            let w = CubicInterpolationMapping::surrogate(value);
            let back = CubicInterpolationMapping::surrogate_inverse(w);
            assert!(
                (back - value).abs() / value < 1e-10,
                "inverse drifted at {}: {}",
                value,
                back
            );
        }
    }

    #[test]
    fn test_round_trip_within_accuracy() {
        let mapping = CubicInterpolationMapping::new(0.02).unwrap();
        let mut value = 1e-9;
        while value < 1e9 {
            let recovered = mapping.value_of(mapping.index_of(value).unwrap());
            let relative_error = (recovered - value).abs() / value;
            assert!(
                relative_error <= 0.02,
                "round trip error {} at {}",
                relative_error,
                value
            );
            value *= 1.83;
        }
    }
}
