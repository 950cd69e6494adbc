//! Linear-interpolation mapping
//!
//! Replaces the `ln` of the logarithmic scheme with a piecewise-linear
//! surrogate built from the IEEE-754 decomposition: for
//! `x = m * 2^e` with `m` in `[1, 2)`, the surrogate is `L(x) = e + (m - 1)`.
//! `L` agrees with log2 at every power of two and interpolates linearly
//! in between, so it is monotone and exactly invertible without any
//! transcendental calls on the insert path.
//!
//! The surrogate's slope with respect to `ln(x)` reaches 1 at the bottom of
//! each octave (versus `log2`'s constant `1/ln 2`), so the index multiplier
//! is tightened to `1 / ln(gamma)`. That keeps the value-range ratio of
//! every bucket at most gamma, which preserves the alpha guarantee at the
//! cost of more buckets per octave than the logarithmic scheme.

use crate::common::Result;
use crate::mapping::{error_midpoint, ieee_decompose, require_positive};

/// Value-to-index mapping with a linearly interpolated log2 surrogate
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearInterpolationMapping {
    relative_accuracy: f64,
    gamma: f64,
    /// Tightened index multiplier: 1 / ln(gamma)
    interpolation_multiplier: f64,
}

impl LinearInterpolationMapping {
    /// Creates a linear-interpolation mapping with the given relative accuracy
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
            interpolation_multiplier: 1.0 / gamma.ln(),
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

    /// Piecewise-linear log2 surrogate, exact at powers of two
    fn surrogate(value: f64) -> f64 {
        let (exponent, significand) = ieee_decompose(value);
        exponent as f64 + (significand - 1.0)
    }

    /// Exact inverse of [`Self::surrogate`]
    fn surrogate_inverse(surrogate: f64) -> f64 {
        let exponent = surrogate.floor();
        let fraction = surrogate - exponent;
        (1.0 + fraction) * f64::powi(2.0, exponent as i32)
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
