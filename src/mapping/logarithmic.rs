//! Logarithmic mapping: the exact, reference scheme
//!
//! `k = ceil(ln(x) / ln(gamma))`, so bucket `k` covers the half-open value
//! range `(gamma^(k-1), gamma^k]`. Simple and exact; costs one `ln` per
//! insert. The representative `gamma^k * 2 / (1 + gamma)` has relative error
//! exactly alpha at both bucket ends.

use crate::common::Result;
use crate::mapping::require_positive;

/// Exact logarithmic value-to-index mapping
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogarithmicMapping {
    relative_accuracy: f64,
    gamma: f64,
    /// 1 / ln(gamma), cached so inserts cost a multiply instead of a divide
    multiplier: f64,
}

impl LogarithmicMapping {
    /// Creates a logarithmic mapping with the given relative accuracy
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
            multiplier: 1.0 / gamma.ln(),
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

    /// Maps a positive value to its bucket index
    ///
    /// # Errors
    ///
    /// Returns `InvalidValue` if `value` is not strictly positive and finite
    pub fn index_of(&self, value: f64) -> Result<i32> {
        require_positive(value)?;
        Ok((value.ln() * self.multiplier).ceil() as i32)
    }

    /// Returns the representative value of bucket `index`
    ///
    /// The geometric bucket range is `(gamma^(index-1), gamma^index]`; the
    /// representative equalizes relative error to both ends.
    pub fn value_of(&self, index: i32) -> f64 {
        self.gamma.powf(index as f64) * (2.0 / (1.0 + self.gamma))
    }
}
