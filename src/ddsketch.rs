//! DDSketch: quantile estimation with relative error guarantees (VLDB 2019)
//!
//! # Overview
//!
//! DDSketch answers quantile queries with **relative error** bounds: for a
//! queried quantile with true value `v`, the returned estimate `v'`
//! satisfies `|v' - v| <= alpha * |v|`. Error proportional to the value is
//! the right contract for metrics spanning orders of magnitude - latencies,
//! payload sizes, money - where a fixed absolute error is either useless at
//! the top of the range or unattainable at the bottom.
//!
//! # Key Features
//!
//! - **Relative accuracy**: error <= alpha x value, at every quantile
//! - **Fully mergeable**: combine shard-local sketches without losing the bound
//! - **Fast updates**: O(1) insertion
//! - **Bounded memory**: a per-store bucket cap with collapse-lowest overflow
//! - **Handles all values**: positive, negative (optional), and zero
//!
//! # Architecture
//!
//! A sketch composes one [mapping](crate::mapping) (value to bucket index)
//! with up to two [stores](crate::store) (bucket index to count) - one for
//! positive values, one for negated negatives - plus a dedicated zero
//! counter, because a relative-error contract cannot cover zero.
//!
//! # Example
//!
//! ```
//! use ddsketch_oxide::DDSketch;
//!
//! // 1% relative accuracy
//! let mut sketch = DDSketch::new(0.01).unwrap();
//!
//! for i in 1..=1000 {
//!     sketch.insert(i as f64).unwrap();
//! }
//!
//! let p50 = sketch.quantile(0.50).unwrap();
//! let p99 = sketch.quantile(0.99).unwrap();
//! assert!((p50 - 500.0).abs() <= 5.0);
//! assert!((p99 - 990.0).abs() <= 9.9);
//! ```
//!
//! # References
//!
//! - "DDSketch: A Fast and Fully-Mergeable Quantile Sketch with
//!   Relative-Error Guarantees" (Masson, Rim, Lee; VLDB 2019)

use crate::common::{validation, Mergeable, Result, Sketch, SketchError};
use crate::mapping::{Mapping, MappingScheme};
use crate::store::{BucketStrategy, Store};

/// Default total bucket budget for a sketch (split across stores when
/// negative values are enabled)
pub const DEFAULT_MAX_BUCKETS: u32 = 2048;

/// Construction-time configuration for [`DDSketch`]
///
/// Only `relative_accuracy` is required; the other fields default to the
/// values most workloads want. Chain the setters to override:
///
/// ```
/// use ddsketch_oxide::{BucketStrategy, DDSketchConfig, MappingScheme};
///
/// let sketch = DDSketchConfig::new(0.01)
///     .mapping(MappingScheme::CubicInterpolation)
///     .max_buckets(512)
///     .bucket_strategy(BucketStrategy::CollapsingSparse)
///     .allow_negative(false)
///     .build()
///     .unwrap();
/// assert_eq!(sketch.relative_accuracy(), 0.01);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DDSketchConfig {
    /// Target relative error alpha; must be in (0, 1)
    pub relative_accuracy: f64,
    /// Value-to-index mapping scheme
    pub mapping: MappingScheme,
    /// Total bucket budget; halved per store when negatives are enabled
    pub max_buckets: u32,
    /// Store implementation backing the bucket counts
    pub bucket_strategy: BucketStrategy,
    /// Whether a negative-value store is created
    pub allow_negative: bool,
}

impl DDSketchConfig {
    /// Creates a configuration with the given accuracy and default options:
    /// logarithmic mapping, 2048 buckets, dense stores, negatives enabled
    pub fn new(relative_accuracy: f64) -> Self {
        Self {
            relative_accuracy,
            mapping: MappingScheme::Logarithmic,
            max_buckets: DEFAULT_MAX_BUCKETS,
            bucket_strategy: BucketStrategy::FixedDense,
            allow_negative: true,
        }
    }

    /// Sets the mapping scheme
    pub fn mapping(mut self, scheme: MappingScheme) -> Self {
        self.mapping = scheme;
        self
    }

    /// Sets the total bucket budget
    pub fn max_buckets(mut self, max_buckets: u32) -> Self {
        self.max_buckets = max_buckets;
        self
    }

    /// Sets the store implementation
    pub fn bucket_strategy(mut self, strategy: BucketStrategy) -> Self {
        self.bucket_strategy = strategy;
        self
    }

    /// Enables or disables the negative-value store
    pub fn allow_negative(mut self, allow_negative: bool) -> Self {
        self.allow_negative = allow_negative;
        self
    }

    /// Builds the sketch
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the accuracy is outside (0, 1) or the
    /// bucket budget is zero or over the limit
    pub fn build(self) -> Result<DDSketch> {
        DDSketch::with_config(self)
    }
}

/// DDSketch for quantile estimation with relative error guarantees
///
/// # Algorithm
///
/// 1. **Mapping**: a positive value maps to bucket `k = ceil(log_gamma(v))`
///    where `gamma = (1 + alpha) / (1 - alpha)`; negatives map through their
///    absolute value into a second store; zeros go to a dedicated counter
/// 2. **Storage**: each store keeps per-bucket counts under a bucket cap,
///    folding the lowest buckets together when the cap would be exceeded
/// 3. **Quantile**: walk the stores in value order (negatives descending by
///    index, then zeros, then positives ascending) accumulating counts until
///    the target rank is passed, and return that bucket's representative
///
/// # Complexity
///
/// - **Insert / delete**: O(1) amortized
/// - **Quantile**: O(B) in present buckets (B <= `max_buckets`)
/// - **Merge**: O(B) in the source's present buckets
/// - **Space**: O(`max_buckets`) entries, the only sizable allocation
///
/// # Accuracy
///
/// For any quantile whose true value is `v`, the estimate `v'` satisfies
/// `|v' - v| <= alpha * |v|` - until a store collapses, after which
/// estimates inside the collapsed (lowest-index) region lose the bound but
/// stay monotone in `q`. The upper tail keeps full accuracy, which is the
/// point of collapsing from the head.
///
/// A sketch is a plain value: single-threaded mutation, no interior
/// synchronization. Share immutable references freely; guard mutation
/// externally.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DDSketch {
    config: DDSketchConfig,
    mapping: Mapping,
    positive: Store,
    negative: Option<Store>,
    zero_count: u64,
    min_value: f64,
    max_value: f64,
}

impl DDSketch {
    /// Creates a sketch with the given relative accuracy and default options
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `relative_accuracy` is outside (0, 1)
    ///
    /// # Example
    ///
    /// ```
    /// use ddsketch_oxide::DDSketch;
    ///
    /// let sketch = DDSketch::new(0.01).unwrap();  // 1% relative error
    /// assert!(DDSketch::new(1.5).is_err());
    /// ```
    pub fn new(relative_accuracy: f64) -> Result<Self> {
        DDSketchConfig::new(relative_accuracy).build()
    }

    /// Creates a sketch from an explicit configuration
    ///
    /// When negatives are enabled the bucket budget is split evenly between
    /// the positive and negative stores.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for an out-of-range accuracy or bucket
    /// budget
    pub fn with_config(config: DDSketchConfig) -> Result<Self> {
        validation::validate_max_buckets(config.max_buckets)?;
        let mapping = Mapping::new(config.mapping, config.relative_accuracy)?;
        let per_store = if config.allow_negative {
            (config.max_buckets / 2).max(1)
        } else {
            config.max_buckets
        };
        let positive = Store::new(config.bucket_strategy, per_store)?;
        let negative = if config.allow_negative {
            Some(Store::new(config.bucket_strategy, per_store)?)
        } else {
            None
        };
        Ok(Self {
            config,
            mapping,
            positive,
            negative,
            zero_count: 0,
            min_value: f64::INFINITY,
            max_value: f64::NEG_INFINITY,
        })
    }

    /// Inserts a value into the sketch
    ///
    /// # Errors
    ///
    /// Returns `InvalidValue` for non-finite values, and for negative values
    /// when the sketch was built with `allow_negative = false`. A failed
    /// insert leaves the sketch unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use ddsketch_oxide::DDSketch;
    ///
    /// let mut sketch = DDSketch::new(0.01).unwrap();
    /// sketch.insert(42.0).unwrap();
    /// sketch.insert(-10.5).unwrap();
    /// sketch.insert(0.0).unwrap();
    /// assert_eq!(sketch.count(), 3);
    /// ```
    pub fn insert(&mut self, value: f64) -> Result<()> {
        if !value.is_finite() {
            return Err(SketchError::InvalidValue {
                value,
                reason: "only finite values can be inserted".to_string(),
            });
        }
        if value == 0.0 {
            self.zero_count += 1;
        } else if value > 0.0 {
            let index = self.mapping.index_of(value)?;
            self.positive.add(index, 1);
        } else {
            let Some(negative) = self.negative.as_mut() else {
                return Err(SketchError::InvalidValue {
                    value,
                    reason: "negative values are disabled for this sketch".to_string(),
                });
            };
            let index = self.mapping.index_of(-value)?;
            negative.add(index, 1);
        }
        self.min_value = self.min_value.min(value);
        self.max_value = self.max_value.max(value);
        Ok(())
    }

    /// Deletes one occurrence of a value from the sketch
    ///
    /// Deletion is approximate: it decrements the bucket that `insert`
    /// would have incremented, with no guarantee the exact inserted value is
    /// the one removed. Deleting from an empty sketch, or a value whose
    /// bucket is absent, is a no-op. Min/max tracking is not re-derived.
    ///
    /// # Errors
    ///
    /// Returns `InvalidValue` for non-finite values, and for negative values
    /// when the sketch was built with `allow_negative = false`
    pub fn delete(&mut self, value: f64) -> Result<()> {
        if !value.is_finite() {
            return Err(SketchError::InvalidValue {
                value,
                reason: "only finite values can be deleted".to_string(),
            });
        }
        if value < 0.0 && self.negative.is_none() {
            return Err(SketchError::InvalidValue {
                value,
                reason: "negative values are disabled for this sketch".to_string(),
            });
        }
        if self.count() == 0 {
            return Ok(());
        }
        if value == 0.0 {
            if self.zero_count > 0 {
                self.zero_count -= 1;
            }
        } else if value > 0.0 {
            let index = self.mapping.index_of(value)?;
            self.positive.remove(index, 1);
        } else if let Some(negative) = self.negative.as_mut() {
            let index = self.mapping.index_of(-value)?;
            negative.remove(index, 1);
        }
        Ok(())
    }

    /// Returns the estimated value at quantile `q`
    ///
    /// The rank convention is `r = q * (N - 1)`; the walk crosses the
    /// negative store (descending index), the zero counter, then the
    /// positive store (ascending index), returning the representative of
    /// the bucket whose cumulative count first exceeds `r`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidQuantile` if `q` is outside [0, 1] and `EmptySketch`
    /// if the sketch holds no values
    ///
    /// # Example
    ///
    /// ```
    /// use ddsketch_oxide::DDSketch;
    ///
    /// let mut sketch = DDSketch::new(0.01).unwrap();
    /// for i in 1..=100 {
    ///     sketch.insert(i as f64).unwrap();
    /// }
    ///
    /// let median = sketch.quantile(0.5).unwrap();
    /// assert!((median - 50.0).abs() / 50.0 <= 0.02);
    /// ```
    pub fn quantile(&self, q: f64) -> Result<f64> {
        if !(0.0..=1.0).contains(&q) {
            return Err(SketchError::InvalidQuantile { q });
        }
        let total = self.count();
        if total == 0 {
            return Err(SketchError::EmptySketch);
        }
        let mut rank = q * (total - 1) as f64;

        if let Some(negative) = &self.negative {
            let negative_total = negative.total_count();
            if rank < negative_total as f64 {
                let mut cumulative = 0u64;
                for (index, count) in negative.iter_descending() {
                    cumulative += count;
                    if cumulative as f64 > rank {
                        return Ok(-self.mapping.value_of(index));
                    }
                }
            }
            rank -= negative_total as f64;
        }

        if rank < self.zero_count as f64 {
            return Ok(0.0);
        }
        rank -= self.zero_count as f64;

        let mut cumulative = 0u64;
        for (index, count) in self.positive.iter_ascending() {
            cumulative += count;
            if cumulative as f64 > rank {
                return Ok(self.mapping.value_of(index));
            }
        }
        // unreachable while per-store totals are consistent with count()
        Ok(f64::INFINITY)
    }

    /// Returns the total number of values held
    pub fn count(&self) -> u64 {
        self.positive.total_count()
            + self.negative.as_ref().map_or(0, Store::total_count)
            + self.zero_count
    }

    /// Returns the number of values recorded as exactly zero
    pub fn zero_count(&self) -> u64 {
        self.zero_count
    }

    /// Returns the number of present buckets across both stores
    pub fn bucket_count(&self) -> usize {
        self.positive.bucket_count() + self.negative.as_ref().map_or(0, Store::bucket_count)
    }

    /// Returns the relative accuracy parameter (alpha)
    pub fn relative_accuracy(&self) -> f64 {
        self.config.relative_accuracy
    }

    /// Returns the configuration this sketch was built with
    pub fn config(&self) -> &DDSketchConfig {
        &self.config
    }

    /// Returns the minimum value inserted, if any
    ///
    /// Tracking is maintained by insert and merge only; after a `delete` of
    /// the extreme value the reported minimum may be stale.
    pub fn min(&self) -> Option<f64> {
        (self.count() > 0).then_some(self.min_value)
    }

    /// Returns the maximum value inserted, if any
    ///
    /// Same staleness caveat as [`DDSketch::min`].
    pub fn max(&self) -> Option<f64> {
        (self.count() > 0).then_some(self.max_value)
    }
}

impl Sketch for DDSketch {
    type Item = f64;

    /// Infallible convenience insert; values `insert` would reject
    /// (non-finite, disallowed negatives) are silently dropped
    fn update(&mut self, item: &Self::Item) {
        let _ = self.insert(*item);
    }

    fn estimate(&self) -> f64 {
        self.count() as f64
    }

    fn is_empty(&self) -> bool {
        self.count() == 0
    }

    fn serialize(&self) -> Vec<u8> {
        let mut bytes = Vec::new();

        // Header: accuracy, scheme, strategy, negatives flag, budget,
        // zero count, min/max
        bytes.extend_from_slice(&self.config.relative_accuracy.to_le_bytes());
        bytes.push(scheme_to_byte(self.config.mapping));
        bytes.push(strategy_to_byte(self.config.bucket_strategy));
        bytes.push(u8::from(self.config.allow_negative));
        bytes.extend_from_slice(&self.config.max_buckets.to_le_bytes());
        bytes.extend_from_slice(&self.zero_count.to_le_bytes());
        bytes.extend_from_slice(&self.min_value.to_le_bytes());
        bytes.extend_from_slice(&self.max_value.to_le_bytes());

        serialize_store(&mut bytes, &self.positive);
        if let Some(negative) = &self.negative {
            serialize_store(&mut bytes, negative);
        }

        bytes
    }

    fn deserialize(bytes: &[u8]) -> Result<Self> {
        validation::validate_byte_size(bytes.len())?;
        validation::validate_min_size(bytes.len(), HEADER_SIZE)?;

        let mut pos = 0;
        let relative_accuracy = read_f64(bytes, &mut pos);
        let mapping = scheme_from_byte(read_u8(bytes, &mut pos))?;
        let bucket_strategy = strategy_from_byte(read_u8(bytes, &mut pos))?;
        let allow_negative = read_u8(bytes, &mut pos) != 0;
        let max_buckets = read_u32(bytes, &mut pos);
        let zero_count = read_u64(bytes, &mut pos);
        let min_value = read_f64(bytes, &mut pos);
        let max_value = read_f64(bytes, &mut pos);

        let mut sketch = DDSketch::with_config(DDSketchConfig {
            relative_accuracy,
            mapping,
            max_buckets,
            bucket_strategy,
            allow_negative,
        })?;

        deserialize_store(bytes, &mut pos, &mut sketch.positive)?;
        if let Some(negative) = sketch.negative.as_mut() {
            deserialize_store(bytes, &mut pos, negative)?;
        }
        sketch.zero_count = zero_count;
        sketch.min_value = min_value;
        sketch.max_value = max_value;
        Ok(sketch)
    }
}

impl Mergeable for DDSketch {
    /// Merges another DDSketch into this one
    ///
    /// The source is only read; both sketches remain valid. Bucket-level
    /// merging makes the result identical to having inserted both streams
    /// into one sketch (up to collapse, which triggers lazily through the
    /// cap checks).
    ///
    /// # Errors
    ///
    /// Returns `IncompatibleSketches` when the accuracies differ, the
    /// mapping schemes differ, or the source holds negative values this
    /// sketch cannot represent. A failed merge leaves the sketch unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use ddsketch_oxide::{DDSketch, Mergeable};
    ///
    /// let mut low = DDSketch::new(0.01).unwrap();
    /// let mut high = DDSketch::new(0.01).unwrap();
    /// for i in 1..=500 {
    ///     low.insert(i as f64).unwrap();
    ///     high.insert((i + 500) as f64).unwrap();
    /// }
    ///
    /// low.merge(&high).unwrap();
    /// assert_eq!(low.count(), 1000);
    /// ```
    fn merge(&mut self, other: &Self) -> Result<()> {
        if (self.relative_accuracy() - other.relative_accuracy()).abs() > 1e-10 {
            return Err(SketchError::IncompatibleSketches {
                reason: format!(
                    "cannot merge sketches with different accuracy: {} vs {}",
                    self.relative_accuracy(),
                    other.relative_accuracy()
                ),
            });
        }
        if self.mapping.scheme() != other.mapping.scheme() {
            return Err(SketchError::IncompatibleSketches {
                reason: format!(
                    "cannot merge sketches with different mapping schemes: {:?} vs {:?}",
                    self.mapping.scheme(),
                    other.mapping.scheme()
                ),
            });
        }
        let other_negative_total = other.negative.as_ref().map_or(0, Store::total_count);
        if self.negative.is_none() && other_negative_total > 0 {
            return Err(SketchError::IncompatibleSketches {
                reason: "source contains negative values the destination cannot represent"
                    .to_string(),
            });
        }

        self.zero_count += other.zero_count;
        self.positive.merge(&other.positive);
        if let (Some(destination), Some(source)) = (self.negative.as_mut(), other.negative.as_ref())
        {
            destination.merge(source);
        }
        self.min_value = self.min_value.min(other.min_value);
        self.max_value = self.max_value.max(other.max_value);
        Ok(())
    }
}

/// Serialized header: accuracy (8) + scheme/strategy/negatives tags (3) +
/// budget (4) + zero count (8) + min/max (16)
const HEADER_SIZE: usize = 39;

/// Bytes per serialized bucket: i32 index + u64 count
const BUCKET_ENTRY_SIZE: usize = 12;

fn scheme_to_byte(scheme: MappingScheme) -> u8 {
    match scheme {
        MappingScheme::Logarithmic => 0,
        MappingScheme::LinearInterpolation => 1,
        MappingScheme::CubicInterpolation => 2,
    }
}

fn scheme_from_byte(byte: u8) -> Result<MappingScheme> {
    match byte {
        0 => Ok(MappingScheme::Logarithmic),
        1 => Ok(MappingScheme::LinearInterpolation),
        2 => Ok(MappingScheme::CubicInterpolation),
        other => Err(SketchError::DeserializationError(format!(
            "Unknown mapping scheme tag: {}",
            other
        ))),
    }
}

fn strategy_to_byte(strategy: BucketStrategy) -> u8 {
    match strategy {
        BucketStrategy::FixedDense => 0,
        BucketStrategy::CollapsingSparse => 1,
    }
}

fn strategy_from_byte(byte: u8) -> Result<BucketStrategy> {
    match byte {
        0 => Ok(BucketStrategy::FixedDense),
        1 => Ok(BucketStrategy::CollapsingSparse),
        other => Err(SketchError::DeserializationError(format!(
            "Unknown bucket strategy tag: {}",
            other
        ))),
    }
}

fn serialize_store(bytes: &mut Vec<u8>, store: &Store) {
    bytes.extend_from_slice(&(store.bucket_count() as u64).to_le_bytes());
    for (index, count) in store.iter_ascending() {
        bytes.extend_from_slice(&index.to_le_bytes());
        bytes.extend_from_slice(&count.to_le_bytes());
    }
}

fn deserialize_store(bytes: &[u8], pos: &mut usize, store: &mut Store) -> Result<()> {
    validation::validate_min_size(bytes.len() - *pos, 8)?;
    let buckets = read_u64(bytes, pos) as usize;
    let needed = buckets.checked_mul(BUCKET_ENTRY_SIZE).ok_or_else(|| {
        SketchError::DeserializationError("Bucket section length overflows".to_string())
    })?;
    validation::validate_min_size(bytes.len() - *pos, needed)?;
    for _ in 0..buckets {
        let index = read_i32(bytes, pos);
        let count = read_u64(bytes, pos);
        store.add(index, count);
    }
    Ok(())
}

// Readers assume the caller has already length-checked the slice.

fn read_u8(bytes: &[u8], pos: &mut usize) -> u8 {
    let value = bytes[*pos];
    *pos += 1;
    value
}

fn read_u32(bytes: &[u8], pos: &mut usize) -> u32 {
    let value = u32::from_le_bytes(bytes[*pos..*pos + 4].try_into().unwrap());
    *pos += 4;
    value
}

fn read_u64(bytes: &[u8], pos: &mut usize) -> u64 {
    let value = u64::from_le_bytes(bytes[*pos..*pos + 8].try_into().unwrap());
    *pos += 8;
    value
}

fn read_i32(bytes: &[u8], pos: &mut usize) -> i32 {
    let value = i32::from_le_bytes(bytes[*pos..*pos + 4].try_into().unwrap());
    *pos += 4;
    value
}

fn read_f64(bytes: &[u8], pos: &mut usize) -> f64 {
    let value = f64::from_le_bytes(bytes[*pos..*pos + 8].try_into().unwrap());
    *pos += 8;
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_conservation() {
        let mut sketch = DDSketch::new(0.01).unwrap();
        for value in [-3.0, -0.5, 0.0, 0.0, 1.0, 2.5, 100.0] {
            sketch.insert(value).unwrap();
        }
        let positive = sketch.positive.total_count();
        let negative = sketch.negative.as_ref().map_or(0, Store::total_count);
        assert_eq!(sketch.count(), positive + negative + sketch.zero_count());
        assert_eq!(sketch.count(), 7);
    }

    #[test]
    fn test_budget_is_halved_with_negatives() {
        let sketch = DDSketchConfig::new(0.01).max_buckets(64).build().unwrap();
        match (&sketch.positive, sketch.negative.as_ref()) {
            (Store::Dense(positive), Some(Store::Dense(negative))) => {
                assert_eq!(positive.max_buckets(), 32);
                assert_eq!(negative.max_buckets(), 32);
            }
            _ => panic!("expected dense stores"),
        }

        let sketch = DDSketchConfig::new(0.01)
            .max_buckets(64)
            .allow_negative(false)
            .build()
            .unwrap();
        match &sketch.positive {
            Store::Dense(positive) => assert_eq!(positive.max_buckets(), 64),
            Store::Sparse(_) => panic!("expected a dense store"),
        }
        assert!(sketch.negative.is_none());
    }

    #[test]
    fn test_serialize_round_trip() {
        let mut sketch = DDSketchConfig::new(0.02)
            .mapping(MappingScheme::LinearInterpolation)
            .max_buckets(128)
            .build()
            .unwrap();
        for value in [-12.0, -1.0, 0.0, 3.5, 3.5, 700.0] {
            sketch.insert(value).unwrap();
        }

        let restored = DDSketch::deserialize(&sketch.serialize()).unwrap();
        assert_eq!(restored.count(), sketch.count());
        assert_eq!(restored.zero_count(), sketch.zero_count());
        assert_eq!(restored.min(), sketch.min());
        assert_eq!(restored.max(), sketch.max());
        assert_eq!(
            restored.quantile(0.5).unwrap(),
            sketch.quantile(0.5).unwrap()
        );
    }

    #[test]
    fn test_deserialize_rejects_garbage() {
        assert!(DDSketch::deserialize(&[]).is_err());
        assert!(DDSketch::deserialize(&[0u8; 10]).is_err());

        let mut bytes = DDSketch::new(0.01).unwrap().serialize();
        bytes[8] = 9; // unknown scheme tag
        assert!(DDSketch::deserialize(&bytes).is_err());
    }
}
