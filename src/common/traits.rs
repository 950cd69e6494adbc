//! Core traits implemented by the sketch

use super::error::SketchError;

/// Core operations of a streaming sketch
///
/// A sketch consumes a stream of observations one at a time, answers
/// queries at any point in the stream, and round-trips through bytes so it
/// can be shipped between processes. For this crate the observations are
/// `f64` values feeding a quantile sketch; the trait keeps the insert path
/// infallible so it can sit directly in a hot metrics loop.
pub trait Sketch {
    /// The type of observations this sketch consumes
    type Item;

    /// Record one observation
    ///
    /// Infallible by contract: an observation the sketch cannot represent
    /// (for DDSketch, a NaN or a negative value when negatives are
    /// disabled) is dropped silently. Use the sketch's fallible insert
    /// method when rejection needs to be surfaced.
    fn update(&mut self, item: &Self::Item);

    /// Summary statistic of the stream consumed so far
    ///
    /// For this quantile sketch the summary is the total observation
    /// count; quantile estimates are answered by the dedicated query
    /// method, not through this trait.
    fn estimate(&self) -> f64;

    /// Returns `true` when no observations have been recorded
    fn is_empty(&self) -> bool;

    /// Serialize the sketch to a byte vector
    ///
    /// The layout is self-describing (configuration header plus bucket
    /// lists), but stability across crate versions is not guaranteed.
    fn serialize(&self) -> Vec<u8>;

    /// Reconstruct a sketch from bytes produced by [`Sketch::serialize`]
    ///
    /// # Errors
    ///
    /// Returns `SketchError::DeserializationError` when the bytes are
    /// truncated, carry unknown tags, or fail the size safety limits
    fn deserialize(bytes: &[u8]) -> Result<Self, SketchError>
    where
        Self: Sized;
}

/// Combining two sketches built from separate streams
///
/// Merging is what makes a sketch shard-friendly: each worker sketches its
/// own slice of the data, and the merged sketch answers queries as if the
/// concatenated stream had been fed to a single instance. For DDSketch the
/// merge is bucket-wise count addition, so the relative-error guarantee
/// survives the combination.
pub trait Mergeable: Sketch {
    /// Fold another sketch's observations into this one
    ///
    /// The source is only read and stays valid. Merging is only defined
    /// between sketches with matching configurations: same relative
    /// accuracy, same mapping scheme, and a destination able to represent
    /// every value class the source holds.
    ///
    /// # Errors
    ///
    /// Returns `SketchError::IncompatibleSketches` when the configurations
    /// diverge in any of the ways above
    fn merge(&mut self, other: &Self) -> Result<(), SketchError>;
}
