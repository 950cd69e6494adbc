//! Sparse bucket store: hash-indexed counts
//!
//! Backed by a plain map from bucket index to count, with tracked bounds and
//! total. Suits workloads that scatter indices widely; ordered traversal
//! sorts the present keys on demand, which is fine because the cap keeps
//! the key set small. The same collapse-lowest policy as the dense store
//! enforces the cap, one fold per overflowing insert.

use std::collections::HashMap;

use crate::common::{validation, Result};

/// Hash-indexed store with a collapse-lowest bucket cap
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SparseStore {
    bins: HashMap<i32, u64>,
    max_buckets: usize,
    /// Lowest present bucket index; meaningful only when nonempty
    min_index: i32,
    /// Highest present bucket index; meaningful only when nonempty
    max_index: i32,
    total_count: u64,
}

impl SparseStore {
    /// Creates a sparse store capped at `max_buckets` present buckets
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `max_buckets` is zero or over the limit
    pub fn new(max_buckets: u32) -> Result<Self> {
        validation::validate_max_buckets(max_buckets)?;
        Ok(Self {
            bins: HashMap::new(),
            max_buckets: max_buckets as usize,
            min_index: 0,
            max_index: 0,
            total_count: 0,
        })
    }

    /// Returns the bucket cap this store enforces
    pub fn max_buckets(&self) -> usize {
        self.max_buckets
    }

    /// Returns true when no bucket holds a positive count
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Returns the sum of all bucket counts
    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    /// Returns the number of present buckets
    pub fn bucket_count(&self) -> usize {
        self.bins.len()
    }

    /// Returns the lowest present bucket index
    pub fn min_index(&self) -> Option<i32> {
        (!self.bins.is_empty()).then_some(self.min_index)
    }

    /// Returns the highest present bucket index
    pub fn max_index(&self) -> Option<i32> {
        (!self.bins.is_empty()).then_some(self.max_index)
    }

    /// Returns the count at `index`, zero when absent
    pub fn count_of(&self, index: i32) -> u64 {
        self.bins.get(&index).copied().unwrap_or(0)
    }

    /// Adds `count` to the bucket at `index`; a zero count is a no-op
    pub fn add(&mut self, index: i32, count: u64) {
        if count == 0 {
            return;
        }
        if self.bins.is_empty() {
            self.min_index = index;
            self.max_index = index;
        } else {
            self.min_index = self.min_index.min(index);
            self.max_index = self.max_index.max(index);
        }
        *self.bins.entry(index).or_insert(0) += count;
        self.total_count += count;
        while self.bins.len() > self.max_buckets {
            self.collapse_lowest();
        }
    }

    /// Folds the lowest present bucket into its next-higher neighbor
    fn collapse_lowest(&mut self) {
        if self.bins.len() < 2 {
            return;
        }
        let Some(folded) = self.bins.remove(&self.min_index) else {
            return;
        };
        let Some(next) = self.bins.keys().copied().min() else {
            return;
        };
        *self.bins.entry(next).or_insert(0) += folded;
        self.min_index = next;
    }

    /// Removes up to `count` from the bucket at `index`, returning the
    /// amount actually removed. Absent buckets are a no-op.
    pub fn remove(&mut self, index: i32, count: u64) -> u64 {
        if count == 0 {
            return 0;
        }
        let Some(current) = self.bins.get_mut(&index) else {
            return 0;
        };
        let removed = (*current).min(count);
        *current -= removed;
        self.total_count -= removed;
        if *current == 0 {
            self.bins.remove(&index);
            if !self.bins.is_empty() {
                if index == self.min_index {
                    if let Some(min) = self.bins.keys().copied().min() {
                        self.min_index = min;
                    }
                }
                if index == self.max_index {
                    if let Some(max) = self.bins.keys().copied().max() {
                        self.max_index = max;
                    }
                }
            }
        }
        removed
    }

    /// Iterates present buckets as `(index, count)` in ascending index order
    pub fn iter_ascending(&self) -> impl Iterator<Item = (i32, u64)> + '_ {
        let mut keys: Vec<i32> = self.bins.keys().copied().collect();
        keys.sort_unstable();
        keys.into_iter().map(move |index| (index, self.bins[&index]))
    }

    /// Iterates present buckets as `(index, count)` in descending index order
    pub fn iter_descending(&self) -> impl Iterator<Item = (i32, u64)> + '_ {
        let mut keys: Vec<i32> = self.bins.keys().copied().collect();
        keys.sort_unstable_by(|a, b| b.cmp(a));
        keys.into_iter().map(move |index| (index, self.bins[&index]))
    }
}
