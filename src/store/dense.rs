//! Dense bucket store: a ring buffer over a contiguous count array
//!
//! Bucket indices map to array positions by offset from `min_index`, modulo
//! the array length, so extending the tracked range never shifts counts -
//! only the logical anchor moves. When a new index would stretch the span
//! past the cap, the lowest buckets are folded upward (collapse-lowest)
//! until the new index fits. Folding from the head sacrifices low-quantile
//! resolution while keeping the upper tail intact, which is the right trade
//! for latency-style heavy-tailed data.

use crate::common::{validation, Result};

/// Ring-buffer store over a fixed-size count array
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DenseStore {
    counts: Vec<u64>,
    /// Lowest tracked bucket index; meaningful only when the store is nonempty
    min_index: i32,
    /// Highest tracked bucket index; meaningful only when the store is nonempty
    max_index: i32,
    /// Array position holding `min_index`
    head: usize,
    /// Number of present (count > 0) buckets
    num_buckets: usize,
    total_count: u64,
}

impl DenseStore {
    /// Creates a dense store with capacity for `max_buckets` buckets
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `max_buckets` is zero or over the limit
    pub fn new(max_buckets: u32) -> Result<Self> {
        validation::validate_max_buckets(max_buckets)?;
        Ok(Self {
            counts: vec![0; max_buckets as usize],
            min_index: 0,
            max_index: 0,
            head: 0,
            num_buckets: 0,
            total_count: 0,
        })
    }

    /// Returns the bucket cap this store enforces
    pub fn max_buckets(&self) -> usize {
        self.counts.len()
    }

    /// Returns true when no bucket holds a positive count
    pub fn is_empty(&self) -> bool {
        self.num_buckets == 0
    }

    /// Returns the sum of all bucket counts
    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    /// Returns the number of present buckets
    pub fn bucket_count(&self) -> usize {
        self.num_buckets
    }

    /// Returns the lowest present bucket index
    pub fn min_index(&self) -> Option<i32> {
        (!self.is_empty()).then_some(self.min_index)
    }

    /// Returns the highest present bucket index
    pub fn max_index(&self) -> Option<i32> {
        (!self.is_empty()).then_some(self.max_index)
    }

    /// Array position of a bucket index; true mathematical modulo, so the
    /// result is always in `[0, max_buckets)` even for indices far below
    /// the anchor
    fn position(&self, index: i32) -> usize {
        let len = self.counts.len() as i64;
        (self.head as i64 + (i64::from(index) - i64::from(self.min_index))).rem_euclid(len) as usize
    }

    /// Returns the count at `index`, zero when absent
    pub fn count_of(&self, index: i32) -> u64 {
        if self.is_empty() || index < self.min_index || index > self.max_index {
            return 0;
        }
        self.counts[self.position(index)]
    }

    /// Adds `count` to the bucket at `index`; a zero count is a no-op
    ///
    /// When `index` stretches the tracked span past the cap, the lowest
    /// buckets collapse upward first. An index below the lowest index the
    /// cap can retain folds into the current lowest bucket.
    pub fn add(&mut self, index: i32, count: u64) {
        if count == 0 {
            return;
        }
        if self.num_buckets == 0 {
            self.counts[0] = count;
            self.min_index = index;
            self.max_index = index;
            self.head = 0;
            self.num_buckets = 1;
        } else if index >= self.min_index && index <= self.max_index {
            let pos = self.position(index);
            if self.counts[pos] == 0 {
                self.num_buckets += 1;
            }
            self.counts[pos] += count;
        } else if index > self.max_index {
            let span = i64::from(index) - i64::from(self.min_index) + 1;
            if span > self.counts.len() as i64 {
                let target = i64::from(index) - (self.counts.len() as i64 - 1);
                self.collapse_lowest(target as i32);
            }
            let pos = self.position(index);
            if self.counts[pos] == 0 {
                self.num_buckets += 1;
            }
            self.counts[pos] += count;
            self.max_index = index;
        } else {
            // index < min_index
            let span = i64::from(self.max_index) - i64::from(index) + 1;
            if span > self.counts.len() as i64 {
                // below the collapse floor: fold into the lowest bucket
                let pos = self.head;
                self.counts[pos] += count;
            } else {
                let pos = self.position(index);
                if self.counts[pos] == 0 {
                    self.num_buckets += 1;
                }
                self.counts[pos] += count;
                self.head = pos;
                self.min_index = index;
            }
        }
        self.total_count += count;
    }

    /// Folds every present bucket below `target` into the lowest surviving
    /// bucket. Total count is invariant; the present-bucket count drops by
    /// one per folded bucket.
    fn collapse_lowest(&mut self, target: i32) {
        if self.num_buckets == 0 || self.min_index >= target {
            return;
        }
        let mut carried: u64 = 0;
        let mut index = self.min_index;
        while index <= self.max_index && index < target {
            let pos = self.position(index);
            if self.counts[pos] > 0 {
                carried += self.counts[pos];
                self.counts[pos] = 0;
                self.num_buckets -= 1;
            }
            index += 1;
        }

        let mut survivor = None;
        let mut candidate = target;
        while candidate <= self.max_index {
            let pos = self.position(candidate);
            if self.counts[pos] > 0 {
                survivor = Some((candidate, pos));
                break;
            }
            candidate += 1;
        }
        match survivor {
            Some((index, pos)) => {
                self.counts[pos] += carried;
                self.min_index = index;
                self.head = pos;
            }
            None => {
                // every present bucket was below the floor: re-seat the
                // whole carried count at the floor itself
                self.counts[0] = carried;
                self.head = 0;
                self.min_index = target;
                self.max_index = target;
                self.num_buckets = 1;
            }
        }
    }

    /// Removes up to `count` from the bucket at `index`, returning the
    /// amount actually removed. Absent buckets are a no-op.
    pub fn remove(&mut self, index: i32, count: u64) -> u64 {
        if count == 0 || self.is_empty() || index < self.min_index || index > self.max_index {
            return 0;
        }
        let pos = self.position(index);
        if self.counts[pos] == 0 {
            return 0;
        }
        let removed = self.counts[pos].min(count);
        self.counts[pos] -= removed;
        self.total_count -= removed;
        if self.counts[pos] == 0 {
            self.num_buckets -= 1;
            if self.num_buckets == 0 {
                self.head = 0;
            } else if index == self.min_index {
                let mut next = index + 1;
                loop {
                    let p = self.position(next);
                    if self.counts[p] > 0 {
                        self.min_index = next;
                        self.head = p;
                        break;
                    }
                    next += 1;
                }
            } else if index == self.max_index {
                let mut prev = index - 1;
                loop {
                    if self.counts[self.position(prev)] > 0 {
                        self.max_index = prev;
                        break;
                    }
                    prev -= 1;
                }
            }
        }
        removed
    }

    fn span(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            (i64::from(self.max_index) - i64::from(self.min_index) + 1) as usize
        }
    }

    /// Iterates present buckets as `(index, count)` in ascending index order
    pub fn iter_ascending(&self) -> impl Iterator<Item = (i32, u64)> + '_ {
        (0..self.span()).filter_map(move |offset| {
            let index = self.min_index + offset as i32;
            let count = self.counts[self.position(index)];
            (count > 0).then_some((index, count))
        })
    }

    /// Iterates present buckets as `(index, count)` in descending index order
    pub fn iter_descending(&self) -> impl Iterator<Item = (i32, u64)> + '_ {
        (0..self.span()).rev().filter_map(move |offset| {
            let index = self.min_index + offset as i32;
            let count = self.counts[self.position(index)];
            (count > 0).then_some((index, count))
        })
    }
}
