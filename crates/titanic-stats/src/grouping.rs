//! Grouped mean accumulation
//!
//! This module provides the group-by-then-mean primitive used by every
//! aggregate table of the report. Values are accumulated per key, and the
//! groups can then be read back either in the order their keys were first
//! seen or sorted by key.
//!
//! # Examples
//!
//! ```
//! use titanic_stats::grouping::GroupedMeans;
//!
//! let mut groups = GroupedMeans::new();
//! groups.push((3, "male"), 0.0);
//! groups.push((1, "female"), 1.0);
//! groups.push((3, "male"), 1.0);
//!
//! // Sorted by key
//! let sorted = groups.sorted();
//! assert_eq!(sorted[0].0, (1, "female"));
//! assert_eq!(sorted[1].1.mean, 0.5);
//! assert_eq!(sorted[1].1.count, 2);
//! ```

use std::collections::BTreeMap;

/// Running sum and count for a single group.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MeanAccumulator {
    sum: f64,
    count: usize,
}

impl MeanAccumulator {
    pub fn add(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Mean of the accumulated values, or `None` if nothing was added.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn mean(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum / self.count as f64)
    }
}

/// Final mean of one group together with the number of values averaged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupMean {
    pub count: usize,
    pub mean: f64,
}

/// Means accumulated per key, remembering the order keys were first seen.
#[derive(Debug, Clone)]
pub struct GroupedMeans<K> {
    groups: Vec<(K, MeanAccumulator)>,
    index: BTreeMap<K, usize>,
}

impl<K> Default for GroupedMeans<K> {
    fn default() -> Self {
        Self {
            groups: Vec::new(),
            index: BTreeMap::new(),
        }
    }
}

impl<K> GroupedMeans<K>
where
    K: Ord + Clone,
{
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds groups from `(key, value)` pairs.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
    {
        let mut groups = Self::new();
        for (key, value) in pairs {
            groups.push(key, value);
        }
        groups
    }

    pub fn push(&mut self, key: K, value: f64) {
        let idx = match self.index.get(&key) {
            Some(&idx) => idx,
            None => {
                let idx = self.groups.len();
                self.index.insert(key.clone(), idx);
                self.groups.push((key, MeanAccumulator::default()));
                idx
            }
        };
        self.groups[idx].1.add(value);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    #[must_use]
    pub fn get(&self, key: &K) -> Option<GroupMean> {
        let &idx = self.index.get(key)?;
        finish(&self.groups[idx].1)
    }

    /// Groups in the order their keys were first pushed.
    pub fn iter(&self) -> impl Iterator<Item = (&K, GroupMean)> {
        self.groups
            .iter()
            .filter_map(|(key, acc)| finish(acc).map(|mean| (key, mean)))
    }

    /// Groups sorted ascending by key.
    #[must_use]
    pub fn sorted(&self) -> Vec<(K, GroupMean)> {
        self.index
            .iter()
            .filter_map(|(key, &idx)| finish(&self.groups[idx].1).map(|mean| (key.clone(), mean)))
            .collect()
    }
}

fn finish(acc: &MeanAccumulator) -> Option<GroupMean> {
    acc.mean().map(|mean| GroupMean {
        count: acc.count(),
        mean,
    })
}
