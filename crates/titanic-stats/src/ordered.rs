//! Totally ordered float key
//!
//! `f64` is not `Ord`, so it cannot key a `BTreeMap` directly. [`OrdF64`]
//! orders values with [`f64::total_cmp`], which agrees with `<` for every
//! ordinary number and places NaN after positive infinity. `-0.0` and `0.0`
//! compare equal.

use std::{cmp::Ordering, fmt};

/// An `f64` ordered by [`f64::total_cmp`], with both zeros treated as one value.
///
/// ```
/// use titanic_stats::ordered::OrdF64;
///
/// let mut fares = vec![OrdF64(71.2833), OrdF64(7.25), OrdF64(8.05)];
/// fares.sort();
/// assert_eq!(fares[0].0, 7.25);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct OrdF64(pub f64);

impl PartialEq for OrdF64 {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OrdF64 {}

impl PartialOrd for OrdF64 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OrdF64 {
    fn cmp(&self, other: &Self) -> Ordering {
        unsigned_zero(self.0).total_cmp(&unsigned_zero(other.0))
    }
}

impl From<f64> for OrdF64 {
    /// Stores `-0.0` as `0.0`.
    fn from(value: f64) -> Self {
        Self(unsigned_zero(value))
    }
}

fn unsigned_zero(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}

impl fmt::Display for OrdF64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
