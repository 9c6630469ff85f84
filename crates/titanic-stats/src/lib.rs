//! Statistical helpers for the Titanic survival report.
//!
//! This crate provides the small numeric toolkit the report is built on:
//!
//! - **Descriptive statistics**: min, max, mean, median, variance and standard deviation
//! - **Grouped means**: running means keyed by an arbitrary group, in first-seen or sorted order
//! - **Ordered floats**: a totally ordered `f64` wrapper usable as a map key
//!
//! # Modules
//!
//! - [`descriptive`]: Descriptive statistics for summarizing a column
//! - [`grouping`]: Mean accumulation grouped by key
//! - [`ordered`]: Total-order float key
//!
//! # Examples
//!
//! ## Computing descriptive statistics
//!
//! ```
//! use titanic_stats::descriptive::DescriptiveStats;
//!
//! let values = [22.0, 38.0, 26.0, 35.0, 35.0];
//! let stats = DescriptiveStats::new(values).unwrap();
//! assert_eq!(stats.mean, 31.2);
//! assert_eq!(stats.median, 35.0);
//! ```
//!
//! ## Grouping values by key
//!
//! ```
//! use titanic_stats::grouping::GroupedMeans;
//!
//! let groups = GroupedMeans::from_pairs([("male", 0.0), ("female", 1.0), ("male", 1.0)]);
//! let first_seen = groups.iter().map(|(key, _)| *key).collect::<Vec<_>>();
//! assert_eq!(first_seen, ["male", "female"]);
//! assert_eq!(groups.get(&"male").unwrap().mean, 0.5);
//! ```

pub mod descriptive;
pub mod grouping;
pub mod ordered;
