//! Aggregate tables behind each chart
//!
//! Each report reduces the prepared [`PassengerTable`](crate::dataset::PassengerTable)
//! to a handful of rows keyed by its grouping dimension:
//!
//! - [`age_group::AgeGroupSurvival`]: one row per age group
//! - [`class_gender::ClassGenderSurvival`]: one row per `(class, sex)` pair
//! - [`fare::FareSurvival`]: one series per class, one point per exact fare
//!
//! Reports are pure functions of the table; nothing here touches the filesystem.

pub mod age_group;
pub mod class_gender;
pub mod fare;
