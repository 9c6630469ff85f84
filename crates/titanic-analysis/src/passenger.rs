//! Passenger records
//!
//! This module defines the two row types of the report:
//!
//! - [`RawPassenger`]: one CSV row exactly as read, with nullable cells as `Option`
//! - [`Passenger`]: a prepared row with imputed values and the derived
//!   [`AgeGroup`] and survival rate
//!
//! # Age Groups
//!
//! Ages are bucketed into four brackets by fixed thresholds:
//!
//! ```text
//! age < 18        Child
//! 18 <= age < 27  Young Adult
//! 27 <= age < 65  Adult
//! 65 <= age       Senior
//! ```

use std::fmt;

use serde::Deserialize;

/// A passenger row as read from the CSV file.
///
/// Columns are matched by header name; columns not listed here are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawPassenger {
    #[serde(rename = "PassengerId", default)]
    pub passenger_id: Option<u32>,
    #[serde(rename = "Name", default)]
    pub name: Option<String>,
    /// Survival flag (0 or 1)
    #[serde(rename = "Survived")]
    pub survived: u8,
    /// Passenger class (1, 2 or 3 in the original dataset)
    #[serde(rename = "Pclass")]
    pub pclass: u32,
    #[serde(rename = "Sex")]
    pub sex: String,
    #[serde(rename = "Age")]
    pub age: Option<f64>,
    #[serde(rename = "Fare")]
    pub fare: Option<f64>,
    #[serde(rename = "Cabin")]
    pub cabin: Option<String>,
    /// Port of embarkation (`C`, `Q` or `S`)
    #[serde(rename = "Embarked")]
    pub embarked: Option<String>,
}

/// Age bracket derived from a passenger's (possibly imputed) age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AgeGroup {
    Child,
    YoungAdult,
    Adult,
    Senior,
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_str(), f)
    }
}

impl AgeGroup {
    pub const ALL: [AgeGroup; 4] = [
        AgeGroup::Child,
        AgeGroup::YoungAdult,
        AgeGroup::Adult,
        AgeGroup::Senior,
    ];

    /// Buckets an age.
    ///
    /// NaN fails every comparison and is classified as [`AgeGroup::Senior`].
    ///
    /// ```
    /// use titanic_analysis::passenger::AgeGroup;
    ///
    /// assert_eq!(AgeGroup::from_age(17.9), AgeGroup::Child);
    /// assert_eq!(AgeGroup::from_age(18.0), AgeGroup::YoungAdult);
    /// assert_eq!(AgeGroup::from_age(27.0), AgeGroup::Adult);
    /// assert_eq!(AgeGroup::from_age(65.0), AgeGroup::Senior);
    /// ```
    #[must_use]
    pub fn from_age(age: f64) -> Self {
        if age < 18.0 {
            AgeGroup::Child
        } else if age < 27.0 {
            AgeGroup::YoungAdult
        } else if age < 65.0 {
            AgeGroup::Adult
        } else {
            AgeGroup::Senior
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            AgeGroup::Child => "Child",
            AgeGroup::YoungAdult => "Young Adult",
            AgeGroup::Adult => "Adult",
            AgeGroup::Senior => "Senior",
        }
    }
}

/// A prepared passenger row.
#[derive(Debug, Clone, PartialEq)]
pub struct Passenger {
    pub passenger_id: Option<u32>,
    pub name: Option<String>,
    pub survived: u8,
    pub pclass: u32,
    pub sex: String,
    /// Age, with missing values replaced by the dataset mean
    pub age: f64,
    /// `None` when the cell was empty or NaN
    pub fare: Option<f64>,
    pub cabin: String,
    pub embarked: String,
    pub age_group: AgeGroup,
    /// Mean survival flag over every passenger sharing this row's age group
    pub survival_rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_group_boundaries() {
        let cases = [
            (0.42, AgeGroup::Child),
            (17.999, AgeGroup::Child),
            (18.0, AgeGroup::YoungAdult),
            (26.5, AgeGroup::YoungAdult),
            (27.0, AgeGroup::Adult),
            (64.99, AgeGroup::Adult),
            (65.0, AgeGroup::Senior),
            (80.0, AgeGroup::Senior),
        ];
        for (age, expected) in cases {
            assert_eq!(AgeGroup::from_age(age), expected, "age {age}");
        }
    }

    #[test]
    fn test_nan_age_is_senior() {
        assert_eq!(AgeGroup::from_age(f64::NAN), AgeGroup::Senior);
    }

    #[test]
    fn test_display_names() {
        let names = AgeGroup::ALL.map(|g| g.to_string());
        assert_eq!(names, ["Child", "Young Adult", "Adult", "Senior"]);
    }
}
