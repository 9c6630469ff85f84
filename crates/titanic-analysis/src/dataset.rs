//! Passenger table loading and preparation
//!
//! Preparation runs once, in memory, right after the CSV is read:
//!
//! 1. Missing ages are replaced by the mean of the known ages
//! 2. Missing cabins and embarkation ports are replaced by [`UNKNOWN`]
//! 3. Every row is bucketed into an [`AgeGroup`]
//! 4. The mean survival flag of each age group is broadcast to its rows
//!
//! The resulting [`PassengerTable`] is never modified afterward.
//!
//! # Examples
//!
//! ```
//! use titanic_analysis::dataset::{PassengerTable, read_raw_passengers};
//!
//! let csv = "\
//! Survived,Pclass,Sex,Age,Fare,Cabin,Embarked
//! 1,1,female,30,71.28,C85,C
//! 0,3,male,,7.25,,S
//! ";
//! let raw = read_raw_passengers(csv.as_bytes()).unwrap();
//! let table = PassengerTable::prepare(raw);
//!
//! assert_eq!(table.passengers()[1].age, 30.0);
//! assert_eq!(table.passengers()[1].cabin, "Unknown");
//! ```

use std::{
    collections::BTreeSet,
    fs::File,
    io::{self, BufReader},
    path::{Path, PathBuf},
};

use titanic_stats::{
    descriptive,
    grouping::{GroupMean, GroupedMeans},
};

use crate::passenger::{AgeGroup, Passenger, RawPassenger};

/// Placeholder for missing cabin and embarkation values.
pub const UNKNOWN: &str = "Unknown";

/// Columns the input file must provide.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "Survived", "Pclass", "Sex", "Age", "Fare", "Cabin", "Embarked",
];

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum ReadError {
    #[display("missing required column '{column}'")]
    MissingColumn { column: &'static str },
    #[display("malformed passenger CSV")]
    Csv { source: csv::Error },
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum LoadError {
    #[display("failed to open passenger file {}", path.display())]
    Open { path: PathBuf, source: io::Error },
    #[display("failed to read passenger file {}", path.display())]
    Read { path: PathBuf, source: ReadError },
}

/// Parses passenger rows from CSV data with a header row.
///
/// Empty cells in nullable columns become `None`.
pub fn read_raw_passengers<R>(reader: R) -> Result<Vec<RawPassenger>, ReadError>
where
    R: io::Read,
{
    let mut reader = csv::Reader::from_reader(reader);
    let headers = reader
        .headers()
        .map_err(|source| ReadError::Csv { source })?
        .clone();

    if let Some(column) = REQUIRED_COLUMNS
        .into_iter()
        .find(|column| !headers.iter().any(|header| header == *column))
    {
        return Err(ReadError::MissingColumn { column });
    }

    reader
        .deserialize()
        .collect::<Result<Vec<RawPassenger>, _>>()
        .map_err(|source| ReadError::Csv { source })
}

/// The prepared passenger table.
#[derive(Debug, Clone)]
pub struct PassengerTable {
    passengers: Vec<Passenger>,
    imputed_age: f64,
    age_group_rates: GroupedMeans<AgeGroup>,
}

impl PassengerTable {
    /// Reads and prepares the passenger file at `path`.
    pub fn load<P>(path: P) -> Result<Self, LoadError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoadError::Open {
            path: path.to_owned(),
            source,
        })?;
        let raw = read_raw_passengers(BufReader::new(file)).map_err(|source| LoadError::Read {
            path: path.to_owned(),
            source,
        })?;
        tracing::info!(rows = raw.len(), path = %path.display(), "loaded passenger records");
        Ok(Self::prepare(raw))
    }

    /// Imputes missing values and derives the age group and survival rate columns.
    #[must_use]
    pub fn prepare(raw: Vec<RawPassenger>) -> Self {
        let imputed_age = descriptive::mean(raw.iter().filter_map(known_age)).unwrap_or(f64::NAN);

        let rows = raw
            .into_iter()
            .map(|row| {
                let age = known_age(&row).unwrap_or(imputed_age);
                (row, age, AgeGroup::from_age(age))
            })
            .collect::<Vec<_>>();

        let age_group_rates = GroupedMeans::from_pairs(
            rows.iter()
                .map(|(row, _, group)| (*group, f64::from(row.survived))),
        );

        let passengers = rows
            .into_iter()
            .map(|(row, age, age_group)| {
                let survival_rate = age_group_rates
                    .get(&age_group)
                    .map_or(f64::NAN, |rate| rate.mean);
                Passenger {
                    passenger_id: row.passenger_id,
                    name: row.name,
                    survived: row.survived,
                    pclass: row.pclass,
                    sex: row.sex,
                    age,
                    fare: row.fare.filter(|fare| !fare.is_nan()),
                    cabin: row.cabin.unwrap_or_else(|| UNKNOWN.to_owned()),
                    embarked: row.embarked.unwrap_or_else(|| UNKNOWN.to_owned()),
                    age_group,
                    survival_rate,
                }
            })
            .collect::<Vec<_>>();

        tracing::debug!(
            imputed_age,
            age_groups = age_group_rates.len(),
            "prepared passenger table"
        );

        Self {
            passengers,
            imputed_age,
            age_group_rates,
        }
    }

    #[must_use]
    pub fn passengers(&self) -> &[Passenger] {
        &self.passengers
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.passengers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.passengers.is_empty()
    }

    /// The value substituted for missing ages (NaN if no age was known).
    #[must_use]
    pub fn imputed_age(&self) -> f64 {
        self.imputed_age
    }

    /// Survival rate and passenger count of an age group.
    #[must_use]
    pub fn age_group_rate(&self, group: AgeGroup) -> Option<GroupMean> {
        self.age_group_rates.get(&group)
    }

    /// Distinct age groups in the order they first appear.
    #[must_use]
    pub fn age_groups_first_seen(&self) -> Vec<AgeGroup> {
        self.age_group_rates.iter().map(|(group, _)| *group).collect()
    }

    /// Distinct sexes in the order they first appear.
    #[must_use]
    pub fn sexes_first_seen(&self) -> Vec<&str> {
        let mut seen = BTreeSet::new();
        self.passengers
            .iter()
            .map(|p| p.sex.as_str())
            .filter(|sex| seen.insert(*sex))
            .collect()
    }
}

fn known_age(row: &RawPassenger) -> Option<f64> {
    row.age.filter(|age| !age.is_nan())
}
