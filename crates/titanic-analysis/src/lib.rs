//! Passenger data preparation and survival aggregation
//!
//! This crate turns the passenger CSV into the small derived tables the
//! report charts are bound to.
//!
//! # Workflow
//!
//! 1. **Load** ([`dataset::PassengerTable::load`]): Parse the CSV into [`passenger::RawPassenger`]s
//! 2. **Prepare** ([`dataset::PassengerTable::prepare`]): Impute missing values, bucket ages,
//!    broadcast per-group survival rates
//! 3. **Aggregate** ([`report`]): Build the per-chart tables
//! 4. **Color** ([`palette`]): Look up fixed display colors for groups
//!
//! # Examples
//!
//! ```
//! use titanic_analysis::{
//!     dataset::{PassengerTable, read_raw_passengers},
//!     report::class_gender::ClassGenderSurvival,
//! };
//!
//! let csv = "\
//! Survived,Pclass,Sex,Age,Fare,Cabin,Embarked
//! 1,1,female,30,80,,S
//! 0,1,female,40,80,,S
//! ";
//! let table = PassengerTable::prepare(read_raw_passengers(csv.as_bytes()).unwrap());
//! let report = ClassGenderSurvival::from_table(&table);
//!
//! assert_eq!(report.rows.len(), 1);
//! assert_eq!(report.rows[0].survival_rate, 0.5);
//! ```

pub mod dataset;
pub mod palette;
pub mod passenger;
pub mod report;
