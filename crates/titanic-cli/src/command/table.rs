//! Fixed-width console tables
//!
//! Shared by the `report` and `preview` commands. Everything here writes to
//! stdout; logging goes to stderr.

use titanic_analysis::{dataset::PassengerTable, passenger::Passenger};
use titanic_stats::descriptive::DescriptiveStats;

fn print_passenger_header() {
    println!(
        "  {:>6} {:>8} {:>6} {:<8} {:>7} {:>9} {:<12} {:<8} {:<12} {:>12}",
        "Id", "Survived", "Pclass", "Sex", "Age", "Fare", "Cabin", "Embarked", "AgeGroup", "SurvivalRate",
    );
}

fn print_passenger_separator() {
    // id(6) + survived(8) + pclass(6) + sex(8) + age(7) + fare(9) + cabin(12) + embarked(8) + group(12) + rate(12) + spaces(9)
    println!("  {}", "-".repeat(97));
}

fn print_passenger_row(passenger: &Passenger) {
    let id = passenger
        .passenger_id
        .map_or_else(|| "-".to_owned(), |id| id.to_string());
    let fare = passenger
        .fare
        .map_or_else(|| "-".to_owned(), |fare| format!("{fare:.4}"));
    println!(
        "  {:>6} {:>8} {:>6} {:<8} {:>7.2} {:>9} {:<12} {:<8} {:<12} {:>12.4}",
        id,
        passenger.survived,
        passenger.pclass,
        passenger.sex,
        passenger.age,
        fare,
        passenger.cabin,
        passenger.embarked,
        passenger.age_group,
        passenger.survival_rate,
    );
}

/// Print the first `rows` prepared passengers.
///
/// Nothing is printed when `rows` is zero.
pub(super) fn print_passenger_preview(table: &PassengerTable, rows: usize) {
    if rows == 0 {
        return;
    }

    println!(
        "Prepared {} passengers (missing ages imputed as {:.2})",
        table.len(),
        table.imputed_age()
    );
    println!();
    print_passenger_header();
    print_passenger_separator();
    for passenger in table.passengers().iter().take(rows) {
        print_passenger_row(passenger);
    }
    println!();
}

/// Print one summary line per column.
///
/// Columns without values are shown as `N/A`.
pub(super) fn print_column_summary(columns: &[(&str, Option<DescriptiveStats>)]) {
    println!(
        "  {:<8} {:>6} {:>10} {:>10} {:>10} {:>10} {:>10}",
        "Column", "Count", "Min", "Max", "Mean", "Median", "StdDev",
    );
    // label(8) + count(6) + 5 * value(10) + spaces(6)
    println!("  {}", "-".repeat(70));
    for (label, stats) in columns {
        match stats {
            Some(stats) => println!(
                "  {:<8} {:>6} {:>10.2} {:>10.2} {:>10.2} {:>10.2} {:>10.2}",
                label, stats.count, stats.min, stats.max, stats.mean, stats.median, stats.std_dev,
            ),
            None => println!("  {label:<8} {:>6} {:>10}", 0, "N/A"),
        }
    }
}
