use std::path::PathBuf;

use clap::Args;
use titanic_analysis::dataset::PassengerTable;
use titanic_stats::descriptive::DescriptiveStats;

use crate::command::table;

#[derive(Debug, Clone, Args)]
pub(crate) struct PreviewArg {
    /// Path to the passenger CSV file
    #[arg(long, default_value = "Titanic-Dataset.csv")]
    input: PathBuf,

    /// Number of prepared rows to print
    #[arg(long, default_value_t = 10)]
    rows: usize,
}

pub(crate) fn run(arg: &PreviewArg) -> anyhow::Result<()> {
    let PreviewArg { input, rows } = arg;

    let table = PassengerTable::load(input)?;
    table::print_passenger_preview(&table, *rows);
    table::print_column_summary(&column_summaries(&table));

    Ok(())
}

/// Age and Fare summaries over the known values of each column.
fn column_summaries(table: &PassengerTable) -> [(&'static str, Option<DescriptiveStats>); 2] {
    // Ages are NaN only when the whole column was missing.
    let ages = table
        .passengers()
        .iter()
        .map(|p| p.age)
        .filter(|age| !age.is_nan());
    let fares = table.passengers().iter().filter_map(|p| p.fare);
    [
        ("Age", DescriptiveStats::new(ages)),
        ("Fare", DescriptiveStats::new(fares)),
    ]
}
