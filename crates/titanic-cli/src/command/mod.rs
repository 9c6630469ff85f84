use clap::{Parser, Subcommand};

use self::{preview::PreviewArg, report::ReportArg};

mod preview;
mod report;
mod table;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in (defaults to `report`)
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Prepare the dataset and write the survival charts
    Report(#[clap(flatten)] ReportArg),
    /// Print the prepared dataset and column summaries without writing charts
    Preview(#[clap(flatten)] PreviewArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode.unwrap_or(Mode::Report(ReportArg::default())) {
        Mode::Report(arg) => report::run(&arg)?,
        Mode::Preview(arg) => preview::run(&arg)?,
    }
    Ok(())
}
