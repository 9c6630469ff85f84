use std::io;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod command;
mod util;

const DEFAULT_LOG_FILTER: &str = "titanic_report=info,titanic_analysis=info";

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries the preview table only.
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    command::run()
}
