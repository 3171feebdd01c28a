mod cli;
mod config;
mod deadline_cmd;
mod holidays_cmd;
mod logging;

use std::process;

use anyhow::{bail, Result};
use clap::Parser;

use crate::cli::Cli;
use crate::config::Settings;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let settings = Settings::resolve(&cli)?;
    match (cli.holidays, cli.limit) {
        (Some(year), _) => holidays_cmd::run(year, settings.locale),
        (None, Some(limit)) => {
            deadline_cmd::run(limit, cli.date.as_deref(), settings, cli.verbose > 0)
        }
        (None, None) => bail!("a working-days limit is required"),
    }
}
