use std::path::PathBuf;

use clap::{ArgAction, Parser};

const AFTER_HELP: &str = "\
Counts French working days (weekends and public holidays excluded) from DATE,
the start day itself excluded, and reports whether LIMIT working days have
already elapsed.

Examples:
  fbdh 5
  fbdh 2 2019-01-07
  fbdh 2 2019-09-09T12:45:00+02:00 --locale en
  fbdh --holidays 2024";

/// French working-day deadline checker.
#[derive(Debug, Parser)]
#[command(
    name = "fbdh",
    version,
    about = "Check whether a French working-day deadline has been exceeded",
    after_help = AFTER_HELP
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Number of admissible working days (positive integer).
    #[arg(
        required_unless_present = "holidays",
        value_parser = clap::value_parser!(i32).range(1..)
    )]
    pub limit: Option<i32>,

    /// Start date (YYYY-MM-DD, DD/MM/YYYY or RFC 3339). Defaults to now.
    pub date: Option<String>,

    /// Output language: fr or en. Overrides the configuration file.
    #[arg(short, long)]
    pub locale: Option<String>,

    /// Path to an optional TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// List the public holidays of YEAR instead of checking a deadline.
    #[arg(long, value_name = "YEAR", conflicts_with_all = ["limit", "date"])]
    pub holidays: Option<i32>,
}
