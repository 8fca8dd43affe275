use std::path::PathBuf;

use clap::Parser;

use crate::model::constants::DEFAULT_HISTORY_LENGTH;

#[derive(Parser, Clone, Debug)]
#[command(
    display_name = "Squad Progression",
    author = "Football Manager",
    long_about = "Progresses player ratings after a simulated match day"
)]
pub struct Args {
    /// Match day file: the squad's player records and each participant's phase grade.
    #[arg(short, long, env = "MATCHDAY_INPUT", help = "Match day JSON file")]
    pub input: PathBuf,

    /// Where to write the report. Written to stdout when omitted.
    #[arg(short, long, env = "MATCHDAY_OUTPUT", help = "Report JSON file")]
    pub output: Option<PathBuf>,

    /// Overrides for the game balance constants. Fields left out keep their defaults.
    #[arg(short, long, env = "PROGRESSION_CONFIG", help = "Progression config JSON file")]
    pub config: Option<PathBuf>,

    /// Number of recent ratings kept per player
    #[arg(long, env = "HISTORY_LENGTH", default_value_t = DEFAULT_HISTORY_LENGTH)]
    pub history_length: usize,

    /// Log level (trace, debug, info, warn, error)
    #[arg(
        short,
        long,
        env = "RUST_LOG",
        default_value = "info",
        value_parser = ["trace", "debug", "info", "warn", "error"],
        help = "Sets the logging verbosity"
    )]
    pub log_level: String
}
