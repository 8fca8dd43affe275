use clap::Parser;
use squad_progression::{
    args::Args,
    error::ProcessorError,
    io::{load_config, load_matchday, write_output, MatchdayOutput},
    model::{matchday::process_matchday, rating_tracker::RatingTracker}
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() {
    dotenv::dotenv().ok();
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&args.log_level))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&args) {
        error!("{e}");
        error!("Match day could not be processed, no report was written");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), ProcessorError> {
    let config = load_config(args.config.as_deref())?;
    let input = load_matchday(&args.input)?;

    // 1. Load the squad
    let mut tracker = RatingTracker::from_entries(input.players, args.history_length)?;

    // 2. Progress every player who played
    let report = process_matchday(&config, &tracker, &input.performances, input.played_at)?;

    // 3. Store the new ratings and write the report
    tracker.apply(&report);
    let output = MatchdayOutput::new(report, tracker.entries());
    write_output(&output, args.output.as_ref())?;

    info!("Processing complete");

    Ok(())
}
