use anyhow::{Context, Result};
use auction_evaluator::{
    input::AuctionInput,
    recorder::TracingRecorder,
    report, Evaluator, EvaluatorConfig,
};
use clap::Parser;
use std::{fs::File, io, path::PathBuf};
use tracing_subscriber::EnvFilter;

/// Evaluate the bids of an auction
#[derive(Parser)]
#[clap(name = "auction-evaluator", version)]
struct Cli {
    /// Auction JSON file, `-` for stdin
    file: PathBuf,

    /// How many of the highest bids to list
    #[clap(long, env = "AUCTION_TOP_N", default_value_t = auction_evaluator::config::DEFAULT_TOP_N)]
    top: usize,

    /// Print the evaluation as JSON
    #[clap(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let source = if cli.file.as_os_str() == "-" {
        "stdin".to_owned()
    } else {
        cli.file.display().to_string()
    };

    let parsed = if cli.file.as_os_str() == "-" {
        AuctionInput::from_reader(io::stdin().lock())
    } else {
        let file = File::open(&cli.file).with_context(|| format!("Failed to open {source}"))?;
        AuctionInput::from_reader(io::BufReader::new(file))
    };
    let input = parsed.with_context(|| format!("Failed to read auction from {source}"))?;
    let auction = input
        .into_auction()
        .with_context(|| format!("Invalid auction in {source}"))?;

    let mut evaluator =
        Evaluator::with_recorder(EvaluatorConfig::with_top_n(cli.top), TracingRecorder::new_shared());
    evaluator.evaluate(&auction);
    let evaluation = evaluator.evaluation();

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&evaluation)?);
    } else {
        report::write_text(&mut io::stdout().lock(), auction.description(), &evaluation)?;
    }

    Ok(())
}
