//! Tallies a poll from the command line.
//!
//! ```bash
//! # worked example: 18 50 19 52 30
//! clustered-mean
//!
//! clustered-mean 10 20 30 400
//! clustered-mean --file ballots.txt --method median --json
//! clustered-mean --config poll.json
//! clustered-mean --interactive
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use clustered_mean::Poll;
use clustered_mean::ui::cli::drivers::InquireDriver;
use clustered_mean::ui::cli::wizard::prompt_poll;
use clustered_mean::ui::types::choices::{TallyChoice, TallyKind};
use clustered_mean::ui::types::config::PollConfig;
use clustered_mean::utils::file_parsing::read_ballots;

const WORKED_EXAMPLE: [f64; 5] = [18.0, 50.0, 19.0, 52.0, 30.0];

#[derive(Parser, Debug)]
#[command(name = "clustered-mean", about = "Outlier-resistant poll tallying")]
struct Args {
    /// Ballots in submission order
    #[arg(allow_negative_numbers = true)]
    ballots: Vec<f64>,

    /// Read ballots from a file (comma or whitespace separated, `#` comments)
    #[arg(long, conflicts_with_all = ["config", "interactive"])]
    file: Option<PathBuf>,

    /// Read tally method and ballots from a JSON poll config
    #[arg(long, conflicts_with = "interactive")]
    config: Option<PathBuf>,

    /// Tally method (clustered-mean, mean, median, trimmed-mean)
    #[arg(long)]
    method: Option<TallyKind>,

    /// Build the poll with interactive prompts
    #[arg(long)]
    interactive: bool,

    /// Print the full tally report as JSON
    #[arg(long)]
    json: bool,

    /// Print the JSON schema of the poll config and exit
    #[arg(long)]
    schema: bool,

    /// Log merge steps (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn poll_config(args: &Args) -> Result<PollConfig> {
    let mut config = if args.interactive {
        prompt_poll(&InquireDriver)?
    } else if let Some(path) = &args.config {
        PollConfig::load(path).with_context(|| format!("loading config {}", path.display()))?
    } else {
        let mut ballots = match &args.file {
            Some(path) => {
                read_ballots(path).with_context(|| format!("reading {}", path.display()))?
            }
            None => Vec::new(),
        };
        ballots.extend(&args.ballots);
        if ballots.is_empty() {
            ballots = WORKED_EXAMPLE.to_vec();
        }
        PollConfig {
            tally: TallyChoice::default(),
            ballots,
        }
    };

    if let Some(kind) = args.method {
        config.tally = TallyChoice::from_kind(kind);
    }
    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    if args.schema {
        println!("{}", serde_json::to_string_pretty(&PollConfig::schema())?);
        return Ok(());
    }

    let config = poll_config(&args)?;
    let mut poll = Poll::from(config);
    let report = poll.close().context("tally failed")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("{}", report.estimate);
    }
    Ok(())
}
