use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use trek_core::{InputJournal, ReplayResult, replay_to_end};

#[derive(Parser)]
#[command(author, version, about = "Replay a recorded level journal", long_about = None)]
struct Args {
    /// Path to the journal JSON file to replay
    #[arg(short, long)]
    journal: PathBuf,
    /// Print the full result, final board included, as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();
    let args = Args::parse();

    let raw = fs::read_to_string(&args.journal)
        .with_context(|| format!("failed to read journal file {}", args.journal.display()))?;
    let journal = InputJournal::from_json(&raw).context("failed to deserialize journal JSON")?;

    let result: ReplayResult = replay_to_end(&journal)
        .with_context(|| format!("replay of seed {} failed", journal.seed))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("Replay complete.");
    println!("Seed: {}", journal.seed);
    println!("Inputs: {}", journal.inputs.len());
    println!("Status: {:?}", result.final_status);
    println!("Moves: {}", result.final_moves);
    println!("Snapshot Hash: 0x{:016x}", result.final_snapshot_hash);

    Ok(())
}
