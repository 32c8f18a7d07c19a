mod ui_text;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use app::app_loop::{AppMode, AppState, ShellSignal};
use app::config::ShellConfig;
use app::input::parse_intent;
use app::seed::{RunSeed, SeedSource};
use app::{APP_NAME, format_seed};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use trek_core::Difficulty;

use crate::ui_text::{board_lines, finished_recap_lines, menu_lines, status_text};

#[derive(Parser, Debug)]
#[command(name = "tower-trek", about = "Reach the goal before the pursuer catches you")]
struct Args {
    #[arg(long)]
    seed: Option<u64>,
    /// TOML file with board_size, difficulty and max_attempts.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    size: Option<i32>,
    #[arg(long)]
    difficulty: Option<Difficulty>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let mut config = match &args.config {
        Some(path) => ShellConfig::load(path)?,
        None => ShellConfig::default(),
    };
    if let Some(size) = args.size {
        config.board_size = size;
    }
    if let Some(difficulty) = args.difficulty {
        config.difficulty = difficulty;
    }

    let seed = RunSeed::resolve(args.seed);
    if seed.source == SeedSource::Entropy {
        info!(seed = seed.value, "generated run seed");
    }

    let mut state = AppState::new(seed.value, config);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{APP_NAME} (seed {})", format_seed(state.run_seed()))?;
    render(&mut out, &state)?;

    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read input")?;
        let mut changed = false;
        for token in line.split_whitespace() {
            let Some(intent) = parse_intent(token, state.mode()) else {
                writeln!(out, "unknown command '{token}'")?;
                continue;
            };
            match state.handle(intent) {
                Ok(ShellSignal::Quit) => return Ok(()),
                Ok(ShellSignal::Continue) => changed = true,
                Err(err) => {
                    warn!(%err, "command rejected");
                    writeln!(out, "error: {err}")?;
                }
            }
        }
        if changed {
            render(&mut out, &state)?;
        }
    }

    Ok(())
}

fn render(out: &mut impl Write, state: &AppState) -> io::Result<()> {
    match state.mode() {
        AppMode::Menu => {
            for line in menu_lines(state.difficulty()) {
                writeln!(out, "{line}")?;
            }
        }
        AppMode::Playing | AppMode::GameOver | AppMode::LevelComplete => {
            if let Some(snapshot) = state.snapshot() {
                for line in board_lines(&snapshot) {
                    writeln!(out, "{line}")?;
                }
            }
            if state.mode() != AppMode::Playing {
                for line in finished_recap_lines(state) {
                    writeln!(out, "{line}")?;
                }
            }
        }
    }
    writeln!(out, "{}", status_text(state))?;
    out.flush()
}
