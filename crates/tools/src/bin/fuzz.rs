use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail, ensure};
use clap::Parser;
use rand_chacha::{ChaCha8Rng, rand_core::SeedableRng};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use trek_core::random::{choose, derive_level_seed};
use trek_core::{Difficulty, Direction, GridConfig, InputJournal, Level, LevelStatus};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Random-walk levels and check engine invariants",
    long_about = None
)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 200)]
    levels: u32,
    #[arg(long, default_value_t = 10)]
    size: i32,
    #[arg(long, default_value_t = 400)]
    max_moves: u32,
    /// Write the journal of the failing level, or of the last level when all pass
    #[arg(long)]
    journal_out: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();
    let args = Args::parse();

    println!("Starting fuzz harness on seed {} for {} levels...", args.seed, args.levels);
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let mut tally = [0_u32; 3];
    let mut last_journal = None;

    for index in 0..args.levels {
        let difficulty = Difficulty::ALL[index as usize % Difficulty::ALL.len()];
        let config = GridConfig::for_difficulty(args.size, args.size, difficulty);
        let level_seed = derive_level_seed(args.seed, index);
        let mut level = Level::new(config, level_seed)
            .with_context(|| format!("generation failed for level seed {level_seed}"))?;
        let mut journal = InputJournal::new(level_seed, config);

        let checked = walk(&mut level, &mut journal, &mut rng, args.max_moves);
        if let Err(err) = checked {
            if let Some(path) = &args.journal_out {
                write_journal(path, &journal)?;
            }
            return Err(err.context(format!("invariant broken on level seed {level_seed}")));
        }

        match level.status() {
            LevelStatus::GoalReached => tally[0] += 1,
            LevelStatus::Captured => tally[1] += 1,
            LevelStatus::Idle | LevelStatus::Active => tally[2] += 1,
        }
        debug!(level_seed, moves = level.moves(), status = ?level.status(), "level walked");
        last_journal = Some(journal);
    }

    if let (Some(path), Some(journal)) = (&args.journal_out, &last_journal) {
        write_journal(path, journal)?;
    }
    info!(goal = tally[0], captured = tally[1], unfinished = tally[2], "fuzz finished");
    println!(
        "Fuzzing completed successfully: {} reached goal, {} captured, {} unfinished.",
        tally[0], tally[1], tally[2]
    );
    Ok(())
}

fn walk(
    level: &mut Level,
    journal: &mut InputJournal,
    rng: &mut ChaCha8Rng,
    max_moves: u32,
) -> Result<()> {
    let mut previous_moves = level.moves();
    for _ in 0..max_moves {
        let Some(direction) = choose(rng, &Direction::ALL).copied() else {
            break;
        };
        let report = level.take_turn(direction)?;
        journal.append_move(direction);

        let grid = level.grid();
        ensure!(grid.in_bounds(grid.pursuer_pos()), "pursuer left the board");
        ensure!(grid.in_bounds(grid.player_pos()), "player left the board");
        ensure!(!grid.is_obstacle(grid.pursuer_pos()), "pursuer inside an obstacle");
        ensure!(!grid.is_obstacle(grid.player_pos()), "player inside an obstacle");
        ensure!(level.moves() >= previous_moves, "move counter went backwards");
        ensure!(level.moves() - previous_moves <= 1, "one turn counted more than one move");
        previous_moves = level.moves();

        match report.status {
            LevelStatus::Captured => {
                ensure!(grid.is_captured(), "captured without sharing a cell");
                break;
            }
            LevelStatus::GoalReached => {
                ensure!(grid.player_at_goal(), "goal reached away from the goal cell");
                break;
            }
            LevelStatus::Active => {
                ensure!(!grid.is_captured(), "active level with pursuer on player");
            }
            LevelStatus::Idle => bail!("generated level reported idle"),
        }
    }
    Ok(())
}

fn write_journal(path: &Path, journal: &InputJournal) -> Result<()> {
    let raw = journal.to_json_pretty()?;
    fs::write(path, raw).with_context(|| format!("failed to write journal {}", path.display()))
}
