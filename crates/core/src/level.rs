//! One level of play: a generated board, its random stream, and the turn sequence
//! player step, goal check, pursuer step, capture check.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;
use thiserror::Error;
use tracing::info;

use crate::grid::{Grid, GridConfig, GridError, generate};
use crate::pursuit::advance_pursuer;
use crate::snapshot::GridSnapshot;
use crate::types::{Direction, LevelStatus, PlayerMove, PursuitOutcome};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LevelError {
    #[error("level is not accepting moves (status: {status:?})")]
    NotActive { status: LevelStatus },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnReport {
    pub player: PlayerMove,
    /// `None` when the pursuer did not get a turn (blocked move or goal reached).
    pub pursuer: Option<PursuitOutcome>,
    pub status: LevelStatus,
}

pub struct Level {
    seed: u64,
    grid: Grid,
    rng: ChaCha8Rng,
    status: LevelStatus,
    moves: u32,
}

impl Level {
    /// Generates the board from `seed`. The same stream then drives pursuer tie-breaks, so a
    /// seed plus the sequence of directions replays a level exactly.
    pub fn new(config: GridConfig, seed: u64) -> Result<Self, GridError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let grid = generate(&config, &mut rng)?;
        info!(
            seed,
            width = grid.width(),
            height = grid.height(),
            obstacles = grid.obstacle_count(),
            "level started"
        );
        Ok(Self { seed, grid, rng, status: LevelStatus::Active, moves: 0 })
    }

    /// Wraps a hand-built board.
    pub fn from_grid(grid: Grid, seed: u64) -> Self {
        Self {
            seed,
            grid,
            rng: ChaCha8Rng::seed_from_u64(seed),
            status: LevelStatus::Active,
            moves: 0,
        }
    }

    pub fn take_turn(&mut self, direction: Direction) -> Result<TurnReport, LevelError> {
        if self.status != LevelStatus::Active {
            return Err(LevelError::NotActive { status: self.status });
        }

        let player = self.grid.apply_player_move(direction);
        let pursuer = match player {
            PlayerMove::Blocked => None,
            PlayerMove::Goal => {
                self.moves += 1;
                self.finish(LevelStatus::GoalReached);
                None
            }
            PlayerMove::Moved(_) => {
                self.moves += 1;
                let outcome = advance_pursuer(&mut self.grid, &mut self.rng);
                if outcome == PursuitOutcome::Captured {
                    self.finish(LevelStatus::Captured);
                }
                Some(outcome)
            }
        };

        Ok(TurnReport { player, pursuer, status: self.status })
    }

    fn finish(&mut self, status: LevelStatus) {
        self.status = status;
        info!(seed = self.seed, moves = self.moves, ?status, "level finished");
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn status(&self) -> LevelStatus {
        self.status
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot::capture(&self.grid, self.status)
    }

    pub fn snapshot_hash(&self) -> u64 {
        use std::hash::Hasher;
        use xxhash_rust::xxh3::Xxh3;

        let mut hasher = Xxh3::new();
        hasher.write_u64(self.seed);
        hasher.write_u32(self.moves);
        hasher.write_u8(self.status as u8);

        for pos in [self.grid.player_pos(), self.grid.pursuer_pos(), self.grid.goal_pos()] {
            hasher.write_i32(pos.x);
            hasher.write_i32(pos.y);
        }
        for pos in self.grid.obstacles() {
            hasher.write_i32(pos.x);
            hasher.write_i32(pos.y);
        }

        hasher.finish()
    }
}
