//! Obstacle placement with a continuously re-validated player-to-goal route.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use super::Grid;
use crate::random::random_index;
use crate::types::{Difficulty, Pos};

/// Sample budget for one generation call. Every drawn coordinate counts, including rejections.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 100_000;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GridError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimension { width: i32, height: i32 },

    #[error("obstacle density must lie in [0, 1), got {0}")]
    InvalidDensity(f64),

    #[error("placed {placed} of {target} obstacles before exhausting {attempts} attempts")]
    GenerationFailed { placed: usize, target: usize, attempts: u32 },
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    pub width: i32,
    pub height: i32,
    pub density: f64,
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
}

fn default_max_attempts() -> u32 {
    DEFAULT_MAX_ATTEMPTS
}

impl GridConfig {
    pub fn new(width: i32, height: i32, density: f64) -> Self {
        Self { width, height, density, max_attempts: DEFAULT_MAX_ATTEMPTS }
    }

    pub fn for_difficulty(width: i32, height: i32, difficulty: Difficulty) -> Self {
        Self::new(width, height, difficulty.density())
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn validate(&self) -> Result<(), GridError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(GridError::InvalidDimension { width: self.width, height: self.height });
        }
        if !(0.0..1.0).contains(&self.density) {
            return Err(GridError::InvalidDensity(self.density));
        }
        Ok(())
    }

    /// `floor(width * height * density)`.
    pub fn target_obstacle_count(&self) -> usize {
        let cells = f64::from(self.width) * f64::from(self.height);
        (cells * self.density).floor() as usize
    }
}

pub fn generate_seeded(config: &GridConfig, seed: u64) -> Result<Grid, GridError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    generate(config, &mut rng)
}

pub fn generate<R: Rng + ?Sized>(config: &GridConfig, rng: &mut R) -> Result<Grid, GridError> {
    config.validate()?;
    let mut grid = Grid::open(config.width, config.height)?;
    let target = config.target_obstacle_count();

    let reserved = reserved_cells(&grid);
    let free_cells = grid.cells.len() - reserved.len();
    if target > free_cells {
        warn!(target, free_cells, "obstacle target exceeds placeable cells");
        return Err(GridError::GenerationFailed { placed: 0, target, attempts: 0 });
    }

    let mut placed = 0_usize;
    let mut attempts = 0_u32;
    while placed < target {
        if attempts >= config.max_attempts {
            warn!(placed, target, attempts, "obstacle placement exhausted its attempt budget");
            return Err(GridError::GenerationFailed { placed, target, attempts });
        }
        attempts += 1;

        let candidate = Pos::new(
            random_index(rng, grid.width) as i32,
            random_index(rng, grid.height) as i32,
        );
        if reserved.contains(&candidate) || grid.is_obstacle(candidate) {
            continue;
        }

        grid.set_obstacle(candidate, true);
        if !grid.is_solvable() {
            grid.set_obstacle(candidate, false);
            continue;
        }
        placed += 1;
    }

    debug!(
        width = grid.width,
        height = grid.height,
        obstacles = placed,
        attempts,
        "grid generated"
    );
    Ok(grid)
}

/// Cells that never receive obstacles: both flags and both starting actors. Deduplicated so
/// degenerate boards (width 1) do not double count.
fn reserved_cells(grid: &Grid) -> Vec<Pos> {
    let mut reserved = vec![
        grid.start_flag_pos(),
        grid.goal_pos(),
        grid.player_pos(),
        grid.pursuer_pos(),
    ];
    reserved.sort();
    reserved.dedup();
    reserved
}
