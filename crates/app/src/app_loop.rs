use thiserror::Error;
use tracing::{debug, info};
use trek_core::random::derive_level_seed;
use trek_core::{
    Difficulty, Direction, GridError, GridSnapshot, InputJournal, Level, LevelError, LevelStatus,
    TurnReport,
};

use crate::config::ShellConfig;
use crate::level_score;

/// Levels at multiples of this number raise the difficulty one step.
pub const DIFFICULTY_STEP_LEVELS: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppMode {
    #[default]
    Menu,
    Playing,
    GameOver,
    LevelComplete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Move(Direction),
    Start,
    Restart,
    SetDifficulty(Difficulty),
    Continue,
    Back,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellSignal {
    Continue,
    Quit,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Generation(#[from] GridError),

    #[error(transparent)]
    Level(#[from] LevelError),
}

pub struct AppState {
    mode: AppMode,
    difficulty: Difficulty,
    level_number: u32,
    score: i64,
    run_seed: u64,
    config: ShellConfig,
    /// Bumped on every generated level, restarts included, so each board gets its own seed.
    levels_started: u32,
    level: Option<Level>,
    journal: Option<InputJournal>,
    last_turn: Option<TurnReport>,
}

impl AppState {
    pub fn new(run_seed: u64, config: ShellConfig) -> Self {
        Self {
            mode: AppMode::Menu,
            difficulty: config.difficulty,
            level_number: 1,
            score: 0,
            run_seed,
            config,
            levels_started: 0,
            level: None,
            journal: None,
            last_turn: None,
        }
    }

    /// Applies one intent. Intents with no meaning in the current mode are ignored.
    pub fn handle(&mut self, intent: Intent) -> Result<ShellSignal, AppError> {
        if intent == Intent::Quit {
            return Ok(ShellSignal::Quit);
        }

        match (self.mode, intent) {
            (AppMode::Menu, Intent::Back) => return Ok(ShellSignal::Quit),
            (AppMode::Menu, Intent::SetDifficulty(difficulty)) => {
                debug!(%difficulty, "difficulty selected");
                self.difficulty = difficulty;
            }
            (AppMode::Menu, Intent::Start) => {
                self.begin_level(1, self.difficulty)?;
                self.score = 0;
            }
            (AppMode::Playing, Intent::Move(direction)) => self.play(direction)?,
            (AppMode::Playing, Intent::Restart) => {
                let seed = self.level.as_ref().map(Level::seed);
                if let Some(seed) = seed {
                    self.load_level(seed, self.level_number, self.difficulty)?;
                }
            }
            (AppMode::LevelComplete, Intent::Continue) => {
                let next = self.level_number + 1;
                let difficulty = if next % DIFFICULTY_STEP_LEVELS == 0 {
                    self.difficulty.harder()
                } else {
                    self.difficulty
                };
                self.begin_level(next, difficulty)?;
            }
            (AppMode::GameOver, Intent::Continue) | (_, Intent::Back) => {
                self.mode = AppMode::Menu;
            }
            _ => {}
        }

        Ok(ShellSignal::Continue)
    }

    fn play(&mut self, direction: Direction) -> Result<(), AppError> {
        let Some(level) = self.level.as_mut() else {
            return Ok(());
        };
        let report = level.take_turn(direction)?;
        if let Some(journal) = self.journal.as_mut() {
            journal.append_move(direction);
        }

        match report.status {
            LevelStatus::GoalReached => {
                let earned = level_score(level.moves());
                self.score += earned;
                info!(level = self.level_number, moves = level.moves(), earned, "level complete");
                self.mode = AppMode::LevelComplete;
            }
            LevelStatus::Captured => {
                info!(level = self.level_number, moves = level.moves(), "game over");
                self.mode = AppMode::GameOver;
            }
            LevelStatus::Idle | LevelStatus::Active => {}
        }
        self.last_turn = Some(report);
        Ok(())
    }

    fn begin_level(&mut self, level_number: u32, difficulty: Difficulty) -> Result<(), AppError> {
        let seed = derive_level_seed(self.run_seed, self.levels_started);
        self.load_level(seed, level_number, difficulty)?;
        self.levels_started += 1;
        Ok(())
    }

    /// Generates first and commits after, so a failed generation leaves the shell untouched.
    fn load_level(
        &mut self,
        seed: u64,
        level_number: u32,
        difficulty: Difficulty,
    ) -> Result<(), AppError> {
        let grid_config = self.config.grid_config(difficulty);
        let level = Level::new(grid_config, seed)?;

        self.journal = Some(InputJournal::new(seed, grid_config));
        self.level = Some(level);
        self.level_number = level_number;
        self.difficulty = difficulty;
        self.last_turn = None;
        self.mode = AppMode::Playing;
        Ok(())
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn level_number(&self) -> u32 {
        self.level_number
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn run_seed(&self) -> u64 {
        self.run_seed
    }

    pub fn level(&self) -> Option<&Level> {
        self.level.as_ref()
    }

    pub fn level_status(&self) -> LevelStatus {
        self.level.as_ref().map_or(LevelStatus::Idle, Level::status)
    }

    pub fn snapshot(&self) -> Option<GridSnapshot> {
        self.level.as_ref().map(Level::snapshot)
    }

    pub fn journal(&self) -> Option<&InputJournal> {
        self.journal.as_ref()
    }

    pub fn last_turn(&self) -> Option<&TurnReport> {
        self.last_turn.as_ref()
    }
}
