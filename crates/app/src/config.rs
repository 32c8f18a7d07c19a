//! Optional TOML settings for the shell. Every field falls back to its default.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use trek_core::grid::DEFAULT_MAX_ATTEMPTS;
use trek_core::{Difficulty, GridConfig};

pub const DEFAULT_BOARD_SIZE: i32 = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io { path: PathBuf, source: io::Error },

    #[error("failed to parse config {path}: {source}")]
    Parse { path: PathBuf, source: toml::de::Error },
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShellConfig {
    pub board_size: i32,
    pub difficulty: Difficulty,
    pub max_attempts: u32,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            difficulty: Difficulty::Easy,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl ShellConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        Self::parse(&content)
            .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Board settings for one level at `difficulty`. Boards are square.
    pub fn grid_config(&self, difficulty: Difficulty) -> GridConfig {
        GridConfig::for_difficulty(self.board_size, self.board_size, difficulty)
            .with_max_attempts(self.max_attempts)
    }
}
