use serde::Serialize;
use thiserror::Error;

use crate::grid::GridError;
use crate::journal::{InputJournal, JOURNAL_FORMAT_VERSION};
use crate::level::{Level, LevelError};
use crate::snapshot::GridSnapshot;
use crate::types::LevelStatus;

#[derive(Debug, Error, PartialEq)]
pub enum ReplayError {
    #[error("journal format version {0} is not supported (expected {JOURNAL_FORMAT_VERSION})")]
    UnsupportedVersion(u16),

    #[error("level generation failed: {0}")]
    Generation(#[from] GridError),

    #[error("input {seq} arrived after the level ended ({status:?})")]
    TrailingInput { seq: u64, status: LevelStatus },
}

#[derive(Debug, PartialEq, Serialize)]
pub struct ReplayResult {
    pub final_status: LevelStatus,
    pub final_moves: u32,
    pub final_snapshot_hash: u64,
    pub final_snapshot: GridSnapshot,
}

pub fn replay_to_end(journal: &InputJournal) -> Result<ReplayResult, ReplayError> {
    if journal.format_version != JOURNAL_FORMAT_VERSION {
        return Err(ReplayError::UnsupportedVersion(journal.format_version));
    }
    let mut level = Level::new(journal.config, journal.seed)?;

    for record in &journal.inputs {
        level
            .take_turn(record.direction)
            .map_err(|LevelError::NotActive { status }| ReplayError::TrailingInput {
                seq: record.seq,
                status,
            })?;
    }

    Ok(ReplayResult {
        final_status: level.status(),
        final_moves: level.moves(),
        final_snapshot_hash: level.snapshot_hash(),
        final_snapshot: level.snapshot(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridConfig;
    use crate::types::{Difficulty, Direction, PlayerMove};

    fn play_and_record(seed: u64, directions: &[Direction]) -> (Level, InputJournal) {
        let config = GridConfig::for_difficulty(10, 10, Difficulty::Medium);
        let mut level = Level::new(config, seed).expect("generate");
        let mut journal = InputJournal::new(seed, config);
        for direction in directions {
            if level.status().is_terminal() {
                break;
            }
            level.take_turn(*direction).expect("level is active");
            journal.append_move(*direction);
        }
        (level, journal)
    }

    #[test]
    fn replay_reproduces_live_play() {
        let directions = [
            Direction::Up,
            Direction::Up,
            Direction::Right,
            Direction::Up,
            Direction::Right,
            Direction::Right,
        ];
        let (level, journal) = play_and_record(2024, &directions);
        let replayed = replay_to_end(&journal).expect("replay");

        assert_eq!(replayed.final_snapshot_hash, level.snapshot_hash());
        assert_eq!(replayed.final_moves, level.moves());
        assert_eq!(replayed.final_status, level.status());
        assert_eq!(replayed.final_snapshot, level.snapshot());
    }

    #[test]
    fn input_after_level_end_is_rejected() {
        let config = GridConfig::new(3, 3, 0.0);
        let mut journal = InputJournal::new(0, config);
        // Up, up, right, right walks the open 3x3 board from (0, 2) to the goal at (2, 0).
        // Caught on the way or not, the level is over before the final input.
        for direction in [Direction::Up, Direction::Up, Direction::Right, Direction::Right] {
            journal.append_move(direction);
        }
        journal.append_move(Direction::Down);

        match replay_to_end(&journal) {
            Err(ReplayError::TrailingInput { status, .. }) => assert!(status.is_terminal()),
            other => panic!("expected TrailingInput, got {other:?}"),
        }
    }

    #[test]
    fn unknown_format_version_is_refused() {
        let mut journal = InputJournal::new(1, GridConfig::new(5, 5, 0.15));
        journal.format_version = 99;
        journal.append_move(Direction::Up);
        assert_eq!(replay_to_end(&journal), Err(ReplayError::UnsupportedVersion(99)));
    }

    #[test]
    fn invalid_config_fails_replay() {
        let journal = InputJournal::new(1, GridConfig::new(5, 5, 1.5));
        assert_eq!(
            replay_to_end(&journal),
            Err(ReplayError::Generation(GridError::InvalidDensity(1.5)))
        );
    }

    #[test]
    fn blocked_inputs_replay_as_no_ops() {
        let config = GridConfig::new(4, 4, 0.0);
        let mut level = Level::new(config, 4).expect("generate");
        let report = level.take_turn(Direction::Down).expect("active");
        assert_eq!(report.player, PlayerMove::Blocked);

        let mut journal = InputJournal::new(4, config);
        journal.append_move(Direction::Down);
        let replayed = replay_to_end(&journal).expect("replay");
        assert_eq!(replayed.final_moves, 0);
        assert_eq!(replayed.final_snapshot_hash, level.snapshot_hash());
    }
}
