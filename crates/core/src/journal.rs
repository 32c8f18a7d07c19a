use serde::{Deserialize, Serialize};

use crate::grid::GridConfig;
use crate::types::Direction;

pub const JOURNAL_FORMAT_VERSION: u16 = 1;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InputJournal {
    pub format_version: u16,
    pub seed: u64,
    pub config: GridConfig,
    pub inputs: Vec<InputRecord>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputRecord {
    pub seq: u64,
    pub direction: Direction,
}

impl InputJournal {
    pub fn new(seed: u64, config: GridConfig) -> Self {
        Self { format_version: JOURNAL_FORMAT_VERSION, seed, config, inputs: Vec::new() }
    }

    pub fn append_move(&mut self, direction: Direction) {
        let seq = self.inputs.len() as u64;
        self.inputs.push(InputRecord { seq, direction });
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_move_numbers_inputs_sequentially() {
        let mut journal = InputJournal::new(5, GridConfig::new(10, 10, 0.15));
        journal.append_move(Direction::Up);
        journal.append_move(Direction::Right);
        let seqs: Vec<u64> = journal.inputs.iter().map(|record| record.seq).collect();
        assert_eq!(seqs, vec![0, 1]);
    }

    #[test]
    fn journal_json_uses_lowercase_directions() {
        let mut journal = InputJournal::new(5, GridConfig::new(4, 4, 0.25));
        journal.append_move(Direction::Left);
        let json = journal.to_json_pretty().expect("serialize");
        assert!(json.contains("\"left\""), "unexpected journal json: {json}");
        assert_eq!(InputJournal::from_json(&json).expect("deserialize"), journal);
    }

    #[test]
    fn missing_max_attempts_uses_default_budget() {
        let raw = r#"{
            "format_version": 1,
            "seed": 9,
            "config": { "width": 6, "height": 6, "density": 0.25 },
            "inputs": [{ "seq": 0, "direction": "up" }]
        }"#;
        let journal = InputJournal::from_json(raw).expect("deserialize");
        assert_eq!(journal.config.max_attempts, crate::grid::DEFAULT_MAX_ATTEMPTS);
        assert_eq!(journal.inputs[0].direction, Direction::Up);
    }
}
