use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A grid coordinate. `x` grows rightward, `y` grows downward, so row 0 is the top of the board.
///
/// Ordering is row-major (`y` first) which keeps `BTreeSet<Pos>` iteration stable for hashing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

impl Pos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { y, x }
    }

    /// Saturates at the `i32` range, so a step off an extreme coordinate stays off the board.
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self { y: self.y.saturating_add(dy), x: self.x.saturating_add(dx) }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Neighbor enumeration order. Callers that break ties by position in a list rely on it.
    pub const ALL: [Direction; 4] =
        [Direction::Up, Direction::Right, Direction::Down, Direction::Left];

    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    #[serde(alias = "low")]
    Easy,
    Medium,
    #[serde(alias = "high")]
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Fraction of all cells that generation turns into obstacles.
    pub const fn density(self) -> f64 {
        match self {
            Difficulty::Easy => 0.15,
            Difficulty::Medium => 0.25,
            Difficulty::Hard => 0.35,
        }
    }

    /// The next harder preset; `Hard` is the ceiling.
    pub const fn harder(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium | Difficulty::Hard => Difficulty::Hard,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "EASY",
            Difficulty::Medium => "MEDIUM",
            Difficulty::Hard => "HARD",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "easy" | "low" | "1" => Ok(Difficulty::Easy),
            "medium" | "2" => Ok(Difficulty::Medium),
            "hard" | "high" | "3" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty '{other}' (expected easy, medium or hard)")),
        }
    }
}

/// Result of one pursuer turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PursuitOutcome {
    Moved(Pos),
    Captured,
    Stalled,
}

/// Which rule produced the pursuer's step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PursuitTier {
    ShortestPath,
    Direct,
    Wander,
}

/// Result of applying one player direction to a grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerMove {
    Moved(Pos),
    Blocked,
    Goal,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LevelStatus {
    /// No grid generated yet. `Level` values never report it; shells use it before the first level.
    #[default]
    Idle,
    Active,
    Captured,
    GoalReached,
}

impl LevelStatus {
    pub const fn is_terminal(self) -> bool {
        matches!(self, LevelStatus::Captured | LevelStatus::GoalReached)
    }
}
