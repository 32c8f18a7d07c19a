//! Read-only view of a board handed to presentation shells each turn.

use serde::{Deserialize, Serialize};

use crate::grid::Grid;
use crate::types::{LevelStatus, Pos};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSnapshot {
    pub width: usize,
    pub height: usize,
    /// Row-major, which is also `Pos` order.
    pub obstacles: Vec<Pos>,
    pub start_flag: Pos,
    pub goal_flag: Pos,
    pub player: Pos,
    pub pursuer: Pos,
    pub goal: Pos,
    pub status: LevelStatus,
}

impl GridSnapshot {
    pub fn capture(grid: &Grid, status: LevelStatus) -> Self {
        let goal_flag = grid
            .cells()
            .iter()
            .find(|cell| cell.is_goal)
            .map_or(grid.goal_pos(), |cell| cell.pos());
        Self {
            width: grid.width(),
            height: grid.height(),
            obstacles: grid.obstacles().collect(),
            start_flag: grid.start_flag_pos(),
            goal_flag,
            player: grid.player_pos(),
            pursuer: grid.pursuer_pos(),
            goal: grid.goal_pos(),
            status,
        }
    }

    pub fn is_obstacle(&self, pos: Pos) -> bool {
        self.obstacles.binary_search(&pos).is_ok()
    }
}
