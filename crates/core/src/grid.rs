//! Board topology: cells, obstacle flags, and the movable player/pursuer/goal positions.
//! Pathfinding queries live in `crate::pathfinding`; `Grid` exposes them as methods.

mod generator;

use std::hash::{Hash, Hasher};

use crate::pathfinding;
use crate::types::{Direction, PlayerMove, Pos};

pub use generator::{DEFAULT_MAX_ATTEMPTS, GridConfig, GridError, generate, generate_seeded};

/// One board square. Identity is its coordinate; the flags do not take part in equality.
#[derive(Clone, Copy, Debug)]
pub struct Cell {
    pos: Pos,
    pub is_obstacle: bool,
    pub is_start: bool,
    pub is_goal: bool,
}

impl Cell {
    fn new(pos: Pos) -> Self {
        Self { pos, is_obstacle: false, is_start: false, is_goal: false }
    }

    pub fn pos(&self) -> Pos {
        self.pos
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl Eq for Cell {}

impl Hash for Cell {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pos.hash(state);
    }
}

#[derive(Clone, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    player_pos: Pos,
    pursuer_pos: Pos,
    goal_pos: Pos,
}

impl Grid {
    /// Obstacle-free board with the standard layout: start flag at the top-left, goal at the
    /// top-right, player at the bottom-left and pursuer at the bottom-right.
    pub fn open(width: i32, height: i32) -> Result<Self, GridError> {
        if width <= 0 || height <= 0 {
            return Err(GridError::InvalidDimension { width, height });
        }
        let (w, h) = (width as usize, height as usize);
        let mut cells = Vec::with_capacity(w * h);
        for y in 0..height {
            for x in 0..width {
                cells.push(Cell::new(Pos::new(x, y)));
            }
        }

        let mut grid = Self {
            width: w,
            height: h,
            cells,
            player_pos: Pos::new(0, height - 1),
            pursuer_pos: Pos::new(width - 1, height - 1),
            goal_pos: Pos::new(width - 1, 0),
        };
        let start_flag = grid.start_flag_pos();
        let goal = grid.goal_pos;
        if let Some(cell) = grid.cell_mut(start_flag) {
            cell.is_start = true;
        }
        if let Some(cell) = grid.cell_mut(goal) {
            cell.is_goal = true;
        }
        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn player_pos(&self) -> Pos {
        self.player_pos
    }

    pub fn pursuer_pos(&self) -> Pos {
        self.pursuer_pos
    }

    pub fn goal_pos(&self) -> Pos {
        self.goal_pos
    }

    /// Cosmetic start marker. Gameplay never consults it.
    pub fn start_flag_pos(&self) -> Pos {
        Pos::new(0, 0)
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    fn index(&self, pos: Pos) -> Option<usize> {
        self.in_bounds(pos).then(|| (pos.y as usize) * self.width + (pos.x as usize))
    }

    pub fn cell(&self, pos: Pos) -> Option<&Cell> {
        self.index(pos).map(|index| &self.cells[index])
    }

    fn cell_mut(&mut self, pos: Pos) -> Option<&mut Cell> {
        self.index(pos).map(|index| &mut self.cells[index])
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn is_obstacle(&self, pos: Pos) -> bool {
        self.cell(pos).is_some_and(|cell| cell.is_obstacle)
    }

    /// Sets or clears an obstacle without re-checking solvability. Returns `false` when
    /// `pos` is out of bounds.
    pub fn set_obstacle(&mut self, pos: Pos, obstacle: bool) -> bool {
        match self.cell_mut(pos) {
            Some(cell) => {
                cell.is_obstacle = obstacle;
                true
            }
            None => false,
        }
    }

    /// Obstacle coordinates in row-major order.
    pub fn obstacles(&self) -> impl Iterator<Item = Pos> + '_ {
        self.cells.iter().filter(|cell| cell.is_obstacle).map(|cell| cell.pos)
    }

    pub fn obstacle_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_obstacle).count()
    }

    pub fn set_player_pos(&mut self, pos: Pos) {
        self.player_pos = pos;
    }

    pub fn set_pursuer_pos(&mut self, pos: Pos) {
        self.pursuer_pos = pos;
    }

    pub fn is_valid_move(&self, pos: Pos) -> bool {
        self.cell(pos).is_some_and(|cell| !cell.is_obstacle)
    }

    /// Walkable cardinal neighbors in up, right, down, left order.
    pub fn neighbors(&self, pos: Pos) -> Vec<Pos> {
        pathfinding::cardinal_neighbors(pos)
            .into_iter()
            .filter(|next| self.is_valid_move(*next))
            .collect()
    }

    pub fn path_exists(&self, start: Pos, end: Pos) -> bool {
        pathfinding::path_exists(self, start, end)
    }

    pub fn find_path(&self, start: Pos, end: Pos) -> Vec<Pos> {
        pathfinding::astar_path(self, start, end)
    }

    pub fn is_solvable(&self) -> bool {
        self.path_exists(self.player_pos, self.goal_pos)
    }

    pub fn is_captured(&self) -> bool {
        self.player_pos == self.pursuer_pos
    }

    pub fn player_at_goal(&self) -> bool {
        self.player_pos == self.goal_pos
    }

    /// Validates and commits one player step. Blocked steps leave the player in place.
    pub fn apply_player_move(&mut self, direction: Direction) -> PlayerMove {
        let target = self.player_pos.step(direction);
        if !self.is_valid_move(target) {
            return PlayerMove::Blocked;
        }
        self.player_pos = target;
        if self.player_at_goal() { PlayerMove::Goal } else { PlayerMove::Moved(target) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::*;

    #[test]
    fn open_grid_places_standard_layout() {
        let grid = Grid::open(10, 8).expect("valid dimensions");
        assert_eq!(grid.player_pos(), Pos::new(0, 7));
        assert_eq!(grid.pursuer_pos(), Pos::new(9, 7));
        assert_eq!(grid.goal_pos(), Pos::new(9, 0));
        assert!(grid.cell(Pos::new(0, 0)).is_some_and(|cell| cell.is_start));
        assert_eq!(grid.cells().iter().filter(|cell| cell.is_goal).count(), 1);
        assert!(grid.cell(grid.goal_pos()).is_some_and(|cell| cell.is_goal));
        assert_eq!(grid.obstacle_count(), 0);
    }

    #[test]
    fn open_rejects_non_positive_dimensions() {
        assert_eq!(
            Grid::open(0, 5).err(),
            Some(GridError::InvalidDimension { width: 0, height: 5 })
        );
        assert_eq!(
            Grid::open(4, -1).err(),
            Some(GridError::InvalidDimension { width: 4, height: -1 })
        );
    }

    #[test]
    fn cells_compare_by_coordinate_only() {
        let mut grid = open_grid(3, 3);
        let before = *grid.cell(Pos::new(1, 1)).expect("in bounds");
        grid.set_obstacle(Pos::new(1, 1), true);
        let after = *grid.cell(Pos::new(1, 1)).expect("in bounds");
        assert!(after.is_obstacle);
        assert_eq!(before, after);
    }

    #[test]
    fn valid_move_rejects_out_of_bounds_and_obstacles() {
        let grid = grid_with_walls(4, 4, &[Pos::new(1, 1)]);
        assert!(grid.is_valid_move(Pos::new(0, 0)));
        assert!(!grid.is_valid_move(Pos::new(1, 1)));
        assert!(!grid.is_valid_move(Pos::new(-1, 0)));
        assert!(!grid.is_valid_move(Pos::new(4, 0)));
        assert!(!grid.is_valid_move(Pos::new(0, 4)));
    }

    #[test]
    fn neighbors_follow_up_right_down_left_order() {
        let grid = open_grid(3, 3);
        assert_eq!(
            grid.neighbors(Pos::new(1, 1)),
            vec![Pos::new(1, 0), Pos::new(2, 1), Pos::new(1, 2), Pos::new(0, 1)]
        );
    }

    #[test]
    fn neighbors_skip_edges_and_obstacles() {
        let grid = grid_with_walls(3, 3, &[Pos::new(1, 0)]);
        assert_eq!(grid.neighbors(Pos::new(0, 0)), vec![Pos::new(0, 1)]);
    }

    #[test]
    fn neighbors_of_extreme_coordinates_are_empty() {
        let grid = open_grid(4, 4);
        assert!(grid.neighbors(Pos::new(i32::MAX, 0)).is_empty());
        assert!(grid.neighbors(Pos::new(i32::MIN, 0)).is_empty());
        assert!(grid.neighbors(Pos::new(0, i32::MAX)).is_empty());
        assert!(!grid.path_exists(Pos::new(i32::MIN, i32::MIN), grid.goal_pos()));
        assert!(grid.find_path(Pos::new(i32::MAX, i32::MAX), grid.goal_pos()).is_empty());
    }

    #[test]
    fn set_obstacle_out_of_bounds_is_rejected() {
        let mut grid = open_grid(2, 2);
        assert!(!grid.set_obstacle(Pos::new(5, 5), true));
        assert_eq!(grid.obstacle_count(), 0);
    }

    #[test]
    fn player_move_reports_blocked_moved_and_goal() {
        let mut grid = grid_with_walls(3, 3, &[Pos::new(1, 2)]);
        assert_eq!(grid.apply_player_move(Direction::Left), PlayerMove::Blocked);
        assert_eq!(grid.apply_player_move(Direction::Right), PlayerMove::Blocked);
        assert_eq!(grid.player_pos(), Pos::new(0, 2));

        assert_eq!(grid.apply_player_move(Direction::Up), PlayerMove::Moved(Pos::new(0, 1)));
        assert_eq!(grid.apply_player_move(Direction::Up), PlayerMove::Moved(Pos::new(0, 0)));
        assert_eq!(grid.apply_player_move(Direction::Right), PlayerMove::Moved(Pos::new(1, 0)));
        assert_eq!(grid.apply_player_move(Direction::Right), PlayerMove::Goal);
        assert!(grid.player_at_goal());
    }
}
