//! Hand-built boards shared by the unit test suites.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;

use crate::grid::Grid;
use crate::types::Pos;

pub(crate) fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

pub(crate) fn open_grid(width: i32, height: i32) -> Grid {
    Grid::open(width, height).expect("fixture dimensions are positive")
}

pub(crate) fn grid_with_walls(width: i32, height: i32, walls: &[Pos]) -> Grid {
    let mut grid = open_grid(width, height);
    for wall in walls {
        assert!(grid.set_obstacle(*wall, true), "fixture wall {wall} out of bounds");
    }
    grid
}

/// 5x5 board cut in half by a full wall down column 2.
pub(crate) fn split_board_fixture() -> Grid {
    let walls: Vec<Pos> = (0..5).map(|y| Pos::new(2, y)).collect();
    grid_with_walls(5, 5, &walls)
}

/// 5x5 board whose pursuer corner (4, 4) is closed off by walls at (3, 4) and (4, 3).
pub(crate) fn boxed_in_pursuer_fixture() -> Grid {
    grid_with_walls(5, 5, &[Pos::new(3, 4), Pos::new(4, 3)])
}

/// 4x4 board whose goal corner (3, 0) is closed off by walls at (2, 0) and (3, 1).
pub(crate) fn sealed_goal_fixture() -> Grid {
    grid_with_walls(4, 4, &[Pos::new(2, 0), Pos::new(3, 1)])
}
