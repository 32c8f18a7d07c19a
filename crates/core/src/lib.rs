pub mod grid;
pub mod journal;
pub mod level;
pub mod pathfinding;
pub mod pursuit;
pub mod random;
pub mod replay;
pub mod snapshot;
pub mod types;

#[cfg(test)]
mod test_support;

use rand_chacha::rand_core::Rng;

pub use grid::{Cell, Grid, GridConfig, GridError};
pub use journal::{InputJournal, InputRecord};
pub use level::{Level, LevelError, TurnReport};
pub use pursuit::advance_pursuer;
pub use replay::*;
pub use snapshot::GridSnapshot;
pub use types::*;

/// Generates a solvable board with the default attempt budget.
pub fn new_grid<R: Rng + ?Sized>(
    width: i32,
    height: i32,
    density: f64,
    rng: &mut R,
) -> Result<Grid, GridError> {
    grid::generate(&GridConfig::new(width, height, density), rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::seeded_rng;

    #[test]
    fn new_grid_matches_generator_output() {
        let from_helper = new_grid(9, 7, 0.25, &mut seeded_rng(123)).expect("generate");
        let from_generator =
            grid::generate_seeded(&GridConfig::new(9, 7, 0.25), 123).expect("generate");

        assert_eq!(
            GridSnapshot::capture(&from_helper, LevelStatus::Active),
            GridSnapshot::capture(&from_generator, LevelStatus::Active)
        );
    }

    #[test]
    fn new_grid_rejects_density_of_one() {
        assert_eq!(
            new_grid(5, 5, 1.0, &mut seeded_rng(0)).err(),
            Some(GridError::InvalidDensity(1.0))
        );
    }
}
