//! Pursuer turn rule: follow the shortest path when one exists, otherwise close the gap
//! greedily, otherwise wander, otherwise stall.

use std::cmp::Ordering;

use rand_chacha::rand_core::Rng;
use tracing::debug;

use crate::grid::Grid;
use crate::random::choose;
use crate::types::{Pos, PursuitOutcome, PursuitTier};

/// Advances the pursuer by at most one cell and reports the result.
pub fn advance_pursuer<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> PursuitOutcome {
    if grid.is_captured() {
        debug!(pos = %grid.pursuer_pos(), "pursuer already on player");
        return PursuitOutcome::Captured;
    }

    let Some((next, tier)) = plan_pursuer_step(grid, rng) else {
        debug!(pos = %grid.pursuer_pos(), "pursuer boxed in");
        return PursuitOutcome::Stalled;
    };

    grid.set_pursuer_pos(next);
    debug!(to = %next, ?tier, "pursuer stepped");
    if grid.is_captured() { PursuitOutcome::Captured } else { PursuitOutcome::Moved(next) }
}

/// Chooses the pursuer's next cell without moving it. `None` means no legal step exists.
pub fn plan_pursuer_step<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> Option<(Pos, PursuitTier)> {
    let from = grid.pursuer_pos();
    let target = grid.player_pos();

    if let Some(&next) = grid.find_path(from, target).first() {
        return Some((next, PursuitTier::ShortestPath));
    }

    let direct = direct_candidates(grid, from, target);
    if let Some(&next) = choose(rng, &direct) {
        return Some((next, PursuitTier::Direct));
    }

    let wander = grid.neighbors(from);
    choose(rng, &wander).map(|&next| (next, PursuitTier::Wander))
}

/// At most one horizontal and one vertical step, each shrinking the gap on its own axis.
pub fn direct_candidates(grid: &Grid, from: Pos, target: Pos) -> Vec<Pos> {
    let mut candidates = Vec::with_capacity(2);
    if from.x != target.x {
        let step = Pos::new(from.x.saturating_add(axis_sign(from.x, target.x)), from.y);
        if grid.is_valid_move(step) {
            candidates.push(step);
        }
    }
    if from.y != target.y {
        let step = Pos::new(from.x, from.y.saturating_add(axis_sign(from.y, target.y)));
        if grid.is_valid_move(step) {
            candidates.push(step);
        }
    }
    candidates
}

fn axis_sign(from: i32, to: i32) -> i32 {
    match to.cmp(&from) {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}
