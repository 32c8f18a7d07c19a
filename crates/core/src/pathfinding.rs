//! Shortest-path and reachability searches over a `Grid`.
//! Edge costs are uniformly 1, so A* with Manhattan distance matches BFS optimality.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use crate::grid::Grid;
use crate::types::{Direction, Pos};

/// Open-set entry. Ordering is `f` then discovery sequence, so equal-`f` ties pop first-in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct OpenNode {
    f: u32,
    seq: u64,
    pos: Pos,
}

/// A* from `start` to `goal`.
///
/// Returns `[start]` when the endpoints coincide, otherwise the route excluding `start`
/// and ending on `goal`. Empty means no route exists.
pub fn astar_path(grid: &Grid, start: Pos, goal: Pos) -> Vec<Pos> {
    if start == goal {
        return vec![start];
    }

    let mut open_set = BTreeSet::new();
    let mut closed = BTreeSet::new();
    let mut g_score = BTreeMap::new();
    let mut came_from = BTreeMap::new();
    let mut seq = 0_u64;

    open_set.insert(OpenNode { f: manhattan(start, goal), seq, pos: start });
    g_score.insert(start, 0_u32);

    while let Some(curr) = open_set.pop_first() {
        let p = curr.pos;
        if p == goal {
            return reconstruct_path(&came_from, goal);
        }
        // Stale duplicates left behind by a later g-score improvement.
        if !closed.insert(p) {
            continue;
        }
        let Some(&cur_g) = g_score.get(&p) else {
            continue;
        };
        for n in grid.neighbors(p) {
            if closed.contains(&n) {
                continue;
            }
            let tg = cur_g + 1;
            if tg < g_score.get(&n).copied().unwrap_or(u32::MAX) {
                came_from.insert(n, p);
                g_score.insert(n, tg);
                seq += 1;
                open_set.insert(OpenNode { f: tg.saturating_add(manhattan(n, goal)), seq, pos: n });
            }
        }
    }
    Vec::new()
}

fn reconstruct_path(came: &BTreeMap<Pos, Pos>, goal: Pos) -> Vec<Pos> {
    let mut p = goal;
    let mut result = Vec::new();
    while let Some(&prev) = came.get(&p) {
        result.push(p);
        p = prev;
    }
    result.reverse();
    result
}

pub fn path_exists(grid: &Grid, start: Pos, goal: Pos) -> bool {
    bfs_distance(grid, start, goal).is_some()
}

/// Step count of the shortest route, `Some(0)` when `start == goal`.
pub fn bfs_distance(grid: &Grid, start: Pos, goal: Pos) -> Option<u32> {
    if start == goal {
        return Some(0);
    }

    let mut visited = BTreeSet::new();
    let mut queue = VecDeque::new();
    visited.insert(start);
    queue.push_back((start, 0_u32));

    while let Some((current, distance)) = queue.pop_front() {
        for neighbor in grid.neighbors(current) {
            if neighbor == goal {
                return Some(distance + 1);
            }
            if visited.insert(neighbor) {
                queue.push_back((neighbor, distance + 1));
            }
        }
    }
    None
}

/// Every cell reachable from `start`, `start` included.
pub fn reachable_cells(grid: &Grid, start: Pos) -> BTreeSet<Pos> {
    let mut visited = BTreeSet::new();
    let mut queue = VecDeque::new();
    visited.insert(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for neighbor in grid.neighbors(current) {
            if visited.insert(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }
    visited
}

pub fn cardinal_neighbors(p: Pos) -> [Pos; 4] {
    Direction::ALL.map(|direction| p.step(direction))
}

pub fn manhattan(a: Pos, b: Pos) -> u32 {
    a.x.abs_diff(b.x).saturating_add(a.y.abs_diff(b.y))
}
