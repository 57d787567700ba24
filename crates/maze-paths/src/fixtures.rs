//! Hand-built mazes for tests.

use std::collections::HashSet;

use maze_core::{CarveMaze, Cell, GridMaze, MazeGraph};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{Cost, path_cost};

/// A maze with every interior wall removed.
pub(crate) fn open_grid(rows: i32, cols: i32) -> GridMaze {
    let mut m = GridMaze::new(rows, cols).unwrap();
    for (a, b) in m.interior_edges() {
        m.remove_wall(a, b);
    }
    m
}

/// Open the walls along a chain of `(row, col)` cells.
pub(crate) fn carve(m: &mut GridMaze, chain: &[(i32, i32)]) {
    for step in chain.windows(2) {
        m.remove_wall(Cell::from(step[0]), Cell::from(step[1]));
    }
}

/// A maze whose walls and weights are drawn from `seed`.
pub(crate) fn random_maze(rows: i32, cols: i32, seed: u64) -> GridMaze {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut m = GridMaze::new(rows, cols).unwrap();
    for (a, b) in m.interior_edges() {
        m.set_weight(a, b, rng.random_range(0..=5)).unwrap();
        if rng.random_bool(0.7) {
            m.remove_wall(a, b);
        }
    }
    m
}

/// Cheapest cost from `start` to any of `goals` by exhaustive enumeration
/// of simple paths.
pub(crate) fn brute_force_cost(m: &GridMaze, start: Cell, goals: &[Cell]) -> Option<Cost> {
    fn walk(
        m: &GridMaze,
        c: Cell,
        goals: &[Cell],
        seen: &mut HashSet<Cell>,
        g: Cost,
        best: &mut Option<Cost>,
    ) {
        if goals.contains(&c) {
            *best = Some(best.map_or(g, |b| b.min(g)));
            return;
        }
        let mut nbuf = Vec::new();
        m.neighbors(c, &mut nbuf);
        for n in nbuf {
            if m.has_wall(c, n) || !seen.insert(n) {
                continue;
            }
            walk(m, n, goals, seen, g + Cost::from(m.edge_weight(c, n)), best);
            seen.remove(&n);
        }
    }

    let mut best = None;
    let mut seen = HashSet::from([start]);
    walk(m, start, goals, &mut seen, 0, &mut best);
    best
}

/// Assert that `path` starts and ends where expected and costs `cost`.
pub(crate) fn assert_path(m: &GridMaze, path: &[Cell], from: Cell, to: Cell, cost: Cost) {
    assert_eq!(path.first(), Some(&from));
    assert_eq!(path.last(), Some(&to));
    assert_eq!(path_cost(m, path), Ok(cost));
}
