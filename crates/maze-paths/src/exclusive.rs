use maze_core::{Cell, MazeGraph};

use crate::error::SolveError;
use crate::pairs::{PairSearch, solve_pairs};
use crate::solution::MultiSolution;

/// Find a shortest path for each `(entrances[i], exits[i])` pair, in order,
/// such that no two paths share a cell.
///
/// Each pair runs Dijkstra to its own exit with every cell of the earlier
/// paths treated as a wall. This is a greedy allocation: earlier pairs get
/// their unconstrained optimum and later pairs route around them, so the
/// outcome depends on the input order and the total is not a minimum over
/// all disjoint path sets. The first pair that cannot be routed stops the
/// run; later pairs are not attempted.
pub fn solve_exclusive<M: MazeGraph>(
    maze: &M,
    entrances: &[Cell],
    exits: &[Cell],
) -> Result<MultiSolution, SolveError> {
    solve_pairs(maze, entrances, exits, PairSearch::Dijkstra)
}
