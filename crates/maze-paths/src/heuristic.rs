use maze_core::{Cell, MazeGraph};

use crate::error::SolveError;
use crate::pairs::{PairSearch, solve_pairs};
use crate::solution::MultiSolution;

/// Like [`solve_exclusive`](crate::solve_exclusive), but each pair runs a
/// best-first search ranked by cost so far plus Manhattan distance to the
/// pair's exit.
///
/// This is a heuristic approximation, not A\*: there is no closed set, a
/// popped cell is expanded with its best known cost rather than its queue
/// key, and the Manhattan estimate assumes every step costs at least 1.
/// With zero-weight passages it can settle on a costlier path than
/// Dijkstra would. Pair costs are recomputed from the returned paths.
pub fn solve_heuristic<M: MazeGraph>(
    maze: &M,
    entrances: &[Cell],
    exits: &[Cell],
) -> Result<MultiSolution, SolveError> {
    solve_pairs(maze, entrances, exits, PairSearch::Heuristic)
}
