//! Path solvers for weighted grid mazes.
//!
//! All solvers work on any [`MazeGraph`](maze_core::MazeGraph) and treat a
//! wall as impassable and an open passage as costing its edge weight:
//!
//! - [`solve_single`]: Dijkstra from one entrance to the nearest of the
//!   maze's exits.
//! - [`solve_exclusive`]: one Dijkstra per entrance/exit pair, in order,
//!   with every cell of an earlier path closed to later pairs.
//! - [`solve_heuristic`]: the same pairing contract using a best-first
//!   search ranked by cost plus Manhattan distance.
//!
//! No path is a normal outcome (an empty path, or `all_solved == false`);
//! [`SolveError`] is reserved for malformed input.

mod dijkstra;
mod distance;
mod error;
mod exclusive;
mod heuristic;
mod pairs;
mod path;
mod search;
mod solution;

#[cfg(test)]
mod fixtures;

pub use dijkstra::solve_single;
pub use distance::manhattan;
pub use error::SolveError;
pub use exclusive::solve_exclusive;
pub use heuristic::solve_heuristic;
pub use path::path_cost;
pub use solution::{MultiSolution, PairPath, SingleSolution};

/// Accumulated path weight.
pub type Cost = u64;
