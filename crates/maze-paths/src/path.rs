//! Path helpers shared by the solvers.

use maze_core::{Cell, MazeGraph};

use crate::Cost;
use crate::error::SolveError;

/// Total weight of walking `path` through `maze`.
///
/// Every consecutive pair must be adjacent, joined by an edge and free of
/// walls. Empty and single-cell paths cost 0.
pub fn path_cost<M: MazeGraph>(maze: &M, path: &[Cell]) -> Result<Cost, SolveError> {
    path.windows(2).try_fold(0, |acc, step| {
        let (a, b) = (step[0], step[1]);
        if !a.is_adjacent(b) || !maze.has_edge(a, b) || maze.has_wall(a, b) {
            return Err(SolveError::BrokenPath(a, b));
        }
        Ok(acc + Cost::from(maze.edge_weight(a, b)))
    })
}

/// Accept interior cells, and cells on a side of the boundary ring that the
/// maze has configured as an entrance or exit. Ring corners touch no
/// interior cell and are never accepted.
pub(crate) fn check_cell<M: MazeGraph>(maze: &M, c: Cell) -> Result<(), SolveError> {
    let extent = maze.extent();
    if extent.contains(c) || (extent.is_boundary_side(c) && maze.is_endpoint(c)) {
        Ok(())
    } else {
        Err(SolveError::OutOfBounds { cell: c, extent })
    }
}
