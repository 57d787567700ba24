use crate::geom::{Cell, Extent};

/// Traversal cost of a passage once its wall is gone.
pub type Weight = u32;

/// Read-only view of a maze as a weighted grid graph.
///
/// Generators and solvers only ever talk to a maze through this trait (and
/// [`CarveMaze`] for mutation), so any storage layout can be plugged in.
pub trait MazeGraph {
    /// Size of the interior grid.
    fn extent(&self) -> Extent;

    /// All interior cells. Generation order follows this enumeration.
    fn cells(&self) -> Vec<Cell> {
        self.extent().iter().collect()
    }

    /// Append the neighbours of `c` into `buf`. The caller clears `buf`
    /// before calling.
    fn neighbors(&self, c: Cell, buf: &mut Vec<Cell>);

    /// Whether a graph edge (walled or not) joins `a` and `b`.
    fn has_edge(&self, a: Cell, b: Cell) -> bool;

    /// Whether the edge between `a` and `b` is blocked by a wall.
    fn has_wall(&self, a: Cell, b: Cell) -> bool;

    /// Cost of moving from `a` to adjacent `b`.
    fn edge_weight(&self, a: Cell, b: Cell) -> Weight;

    /// Configured entrance cells.
    fn entrances(&self) -> &[Cell];

    /// Configured exit cells.
    fn exits(&self) -> &[Cell];

    /// Whether `c` is a configured entrance or exit.
    fn is_endpoint(&self, c: Cell) -> bool {
        self.entrances().contains(&c) || self.exits().contains(&c)
    }
}

/// A maze whose walls can be knocked down.
pub trait CarveMaze: MazeGraph {
    /// Open the passage between adjacent cells `a` and `b`.
    fn remove_wall(&mut self, a: Cell, b: Cell);
}
