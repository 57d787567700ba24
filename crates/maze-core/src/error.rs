use crate::geom::{Cell, Extent};

/// Errors raised by [`GridMaze`](crate::GridMaze) when asked about cells or
/// edges it does not have.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MazeError {
    #[error("a {0} maze has no cells")]
    EmptyGrid(Extent),

    #[error("cell {cell} is neither inside the {extent} grid nor on a side of its boundary ring")]
    OutOfBounds { cell: Cell, extent: Extent },

    #[error("no edge joins {0} and {1}")]
    NoEdge(Cell, Cell),
}
