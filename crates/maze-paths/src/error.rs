use maze_core::{Cell, Extent};

/// Malformed solver input. Failing to find a path is not an error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SolveError {
    #[error("{entrances} entrances but {exits} exits; they are paired by position")]
    MismatchedPairs { entrances: usize, exits: usize },

    #[error("cell {cell} is outside the {extent} grid and is not a boundary entrance or exit")]
    OutOfBounds { cell: Cell, extent: Extent },

    #[error("maze reports {neighbor} as a neighbour of {cell}, but they are not adjacent")]
    NonAdjacent { cell: Cell, neighbor: Cell },

    #[error("step {0} -> {1} is walled off or not an edge")]
    BrokenPath(Cell, Cell),
}
