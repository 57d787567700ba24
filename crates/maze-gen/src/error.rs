use maze_core::{Cell, MazeError};

/// Precondition violations reported while generating a maze.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenError {
    #[error("maze reports {neighbor} as a neighbour of {cell}, but they are not adjacent")]
    NonAdjacent { cell: Cell, neighbor: Cell },

    #[error("maze reports interior cell {0} as a neighbour but does not enumerate it")]
    UnknownCell(Cell),

    #[error(transparent)]
    Maze(#[from] MazeError),
}
