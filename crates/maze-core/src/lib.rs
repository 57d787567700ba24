//! **maze-core**: shared types for weighted grid mazes.
//!
//! This crate provides the vocabulary used by the generator and the
//! solvers: grid positions ([`Cell`]) and sizes ([`Extent`]), the graph
//! interface every algorithm is written against ([`MazeGraph`],
//! [`CarveMaze`]), and an in-memory implementation of it ([`GridMaze`]).

pub mod error;
pub mod geom;
pub mod graph;
pub mod grid;

pub use error::MazeError;
pub use geom::{Cell, Extent, ExtentIter};
pub use graph::{CarveMaze, MazeGraph, Weight};
pub use grid::{GridMaze, Passage};
