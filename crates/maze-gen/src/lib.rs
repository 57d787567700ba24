//! Maze generation for weighted grid mazes.
//!
//! - [`generate`] carves a minimum spanning tree of passages using
//!   Kruskal's algorithm over a [`DisjointSet`].
//! - [`randomize_weights`] draws edge weights from a seeded RNG so that the
//!   deterministic generator still produces varied mazes.

pub mod error;
pub mod kruskal;
pub mod union_find;
pub mod weights;

pub use error::GenError;
pub use kruskal::{Candidate, GenStats, candidate_edges, generate, generate_with_stats};
pub use union_find::DisjointSet;
pub use weights::{WeightConfig, randomize_weights};
