//! Kruskal spanning-tree maze generation.
//!
//! Starting from a fully walled maze, every interior edge is a candidate.
//! Candidates are visited lightest first and a wall is removed whenever it
//! separates two cells not yet joined by carved passages. The removed walls
//! form a minimum spanning tree: `N - 1` open passages for `N` cells, every
//! cell reachable, no cycles.

use std::collections::HashMap;

use maze_core::{CarveMaze, Cell, MazeGraph, Weight};

use crate::error::GenError;
use crate::union_find::DisjointSet;

/// An edge eligible for wall removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Candidate {
    pub from: Cell,
    pub to: Cell,
    pub weight: Weight,
}

/// Summary of a generation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenStats {
    /// Candidate edges considered (each undirected edge appears twice).
    pub candidates: usize,
    /// Walls removed.
    pub opened: usize,
}

/// Carve a spanning tree of passages into `maze` and hand it back.
///
/// Edges touching the boundary ring are never candidates. Equal weights
/// keep the order in which [`candidate_edges`] enumerates them, so the
/// result depends only on the maze's cell order, neighbour order and
/// weights.
pub fn generate<M: CarveMaze>(maze: &mut M) -> Result<&mut M, GenError> {
    let stats = generate_with_stats(maze)?;
    log::debug!(
        "kruskal: {} cells, {} candidates, {} walls removed",
        maze.extent().len(),
        stats.candidates,
        stats.opened
    );
    Ok(maze)
}

/// Like [`generate`], but returns the run summary instead of the maze.
pub fn generate_with_stats<M: CarveMaze>(maze: &mut M) -> Result<GenStats, GenError> {
    let cells = maze.cells();
    let index: HashMap<Cell, usize> = cells.iter().enumerate().map(|(i, c)| (*c, i)).collect();
    let slot = |c: Cell| index.get(&c).copied().ok_or(GenError::UnknownCell(c));

    // All endpoints resolve before the first wall comes down.
    let candidates = candidate_edges(maze)?
        .into_iter()
        .map(|edge| Ok((edge, slot(edge.from)?, slot(edge.to)?)))
        .collect::<Result<Vec<_>, GenError>>()?;

    let mut sets = DisjointSet::new(cells.len());
    let mut opened = 0;
    for &(edge, u, v) in &candidates {
        if sets.union(u, v) {
            maze.remove_wall(edge.from, edge.to);
            opened += 1;
        }
    }

    Ok(GenStats {
        candidates: candidates.len(),
        opened,
    })
}

/// The candidate list in processing order: ascending weight, ties in
/// enumeration order (cells as listed by the maze, neighbours as reported).
pub fn candidate_edges<M: MazeGraph>(maze: &M) -> Result<Vec<Candidate>, GenError> {
    let extent = maze.extent();
    let mut edges = Vec::new();
    let mut nbuf = Vec::with_capacity(4);

    for cell in maze.cells() {
        nbuf.clear();
        maze.neighbors(cell, &mut nbuf);
        for &neighbor in &nbuf {
            if !cell.is_adjacent(neighbor) {
                return Err(GenError::NonAdjacent { cell, neighbor });
            }
            if !maze.has_edge(cell, neighbor) {
                continue;
            }
            if extent.is_boundary(cell) || extent.is_boundary(neighbor) {
                continue;
            }
            edges.push(Candidate {
                from: cell,
                to: neighbor,
                weight: maze.edge_weight(cell, neighbor),
            });
        }
    }

    // Stable: ties keep enumeration order.
    edges.sort_by_key(|e| e.weight);
    Ok(edges)
}
