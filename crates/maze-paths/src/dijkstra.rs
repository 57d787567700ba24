use std::collections::HashSet;

use maze_core::{Cell, MazeGraph};

use crate::error::SolveError;
use crate::path::check_cell;
use crate::search::{Ranking, best_first};
use crate::solution::SingleSolution;

/// Find the cheapest path from `entrance` to whichever of the maze's exits
/// is closest.
///
/// The search stops as soon as the first exit is popped from the frontier;
/// pops come out in non-decreasing distance, so that exit is optimal. When
/// no exit is reachable the returned path is empty.
pub fn solve_single<M: MazeGraph>(maze: &M, entrance: Cell) -> Result<SingleSolution, SolveError> {
    check_cell(maze, entrance)?;
    for &exit in maze.exits() {
        check_cell(maze, exit)?;
    }
    let exits: HashSet<Cell> = maze.exits().iter().copied().collect();

    let outcome = best_first(
        maze,
        entrance,
        |c| exits.contains(&c),
        &HashSet::new(),
        Ranking::Cost,
    )?;

    let path = outcome.path.unwrap_or_default();
    let exit_used = path.last().copied();
    match exit_used {
        Some(exit) => log::debug!(
            "dijkstra: {} -> {} cost {} ({} cells explored)",
            entrance,
            exit,
            outcome.cost,
            outcome.explored
        ),
        None => log::debug!(
            "dijkstra: no exit reachable from {} ({} cells explored)",
            entrance,
            outcome.explored
        ),
    }

    Ok(SingleSolution {
        entrance,
        exit_used,
        path,
        cost: outcome.cost,
        cells_explored: outcome.explored,
    })
}
