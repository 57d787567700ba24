use std::collections::HashSet;

use maze_core::{Cell, MazeGraph};

use crate::error::SolveError;
use crate::path::{check_cell, path_cost};
use crate::search::{Ranking, best_first};
use crate::solution::{MultiSolution, PairPath};

/// Which search runs for each pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PairSearch {
    Dijkstra,
    Heuristic,
}

/// Solve entrance/exit pairs in order, keeping the paths cell-disjoint.
///
/// Every committed path is added to a used-cells set that later searches
/// treat as impassable. The first pair without a path ends the run.
pub(crate) fn solve_pairs<M: MazeGraph>(
    maze: &M,
    entrances: &[Cell],
    exits: &[Cell],
    search: PairSearch,
) -> Result<MultiSolution, SolveError> {
    if entrances.len() != exits.len() {
        return Err(SolveError::MismatchedPairs {
            entrances: entrances.len(),
            exits: exits.len(),
        });
    }
    for &c in entrances.iter().chain(exits) {
        check_cell(maze, c)?;
    }

    let mut used: HashSet<Cell> = HashSet::new();
    let mut solution = MultiSolution {
        all_solved: true,
        ..MultiSolution::default()
    };

    for (&entrance, &exit) in entrances.iter().zip(exits) {
        let ranking = match search {
            PairSearch::Dijkstra => Ranking::Cost,
            PairSearch::Heuristic => Ranking::CostPlusManhattan(exit),
        };
        let outcome = best_first(maze, entrance, |c| c == exit, &used, ranking)?;
        solution.cells_explored += outcome.explored;

        let Some(path) = outcome.path else {
            log::trace!("{:?}: no path {} -> {}", search, entrance, exit);
            solution.all_solved = false;
            break;
        };

        let cost = match search {
            PairSearch::Dijkstra => outcome.cost,
            PairSearch::Heuristic => path_cost(maze, &path)?,
        };
        log::trace!("{:?}: {} -> {} cost {}", search, entrance, exit, cost);

        used.extend(path.iter().copied());
        solution.total_cost += cost;
        solution.pairs.push(PairPath {
            entrance,
            exit,
            path,
            cost,
        });
    }

    log::debug!(
        "{:?}: {}/{} pairs solved, total cost {}, {} cells explored",
        search,
        solution.pairs.len(),
        entrances.len(),
        solution.total_cost,
        solution.cells_explored
    );
    Ok(solution)
}
