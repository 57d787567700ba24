use maze_core::Cell;

use crate::Cost;

/// Outcome of a single-entrance, any-exit search.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SingleSolution {
    pub entrance: Cell,
    /// The exit reached, if any.
    pub exit_used: Option<Cell>,
    /// Entrance to exit inclusive; empty when no exit is reachable.
    pub path: Vec<Cell>,
    pub cost: Cost,
    /// Cells popped and expanded, each counted once.
    pub cells_explored: usize,
}

impl SingleSolution {
    pub fn is_solved(&self) -> bool {
        self.exit_used.is_some()
    }
}

/// The path found for one entrance/exit pair.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PairPath {
    pub entrance: Cell,
    pub exit: Cell,
    pub path: Vec<Cell>,
    pub cost: Cost,
}

/// Outcome of a multi-pair search.
///
/// `pairs` holds the solved pairs in input order. Solving stops at the
/// first failure, so when `all_solved` is false the pairs after the failed
/// one were never attempted and have no entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MultiSolution {
    pub pairs: Vec<PairPath>,
    /// Sum of the costs in `pairs`.
    pub total_cost: Cost,
    pub all_solved: bool,
    /// Cells expanded, summed over every search attempted.
    pub cells_explored: usize,
}

impl MultiSolution {
    /// The path recorded for a given pair.
    pub fn path(&self, entrance: Cell, exit: Cell) -> Option<&[Cell]> {
        self.pairs
            .iter()
            .find(|p| p.entrance == entrance && p.exit == exit)
            .map(|p| p.path.as_slice())
    }

    /// Every cell used by any recorded path.
    pub fn used_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.pairs.iter().flat_map(|p| p.path.iter().copied())
    }
}
