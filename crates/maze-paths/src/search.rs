use std::collections::{BinaryHeap, HashMap, HashSet};

use maze_core::{Cell, MazeGraph};

use crate::Cost;
use crate::distance::manhattan;
use crate::error::SolveError;

// ---------------------------------------------------------------------------
// Priority-queue entry
// ---------------------------------------------------------------------------

/// Frontier entry ordered by `key`, then by push order.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) cell: Cell,
    pub(crate) key: Cost,
    pub(crate) seq: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest key first, and
        // among equal keys the earliest push.
        other
            .key
            .cmp(&self.key)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// Best-first search
// ---------------------------------------------------------------------------

/// How frontier cells are ranked and whether expanded cells are closed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Ranking {
    /// Dijkstra: rank by cumulative cost; a cell is settled the first time
    /// it is popped and later entries for it are stale.
    Cost,
    /// Rank by cumulative cost plus Manhattan distance to the target. No
    /// closed set: a popped cell is expanded with its current best cost
    /// from the cost map, whatever key it was pushed with.
    CostPlusManhattan(Cell),
}

impl Ranking {
    #[inline]
    fn priority(self, g: Cost, c: Cell) -> Cost {
        match self {
            Ranking::Cost => g,
            Ranking::CostPlusManhattan(target) => g + manhattan(c, target),
        }
    }
}

/// Result of one search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Outcome {
    /// Start to goal inclusive; `None` when the frontier ran dry.
    pub(crate) path: Option<Vec<Cell>>,
    /// Cost of `path` as accumulated during the search, 0 without a path.
    pub(crate) cost: Cost,
    /// Distinct cells expanded.
    pub(crate) explored: usize,
}

/// Search from `start` until a cell satisfying `is_goal` is popped.
///
/// Cells in `blocked` are impassable regardless of walls; a blocked
/// `start` yields no path. All bookkeeping is local to the call.
pub(crate) fn best_first<M: MazeGraph>(
    maze: &M,
    start: Cell,
    is_goal: impl Fn(Cell) -> bool,
    blocked: &HashSet<Cell>,
    ranking: Ranking,
) -> Result<Outcome, SolveError> {
    if blocked.contains(&start) {
        return Ok(Outcome {
            path: None,
            cost: 0,
            explored: 0,
        });
    }

    let mut cost: HashMap<Cell, Cost> = HashMap::from([(start, 0)]);
    let mut parent: HashMap<Cell, Cell> = HashMap::new();
    let mut expanded: HashSet<Cell> = HashSet::new();
    let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
    let mut seq = 0u64;
    open.push(NodeRef {
        cell: start,
        key: 0,
        seq,
    });

    let closed = ranking == Ranking::Cost;
    let mut nbuf = Vec::with_capacity(4);

    while let Some(current) = open.pop() {
        let cc = current.cell;
        let first_visit = expanded.insert(cc);
        if closed && !first_visit {
            // Stale entry for a settled cell.
            continue;
        }

        let current_g = cost.get(&cc).copied().unwrap_or(current.key);

        if is_goal(cc) {
            return Ok(Outcome {
                path: Some(reconstruct(&parent, start, cc)),
                cost: current_g,
                explored: expanded.len(),
            });
        }

        nbuf.clear();
        maze.neighbors(cc, &mut nbuf);

        for &np in nbuf.iter() {
            if !cc.is_adjacent(np) {
                return Err(SolveError::NonAdjacent {
                    cell: cc,
                    neighbor: np,
                });
            }
            if blocked.contains(&np) || maze.has_wall(cc, np) {
                continue;
            }
            if closed && expanded.contains(&np) {
                continue;
            }

            let tentative = current_g + Cost::from(maze.edge_weight(cc, np));
            if cost.get(&np).is_some_and(|&g| tentative >= g) {
                continue;
            }

            cost.insert(np, tentative);
            parent.insert(np, cc);
            seq += 1;
            open.push(NodeRef {
                cell: np,
                key: ranking.priority(tentative, np),
                seq,
            });
        }
    }

    Ok(Outcome {
        path: None,
        cost: 0,
        explored: expanded.len(),
    })
}

/// Walk parent links back from `goal` to `start` and reverse.
pub(crate) fn reconstruct(parent: &HashMap<Cell, Cell>, start: Cell, goal: Cell) -> Vec<Cell> {
    let mut path = vec![goal];
    let mut cur = goal;
    while cur != start {
        match parent.get(&cur) {
            Some(&p) => {
                path.push(p);
                cur = p;
            }
            None => break,
        }
    }
    path.reverse();
    path
}
