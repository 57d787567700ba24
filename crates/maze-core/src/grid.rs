//! An in-memory rectangular maze.
//!
//! [`GridMaze`] stores one [`Passage`] per interior edge plus one per
//! boundary *opening*. An opening is created when an entrance or exit is
//! placed on a side of the boundary ring: it joins that outside position to
//! its single interior neighbour with weight 0 and no wall, so searches can
//! start or end outside the grid proper.

use crate::error::MazeError;
use crate::geom::{Cell, Extent};
use crate::graph::{CarveMaze, MazeGraph, Weight};

/// The state of one edge: traversal cost and whether a wall blocks it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Passage {
    pub weight: Weight,
    pub wall: bool,
}

impl Passage {
    /// A walled passage of the given weight.
    pub const fn walled(weight: Weight) -> Self {
        Self { weight, wall: true }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Horizontal(usize),
    Vertical(usize),
    Opening(usize),
}

/// A `rows × cols` maze of weighted, walled edges.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridMaze {
    extent: Extent,
    /// Edges `(r, c)–(r, c + 1)`, indexed `r * (cols - 1) + c`.
    horizontal: Vec<Passage>,
    /// Edges `(r, c)–(r + 1, c)`, indexed `r * cols + c`.
    vertical: Vec<Passage>,
    /// Boundary positions and the passage to their interior neighbour.
    openings: Vec<(Cell, Passage)>,
    entrances: Vec<Cell>,
    exits: Vec<Cell>,
}

impl GridMaze {
    /// Create a fully walled maze where every interior edge weighs 1.
    pub fn new(rows: i32, cols: i32) -> Result<Self, MazeError> {
        let extent = Extent::new(rows, cols);
        if extent.is_empty() {
            return Err(MazeError::EmptyGrid(extent));
        }
        let (r, c) = (rows as usize, cols as usize);
        Ok(Self {
            extent,
            horizontal: vec![Passage::walled(1); r * (c - 1)],
            vertical: vec![Passage::walled(1); (r - 1) * c],
            openings: Vec::new(),
            entrances: Vec::new(),
            exits: Vec::new(),
        })
    }

    /// Locate the storage slot for the edge between `a` and `b`.
    fn slot(&self, a: Cell, b: Cell) -> Option<Slot> {
        if !a.is_adjacent(b) {
            return None;
        }
        let e = self.extent;
        match (e.contains(a), e.contains(b)) {
            (true, true) => {
                let lo = a.min(b);
                if a.row == b.row {
                    Some(Slot::Horizontal(
                        lo.row as usize * (e.cols as usize - 1) + lo.col as usize,
                    ))
                } else {
                    Some(Slot::Vertical(
                        lo.row as usize * e.cols as usize + lo.col as usize,
                    ))
                }
            }
            (true, false) => self.opening(b).map(Slot::Opening),
            (false, true) => self.opening(a).map(Slot::Opening),
            (false, false) => None,
        }
    }

    fn opening(&self, c: Cell) -> Option<usize> {
        self.openings.iter().position(|(o, _)| *o == c)
    }

    fn passage(&self, a: Cell, b: Cell) -> Option<&Passage> {
        match self.slot(a, b)? {
            Slot::Horizontal(i) => self.horizontal.get(i),
            Slot::Vertical(i) => self.vertical.get(i),
            Slot::Opening(i) => self.openings.get(i).map(|(_, p)| p),
        }
    }

    fn passage_mut(&mut self, a: Cell, b: Cell) -> Option<&mut Passage> {
        match self.slot(a, b)? {
            Slot::Horizontal(i) => self.horizontal.get_mut(i),
            Slot::Vertical(i) => self.vertical.get_mut(i),
            Slot::Opening(i) => self.openings.get_mut(i).map(|(_, p)| p),
        }
    }

    /// Weight of the edge between `a` and `b`.
    pub fn weight(&self, a: Cell, b: Cell) -> Result<Weight, MazeError> {
        self.passage(a, b)
            .map(|p| p.weight)
            .ok_or(MazeError::NoEdge(a, b))
    }

    /// Set the weight of the edge between `a` and `b`.
    pub fn set_weight(&mut self, a: Cell, b: Cell, weight: Weight) -> Result<(), MazeError> {
        let p = self.passage_mut(a, b).ok_or(MazeError::NoEdge(a, b))?;
        p.weight = weight;
        Ok(())
    }

    /// Whether a wall stands between `a` and `b`.
    pub fn wall(&self, a: Cell, b: Cell) -> Result<bool, MazeError> {
        self.passage(a, b)
            .map(|p| p.wall)
            .ok_or(MazeError::NoEdge(a, b))
    }

    /// Raise or lower the wall between `a` and `b`.
    pub fn set_wall(&mut self, a: Cell, b: Cell, wall: bool) -> Result<(), MazeError> {
        let p = self.passage_mut(a, b).ok_or(MazeError::NoEdge(a, b))?;
        p.wall = wall;
        Ok(())
    }

    /// Every interior edge, row-major: for each cell its right edge, then
    /// its lower edge.
    pub fn interior_edges(&self) -> Vec<(Cell, Cell)> {
        let e = self.extent;
        let mut edges = Vec::with_capacity(self.horizontal.len() + self.vertical.len());
        for c in e.iter() {
            let right = c.shift(0, 1);
            if e.contains(right) {
                edges.push((c, right));
            }
            let down = c.shift(1, 0);
            if e.contains(down) {
                edges.push((c, down));
            }
        }
        edges
    }

    /// Number of interior edges whose wall has been removed.
    pub fn open_passages(&self) -> usize {
        self.horizontal
            .iter()
            .chain(self.vertical.iter())
            .filter(|p| !p.wall)
            .count()
    }

    /// Register an entrance. See [`add_exit`](Self::add_exit).
    pub fn add_entrance(&mut self, c: Cell) -> Result<(), MazeError> {
        self.admit_endpoint(c)?;
        if !self.entrances.contains(&c) {
            self.entrances.push(c);
        }
        Ok(())
    }

    /// Register an exit.
    ///
    /// Interior cells are used as-is. A cell on a side of the boundary ring
    /// gets an open, zero-weight passage to its interior neighbour.
    pub fn add_exit(&mut self, c: Cell) -> Result<(), MazeError> {
        self.admit_endpoint(c)?;
        if !self.exits.contains(&c) {
            self.exits.push(c);
        }
        Ok(())
    }

    fn admit_endpoint(&mut self, c: Cell) -> Result<(), MazeError> {
        let e = self.extent;
        if e.contains(c) {
            return Ok(());
        }
        if !e.is_boundary_side(c) {
            return Err(MazeError::OutOfBounds { cell: c, extent: e });
        }
        if self.opening(c).is_none() {
            self.openings.push((
                c,
                Passage {
                    weight: 0,
                    wall: false,
                },
            ));
        }
        Ok(())
    }
}

impl MazeGraph for GridMaze {
    fn extent(&self) -> Extent {
        self.extent
    }

    fn neighbors(&self, c: Cell, buf: &mut Vec<Cell>) {
        let e = self.extent;
        if e.contains(c) {
            for n in c.neighbors_4() {
                if e.contains(n) || self.opening(n).is_some() {
                    buf.push(n);
                }
            }
        } else if self.opening(c).is_some() {
            buf.extend(c.neighbors_4().into_iter().filter(|n| e.contains(*n)));
        }
    }

    fn has_edge(&self, a: Cell, b: Cell) -> bool {
        self.slot(a, b).is_some()
    }

    fn has_wall(&self, a: Cell, b: Cell) -> bool {
        self.passage(a, b).is_none_or(|p| p.wall)
    }

    /// Returns 0 when there is no edge; callers test [`has_wall`] first.
    ///
    /// [`has_wall`]: MazeGraph::has_wall
    fn edge_weight(&self, a: Cell, b: Cell) -> Weight {
        self.passage(a, b).map_or(0, |p| p.weight)
    }

    fn entrances(&self) -> &[Cell] {
        &self.entrances
    }

    fn exits(&self) -> &[Cell] {
        &self.exits
    }
}

impl CarveMaze for GridMaze {
    fn remove_wall(&mut self, a: Cell, b: Cell) {
        if let Some(p) = self.passage_mut(a, b) {
            p.wall = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn neighbors_of(m: &GridMaze, c: Cell) -> Vec<Cell> {
        let mut buf = Vec::new();
        m.neighbors(c, &mut buf);
        buf
    }

    #[test]
    fn new_is_fully_walled() {
        let m = GridMaze::new(3, 4).unwrap();
        assert_eq!(m.extent(), Extent::new(3, 4));
        assert_eq!(m.interior_edges().len(), 3 * 3 + 2 * 4);
        assert_eq!(m.open_passages(), 0);
        for (a, b) in m.interior_edges() {
            assert!(m.has_edge(a, b));
            assert!(m.has_wall(a, b));
            assert!(m.has_wall(b, a));
            assert_eq!(m.edge_weight(a, b), 1);
        }
    }

    #[test]
    fn empty_grid_rejected() {
        assert_eq!(
            GridMaze::new(0, 3),
            Err(MazeError::EmptyGrid(Extent::new(0, 3)))
        );
    }

    #[test]
    fn edges_are_undirected() {
        let mut m = GridMaze::new(2, 2).unwrap();
        let (a, b) = (Cell::new(0, 0), Cell::new(1, 0));
        m.set_weight(a, b, 7).unwrap();
        assert_eq!(m.weight(b, a), Ok(7));
        m.remove_wall(b, a);
        assert!(!m.has_wall(a, b));
        assert_eq!(m.open_passages(), 1);
    }

    #[test]
    fn non_adjacent_cells_have_no_edge() {
        let mut m = GridMaze::new(3, 3).unwrap();
        let (a, b) = (Cell::new(0, 0), Cell::new(1, 1));
        assert!(!m.has_edge(a, b));
        assert!(m.has_wall(a, b));
        assert_eq!(m.set_wall(a, b, false), Err(MazeError::NoEdge(a, b)));
        assert_eq!(m.weight(a, a), Err(MazeError::NoEdge(a, a)));
    }

    #[test]
    fn corner_and_edge_neighbors() {
        let m = GridMaze::new(3, 3).unwrap();
        assert_eq!(
            neighbors_of(&m, Cell::new(0, 0)),
            vec![Cell::new(0, 1), Cell::new(1, 0)]
        );
        assert_eq!(neighbors_of(&m, Cell::new(1, 1)).len(), 4);
        assert!(neighbors_of(&m, Cell::new(-1, 1)).is_empty());
    }

    #[test]
    fn boundary_entrance_opens_passage() {
        let mut m = GridMaze::new(3, 3).unwrap();
        let outside = Cell::new(-1, 1);
        m.add_entrance(outside).unwrap();
        assert_eq!(m.entrances(), &[outside]);

        let inner = Cell::new(0, 1);
        assert!(m.has_edge(outside, inner));
        assert!(!m.has_wall(inner, outside));
        assert_eq!(m.edge_weight(outside, inner), 0);
        assert_eq!(neighbors_of(&m, outside), vec![inner]);
        assert!(neighbors_of(&m, inner).contains(&outside));
        // Openings are not interior passages.
        assert_eq!(m.open_passages(), 0);
    }

    #[test]
    fn endpoints_outside_the_ring_rejected() {
        let mut m = GridMaze::new(3, 3).unwrap();
        for c in [Cell::new(-1, -1), Cell::new(5, 1), Cell::new(1, -2)] {
            assert_eq!(
                m.add_exit(c),
                Err(MazeError::OutOfBounds {
                    cell: c,
                    extent: Extent::new(3, 3)
                })
            );
        }
        m.add_exit(Cell::new(2, 2)).unwrap();
        m.add_exit(Cell::new(2, 2)).unwrap();
        assert_eq!(m.exits(), &[Cell::new(2, 2)]);
        assert!(m.is_endpoint(Cell::new(2, 2)));
    }
}
