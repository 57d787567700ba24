use maze_core::Cell;

use crate::Cost;

/// Manhattan (L1) distance between two cells.
#[inline]
pub fn manhattan(a: Cell, b: Cell) -> Cost {
    Cost::from((a.row - b.row).unsigned_abs()) + Cost::from((a.col - b.col).unsigned_abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symmetric_and_zero_on_self() {
        let (a, b) = (Cell::new(-1, 3), Cell::new(2, 0));
        assert_eq!(manhattan(a, b), 6);
        assert_eq!(manhattan(b, a), 6);
        assert_eq!(manhattan(a, a), 0);
    }
}
