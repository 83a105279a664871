use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

/// Side length of the square board.
pub type Side = u16;

/// Linear, row-major cell address: row is `index / size`, column is `index % size`.
pub type CellIndex = usize;

/// Count type used for hazard counts and total-cell counts.
pub type CellCount = usize;

/// Indices of the cells touching a given cell, always in ascending order.
pub type Neighbors = SmallVec<[CellIndex; 8]>;

/// Square board geometry.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Side", into = "Side")]
pub struct Grid {
    size: Side,
}

impl Grid {
    pub fn new(size: Side) -> Result<Self> {
        let side = usize::from(size);
        if size == 0 || side.checked_mul(side).is_none() {
            return Err(GameError::InvalidSize { size });
        }
        Ok(Self { size })
    }

    pub const fn size(self) -> Side {
        self.size
    }

    pub fn cell_count(self) -> CellCount {
        let side = usize::from(self.size);
        side * side
    }

    pub fn validate_index(self, index: CellIndex) -> Result<CellIndex> {
        let cell_count = self.cell_count();
        if index < cell_count {
            Ok(index)
        } else {
            Err(GameError::IndexOutOfRange { index, cell_count })
        }
    }

    /// `(row, column)` of an index, no bounds check.
    pub fn row_col(self, index: CellIndex) -> (usize, usize) {
        let side = usize::from(self.size);
        (index / side, index % side)
    }

    pub fn neighbors(self, index: CellIndex) -> Result<Neighbors> {
        let index = self.validate_index(index)?;
        Ok(self.neighbors_unchecked(index))
    }

    /// Diagonals only exist when both cardinal directions they combine exist, which is enough to keep them
    /// on the board at edges and corners.
    pub(crate) fn neighbors_unchecked(self, index: CellIndex) -> Neighbors {
        let side = usize::from(self.size);
        let column = index % side;

        let north = index >= side;
        let south = index < side * (side - 1);
        let west = column != 0;
        let east = column != side - 1;

        let mut neighbors = Neighbors::new();
        if north {
            let above = index - side;
            if west {
                neighbors.push(above - 1);
            }
            neighbors.push(above);
            if east {
                neighbors.push(above + 1);
            }
        }
        if west {
            neighbors.push(index - 1);
        }
        if east {
            neighbors.push(index + 1);
        }
        if south {
            let below = index + side;
            if west {
                neighbors.push(below - 1);
            }
            neighbors.push(below);
            if east {
                neighbors.push(below + 1);
            }
        }
        neighbors
    }
}

impl TryFrom<Side> for Grid {
    type Error = GameError;

    fn try_from(size: Side) -> Result<Self> {
        Self::new(size)
    }
}

impl From<Grid> for Side {
    fn from(grid: Grid) -> Self {
        grid.size
    }
}

/// Cells touching `index` on a board of side `size`.
pub fn neighbors(index: CellIndex, size: Side) -> Result<Neighbors> {
    Grid::new(size)?.neighbors(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn check(size: Side, expected: &[(CellIndex, &[CellIndex])]) {
        for &(index, cells) in expected {
            let mut cells: Vec<_> = cells.to_vec();
            cells.sort_unstable();
            assert_eq!(neighbors(index, size).unwrap().as_slice(), cells.as_slice(), "index {index}");
        }
    }

    #[test]
    fn corners_have_three_neighbors() {
        check(
            5,
            &[
                (0, &[1, 5, 6]),
                (4, &[3, 8, 9]),
                (24, &[19, 18, 23]),
                (20, &[15, 16, 21]),
            ],
        );
    }

    #[test]
    fn edges_have_five_neighbors() {
        check(
            5,
            &[
                (1, &[0, 2, 5, 6, 7]),
                (9, &[3, 4, 8, 13, 14]),
                (23, &[22, 24, 17, 18, 19]),
                (15, &[10, 20, 11, 16, 21]),
            ],
        );
    }

    #[test]
    fn interior_has_eight_neighbors() {
        check(5, &[(12, &[6, 7, 8, 11, 13, 16, 17, 18])]);
    }

    #[test]
    fn neighbor_counts_by_position() {
        let grid = Grid::new(6).unwrap();
        for index in 0..grid.cell_count() {
            let (row, column) = grid.row_col(index);
            let on_row_edge = row == 0 || row == 5;
            let on_column_edge = column == 0 || column == 5;
            let expected = match (on_row_edge, on_column_edge) {
                (true, true) => 3,
                (true, false) | (false, true) => 5,
                (false, false) => 8,
            };
            assert_eq!(grid.neighbors(index).unwrap().len(), expected, "index {index}");
        }
    }

    #[test]
    fn tiny_boards() {
        assert!(neighbors(0, 1).unwrap().is_empty());
        check(2, &[(0, &[1, 2, 3]), (3, &[0, 1, 2])]);
    }

    #[test]
    fn rejects_zero_size() {
        assert_eq!(Grid::new(0), Err(GameError::InvalidSize { size: 0 }));
        assert_eq!(neighbors(0, 0), Err(GameError::InvalidSize { size: 0 }));
    }

    #[test]
    fn rejects_out_of_range_index() {
        assert_eq!(
            neighbors(25, 5),
            Err(GameError::IndexOutOfRange {
                index: 25,
                cell_count: 25
            })
        );
    }
}
