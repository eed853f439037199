use crate::consts::{CELL_COUNT, GRID_SIZE};
use crate::error::{Result, SudosnapError};

/// An 81-cell Sudoku grid in row-major order. 0 encodes a blank cell,
/// 1-9 a placed digit.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct PuzzleGrid {
    cells: [u8; CELL_COUNT],
}

impl Default for PuzzleGrid {
    fn default() -> Self {
        Self::empty()
    }
}

impl PuzzleGrid {
    /// An all-blank grid.
    pub fn empty() -> Self {
        Self {
            cells: [0; CELL_COUNT],
        }
    }

    /// Build a grid from raw cell values, rejecting values outside 0..=9.
    pub fn from_cells(cells: [u8; CELL_COUNT]) -> Result<Self> {
        for (index, &value) in cells.iter().enumerate() {
            if value > 9 {
                return Err(SudosnapError::InvalidCell { index, value });
            }
        }
        Ok(Self { cells })
    }

    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cells[row * GRID_SIZE + col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: u8) {
        self.cells[row * GRID_SIZE + col] = value;
    }

    pub fn cells(&self) -> &[u8; CELL_COUNT] {
        &self.cells
    }

    /// Number of non-blank cells.
    pub fn given_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v != 0).count()
    }

    /// True if every row, column and 3x3 box contains each of 1-9 exactly once.
    pub fn is_valid_solution(&self) -> bool {
        let group_ok = |indices: [usize; GRID_SIZE]| {
            let mut seen = 0u16;
            for i in indices {
                let v = self.cells[i];
                if v == 0 || seen & (1 << v) != 0 {
                    return false;
                }
                seen |= 1 << v;
            }
            true
        };

        for g in 0..GRID_SIZE {
            let row = std::array::from_fn(|i| g * GRID_SIZE + i);
            let col = std::array::from_fn(|i| i * GRID_SIZE + g);
            let boxed = std::array::from_fn(|i| {
                let r = (g / 3) * 3 + i / 3;
                let c = (g % 3) * 3 + i % 3;
                r * GRID_SIZE + c
            });
            if !group_ok(row) || !group_ok(col) || !group_ok(boxed) {
                return false;
            }
        }
        true
    }

    /// True if every non-blank cell of `givens` carries the same value here.
    pub fn preserves_givens(&self, givens: &PuzzleGrid) -> bool {
        self.cells
            .iter()
            .zip(givens.cells.iter())
            .all(|(&solved, &given)| given == 0 || solved == given)
    }
}

impl std::fmt::Debug for PuzzleGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PuzzleGrid({:?})", self.cells)
    }
}

impl std::fmt::Display for PuzzleGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                match self.get(row, col) {
                    0 => write!(f, " ")?,
                    n => write!(f, "{n}")?,
                }
                if col != GRID_SIZE - 1 {
                    write!(f, " ")?;
                    if col % 3 == 2 {
                        write!(f, "| ")?;
                    }
                } else {
                    writeln!(f)?;
                }
            }
            if row % 3 == 2 && row != GRID_SIZE - 1 {
                writeln!(f, "------+-------+------")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_cell() {
        let mut cells = [0u8; CELL_COUNT];
        cells[40] = 10;
        assert!(matches!(
            PuzzleGrid::from_cells(cells),
            Err(SudosnapError::InvalidCell {
                index: 40,
                value: 10
            })
        ));
    }

    #[test]
    fn row_major_addressing() {
        let mut grid = PuzzleGrid::empty();
        grid.set(3, 4, 7);
        assert_eq!(grid.cells()[3 * 9 + 4], 7);
        assert_eq!(grid.get(3, 4), 7);
    }

    #[test]
    fn empty_grid_is_not_a_solution() {
        assert!(!PuzzleGrid::empty().is_valid_solution());
    }

    #[test]
    fn preserves_givens_ignores_blanks() {
        let mut givens = PuzzleGrid::empty();
        givens.set(0, 0, 5);
        let mut solved = PuzzleGrid::empty();
        solved.set(0, 0, 5);
        solved.set(8, 8, 1);
        assert!(solved.preserves_givens(&givens));
        solved.set(0, 0, 6);
        assert!(!solved.preserves_givens(&givens));
    }
}
