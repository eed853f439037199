use tracing::debug;

use crate::consts::{CELL_COUNT, GRID_SIZE};
use crate::error::{Result, SudosnapError};
use crate::grid::PuzzleGrid;

/// Sudoku solving collaborator: a pure function from an unsolved grid
/// (zeros for blanks) to a completed grid, or `Unsolvable`.
pub trait Solver {
    fn solve(&self, grid: &PuzzleGrid) -> Result<PuzzleGrid>;
}

/// Default solver: backtracking over candidate bitmasks, always filling the
/// most constrained blank cell first. Deterministic; givens whose values
/// already conflict are reported as `Unsolvable` rather than left undefined.
#[derive(Clone, Copy, Debug, Default)]
pub struct BacktrackingSolver;

impl Solver for BacktrackingSolver {
    fn solve(&self, grid: &PuzzleGrid) -> Result<PuzzleGrid> {
        let mut state = SolveState::from_grid(grid)?;
        if !state.search() {
            return Err(SudosnapError::Unsolvable);
        }
        debug!(givens = grid.given_count(), "Puzzle solved");
        Ok(state.into_grid())
    }
}

/// Candidate bookkeeping: bit `v` of each mask marks digit `v` as used.
struct SolveState {
    cells: [u8; CELL_COUNT],
    rows: [u16; GRID_SIZE],
    cols: [u16; GRID_SIZE],
    boxes: [u16; GRID_SIZE],
}

impl SolveState {
    fn from_grid(grid: &PuzzleGrid) -> Result<Self> {
        let mut state = Self {
            cells: *grid.cells(),
            rows: [0; GRID_SIZE],
            cols: [0; GRID_SIZE],
            boxes: [0; GRID_SIZE],
        };

        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let value = state.cells[row * GRID_SIZE + col];
                if value == 0 {
                    continue;
                }
                let bit = 1u16 << value;
                let b = box_of(row, col);
                if state.rows[row] & bit != 0
                    || state.cols[col] & bit != 0
                    || state.boxes[b] & bit != 0
                {
                    // Conflicting givens: most often a misread cell.
                    return Err(SudosnapError::Unsolvable);
                }
                state.rows[row] |= bit;
                state.cols[col] |= bit;
                state.boxes[b] |= bit;
            }
        }
        Ok(state)
    }

    fn into_grid(self) -> PuzzleGrid {
        let mut grid = PuzzleGrid::empty();
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                grid.set(row, col, self.cells[row * GRID_SIZE + col]);
            }
        }
        grid
    }

    fn candidates(&self, row: usize, col: usize) -> u16 {
        const ALL: u16 = 0b11_1111_1110;
        ALL & !(self.rows[row] | self.cols[col] | self.boxes[box_of(row, col)])
    }

    fn search(&mut self) -> bool {
        // Pick the blank cell with the fewest candidates.
        let mut best: Option<(usize, usize, u16, u32)> = None;
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                if self.cells[row * GRID_SIZE + col] != 0 {
                    continue;
                }
                let cands = self.candidates(row, col);
                let count = cands.count_ones();
                if count == 0 {
                    return false;
                }
                if best.map_or(true, |(_, _, _, c)| count < c) {
                    best = Some((row, col, cands, count));
                    if count == 1 {
                        break;
                    }
                }
            }
            if matches!(best, Some((_, _, _, 1))) {
                break;
            }
        }

        let Some((row, col, cands, _)) = best else {
            // No blanks left: solved.
            return true;
        };

        let b = box_of(row, col);
        for value in 1..=9u16 {
            let bit = 1u16 << value;
            if cands & bit == 0 {
                continue;
            }
            self.cells[row * GRID_SIZE + col] = value as u8;
            self.rows[row] |= bit;
            self.cols[col] |= bit;
            self.boxes[b] |= bit;

            if self.search() {
                return true;
            }

            self.cells[row * GRID_SIZE + col] = 0;
            self.rows[row] &= !bit;
            self.cols[col] &= !bit;
            self.boxes[b] &= !bit;
        }
        false
    }
}

fn box_of(row: usize, col: usize) -> usize {
    (row / 3) * 3 + col / 3
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_from(cells: [u8; CELL_COUNT]) -> PuzzleGrid {
        PuzzleGrid::from_cells(cells).unwrap()
    }

    #[test]
    fn solves_known_puzzle_and_preserves_givens() {
        let puzzle = grid_from([
            4, 0, 6, 7, 3, 5, 8, 1, 0, //
            2, 7, 8, 0, 9, 6, 5, 4, 0, //
            0, 0, 0, 2, 0, 0, 7, 9, 0, //
            0, 6, 2, 4, 0, 3, 0, 0, 0, //
            0, 0, 0, 0, 6, 1, 4, 0, 0, //
            1, 0, 0, 0, 0, 0, 0, 0, 7, //
            0, 0, 0, 3, 0, 0, 6, 0, 0, //
            0, 1, 7, 0, 5, 0, 0, 0, 4, //
            6, 0, 9, 0, 0, 0, 2, 0, 5,
        ]);

        let solved = BacktrackingSolver.solve(&puzzle).unwrap();
        assert!(solved.is_valid_solution());
        assert!(solved.preserves_givens(&puzzle));
    }

    #[test]
    fn empty_grid_gets_some_valid_completion() {
        let solved = BacktrackingSolver.solve(&PuzzleGrid::empty()).unwrap();
        assert!(solved.is_valid_solution());
    }

    #[test]
    fn conflicting_givens_are_unsolvable() {
        let mut puzzle = PuzzleGrid::empty();
        puzzle.set(0, 0, 5);
        puzzle.set(0, 8, 5);
        assert!(matches!(
            BacktrackingSolver.solve(&puzzle),
            Err(SudosnapError::Unsolvable)
        ));
    }

    #[test]
    fn contradiction_discovered_during_search_is_unsolvable() {
        // Box 0 and row/column interactions leave no candidate for (0,2).
        let mut puzzle = PuzzleGrid::empty();
        // Cell (0,2) sees 1..=8 via its row and column, and 9 via its box.
        for (i, v) in [1u8, 2, 3, 4].iter().enumerate() {
            puzzle.set(0, 3 + i, *v);
        }
        for (i, v) in [5u8, 6, 7, 8].iter().enumerate() {
            puzzle.set(1 + i, 2, *v);
        }
        puzzle.set(1, 0, 9);
        assert!(matches!(
            BacktrackingSolver.solve(&puzzle),
            Err(SudosnapError::Unsolvable)
        ));
    }

    #[test]
    fn solving_is_deterministic() {
        let mut puzzle = PuzzleGrid::empty();
        puzzle.set(4, 4, 1);
        let a = BacktrackingSolver.solve(&puzzle).unwrap();
        let b = BacktrackingSolver.solve(&puzzle).unwrap();
        assert_eq!(a, b);
    }
}
