use anyhow::{bail, Result};
use clap::Args;

use sudosnap_core::grid::PuzzleGrid;
use sudosnap_core::solver::{BacktrackingSolver, Solver};

use crate::summary;

#[derive(Args)]
pub struct SolveArgs {
    /// 81 characters in row-major order: digits 1-9, with '0' or '.' for blanks
    pub puzzle: String,
}

pub fn run(args: &SolveArgs) -> Result<()> {
    let grid = parse_puzzle(&args.puzzle)?;
    let solved = BacktrackingSolver.solve(&grid)?;

    println!();
    summary::print_grid(&solved);
    println!();

    Ok(())
}

fn parse_puzzle(text: &str) -> Result<PuzzleGrid> {
    let mut cells = [0u8; 81];
    let mut count = 0;
    for c in text.chars().filter(|c| !c.is_whitespace()) {
        if count == 81 {
            bail!("puzzle has more than 81 cells");
        }
        cells[count] = match c {
            '.' | '0' => 0,
            '1'..='9' => c as u8 - b'0',
            other => bail!("invalid puzzle character {other:?}"),
        };
        count += 1;
    }
    if count != 81 {
        bail!("puzzle has {count} cells, expected 81");
    }
    Ok(PuzzleGrid::from_cells(cells)?)
}
