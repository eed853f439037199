use tracing::info;

use crate::consts::GRID_SIZE;
use crate::error::Result;
use crate::frame::{BoundingBox, ScreenPoint};
use crate::grid::PuzzleGrid;
use crate::mapper::to_screen;

/// Synthetic pointer/keyboard collaborator (spec'd external interface).
/// Window-focus failures and the like are the implementation's own concern.
pub trait InputDriver {
    fn click(&mut self, point: ScreenPoint) -> Result<()>;
    fn type_key(&mut self, key: char) -> Result<()>;
}

/// One recorded synthetic input action.
#[derive(Clone, Debug, PartialEq)]
pub enum ReplayAction {
    Click(ScreenPoint),
    TypeKey(char),
}

/// Input driver that records the action sequence instead of injecting it.
/// Useful for dry runs and for feeding an external replay mechanism.
#[derive(Default)]
pub struct ScriptDriver {
    pub actions: Vec<ReplayAction>,
}

impl InputDriver for ScriptDriver {
    fn click(&mut self, point: ScreenPoint) -> Result<()> {
        self.actions.push(ReplayAction::Click(point));
        Ok(())
    }

    fn type_key(&mut self, key: char) -> Result<()> {
        self.actions.push(ReplayAction::TypeKey(key));
        Ok(())
    }
}

/// Replay a solved grid onto the screen: click the center of every cell that
/// was blank in the extracted grid and type its solved digit.
///
/// Returns the number of cells entered.
pub fn replay_solution(
    unsolved: &PuzzleGrid,
    solved: &PuzzleGrid,
    bbox: &BoundingBox,
    offset: ScreenPoint,
    driver: &mut dyn InputDriver,
) -> Result<usize> {
    let mut entered = 0;
    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            if unsolved.get(row, col) != 0 {
                continue;
            }
            let point = to_screen(row, col, bbox, offset);
            driver.click(point)?;
            driver.type_key(char::from(b'0' + solved.get(row, col)))?;
            entered += 1;
        }
    }
    info!(entered, "Solution replayed");
    Ok(entered)
}
