use ndarray::s;

use crate::consts::{CELL_COUNT, GRID_SIZE};
use crate::frame::{BinaryImage, BoundingBox};

/// The image-space rectangle of one puzzle cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellRect {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl CellRect {
    /// Shrink the rectangle by `margin` pixels on every side. Collapses to
    /// zero size rather than underflowing when the margin is too large.
    pub fn inset(&self, margin: usize) -> CellRect {
        if self.width <= 2 * margin || self.height <= 2 * margin {
            return CellRect {
                x: self.x,
                y: self.y,
                width: 0,
                height: 0,
            };
        }
        CellRect {
            x: self.x + margin,
            y: self.y + margin,
            width: self.width - 2 * margin,
            height: self.height - 2 * margin,
        }
    }
}

/// Partition a bounding box into 81 cell rectangles in row-major order,
/// each inset by `inset` pixels per side.
///
/// Cell spacing is `width / 9` by `height / 9` with integer floor division;
/// any residual margin is absorbed past the last row/column and ignored.
/// Degenerate spacing (a box narrower than 9 pixels) is a caller
/// precondition violation and is not handled here.
pub fn segment(bbox: &BoundingBox, inset: usize) -> Vec<CellRect> {
    let dw = bbox.width / GRID_SIZE;
    let dh = bbox.height / GRID_SIZE;

    let mut cells = Vec::with_capacity(CELL_COUNT);
    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            let raw = CellRect {
                x: bbox.x + dw * col,
                y: bbox.y + dh * row,
                width: dw,
                height: dh,
            };
            cells.push(raw.inset(inset));
        }
    }
    cells
}

/// Copy the pixels of a cell rectangle out of a binary image.
pub fn extract_cell(binary: &BinaryImage, rect: &CellRect) -> BinaryImage {
    binary
        .slice(s![
            rect.y..rect.y + rect.height,
            rect.x..rect.x + rect.width
        ])
        .to_owned()
}
