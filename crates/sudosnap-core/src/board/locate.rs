use std::collections::VecDeque;

use ndarray::Array2;
use tracing::debug;

use crate::error::{Result, SudosnapError};
use crate::frame::{BinaryImage, BoundingBox};

use super::components::{connected_components, Component, ComponentMap};
use super::contour::{trace_boundary, Contour};

/// Find the puzzle board in a binary image.
///
/// Traces the outer boundary of every connected foreground region, scores
/// each by its enclosed (shoelace) area so the board's hollow border wins
/// over any solid blob, and returns the tight bounding box of the largest.
/// On ties the first component in scan order wins.
pub fn locate(binary: &BinaryImage) -> Result<BoundingBox> {
    let map = connected_components(binary);
    let (_, bbox) = select_board(&map)?;
    Ok(bbox)
}

/// Board location with background suppression.
///
/// In addition to the bounding box, returns a copy of the binary image with
/// everything outside the board's filled outer contour erased. Ink inside
/// the border (the digits) survives; clutter around the board does not.
pub fn locate_masked(binary: &BinaryImage) -> Result<(BoundingBox, BinaryImage)> {
    let map = connected_components(binary);
    let (winner, bbox) = select_board(&map)?;

    let outside = outside_mask(&map.labels, winner.label);
    let mut cleaned = binary.clone();
    for (c, &out) in cleaned.iter_mut().zip(outside.iter()) {
        if out {
            *c = false;
        }
    }

    Ok((bbox, cleaned))
}

fn select_board(map: &ComponentMap) -> Result<(&Component, BoundingBox)> {
    if map.components.is_empty() {
        return Err(SudosnapError::NoBoardFound);
    }

    let mut best: Option<(&Component, Contour, f64)> = None;
    for component in &map.components {
        let contour = trace_boundary(&map.labels, component.label, component.seed);
        let area = contour.area();
        // Strict comparison keeps the first maximum in scan order.
        if best.as_ref().map_or(true, |(_, _, a)| area > *a) {
            best = Some((component, contour, area));
        }
    }

    let (winner, contour, area) = best.expect("components are non-empty");
    let (min_col, min_row, max_col, max_row) = contour.bounds();
    let bbox = BoundingBox {
        x: min_col,
        y: min_row,
        width: max_col - min_col + 1,
        height: max_row - min_row + 1,
    };
    debug!(
        area,
        x = bbox.x,
        y = bbox.y,
        width = bbox.width,
        height = bbox.height,
        "Board located"
    );
    Ok((winner, bbox))
}

/// Pixels reachable from the image border without crossing the component:
/// everything outside its filled outer contour. 4-connected flood fill.
fn outside_mask(labels: &Array2<u32>, label: u32) -> Array2<bool> {
    let (h, w) = labels.dim();
    let mut outside = Array2::from_elem((h, w), false);
    let mut queue = VecDeque::new();

    let try_seed = |row: usize, col: usize,
                    outside: &mut Array2<bool>,
                    queue: &mut VecDeque<(usize, usize)>| {
        if labels[[row, col]] != label && !outside[[row, col]] {
            outside[[row, col]] = true;
            queue.push_back((row, col));
        }
    };

    for col in 0..w {
        try_seed(0, col, &mut outside, &mut queue);
        try_seed(h - 1, col, &mut outside, &mut queue);
    }
    for row in 0..h {
        try_seed(row, 0, &mut outside, &mut queue);
        try_seed(row, w - 1, &mut outside, &mut queue);
    }

    while let Some((row, col)) = queue.pop_front() {
        let neighbors = [
            (row.wrapping_sub(1), col),
            (row + 1, col),
            (row, col.wrapping_sub(1)),
            (row, col + 1),
        ];
        for (nr, nc) in neighbors {
            if nr < h && nc < w && labels[[nr, nc]] != label && !outside[[nr, nc]] {
                outside[[nr, nc]] = true;
                queue.push_back((nr, nc));
            }
        }
    }

    outside
}
