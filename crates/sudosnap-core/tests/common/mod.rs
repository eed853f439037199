#![allow(dead_code)]

use ndarray::Array2;

use sudosnap_core::frame::{BinaryImage, ColorFrame, Frame};

/// Ink value used for synthetic boards (dark on a light background).
pub const INK: f32 = 0.1;
pub const PAPER: f32 = 1.0;

/// Draw a one-pixel-wide rectangle outline into a binary image.
pub fn draw_outline(mask: &mut BinaryImage, x: usize, y: usize, w: usize, h: usize) {
    for col in x..x + w {
        mask[[y, col]] = true;
        mask[[y + h - 1, col]] = true;
    }
    for row in y..y + h {
        mask[[row, x]] = true;
        mask[[row, x + w - 1]] = true;
    }
}

/// Fill a solid rectangle of ink into a binary image.
pub fn draw_block(mask: &mut BinaryImage, x: usize, y: usize, w: usize, h: usize) {
    for row in y..y + h {
        for col in x..x + w {
            mask[[row, col]] = true;
        }
    }
}

/// A clean 450x450 binary board at the image origin: one-pixel border,
/// no grid lines, digits added separately.
pub fn binary_board(image_size: usize) -> BinaryImage {
    let mut mask = Array2::from_elem((image_size, image_size), false);
    draw_outline(&mut mask, 0, 0, 450, 450);
    mask
}

/// Put a 20x20 digit blob in the center of cell (row, col) of a board whose
/// bounding box starts at (bx, by) with 50px cell spacing.
pub fn draw_digit_blob(mask: &mut BinaryImage, bx: usize, by: usize, row: usize, col: usize) {
    draw_block(mask, bx + 50 * col + 15, by + 50 * row + 15, 20, 20);
}

/// Synthetic grayscale screenshot: white paper with a dark-bordered board.
///
/// The board's outer border and internal grid lines are 3px thick, centered
/// on the cell boundaries so that a 3px cell inset excludes them. Digit
/// blobs can be added afterwards with `paint_digit_blob`.
pub fn gray_screenshot(image_size: usize, board_origin: usize, board_size: usize) -> Array2<f32> {
    let mut data = Array2::from_elem((image_size, image_size), PAPER);
    let o = board_origin;
    let cell = board_size / 9;

    let mut vline = |x: usize| {
        for row in o..o + board_size {
            for col in x.saturating_sub(1)..(x + 2).min(image_size) {
                data[[row, col]] = INK;
            }
        }
    };
    for j in 0..=9 {
        let x = if j == 9 { o + board_size - 1 } else { o + cell * j };
        vline(x);
    }

    let mut hline = |y: usize| {
        for row in y.saturating_sub(1)..(y + 2).min(image_size) {
            for col in o..o + board_size {
                data[[row, col]] = INK;
            }
        }
    };
    for i in 0..=9 {
        let y = if i == 9 { o + board_size - 1 } else { o + cell * i };
        hline(y);
    }

    data
}

/// Paint a dark 20x20 digit blob centered in cell (row, col).
pub fn paint_digit_blob(
    data: &mut Array2<f32>,
    board_origin: usize,
    cell: usize,
    row: usize,
    col: usize,
) {
    let x0 = board_origin + cell * col + cell / 2 - 10;
    let y0 = board_origin + cell * row + cell / 2 - 10;
    for y in y0..y0 + 20 {
        for x in x0..x0 + 20 {
            data[[y, x]] = INK;
        }
    }
}

/// Wrap a grayscale array into a neutral color frame.
pub fn color_frame(gray: Array2<f32>) -> ColorFrame {
    ColorFrame {
        red: Frame::new(gray.clone()),
        green: Frame::new(gray.clone()),
        blue: Frame::new(gray),
    }
}
