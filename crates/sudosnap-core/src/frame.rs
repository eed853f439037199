use ndarray::Array2;

use crate::error::{Result, SudosnapError};

/// A single grayscale image frame.
/// Pixel values are f32 in [0.0, 1.0].
#[derive(Clone, Debug)]
pub struct Frame {
    /// Pixel data, row-major, shape = (height, width)
    pub data: Array2<f32>,
}

impl Frame {
    pub fn new(data: Array2<f32>) -> Self {
        Self { data }
    }

    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }
}

/// Color image composed of separate channel frames.
#[derive(Clone, Debug)]
pub struct ColorFrame {
    pub red: Frame,
    pub green: Frame,
    pub blue: Frame,
}

impl ColorFrame {
    pub fn width(&self) -> usize {
        self.red.width()
    }

    pub fn height(&self) -> usize {
        self.red.height()
    }
}

/// Binary (foreground/background) image. `true` marks ink.
pub type BinaryImage = Array2<bool>;

/// Axis-aligned rectangle in image pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundingBox {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl BoundingBox {
    /// Validate that the box is non-degenerate and lies within an image of
    /// the given dimensions.
    pub fn validated(&self, src_w: usize, src_h: usize) -> Result<BoundingBox> {
        if self.width == 0 || self.height == 0 {
            return Err(SudosnapError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.x + self.width > src_w || self.y + self.height > src_h {
            return Err(SudosnapError::Pipeline(format!(
                "bounding box ({},{} {}x{}) exceeds image dimensions ({src_w}x{src_h})",
                self.x, self.y, self.width, self.height
            )));
        }
        Ok(*self)
    }
}

/// A rectangular screen region, in absolute screen coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Region {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// A point in absolute screen coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}
