use std::path::{Path, PathBuf};

use ndarray::Array2;
use tracing::debug;

use crate::error::{Result, SudosnapError};
use crate::frame::{ColorFrame, Frame, Region};

/// Screenshot collaborator: produces one color frame of a screen region.
///
/// Implementations must fail with a capture error when the region is not
/// fully within the visible screen.
pub trait FrameSource {
    fn capture(&mut self, region: &Region) -> Result<ColorFrame>;
}

/// Frame source backed by a screenshot file on disk.
///
/// The capture region's width and height must match the stored image; the
/// region's origin is carried by the pipeline configuration and only used
/// later, for mapping board coordinates back onto the screen.
pub struct ImageFileSource {
    path: PathBuf,
}

impl ImageFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl FrameSource for ImageFileSource {
    fn capture(&mut self, region: &Region) -> Result<ColorFrame> {
        let frame = load_color_image(&self.path)?;
        if frame.width() != region.width as usize || frame.height() != region.height as usize {
            return Err(SudosnapError::Capture(format!(
                "screenshot {} is {}x{}, capture region wants {}x{}",
                self.path.display(),
                frame.width(),
                frame.height(),
                region.width,
                region.height
            )));
        }
        Ok(frame)
    }
}

/// Load a color image file into a `ColorFrame` with channels in [0, 1].
pub fn load_color_image(path: &Path) -> Result<ColorFrame> {
    let img = image::open(path)?.to_rgb8();
    let (w, h) = img.dimensions();
    let (w, h) = (w as usize, h as usize);

    let mut red = Array2::<f32>::zeros((h, w));
    let mut green = Array2::<f32>::zeros((h, w));
    let mut blue = Array2::<f32>::zeros((h, w));

    for row in 0..h {
        for col in 0..w {
            let pixel = img.get_pixel(col as u32, row as u32);
            red[[row, col]] = pixel.0[0] as f32 / 255.0;
            green[[row, col]] = pixel.0[1] as f32 / 255.0;
            blue[[row, col]] = pixel.0[2] as f32 / 255.0;
        }
    }

    debug!(path = %path.display(), width = w, height = h, "Screenshot loaded");
    Ok(ColorFrame {
        red: Frame::new(red),
        green: Frame::new(green),
        blue: Frame::new(blue),
    })
}
