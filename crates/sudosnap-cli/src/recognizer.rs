use std::process::Command;
use std::sync::atomic::{AtomicUsize, Ordering};

use image::{GrayImage, Luma};
use tempfile::TempDir;

use sudosnap_core::classify::Recognizer;
use sudosnap_core::error::{Result, SudosnapError};
use sudosnap_core::frame::BinaryImage;

/// Digit recognizer backed by the `tesseract` binary.
///
/// Each cell is staged as a PNG in a scratch directory and read in
/// single-character mode with the alphabet restricted to 1-9. Cells are
/// recognized concurrently, so every call writes its own file.
pub struct TesseractRecognizer {
    workdir: TempDir,
    counter: AtomicUsize,
}

impl TesseractRecognizer {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            workdir: TempDir::new()?,
            counter: AtomicUsize::new(0),
        })
    }
}

impl Recognizer for TesseractRecognizer {
    fn recognize(&self, cell: &BinaryImage) -> Result<String> {
        let (h, w) = cell.dim();
        let mut img = GrayImage::new(w as u32, h as u32);
        for ((row, col), &ink) in cell.indexed_iter() {
            let value = if ink { 0 } else { 255 };
            img.put_pixel(col as u32, row as u32, Luma([value]));
        }

        let n = self.counter.fetch_add(1, Ordering::Relaxed);
        let path = self.workdir.path().join(format!("cell-{n}.png"));
        img.save(&path)?;

        let output = Command::new("tesseract")
            .arg(&path)
            .arg("stdout")
            .args(["--psm", "10", "-c", "tessedit_char_whitelist=123456789"])
            .output()
            .map_err(|e| SudosnapError::Classification(format!("failed to run tesseract: {e}")))?;

        if !output.status.success() {
            return Err(SudosnapError::Classification(format!(
                "tesseract exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
