pub mod blank;

use ndarray::s;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::consts::{CELL_COUNT, DEFAULT_BLANK_BACKGROUND_FRACTION, GRID_SIZE};
use crate::error::{Result, SudosnapError};
use crate::frame::{BinaryImage, Frame};
use crate::grid::PuzzleGrid;
use crate::segment::{extract_cell, CellRect};

use blank::{flood_fill_blank, has_ink};

/// Single-character digit recognizer (spec'd external OCR collaborator).
///
/// Implementations must behave as if configured for single-character mode
/// with the alphabet restricted to 1-9: for a non-blank cell the trimmed
/// output is exactly one character from that alphabet. Anything else is a
/// fatal classification error upstream.
pub trait Recognizer: Sync {
    fn recognize(&self, cell: &BinaryImage) -> Result<String>;
}

/// How to decide that a cell holds no digit before invoking OCR.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum BlankStrategy {
    /// Any ink pixel in the inset cell means "not blank". Cheap and exact on
    /// clean renderings.
    #[default]
    InkPresence,
    /// Otsu re-binarization plus border flood fill; blank when the mean
    /// brightness of what remains exceeds the configured fraction. More
    /// tolerant of border residue and antialiasing noise.
    FloodFillMean,
}

/// Blank-detection configuration. The cutoff is deliberately tunable: the
/// right value depends on the target rendering environment.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BlankCheckConfig {
    #[serde(default)]
    pub strategy: BlankStrategy,
    /// Background fraction above which `FloodFillMean` declares blank.
    #[serde(default = "default_background_fraction")]
    pub background_fraction: f32,
}

fn default_background_fraction() -> f32 {
    DEFAULT_BLANK_BACKGROUND_FRACTION
}

impl Default for BlankCheckConfig {
    fn default() -> Self {
        Self {
            strategy: BlankStrategy::default(),
            background_fraction: DEFAULT_BLANK_BACKGROUND_FRACTION,
        }
    }
}

/// Classify all 81 cells into digits (1-9) or blank (0).
///
/// Cells are independent and classified in parallel; each worker writes one
/// value addressed by its own index, and the results are assembled in
/// row-major order before being returned.
pub fn classify_cells(
    binary: &BinaryImage,
    gray: &Frame,
    cells: &[CellRect],
    recognizer: &dyn Recognizer,
    config: &BlankCheckConfig,
) -> Result<PuzzleGrid> {
    debug_assert_eq!(cells.len(), CELL_COUNT);

    let values: Vec<u8> = (0..CELL_COUNT)
        .into_par_iter()
        .map(|index| classify_cell(binary, gray, &cells[index], index, recognizer, config))
        .collect::<Result<_>>()?;

    let mut grid = PuzzleGrid::empty();
    for (index, value) in values.into_iter().enumerate() {
        grid.set(index / GRID_SIZE, index % GRID_SIZE, value);
    }
    Ok(grid)
}

fn classify_cell(
    binary: &BinaryImage,
    gray: &Frame,
    rect: &CellRect,
    index: usize,
    recognizer: &dyn Recognizer,
    config: &BlankCheckConfig,
) -> Result<u8> {
    let cell = extract_cell(binary, rect);

    let blank = match config.strategy {
        BlankStrategy::InkPresence => !has_ink(&cell),
        BlankStrategy::FloodFillMean => {
            let gray_cell = gray
                .data
                .slice(s![
                    rect.y..rect.y + rect.height,
                    rect.x..rect.x + rect.width
                ])
                .to_owned();
            flood_fill_blank(&gray_cell, config.background_fraction)
        }
    };
    if blank {
        return Ok(0);
    }

    let text = recognizer.recognize(&cell)?;
    parse_digit(text.trim(), index)
}

/// Parse trimmed recognizer output, which must be exactly one digit 1-9.
fn parse_digit(text: &str, index: usize) -> Result<u8> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c @ '1'..='9'), None) => Ok(c as u8 - b'0'),
        _ => Err(SudosnapError::Classification(format!(
            "recognizer returned {text:?} for cell {index}, expected a single digit 1-9"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;

    /// Returns a fixed digit for every non-blank cell it is asked about.
    struct FixedRecognizer(u8);

    impl Recognizer for FixedRecognizer {
        fn recognize(&self, _cell: &BinaryImage) -> Result<String> {
            Ok(format!("{}\n", self.0))
        }
    }

    struct GarbageRecognizer;

    impl Recognizer for GarbageRecognizer {
        fn recognize(&self, _cell: &BinaryImage) -> Result<String> {
            Ok("x7".to_string())
        }
    }

    fn blank_inputs(size: usize) -> (BinaryImage, Frame) {
        (
            Array2::from_elem((size, size), false),
            Frame::new(Array2::from_elem((size, size), 1.0)),
        )
    }

    #[test]
    fn all_background_classifies_as_all_blank() {
        let (binary, gray) = blank_inputs(90);
        let bbox = crate::frame::BoundingBox {
            x: 0,
            y: 0,
            width: 90,
            height: 90,
        };
        let cells = crate::segment::segment(&bbox, 3);
        let grid = classify_cells(
            &binary,
            &gray,
            &cells,
            &FixedRecognizer(9),
            &BlankCheckConfig::default(),
        )
        .unwrap();
        assert_eq!(grid.given_count(), 0);
    }

    #[test]
    fn inked_cell_goes_through_ocr() {
        let (mut binary, gray) = blank_inputs(90);
        // Ink in the middle of cell (0, 0); its inset rect is [3,7)x[3,7).
        binary[[5, 5]] = true;
        let bbox = crate::frame::BoundingBox {
            x: 0,
            y: 0,
            width: 90,
            height: 90,
        };
        let cells = crate::segment::segment(&bbox, 3);
        let grid = classify_cells(
            &binary,
            &gray,
            &cells,
            &FixedRecognizer(5),
            &BlankCheckConfig::default(),
        )
        .unwrap();
        assert_eq!(grid.get(0, 0), 5);
        assert_eq!(grid.given_count(), 1);
    }

    #[test]
    fn non_digit_recognizer_output_is_fatal() {
        let (mut binary, gray) = blank_inputs(90);
        binary[[5, 5]] = true;
        let bbox = crate::frame::BoundingBox {
            x: 0,
            y: 0,
            width: 90,
            height: 90,
        };
        let cells = crate::segment::segment(&bbox, 3);
        let result = classify_cells(
            &binary,
            &gray,
            &cells,
            &GarbageRecognizer,
            &BlankCheckConfig::default(),
        );
        assert!(matches!(result, Err(SudosnapError::Classification(_))));
    }

    #[test]
    fn parse_digit_accepts_exactly_one_digit() {
        assert_eq!(parse_digit("7", 0).unwrap(), 7);
        assert!(parse_digit("", 0).is_err());
        assert!(parse_digit("10", 0).is_err());
        assert!(parse_digit("0", 0).is_err());
    }
}
