use thiserror::Error;

#[derive(Error, Debug)]
pub enum SudosnapError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Capture failed: {0}")]
    Capture(String),

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("No board found in frame")]
    NoBoardFound,

    #[error("Classification failed: {0}")]
    Classification(String),

    #[error("Puzzle is unsolvable")]
    Unsolvable,

    #[error("Invalid cell value {value} at index {index}")]
    InvalidCell { index: usize, value: u8 },

    #[error("Input replay failed: {0}")]
    Replay(String),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Pipeline error: {0}")]
    Pipeline(String),
}

pub type Result<T> = std::result::Result<T, SudosnapError>;
