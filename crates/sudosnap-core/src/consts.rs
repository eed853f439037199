/// Number of rows/columns on a Sudoku board.
pub const GRID_SIZE: usize = 9;

/// Number of cells on a Sudoku board.
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Neighborhood size (pixels) for adaptive thresholding.
pub const ADAPTIVE_BLOCK_SIZE: usize = 11;

/// Bias subtracted from the local mean before the adaptive threshold
/// comparison. Matches a constant of 2 on an 8-bit scale.
pub const ADAPTIVE_BIAS: f32 = 2.0 / 255.0;

/// Default inset (pixels per side) applied to each cell to exclude
/// grid-line ink from the classified interior.
pub const DEFAULT_CELL_INSET: usize = 3;

/// Default background fraction above which a cell is declared blank by the
/// flood-fill blank check. Matches a mean brightness of 250 on an 8-bit scale.
pub const DEFAULT_BLANK_BACKGROUND_FRACTION: f32 = 250.0 / 255.0;

/// Number of histogram bins for Otsu's thresholding.
pub const OTSU_HISTOGRAM_BINS: usize = 256;

/// ITU-R BT.601 luminance coefficient for the red channel.
pub const LUMINANCE_R: f32 = 0.299;

/// ITU-R BT.601 luminance coefficient for the green channel.
pub const LUMINANCE_G: f32 = 0.587;

/// ITU-R BT.601 luminance coefficient for the blue channel.
pub const LUMINANCE_B: f32 = 0.114;
