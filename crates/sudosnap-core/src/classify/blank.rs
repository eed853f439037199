use std::collections::VecDeque;

use ndarray::Array2;

use crate::consts::OTSU_HISTOGRAM_BINS;
use crate::frame::BinaryImage;

/// Primary emptiness pre-check: does the (already binarized) cell contain
/// any ink at all? On a strictly binary image this is the same decision as
/// thresholding the cell's maximum intensity.
pub fn has_ink(cell: &BinaryImage) -> bool {
    cell.iter().any(|&v| v)
}

/// Alternate emptiness check for noisier renderings.
///
/// Re-binarizes the grayscale cell with Otsu's threshold, erases ink that is
/// connected to the cell border (grid-line fragments), and declares the cell
/// blank when the remaining mean brightness exceeds `background_fraction`.
pub fn flood_fill_blank(gray_cell: &Array2<f32>, background_fraction: f32) -> bool {
    let (h, w) = gray_cell.dim();
    if h == 0 || w == 0 {
        return true;
    }

    let threshold = otsu_threshold(gray_cell);
    let mut ink = gray_cell.mapv(|v| v < threshold);
    erase_border_connected(&mut ink);

    let ink_count = ink.iter().filter(|&&v| v).count();
    let mean_brightness = 1.0 - ink_count as f32 / (h * w) as f32;
    mean_brightness > background_fraction
}

/// Otsu's thresholding: find the cutoff that maximizes between-class
/// variance on the intensity histogram.
pub fn otsu_threshold(data: &Array2<f32>) -> f32 {
    let bins = OTSU_HISTOGRAM_BINS;
    let mut histogram = vec![0u64; bins];

    for &v in data.iter() {
        let bin = ((v.clamp(0.0, 1.0) * (bins - 1) as f32) as usize).min(bins - 1);
        histogram[bin] += 1;
    }

    let total = data.len() as f64;
    let mut sum_all: f64 = 0.0;
    for (i, &count) in histogram.iter().enumerate() {
        sum_all += i as f64 * count as f64;
    }

    let mut weight_bg: f64 = 0.0;
    let mut sum_bg: f64 = 0.0;
    let mut best_variance = 0.0_f64;
    let mut best_bin = 0usize;

    for (i, &count) in histogram.iter().enumerate() {
        weight_bg += count as f64;
        if weight_bg == 0.0 {
            continue;
        }
        let weight_fg = total - weight_bg;
        if weight_fg == 0.0 {
            break;
        }
        sum_bg += i as f64 * count as f64;
        let mean_bg = sum_bg / weight_bg;
        let mean_fg = (sum_all - sum_bg) / weight_fg;
        let between_variance = weight_bg * weight_fg * (mean_bg - mean_fg).powi(2);

        if between_variance > best_variance {
            best_variance = between_variance;
            best_bin = i;
        }
    }

    (best_bin as f32 + 0.5) / bins as f32
}

/// Clear every ink pixel 4-connected to the array border.
fn erase_border_connected(ink: &mut Array2<bool>) {
    let (h, w) = ink.dim();
    let mut queue = VecDeque::new();

    for col in 0..w {
        for row in [0, h - 1] {
            if ink[[row, col]] {
                ink[[row, col]] = false;
                queue.push_back((row, col));
            }
        }
    }
    for row in 0..h {
        for col in [0, w - 1] {
            if ink[[row, col]] {
                ink[[row, col]] = false;
                queue.push_back((row, col));
            }
        }
    }

    while let Some((row, col)) = queue.pop_front() {
        let neighbors = [
            (row.wrapping_sub(1), col),
            (row + 1, col),
            (row, col.wrapping_sub(1)),
            (row, col + 1),
        ];
        for (nr, nc) in neighbors {
            if nr < h && nc < w && ink[[nr, nc]] {
                ink[[nr, nc]] = false;
                queue.push_back((nr, nc));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_cell_has_no_ink() {
        let cell = Array2::from_elem((20, 20), false);
        assert!(!has_ink(&cell));
    }

    #[test]
    fn single_pixel_counts_as_ink() {
        let mut cell = Array2::from_elem((20, 20), false);
        cell[[10, 10]] = true;
        assert!(has_ink(&cell));
    }

    #[test]
    fn uniform_bright_cell_is_blank() {
        let cell = Array2::from_elem((20, 20), 0.95f32);
        assert!(flood_fill_blank(&cell, 250.0 / 255.0));
    }

    #[test]
    fn border_noise_is_erased() {
        // A dark stripe along the left edge (grid-line residue), nothing else.
        let mut cell = Array2::from_elem((20, 20), 0.95f32);
        for row in 0..20 {
            cell[[row, 0]] = 0.05;
            cell[[row, 1]] = 0.05;
        }
        assert!(flood_fill_blank(&cell, 250.0 / 255.0));
    }

    #[test]
    fn centered_digit_blob_is_not_blank() {
        let mut cell = Array2::from_elem((20, 20), 0.95f32);
        for row in 5..15 {
            for col in 8..13 {
                cell[[row, col]] = 0.05;
            }
        }
        assert!(!flood_fill_blank(&cell, 250.0 / 255.0));
    }

    #[test]
    fn otsu_separates_bimodal_distribution() {
        let mut data = Array2::from_elem((10, 10), 0.9f32);
        for col in 0..10 {
            data[[0, col]] = 0.1;
        }
        let t = otsu_threshold(&data);
        assert!(t > 0.1 && t < 0.9, "threshold {t} not between the modes");
    }
}
