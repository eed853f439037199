use ndarray::Array2;
use tracing::debug;

use crate::consts::{
    ADAPTIVE_BIAS, ADAPTIVE_BLOCK_SIZE, LUMINANCE_B, LUMINANCE_G, LUMINANCE_R,
};
use crate::error::{Result, SudosnapError};
use crate::frame::{BinaryImage, ColorFrame, Frame};

/// Compute luminance from a `ColorFrame` using ITU-R BT.601 weights.
pub fn luminance(color: &ColorFrame) -> Frame {
    let (h, w) = color.red.data.dim();
    let mut data = Array2::<f32>::zeros((h, w));

    for row in 0..h {
        for col in 0..w {
            data[[row, col]] = LUMINANCE_R * color.red.data[[row, col]]
                + LUMINANCE_G * color.green.data[[row, col]]
                + LUMINANCE_B * color.blue.data[[row, col]];
        }
    }

    Frame::new(data)
}

/// Binarize a grayscale frame with inverted adaptive Gaussian thresholding.
///
/// Each pixel is compared against the Gaussian-weighted mean of its
/// `ADAPTIVE_BLOCK_SIZE` neighborhood minus `ADAPTIVE_BIAS`; pixels darker
/// than that local cutoff become foreground, so dark ink on a light
/// background maps to `true`. Deterministic for identical pixel input.
pub fn preprocess(frame: &Frame) -> Result<BinaryImage> {
    let (h, w) = frame.data.dim();
    if h == 0 || w == 0 {
        return Err(SudosnapError::InvalidDimensions {
            width: w,
            height: h,
        });
    }

    let local_mean = gaussian_local_mean(&frame.data, ADAPTIVE_BLOCK_SIZE);
    let binary = Array2::from_shape_fn((h, w), |(row, col)| {
        frame.data[[row, col]] <= local_mean[[row, col]] - ADAPTIVE_BIAS
    });

    debug!(
        width = w,
        height = h,
        foreground = binary.iter().filter(|&&v| v).count(),
        "Adaptive threshold applied"
    );
    Ok(binary)
}

/// Convert a color frame straight to a binary image.
pub fn preprocess_color(color: &ColorFrame) -> Result<BinaryImage> {
    preprocess(&luminance(color))
}

/// Gaussian-weighted local mean via separable 1D convolution with clamped
/// borders. Sigma is derived from the block size the way OpenCV derives it.
fn gaussian_local_mean(data: &Array2<f32>, block: usize) -> Array2<f32> {
    let sigma = 0.3 * ((block as f32 - 1.0) * 0.5 - 1.0) + 0.8;
    let kernel = gaussian_kernel(block, sigma);
    let row_pass = convolve_rows(data, &kernel);
    convolve_cols(&row_pass, &kernel)
}

fn gaussian_kernel(size: usize, sigma: f32) -> Vec<f32> {
    let radius = size / 2;
    let s2 = 2.0 * sigma * sigma;
    let mut kernel = vec![0.0f32; 2 * radius + 1];
    let mut sum = 0.0f32;

    for (i, k) in kernel.iter_mut().enumerate() {
        let x = i as f32 - radius as f32;
        *k = (-x * x / s2).exp();
        sum += *k;
    }
    for v in &mut kernel {
        *v /= sum;
    }

    kernel
}

fn convolve_rows(data: &Array2<f32>, kernel: &[f32]) -> Array2<f32> {
    let (h, w) = data.dim();
    let radius = kernel.len() / 2;
    let mut result = Array2::<f32>::zeros((h, w));

    for row in 0..h {
        for col in 0..w {
            let mut sum = 0.0f32;
            for (ki, &kv) in kernel.iter().enumerate() {
                let src_col =
                    (col as isize + ki as isize - radius as isize).clamp(0, w as isize - 1) as usize;
                sum += data[[row, src_col]] * kv;
            }
            result[[row, col]] = sum;
        }
    }

    result
}

fn convolve_cols(data: &Array2<f32>, kernel: &[f32]) -> Array2<f32> {
    let (h, w) = data.dim();
    let radius = kernel.len() / 2;
    let mut result = Array2::<f32>::zeros((h, w));

    for row in 0..h {
        for col in 0..w {
            let mut sum = 0.0f32;
            for (ki, &kv) in kernel.iter().enumerate() {
                let src_row =
                    (row as isize + ki as isize - radius as isize).clamp(0, h as isize - 1) as usize;
                sum += data[[src_row, col]] * kv;
            }
            result[[row, col]] = sum;
        }
    }

    result
}
