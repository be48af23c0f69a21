//! Luma-based transforms: monochrome conversion, sepia toning, and the
//! contrast/brightness grade behind the cinematic look.

use rayon::prelude::*;

use crate::color::{adjust_saturation, clamp_unit, luma, mean_luma};
use crate::decoders::DecodedImage;

/// Sepia tone matrix. Rows map input RGB to output R, G, B.
const SEPIA_MATRIX: [[f32; 3]; 3] = [
    [0.393, 0.769, 0.189],
    [0.349, 0.686, 0.168],
    [0.272, 0.534, 0.131],
];

/// Classic monochrome conversion: every channel becomes the pixel's luma.
///
/// Output stays 3-channel so the encoding path is uniform. Applying the
/// effect to an already monochrome image is a no-op after quantization.
pub(super) fn black_white(image: &DecodedImage) -> DecodedImage {
    let mut out = image.clone();

    for pixel in out.data.chunks_exact_mut(3) {
        let y = clamp_unit(luma(pixel[0], pixel[1], pixel[2]));
        pixel[0] = y;
        pixel[1] = y;
        pixel[2] = y;
    }

    out
}

/// Vintage look: reduced saturation followed by a sepia matrix.
pub(super) fn vintage(image: &DecodedImage) -> DecodedImage {
    let mut out = image.clone();
    adjust_saturation(&mut out.data, 0.8);

    let num_pixels = out.data.len() / 3;
    const PARALLEL_THRESHOLD: usize = 100_000;

    if num_pixels >= PARALLEL_THRESHOLD {
        const CHUNK_SIZE: usize = 256 * 3;
        out.data.par_chunks_mut(CHUNK_SIZE).for_each(|chunk| {
            for pixel in chunk.chunks_exact_mut(3) {
                sepia_pixel(pixel);
            }
        });
    } else {
        for pixel in out.data.chunks_exact_mut(3) {
            sepia_pixel(pixel);
        }
    }

    out
}

#[inline(always)]
fn sepia_pixel(pixel: &mut [f32]) {
    let r = pixel[0];
    let g = pixel[1];
    let b = pixel[2];

    pixel[0] = clamp_unit(SEPIA_MATRIX[0][0] * r + SEPIA_MATRIX[0][1] * g + SEPIA_MATRIX[0][2] * b);
    pixel[1] = clamp_unit(SEPIA_MATRIX[1][0] * r + SEPIA_MATRIX[1][1] * g + SEPIA_MATRIX[1][2] * b);
    pixel[2] = clamp_unit(SEPIA_MATRIX[2][0] * r + SEPIA_MATRIX[2][1] * g + SEPIA_MATRIX[2][2] * b);
}

/// Cinematic look: contrast boosted about the image's mean luma, then a
/// slight brightness pull-down.
pub(super) fn cinematic(image: &DecodedImage) -> DecodedImage {
    const CONTRAST: f32 = 1.2;
    const BRIGHTNESS: f32 = 0.9;

    let mut out = image.clone();
    let mean = mean_luma(&out.data);

    for value in out.data.iter_mut() {
        let contrasted = mean + (*value - mean) * CONTRAST;
        *value = clamp_unit(contrasted * BRIGHTNESS);
    }

    out
}
