//! Kernel filters: sharpen and soften.
//!
//! Plain spatial convolution over the interleaved f32 data. Pixels closer to
//! the border than the kernel radius are passed through unchanged, so output
//! dimensions always match the input.

use rayon::prelude::*;

use crate::color::clamp_unit;
use crate::decoders::DecodedImage;

/// 3x3 sharpen kernel, divisor 16.
const SHARPEN_KERNEL: [f32; 9] = [
    -2.0, -2.0, -2.0, //
    -2.0, 32.0, -2.0, //
    -2.0, -2.0, -2.0,
];

/// 5x5 blur kernel, divisor 16: a ring of ones with a hollow center.
const BLUR_KERNEL: [f32; 25] = [
    1.0, 1.0, 1.0, 1.0, 1.0, //
    1.0, 0.0, 0.0, 0.0, 1.0, //
    1.0, 0.0, 0.0, 0.0, 1.0, //
    1.0, 0.0, 0.0, 0.0, 1.0, //
    1.0, 1.0, 1.0, 1.0, 1.0,
];

pub(super) fn sharp(image: &DecodedImage) -> DecodedImage {
    convolve(image, &SHARPEN_KERNEL, 3, 16.0)
}

pub(super) fn soft(image: &DecodedImage) -> DecodedImage {
    convolve(image, &BLUR_KERNEL, 5, 16.0)
}

/// Convolve the image with a square kernel of the given side length.
fn convolve(image: &DecodedImage, kernel: &[f32], size: usize, divisor: f32) -> DecodedImage {
    let width = image.width as usize;
    let height = image.height as usize;
    let radius = size / 2;

    let mut out = image.clone();

    // Image smaller than the kernel: everything is border
    if width < size || height < size {
        return out;
    }

    let stride = width * 3;
    let src = &image.data;

    out.data
        .par_chunks_mut(stride)
        .enumerate()
        .for_each(|(y, row)| {
            if y < radius || y >= height - radius {
                return;
            }

            for x in radius..width - radius {
                let mut acc = [0.0f32; 3];

                for ky in 0..size {
                    let sy = y + ky - radius;
                    for kx in 0..size {
                        let sx = x + kx - radius;
                        let weight = kernel[ky * size + kx];
                        if weight == 0.0 {
                            continue;
                        }

                        let idx = sy * stride + sx * 3;
                        acc[0] += src[idx] * weight;
                        acc[1] += src[idx + 1] * weight;
                        acc[2] += src[idx + 2] * weight;
                    }
                }

                let idx = x * 3;
                row[idx] = clamp_unit(acc[0] / divisor);
                row[idx + 1] = clamp_unit(acc[1] / divisor);
                row[idx + 2] = clamp_unit(acc[2] / divisor);
            }
        });

    out
}
