//! Global channel remaps: white-balance grades and film stock emulations.
//!
//! Each grade is a fixed per-channel gamma/scale/offset applied uniformly to
//! every pixel, clamped back to the working range.

use rayon::prelude::*;

use crate::color::{adjust_saturation, clamp_unit};
use crate::decoders::DecodedImage;

/// Fixed per-channel grade: `out = clamp(in^gamma * scale + offset)`.
pub(super) struct ChannelGrade {
    pub scale: [f32; 3],
    pub offset: [f32; 3],
    pub gamma: [f32; 3],
}

impl ChannelGrade {
    /// A grade that only scales channels.
    pub(super) const fn scaling(scale: [f32; 3]) -> Self {
        Self {
            scale,
            offset: [0.0; 3],
            gamma: [1.0; 3],
        }
    }
}

/// Warm look: push reds up, pull blues down.
const WARM: ChannelGrade = ChannelGrade::scaling([1.1, 1.0, 0.9]);

/// Cool look: pull reds down, push blues up.
const COOL: ChannelGrade = ChannelGrade::scaling([0.9, 1.0, 1.1]);

/// Golden consumer-film warmth: lifted reds and greens, suppressed blues.
const KODAK_GOLD: ChannelGrade = ChannelGrade {
    scale: [1.08, 1.02, 0.88],
    offset: [0.02, 0.01, 0.0],
    gamma: [1.0; 3],
};

/// Slide-film cast applied after a saturation boost: cool greens and blues.
const FUJI_VELVIA_CAST: ChannelGrade = ChannelGrade {
    scale: [0.97, 1.05, 1.04],
    offset: [0.0, 0.0, 0.01],
    gamma: [1.0; 3],
};

/// Cross-processed curve: lifted red highlights, compressed blues with a
/// teal floor in the shadows.
const CROSS_PROCESS: ChannelGrade = ChannelGrade {
    scale: [1.05, 1.02, 0.85],
    offset: [0.0, 0.0, 0.06],
    gamma: [0.9, 0.95, 1.1],
};

pub(super) fn warm(image: &DecodedImage) -> DecodedImage {
    apply_grade(image, &WARM)
}

pub(super) fn cool(image: &DecodedImage) -> DecodedImage {
    apply_grade(image, &COOL)
}

pub(super) fn kodak_gold(image: &DecodedImage) -> DecodedImage {
    apply_grade(image, &KODAK_GOLD)
}

pub(super) fn fuji_velvia(image: &DecodedImage) -> DecodedImage {
    let mut out = image.clone();
    adjust_saturation(&mut out.data, 1.3);
    apply_grade_in_place(&mut out.data, &FUJI_VELVIA_CAST);
    out
}

pub(super) fn cross_process(image: &DecodedImage) -> DecodedImage {
    apply_grade(image, &CROSS_PROCESS)
}

/// Apply a fixed grade to a copy of the image.
pub(super) fn apply_grade(image: &DecodedImage, grade: &ChannelGrade) -> DecodedImage {
    let mut out = image.clone();
    apply_grade_in_place(&mut out.data, grade);
    out
}

/// Apply a fixed grade to interleaved RGB data.
///
/// Uses parallel processing for large images (>100k pixels)
pub(super) fn apply_grade_in_place(data: &mut [f32], grade: &ChannelGrade) {
    let num_pixels = data.len() / 3;
    const PARALLEL_THRESHOLD: usize = 100_000;

    if num_pixels >= PARALLEL_THRESHOLD {
        const CHUNK_SIZE: usize = 256 * 3;
        data.par_chunks_mut(CHUNK_SIZE).for_each(|chunk| {
            for pixel in chunk.chunks_exact_mut(3) {
                grade_pixel(pixel, grade);
            }
        });
    } else {
        for pixel in data.chunks_exact_mut(3) {
            grade_pixel(pixel, grade);
        }
    }
}

#[inline(always)]
fn grade_pixel(pixel: &mut [f32], grade: &ChannelGrade) {
    for ch in 0..3 {
        // Skip powf when gamma is neutral so pure scaling grades stay exact
        let v = if grade.gamma[ch] == 1.0 {
            pixel[ch]
        } else {
            pixel[ch].powf(grade.gamma[ch])
        };
        pixel[ch] = clamp_unit(v * grade.scale[ch] + grade.offset[ch]);
    }
}
