//! Randomized transforms: grain, light leaks, and the combined analog look.
//!
//! Every function draws from the caller's `EffectRng`, so output varies per
//! invocation unless the caller pins a seed. Loops are sequential: the draw
//! order is part of the reproducibility contract.

use super::grading::{apply_grade_in_place, ChannelGrade};
use super::masks::vignette_in_place;
use super::rng::EffectRng;
use crate::color::clamp_unit;
use crate::config;
use crate::decoders::DecodedImage;

/// Mild warm cast used by the analog look before wear is layered on.
const ANALOG_CAST: ChannelGrade = ChannelGrade {
    scale: [1.04, 1.0, 0.94],
    offset: [0.01, 0.0, 0.0],
    gamma: [1.0; 3],
};

/// Additive per-pixel Gaussian luminance noise.
pub(super) fn grain(image: &DecodedImage, rng: &mut EffectRng) -> DecodedImage {
    let sigma = config::effect_defaults().grain_sigma;
    let mut out = image.clone();
    add_grain(&mut out.data, rng, sigma);
    out
}

/// A warm radial bloom blended additively from a random image edge.
pub(super) fn light_leak(image: &DecodedImage, rng: &mut EffectRng) -> DecodedImage {
    let strength = config::effect_defaults().leak_strength;
    let mut out = image.clone();
    add_light_leak(&mut out, rng, strength);
    out
}

/// Aged analog camera look: warm cast, gentle vignette, grain, a faint
/// light leak, and a few vertical scratches.
pub(super) fn analog(image: &DecodedImage, rng: &mut EffectRng) -> DecodedImage {
    let defaults = config::effect_defaults();

    let mut out = image.clone();
    apply_grade_in_place(&mut out.data, &ANALOG_CAST);
    vignette_in_place(&mut out.data, out.width, out.height, 1.35, 0.85);
    add_light_leak(&mut out, rng, defaults.leak_strength * 0.5);
    add_grain(&mut out.data, rng, defaults.grain_sigma * 0.6);
    add_scratches(&mut out, rng);
    out
}

/// Add zero-mean Gaussian noise to the luminance of every pixel.
fn add_grain(data: &mut [f32], rng: &mut EffectRng, sigma: f32) {
    for pixel in data.chunks_exact_mut(3) {
        let noise = rng.gaussian(sigma);
        pixel[0] = clamp_unit(pixel[0] + noise);
        pixel[1] = clamp_unit(pixel[1] + noise);
        pixel[2] = clamp_unit(pixel[2] + noise);
    }
}

/// Blend a randomly placed warm bloom additively into the image.
///
/// The bloom center sits on a random edge of the frame, the way a physical
/// leak enters from the camera body seam.
fn add_light_leak(image: &mut DecodedImage, rng: &mut EffectRng, strength: f32) {
    let width = image.width as usize;
    let height = image.height as usize;
    if width == 0 || height == 0 || strength <= 0.0 {
        return;
    }

    let (center_x, center_y) = match rng.range_usize(0, 4) {
        // Left, right, top, bottom edge
        0 => (0.0, rng.range(0.0, height as f32)),
        1 => ((width - 1) as f32, rng.range(0.0, height as f32)),
        2 => (rng.range(0.0, width as f32), 0.0),
        _ => (rng.range(0.0, width as f32), (height - 1) as f32),
    };

    let radius = rng.range(0.35, 0.65) * width.max(height) as f32;
    let color = [
        rng.range(0.85, 1.0),
        rng.range(0.35, 0.6),
        rng.range(0.05, 0.25),
    ];

    for y in 0..height {
        let dy = y as f32 - center_y;
        let row = &mut image.data[y * width * 3..(y + 1) * width * 3];
        for (x, pixel) in row.chunks_exact_mut(3).enumerate() {
            let dx = x as f32 - center_x;
            let distance = (dx * dx + dy * dy).sqrt();
            let falloff = (1.0 - distance / radius).max(0.0);
            let glow = falloff * falloff * strength;
            if glow == 0.0 {
                continue;
            }

            pixel[0] = clamp_unit(pixel[0] + color[0] * glow);
            pixel[1] = clamp_unit(pixel[1] + color[1] * glow);
            pixel[2] = clamp_unit(pixel[2] + color[2] * glow);
        }
    }
}

/// Etch a handful of faint vertical scratches at random columns.
fn add_scratches(image: &mut DecodedImage, rng: &mut EffectRng) {
    let width = image.width as usize;
    let height = image.height as usize;
    if width == 0 || height < 2 {
        return;
    }

    let count = rng.range_usize(2, 6);
    let stride = width * 3;

    for _ in 0..count {
        let x = rng.range_usize(0, width);
        let length = rng.range_usize(height / 3, height);
        let start = rng.range_usize(0, height - length + 1);
        // Scratches read as either worn-bright or emulsion-dark lines
        let delta = if rng.range(0.0, 1.0) < 0.5 {
            rng.range(0.08, 0.18)
        } else {
            -rng.range(0.08, 0.18)
        };

        for y in start..start + length {
            let idx = y * stride + x * 3;
            image.data[idx] = clamp_unit(image.data[idx] + delta);
            image.data[idx + 1] = clamp_unit(image.data[idx + 1] + delta);
            image.data[idx + 2] = clamp_unit(image.data[idx + 2] + delta);
        }
    }
}
