//! Spatially weighted transforms: per-pixel weights computed from image
//! geometry (radial falloff, border distance) multiplied or blended into the
//! channel values.

use rayon::prelude::*;

use crate::color::{adjust_saturation, clamp_unit};
use crate::decoders::DecodedImage;

/// Lomo look: boosted saturation with a dark radial vignette.
pub(super) fn lomo(image: &DecodedImage) -> DecodedImage {
    let mut out = image.clone();
    adjust_saturation(&mut out.data, 1.5);
    vignette_in_place(&mut out.data, out.width, out.height, 1.2, 0.6);
    out
}

/// Instant-film look: washed-out grade, mild desaturation, and a border
/// fade toward paper white.
pub(super) fn polaroid(image: &DecodedImage) -> DecodedImage {
    const PAPER_WHITE: [f32; 3] = [0.97, 0.96, 0.92];

    let mut out = image.clone();

    // Lift blacks and flatten the tonal range before fading the border
    for value in out.data.iter_mut() {
        *value = clamp_unit(*value * 0.9 + 0.06);
    }
    adjust_saturation(&mut out.data, 0.85);

    let width = out.width as usize;
    let height = out.height as usize;
    let margin = ((width.min(height) as f32) * 0.06).max(1.0);

    let stride = width * 3;
    out.data
        .par_chunks_mut(stride)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, pixel) in row.chunks_exact_mut(3).enumerate() {
                let edge_distance = x.min(y).min(width - 1 - x).min(height - 1 - y) as f32;
                let t = (edge_distance / margin).min(1.0);
                let fade = t * t * (3.0 - 2.0 * t);

                for ch in 0..3 {
                    pixel[ch] = clamp_unit(pixel[ch] * fade + PAPER_WHITE[ch] * (1.0 - fade));
                }
            }
        });

    out
}

/// Darken pixels radially from the image center.
///
/// The per-pixel weight is `clamp(base - d/d_max, floor, 1.0)` where `d` is
/// the distance from the center and `d_max` the distance to the farthest
/// corner, multiplied into every channel.
pub(super) fn vignette_in_place(data: &mut [f32], width: u32, height: u32, base: f32, floor: f32) {
    let width = width as usize;
    let height = height as usize;
    if width == 0 || height == 0 {
        return;
    }

    let center_x = (width / 2) as f32;
    let center_y = (height / 2) as f32;
    let max_distance = max_center_distance(width, height);

    let stride = width * 3;
    data.par_chunks_mut(stride).enumerate().for_each(|(y, row)| {
        let dy = y as f32 - center_y;
        for (x, pixel) in row.chunks_exact_mut(3).enumerate() {
            let dx = x as f32 - center_x;
            let distance = (dx * dx + dy * dy).sqrt();
            let weight = (base - distance / max_distance).clamp(floor, 1.0);

            pixel[0] *= weight;
            pixel[1] *= weight;
            pixel[2] *= weight;
        }
    });
}

/// Distance from the (integer) image center to the farthest pixel.
fn max_center_distance(width: usize, height: usize) -> f32 {
    let center_x = (width / 2) as f32;
    let center_y = (height / 2) as f32;

    let corners = [
        (0.0, 0.0),
        ((width - 1) as f32, 0.0),
        (0.0, (height - 1) as f32),
        ((width - 1) as f32, (height - 1) as f32),
    ];

    let mut max = 0.0f32;
    for (x, y) in corners {
        let dx = x - center_x;
        let dy = y - center_y;
        max = max.max((dx * dx + dy * dy).sqrt());
    }

    // Guard the 1x1 image: center coincides with the only pixel
    max.max(1.0)
}
