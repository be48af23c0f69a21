//! Tests for the effect catalog
//!
//! Covers the catalog contract: dimension preservation, range clamping,
//! determinism of the graded effects, and reproducibility of the stochastic
//! family under a pinned seed.

use super::*;
use crate::exporters::quantize_rgb8;

/// Names of effects whose output depends only on the input.
const DETERMINISTIC_EFFECTS: &[&str] = &[
    "vintage",
    "black_white",
    "cinematic",
    "lomo",
    "warm",
    "cool",
    "sharp",
    "soft",
    "kodak_gold",
    "fuji_velvia",
    "cross_process",
    "polaroid",
];

/// Names of effects that draw from the random source.
const STOCHASTIC_EFFECTS: &[&str] = &["grain", "light_leak", "analog"];

fn solid_image(width: u32, height: u32, rgb: [f32; 3]) -> DecodedImage {
    let pixel_count = (width * height) as usize;
    let mut data = Vec::with_capacity(pixel_count * 3);
    for _ in 0..pixel_count {
        data.extend_from_slice(&rgb);
    }
    DecodedImage {
        width,
        height,
        data,
        channels: 3,
        source_is_grayscale: false,
    }
}

fn gradient_image(width: u32, height: u32) -> DecodedImage {
    let mut data = Vec::with_capacity((width * height) as usize * 3);
    for y in 0..height {
        for x in 0..width {
            data.push(x as f32 / width.max(1) as f32);
            data.push(y as f32 / height.max(1) as f32);
            data.push((x + y) as f32 / (width + height).max(1) as f32);
        }
    }
    DecodedImage {
        width,
        height,
        data,
        channels: 3,
        source_is_grayscale: false,
    }
}

// ========================================================================
// Catalog contract
// ========================================================================

#[test]
fn test_catalog_names_are_unique() {
    let mut seen = std::collections::HashSet::new();
    for effect in EFFECTS {
        assert!(seen.insert(effect.name), "duplicate name {}", effect.name);
    }
}

#[test]
fn test_catalog_covers_expected_names() {
    for name in DETERMINISTIC_EFFECTS.iter().chain(STOCHASTIC_EFFECTS) {
        assert!(find_effect(name).is_some(), "missing effect {}", name);
    }
    assert_eq!(
        EFFECTS.len(),
        DETERMINISTIC_EFFECTS.len() + STOCHASTIC_EFFECTS.len()
    );
}

#[test]
fn test_stochastic_flag_matches_kind() {
    for name in STOCHASTIC_EFFECTS {
        assert!(find_effect(name).unwrap().is_stochastic());
    }
    for name in DETERMINISTIC_EFFECTS {
        assert!(!find_effect(name).unwrap().is_stochastic());
    }
}

#[test]
fn test_unknown_effect_fails() {
    let image = solid_image(4, 4, [0.5, 0.5, 0.5]);
    let result = apply_effect("nonexistent", &image);
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("Unknown effect"));
}

#[test]
fn test_all_effects_preserve_dimensions() {
    let image = gradient_image(21, 13);

    for effect in EFFECTS {
        let output = apply_effect_seeded(effect.name, &image, 99).unwrap();
        assert_eq!(output.width, image.width, "width changed by {}", effect.name);
        assert_eq!(
            output.height, image.height,
            "height changed by {}",
            effect.name
        );
        assert_eq!(output.channels, 3, "channels changed by {}", effect.name);
        assert_eq!(
            output.data.len(),
            image.data.len(),
            "buffer size changed by {}",
            effect.name
        );
    }
}

#[test]
fn test_all_effects_stay_in_range() {
    // Near-black and near-white inputs push additive/multiplicative
    // arithmetic against both ends of the range
    for base in [[0.01, 0.01, 0.01], [0.98, 0.99, 0.97], [0.9, 0.1, 0.5]] {
        let image = solid_image(24, 18, base);

        for effect in EFFECTS {
            let output = apply_effect_seeded(effect.name, &image, 3).unwrap();
            for &v in &output.data {
                assert!(
                    (0.0..=1.0).contains(&v),
                    "{} produced out-of-range value {}",
                    effect.name,
                    v
                );
            }
        }
    }
}

// ========================================================================
// Determinism
// ========================================================================

#[test]
fn test_deterministic_effects_bit_identical() {
    let image = gradient_image(40, 30);

    for name in DETERMINISTIC_EFFECTS {
        let a = apply_effect(name, &image).unwrap();
        let b = apply_effect(name, &image).unwrap();
        assert_eq!(a.data, b.data, "{} not deterministic", name);
    }
}

#[test]
fn test_stochastic_effects_vary_across_calls() {
    let image = solid_image(32, 32, [0.5, 0.5, 0.5]);

    for name in STOCHASTIC_EFFECTS {
        let a = apply_effect(name, &image).unwrap();
        let b = apply_effect(name, &image).unwrap();

        assert_ne!(a.data, image.data, "{} left the image unchanged", name);
        assert_ne!(a.data, b.data, "{} repeated its output unseeded", name);
    }
}

#[test]
fn test_stochastic_effects_reproducible_with_seed() {
    let image = gradient_image(32, 32);

    for name in STOCHASTIC_EFFECTS {
        let a = apply_effect_seeded(name, &image, 1234).unwrap();
        let b = apply_effect_seeded(name, &image, 1234).unwrap();
        assert_eq!(a.data, b.data, "{} not reproducible under a seed", name);

        let c = apply_effect_seeded(name, &image, 1235).unwrap();
        assert_ne!(a.data, c.data, "{} ignored the seed", name);
    }
}

// ========================================================================
// Individual effects
// ========================================================================

#[test]
fn test_cool_on_solid_red() {
    let image = solid_image(2, 2, [1.0, 0.0, 0.0]);
    let output = apply_effect("cool", &image).unwrap();

    let rgb = quantize_rgb8(&output);
    for pixel in rgb.chunks_exact(3) {
        // 255 scaled by 0.9 lands at 229 after rounding
        assert_eq!(pixel[0], 229);
        assert_eq!(pixel[1], 0);
        // Already zero, scaling cannot raise it
        assert_eq!(pixel[2], 0);
    }
}

#[test]
fn test_warm_shifts_channels() {
    let image = solid_image(4, 4, [0.5, 0.5, 0.5]);
    let output = apply_effect("warm", &image).unwrap();

    assert!(output.data[0] > 0.5);
    assert_eq!(output.data[1], 0.5);
    assert!(output.data[2] < 0.5);
}

#[test]
fn test_black_white_desaturates() {
    let image = solid_image(4, 4, [0.8, 0.2, 0.4]);
    let output = apply_effect("black_white", &image).unwrap();

    for pixel in output.data.chunks_exact(3) {
        assert_eq!(pixel[0], pixel[1]);
        assert_eq!(pixel[1], pixel[2]);
    }
}

#[test]
fn test_black_white_idempotent() {
    let image = gradient_image(16, 16);

    let once = apply_effect("black_white", &image).unwrap();
    let twice = apply_effect("black_white", &once).unwrap();

    // A second application is a no-op at 8-bit quantization
    assert_eq!(quantize_rgb8(&once), quantize_rgb8(&twice));
}

#[test]
fn test_vintage_warms_grays() {
    let image = solid_image(4, 4, [0.5, 0.5, 0.5]);
    let output = apply_effect("vintage", &image).unwrap();

    // Sepia ordering: red above green above blue
    let pixel = &output.data[..3];
    assert!(pixel[0] > pixel[1]);
    assert!(pixel[1] > pixel[2]);
}

#[test]
fn test_cinematic_increases_contrast() {
    let mut image = solid_image(4, 2, [0.2, 0.2, 0.2]);
    // Half dark, half bright
    for pixel in image.data.chunks_exact_mut(3).skip(4) {
        pixel.copy_from_slice(&[0.8, 0.8, 0.8]);
    }

    let output = apply_effect("cinematic", &image).unwrap();

    // Spread between dark and bright pixels grows before the brightness
    // pull-down, and the whole frame gets darker overall
    let in_spread = image.data[image.data.len() - 1] - image.data[0];
    let out_spread = output.data[output.data.len() - 1] - output.data[0];
    assert!(out_spread > in_spread * 0.9 * 0.99);
    assert!(output.data[output.data.len() - 1] < 0.8);
}

#[test]
fn test_lomo_darkens_corners_not_center() {
    let image = solid_image(31, 31, [0.5, 0.5, 0.5]);
    let output = apply_effect("lomo", &image).unwrap();

    // Center pixel keeps full weight
    let center = (15 * 31 + 15) * 3;
    assert!((output.data[center] - 0.5).abs() < 1e-5);

    // Corner pixel hits the 0.6 weight floor
    assert!((output.data[0] - 0.3).abs() < 1e-5);
}

#[test]
fn test_polaroid_fades_border_to_paper() {
    let image = solid_image(64, 64, [0.2, 0.2, 0.2]);
    let output = apply_effect("polaroid", &image).unwrap();

    // Outermost pixel is pure paper white, center keeps the washed tone
    assert!(output.data[0] > 0.9);
    let center = (32 * 64 + 32) * 3;
    assert!(output.data[center] < 0.5);
}

#[test]
fn test_sharp_preserves_flat_regions() {
    let image = solid_image(16, 16, [0.4, 0.4, 0.4]);
    let output = apply_effect("sharp", &image).unwrap();

    // Sharpening a flat image changes nothing: the kernel sums to the divisor
    for (&a, &b) in output.data.iter().zip(image.data.iter()) {
        assert!((a - b).abs() < 1e-5);
    }
}

#[test]
fn test_sharp_border_passthrough() {
    let image = gradient_image(16, 16);
    let output = apply_effect("sharp", &image).unwrap();

    // First row is inside the border margin
    assert_eq!(&output.data[..16 * 3], &image.data[..16 * 3]);
}

#[test]
fn test_soft_smooths_edges() {
    let mut image = solid_image(16, 16, [0.0, 0.0, 0.0]);
    // Single bright column through the middle
    for y in 0..16 {
        let idx = (y * 16 + 8) * 3;
        image.data[idx] = 1.0;
        image.data[idx + 1] = 1.0;
        image.data[idx + 2] = 1.0;
    }

    let output = apply_effect("soft", &image).unwrap();

    // The bright column bleeds into its interior neighbors
    let neighbor = (8 * 16 + 6) * 3;
    assert!(output.data[neighbor] > 0.0);
    // And the column itself dims
    let on_column = (8 * 16 + 8) * 3;
    assert!(output.data[on_column] < 1.0);
}

#[test]
fn test_convolution_handles_tiny_images() {
    // Smaller than both kernels: everything is border, image passes through
    let image = gradient_image(2, 2);
    for name in ["sharp", "soft"] {
        let output = apply_effect(name, &image).unwrap();
        assert_eq!(output.data, image.data);
    }
}

#[test]
fn test_grain_perturbs_most_pixels() {
    let image = solid_image(32, 32, [0.5, 0.5, 0.5]);
    let output = apply_effect_seeded("grain", &image, 5).unwrap();

    let changed = output
        .data
        .iter()
        .zip(image.data.iter())
        .filter(|(a, b)| a != b)
        .count();
    assert!(changed > image.data.len() / 2);
}

#[test]
fn test_grain_is_luminance_noise() {
    let image = solid_image(8, 8, [0.5, 0.5, 0.5]);
    let output = apply_effect_seeded("grain", &image, 5).unwrap();

    // The same draw lands on all three channels of a pixel
    for pixel in output.data.chunks_exact(3) {
        assert_eq!(pixel[0], pixel[1]);
        assert_eq!(pixel[1], pixel[2]);
    }
}

#[test]
fn test_light_leak_brightens() {
    let image = solid_image(48, 48, [0.2, 0.2, 0.2]);
    let output = apply_effect_seeded("light_leak", &image, 11).unwrap();

    let in_sum: f32 = image.data.iter().sum();
    let out_sum: f32 = output.data.iter().sum();
    assert!(out_sum > in_sum, "leak should only add light");
}

#[test]
fn test_effect_names_listing_order() {
    let names = effect_names();
    assert_eq!(names.len(), EFFECTS.len());
    assert_eq!(names[0], "vintage");
    assert!(names.contains(&"analog"));
}
