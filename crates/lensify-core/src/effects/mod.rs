//! Photographic effect catalog
//!
//! A fixed mapping from effect name to a pure image transformation. Each
//! entry is independent; the only shared contract is the function signature
//! and the output invariant (same dimensions, channels clamped to range).
//!
//! This module is organized into submodules:
//! - `grading`: global per-channel remaps (warm/cool grades, film stocks)
//! - `tonal`: luma-based transforms (black & white, vintage, cinematic)
//! - `masks`: spatially weighted transforms (lomo vignette, polaroid border)
//! - `convolve`: kernel filters (sharpen, soften)
//! - `stochastic`: randomized transforms (grain, light leaks, analog wear)
//! - `rng`: the injectable random source used by the stochastic family

mod convolve;
mod grading;
mod masks;
mod rng;
mod stochastic;
mod tonal;

#[cfg(test)]
mod tests;

pub use rng::EffectRng;

use crate::decoders::DecodedImage;

/// Signature of an effect whose output depends only on its input.
pub type DeterministicFn = fn(&DecodedImage) -> DecodedImage;

/// Signature of an effect that draws from a random source.
pub type StochasticFn = fn(&DecodedImage, &mut EffectRng) -> DecodedImage;

/// The transformation bound to a catalog entry.
///
/// Stochastic effects take the random source explicitly so callers can pin a
/// seed for reproducible output; deterministic effects never touch it.
pub enum EffectKind {
    Deterministic(DeterministicFn),
    Stochastic(StochasticFn),
}

/// A named entry in the effect catalog. Immutable for the process lifetime.
pub struct EffectDescriptor {
    /// Unique catalog key
    pub name: &'static str,

    /// One-line description for listings
    pub summary: &'static str,

    /// The bound transformation
    pub kind: EffectKind,
}

impl EffectDescriptor {
    /// Whether the effect's output varies across invocations.
    pub fn is_stochastic(&self) -> bool {
        matches!(self.kind, EffectKind::Stochastic(_))
    }
}

/// The full effect catalog.
pub const EFFECTS: &[EffectDescriptor] = &[
    EffectDescriptor {
        name: "vintage",
        summary: "Warm sepia tone with reduced saturation",
        kind: EffectKind::Deterministic(tonal::vintage),
    },
    EffectDescriptor {
        name: "black_white",
        summary: "Classic monochrome conversion",
        kind: EffectKind::Deterministic(tonal::black_white),
    },
    EffectDescriptor {
        name: "cinematic",
        summary: "High contrast with moody tones",
        kind: EffectKind::Deterministic(tonal::cinematic),
    },
    EffectDescriptor {
        name: "lomo",
        summary: "Saturated colors with dark vignette",
        kind: EffectKind::Deterministic(masks::lomo),
    },
    EffectDescriptor {
        name: "warm",
        summary: "Enhanced reds for cozy feeling",
        kind: EffectKind::Deterministic(grading::warm),
    },
    EffectDescriptor {
        name: "cool",
        summary: "Enhanced blues for crisp look",
        kind: EffectKind::Deterministic(grading::cool),
    },
    EffectDescriptor {
        name: "sharp",
        summary: "Enhanced edge definition",
        kind: EffectKind::Deterministic(convolve::sharp),
    },
    EffectDescriptor {
        name: "soft",
        summary: "Gentle blur for a dreamy look",
        kind: EffectKind::Deterministic(convolve::soft),
    },
    EffectDescriptor {
        name: "kodak_gold",
        summary: "Golden warmth of a classic consumer film stock",
        kind: EffectKind::Deterministic(grading::kodak_gold),
    },
    EffectDescriptor {
        name: "fuji_velvia",
        summary: "Vivid slide-film saturation with a cool cast",
        kind: EffectKind::Deterministic(grading::fuji_velvia),
    },
    EffectDescriptor {
        name: "cross_process",
        summary: "Teal shadows and shifted highlights of cross-processed film",
        kind: EffectKind::Deterministic(grading::cross_process),
    },
    EffectDescriptor {
        name: "polaroid",
        summary: "Faded instant-film look with a bright border",
        kind: EffectKind::Deterministic(masks::polaroid),
    },
    EffectDescriptor {
        name: "grain",
        summary: "Film grain texture",
        kind: EffectKind::Stochastic(stochastic::grain),
    },
    EffectDescriptor {
        name: "light_leak",
        summary: "Exposure bloom from a leaky camera body",
        kind: EffectKind::Stochastic(stochastic::light_leak),
    },
    EffectDescriptor {
        name: "analog",
        summary: "Aged analog look with grain, leaks, and scratches",
        kind: EffectKind::Stochastic(stochastic::analog),
    },
];

/// Look up a catalog entry by name.
pub fn find_effect(name: &str) -> Option<&'static EffectDescriptor> {
    EFFECTS.iter().find(|e| e.name == name)
}

/// Names of all catalog entries, in listing order.
pub fn effect_names() -> Vec<&'static str> {
    EFFECTS.iter().map(|e| e.name).collect()
}

/// Apply a named effect to a decoded image.
///
/// Stochastic effects draw from a fresh entropy-seeded source, so their
/// output varies across invocations; deterministic effects are bit-identical
/// for identical input. Fails only when the name is not in the catalog.
pub fn apply_effect(name: &str, image: &DecodedImage) -> Result<DecodedImage, String> {
    let mut rng = EffectRng::from_entropy();
    apply_with_rng(name, image, &mut rng)
}

/// Apply a named effect with a fixed seed for the random source.
///
/// Deterministic effects ignore the seed; stochastic effects become
/// reproducible: same input and seed, same output.
pub fn apply_effect_seeded(
    name: &str,
    image: &DecodedImage,
    seed: u64,
) -> Result<DecodedImage, String> {
    let mut rng = EffectRng::seeded(seed);
    apply_with_rng(name, image, &mut rng)
}

fn apply_with_rng(
    name: &str,
    image: &DecodedImage,
    rng: &mut EffectRng,
) -> Result<DecodedImage, String> {
    let descriptor = find_effect(name).ok_or_else(|| format!("Unknown effect: {}", name))?;

    Ok(match descriptor.kind {
        EffectKind::Deterministic(f) => f(image),
        EffectKind::Stochastic(f) => f(image, rng),
    })
}
