//! Lensify Core Library
//!
//! Core functionality for applying photographic-style effects to images.

pub mod color;
pub mod config;
pub mod decoders;
pub mod effects;
pub mod exporters;

// Re-export commonly used types
pub use decoders::DecodedImage;
pub use effects::{
    apply_effect, apply_effect_seeded, effect_names, find_effect, EffectDescriptor, EffectKind,
    EffectRng, EFFECTS,
};
pub use exporters::ProcessedResult;
