//! Default effect parameter values and their validation/sanitization.

use serde::Deserialize;

/// Tunable defaults for encoding and the stochastic effect family.
///
/// Deterministic effects use fixed constants so repeated runs stay
/// bit-identical; only the knobs that do not break that contract live here.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EffectDefaults {
    /// JPEG encoding quality (1-100)
    pub jpeg_quality: u8,

    /// Standard deviation of the additive grain noise, in working-range units
    pub grain_sigma: f32,

    /// Peak intensity of the light leak bloom (0.0-1.0)
    pub leak_strength: f32,
}

impl Default for EffectDefaults {
    fn default() -> Self {
        Self {
            jpeg_quality: 95,
            grain_sigma: 0.06,
            leak_strength: 0.55,
        }
    }
}

impl EffectDefaults {
    /// Clamp fields to their valid ranges, returning a warning per adjustment.
    pub fn sanitize(&mut self) -> Vec<String> {
        let mut warnings = Vec::new();

        if self.jpeg_quality < 1 || self.jpeg_quality > 100 {
            warnings.push(format!(
                "jpeg_quality {} out of range 1-100, clamping",
                self.jpeg_quality
            ));
            self.jpeg_quality = self.jpeg_quality.clamp(1, 100);
        }

        if !(0.0..=0.5).contains(&self.grain_sigma) {
            warnings.push(format!(
                "grain_sigma {} out of range 0.0-0.5, clamping",
                self.grain_sigma
            ));
            self.grain_sigma = self.grain_sigma.clamp(0.0, 0.5);
        }

        if !(0.0..=1.0).contains(&self.leak_strength) {
            warnings.push(format!(
                "leak_strength {} out of range 0.0-1.0, clamping",
                self.leak_strength
            ));
            self.leak_strength = self.leak_strength.clamp(0.0, 1.0);
        }

        warnings
    }
}
