//! Injectable random source for the stochastic effect family.
//!
//! Every randomized effect takes an `EffectRng` explicitly instead of
//! reaching for a global generator, so callers can pin a seed and reproduce
//! output exactly.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

/// Random source for stochastic effects.
pub struct EffectRng {
    inner: StdRng,
}

impl EffectRng {
    /// An entropy-seeded source; output varies across invocations.
    pub fn from_entropy() -> Self {
        Self {
            inner: StdRng::from_entropy(),
        }
    }

    /// A seeded source; identical seeds yield identical draw sequences.
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniform sample from `lo..hi`.
    pub fn range(&mut self, lo: f32, hi: f32) -> f32 {
        self.inner.gen_range(lo..hi)
    }

    /// Uniform integer sample from `lo..hi`.
    pub fn range_usize(&mut self, lo: usize, hi: usize) -> usize {
        self.inner.gen_range(lo..hi)
    }

    /// Zero-mean Gaussian sample with the given standard deviation.
    pub fn gaussian(&mut self, sigma: f32) -> f32 {
        let n: f32 = self.inner.sample(StandardNormal);
        n * sigma
    }
}
