use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic uniform stream backing every parameter and sample draw.
///
/// Cross-language reproducibility requires a fully pinned pipeline, so every
/// stage is fixed:
///
/// 1. ChaCha with 8 rounds, keyed from the integer seed via the SplitMix64
///    expansion used by `SeedableRng::seed_from_u64`.
/// 2. Each double is one 64-bit word mapped to `[0, 1)` as
///    `(x >> 11) as f64 * 2f64.powi(-53)` (the `rand` standard `f64`
///    distribution).
///
/// Two sources built from the same seed yield bit-identical sequences.
/// Changing any stage of this pipeline changes every downstream value and
/// invalidates previously emitted golden vectors.
pub struct UniformSource {
    rng: ChaCha8Rng,
}

impl UniformSource {
    pub fn new(seed: u64) -> UniformSource {
        UniformSource {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Next draw in `[0, 1)`. Used unscaled for input samples.
    pub fn unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    /// Next draw mapped to `[-1, 1)`. Used for weights and biases.
    pub fn symmetric(&mut self) -> f64 {
        self.unit() * 2.0 - 1.0
    }
}
