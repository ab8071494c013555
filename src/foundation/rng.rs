/// Source of uniform randomness for procedural generation.
///
/// Generators take `&mut impl RandomSource` so tests can pass a seeded [`Rng64`] and assert on
/// structural properties, while the app uses [`Rng64::from_entropy`].
pub trait RandomSource {
    /// Next raw 64-bit value.
    fn next_u64(&mut self) -> u64;

    /// Uniform value in `[0, 1)` with 53 bits of precision.
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) * (1.0 / ((1u64 << 53) as f64))
    }

    /// Uniform value in `[lo, hi)`.
    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }
}

/// SplitMix64 generator.
#[derive(Clone, Copy, Debug)]
pub struct Rng64 {
    state: u64,
}

impl Rng64 {
    /// Seeded generator; equal seeds give equal sequences.
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Unseeded generator, seeded from the thread-local OS-backed RNG.
    pub fn from_entropy() -> Self {
        Self::new(rand::random::<u64>())
    }
}

impl RandomSource for Rng64 {
    fn next_u64(&mut self) -> u64 {
        // SplitMix64
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/rng.rs"]
mod tests;
