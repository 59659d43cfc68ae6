use rand::Rng as _;

/// A stream of uniform random floats driving every randomized stage.
///
/// The pipeline never touches ambient randomness: each randomized function
/// takes the source explicitly, so a seeded source replays a render
/// byte-for-byte while a fresh-entropy source regenerates a new variant.
pub trait RandomSource {
    /// Next uniform value in `[0, 1)`.
    fn next_f64(&mut self) -> f64;
}

/// Replayable random source backed by a splitmix64 stream.
///
/// The same seed always yields the same sequence, independent of platform
/// and dependency versions.
#[derive(Clone, Copy, Debug)]
pub struct SeededSource {
    state: u64,
}

impl SeededSource {
    /// Create a source that replays the stream for `seed`.
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }
}

impl RandomSource for SeededSource {
    fn next_f64(&mut self) -> f64 {
        // Top 53 bits give a uniform double in [0, 1).
        (self.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }
}

/// Non-reproducible source drawing fresh OS entropy per call.
///
/// This is the "regenerate" behavior: every render produces a new variant.
pub struct EntropySource {
    rng: rand::rngs::ThreadRng,
}

impl EntropySource {
    /// Create a fresh-entropy source.
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for EntropySource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for EntropySource {
    fn next_f64(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/random/source.rs"]
mod tests;
