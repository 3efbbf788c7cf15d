/// A deterministic white noise source backed by an
/// [xorshift64](https://en.wikipedia.org/wiki/Xorshift) generator.
/// Produces samples in [-1, 1) without allocating, making it usable
/// from `no_std` rendering code.
pub struct WhiteNoise {
    state: u64,
}

impl WhiteNoise {
    /// Creates a noise source from a seed. Two sources created from
    /// the same seed produce identical sample sequences.
    ///
    /// Panics if the seed is zero, which is a degenerate xorshift state
    /// that only ever produces zeros.
    pub fn new(seed: u64) -> Self {
        if seed == 0 {
            panic!("White noise seed must be non-zero")
        }
        WhiteNoise { state: seed }
    }

    /// Returns the next noise sample in [-1, 1).
    pub fn next_sample(&mut self) -> f32 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        2.0 * ((self.state as f32) / (u64::MAX as f32)) - 1.0
    }
}
