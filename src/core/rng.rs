//! RNG module - seedable random source for all game draws
//!
//! Everything random in the game (token batch, animated die faces, settled
//! die faces) goes through one injected `SimpleRng`, so a seed fully
//! determines a game.

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Generate a random f32 in [0, 1).
    pub fn next_unit_f32(&mut self) -> f32 {
        // 24 mantissa bits keep the conversion exact.
        (self.next_u32() >> 8) as f32 / (1u32 << 24) as f32
    }

    /// Generate a random f32 in [min, max).
    pub fn next_f32_range(&mut self, min: f32, max: f32) -> f32 {
        min + self.next_unit_f32() * (max - min)
    }

    /// Return true with probability 1 in `odds`.
    pub fn one_in(&mut self, odds: u32) -> bool {
        self.next_range(odds) == 0
    }

    /// Pick a uniformly random element from a non-empty slice.
    pub fn pick<T: Copy>(&mut self, slice: &[T]) -> T {
        slice[self.next_range(slice.len() as u32) as usize]
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }

    /// Get the current RNG state (for restarting a game with a fresh sequence)
    pub fn seed(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
