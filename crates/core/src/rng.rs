//! RNG module - deterministic tray dealing
//!
//! A round deals a fixed number of tokens of every shape in play, shuffled.
//! The shuffle uses a small LCG so a seed reproduces the same tray, which keeps
//! sessions testable.

use crate::types::ShapeKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Keep the stream off the all-zero seed.
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        self.next_u32() % max
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

/// Deal `per_shape` tokens of each kind in `shapes`, shuffled.
pub fn deal_tray(rng: &mut SimpleRng, shapes: &[ShapeKind], per_shape: u8) -> Vec<ShapeKind> {
    let mut tray: Vec<ShapeKind> = shapes
        .iter()
        .flat_map(|&kind| std::iter::repeat(kind).take(per_shape as usize))
        .collect();
    rng.shuffle(&mut tray);
    tray
}
