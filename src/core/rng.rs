//! RNG module - randomized piece selection
//!
//! Piece selection is a uniform choice among the 7 kinds, drawn through the
//! [`PieceSource`] trait so hosts inject real randomness and tests inject
//! deterministic sequences. `SimpleRng` is a small LCG (Numerical Recipes
//! constants) that doubles as the default source.

use crate::types::ShapeKind;

/// Supplier of the next piece kind. The engine owns one and never reseeds it.
pub trait PieceSource {
    fn next_kind(&mut self) -> ShapeKind;
}

/// Simple LCG (Linear Congruential Generator) RNG
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
        // LCG formula: (a * state + c) mod 2^32, a=1664525, c=1013904223
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

impl PieceSource for SimpleRng {
    fn next_kind(&mut self) -> ShapeKind {
        ShapeKind::ALL[self.next_range(ShapeKind::ALL.len() as u32) as usize]
    }
}

/// Fixed sequence of kinds, cycled forever. Test and replay helper.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    kinds: Vec<ShapeKind>,
    cursor: usize,
}

impl ScriptedSource {
    /// `kinds` must be non-empty.
    pub fn new(kinds: Vec<ShapeKind>) -> Self {
        debug_assert!(!kinds.is_empty());
        Self { kinds, cursor: 0 }
    }
}

impl PieceSource for ScriptedSource {
    fn next_kind(&mut self) -> ShapeKind {
        let kind = self.kinds[self.cursor % self.kinds.len()];
        self.cursor += 1;
        kind
    }
}
