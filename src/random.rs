//! Random bit source for the randomize instruction.
//!
//! The randomize instruction assembles its 32-bit value from individual fair
//! coin flips rather than scaling a floating point number, which would bias
//! the high end of the range. The bit source is injected so tests can run
//! against a seeded generator (or a canned bit sequence).

use rand::Rng;

use crate::Cell;

/// A source of individual uniformly random bits.
pub trait BitSource {
    /// Draw one bit, each value with probability 1/2.
    fn next_bit(&mut self) -> bool;
}

/// Adapter making any [`rand::Rng`] usable as a [`BitSource`].
#[derive(Debug, Clone)]
pub struct RngBits<R>(pub R);

impl<R: Rng> BitSource for RngBits<R> {
    fn next_bit(&mut self) -> bool {
        self.0.gen()
    }
}

/// Assemble a random 32-bit cell value from 32 independent bit draws,
/// shifting the accumulator left and OR-ing in each new bit. The accumulator
/// is signed 32-bit, so roughly half of all results are negative.
pub fn random_cell(bits: &mut impl BitSource) -> Cell {
    let mut result: i32 = 0;
    for _ in 0..32 {
        result = (result << 1) | bits.next_bit() as i32;
    }
    result as Cell
}
