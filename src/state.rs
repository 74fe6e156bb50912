//! Mutable machine state and the cell-level operations over it.

use crate::numerics;
use crate::random::{random_cell, BitSource};
use crate::tape::Tape;
use crate::Cell;

/// The whole mutable state of a running program: the tape, the data pointer,
/// the auxiliary register, and the program counter. Created fresh per run
/// and mutated in place by every instruction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExecutionState {
    pub tape: Tape,
    /// Signed data pointer, unbounded in both directions.
    pub dp: i64,
    /// The single auxiliary register.
    pub register: Cell,
    /// Index of the next instruction; equal to the program length once
    /// halted.
    pub pc: usize,
}

impl ExecutionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cell at the data pointer.
    pub fn value(&self) -> Cell {
        self.tape.get(self.dp)
    }

    fn set_value(&mut self, value: Cell) {
        self.tape.set(self.dp, value);
    }

    pub fn move_right(&mut self) {
        self.dp += 1;
    }

    pub fn move_left(&mut self) {
        self.dp -= 1;
    }

    /// Move the data pointer back to the center of the tape.
    pub fn recenter(&mut self) {
        self.dp = 0;
    }

    pub fn increment(&mut self) {
        self.set_value(self.value().wrapping_add(1));
    }

    pub fn decrement(&mut self) {
        self.set_value(self.value().wrapping_sub(1));
    }

    pub fn xor_left(&mut self) {
        self.set_value(numerics::xor32(self.value(), self.tape.get(self.dp - 1)));
    }

    pub fn xor_right(&mut self) {
        self.set_value(numerics::xor32(self.value(), self.tape.get(self.dp + 1)));
    }

    pub fn shift_left(&mut self) {
        self.set_value(numerics::shl1(self.value()));
    }

    pub fn shift_right(&mut self) {
        self.set_value(numerics::shr1(self.value()));
    }

    pub fn arith_shift_right(&mut self) {
        self.set_value(numerics::sar1(self.value()));
    }

    /// Fold the current cell into the BMP range.
    pub fn collapse(&mut self) {
        self.set_value(numerics::collapse(self.value()));
    }

    pub fn randomize(&mut self, bits: &mut impl BitSource) {
        self.set_value(random_cell(bits));
    }

    pub fn zero(&mut self) {
        self.set_value(0);
    }

    /// Copy the current cell into the register.
    pub fn register_store(&mut self) {
        self.register = self.value();
    }

    /// Copy the register into the current cell.
    pub fn register_load(&mut self) {
        self.set_value(self.register);
    }
}
