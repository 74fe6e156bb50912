//! The stepping interpreter driving a compiled program.

use thiserror::Error;

use crate::output;
use crate::program::{Op, Program};
use crate::random::BitSource;
use crate::state::ExecutionState;
use crate::{Cell, SourcePos};

/// Error type for execution. Fatal to the run; output already handed to the
/// sink stands, as does any cell state the failing instruction wrote.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionError {
    /// A cell was emitted whose value is not a valid Unicode scalar value
    /// (negative, above U+10FFFF, or a surrogate).
    #[error("cell value {value} at {pos} is not a valid Unicode scalar value")]
    InvalidCodePoint { value: Cell, pos: SourcePos },
}

/// A compiled program together with its execution state.
///
/// The host drives it by calling [`Interpreter::step`] repeatedly; each call
/// executes at most one instruction and returns synchronously, so pausing,
/// single-stepping, and cancellation are all just a matter of when the host
/// stops calling. The interpreter itself never blocks and holds no locks.
#[derive(Debug)]
pub struct Interpreter {
    program: Program,
    state: ExecutionState,
}

impl Interpreter {
    /// Create an interpreter with a fresh all-zero state.
    pub fn new(program: Program) -> Self {
        Self {
            program,
            state: ExecutionState::new(),
        }
    }

    /// Has the program counter reached the end of the program?
    pub fn halted(&self) -> bool {
        self.state.pc >= self.program.len()
    }

    /// Source position of the instruction about to execute, or `None` once
    /// halted.
    pub fn current_position(&self) -> Option<SourcePos> {
        self.program.get(self.state.pc).map(|instr| instr.pos)
    }

    /// The machine state, for hosts that want to inspect the tape, data
    /// pointer, or register.
    pub fn state(&self) -> &ExecutionState {
        &self.state
    }

    /// Execute one instruction.
    ///
    /// Returns `Ok(false)` with no side effects if the program has already
    /// halted, `Ok(true)` after executing an instruction (even the last one;
    /// the halt is observed on the following call). Output fragments are
    /// handed to `sink` synchronously, in program order.
    pub fn step(
        &mut self,
        bits: &mut impl BitSource,
        sink: &mut impl FnMut(&str),
    ) -> Result<bool, ExecutionError> {
        let (op, pos) = match self.program.get(self.state.pc) {
            Some(instr) => (instr.op, instr.pos),
            None => return Ok(false),
        };

        match op {
            Op::MoveRight => self.state.move_right(),
            Op::MoveLeft => self.state.move_left(),
            Op::Recenter => self.state.recenter(),
            Op::Increment => self.state.increment(),
            Op::Decrement => self.state.decrement(),
            Op::XorLeft => self.state.xor_left(),
            Op::XorRight => self.state.xor_right(),
            Op::ShiftLeft => self.state.shift_left(),
            Op::ShiftRight => self.state.shift_right(),
            Op::ArithShiftRight => self.state.arith_shift_right(),
            Op::RegisterStore => self.state.register_store(),
            Op::RegisterLoad => self.state.register_load(),
            Op::Randomize => self.state.randomize(bits),
            Op::Zero => self.state.zero(),
            Op::Collapse => self.state.collapse(),
            // A taken jump sets pc to the partner instruction; the
            // unconditional increment below then lands one past it.
            Op::JumpIfZero(target) => {
                if self.state.value() == 0 {
                    self.state.pc = target;
                }
            }
            Op::JumpIfNonzero(target) => {
                if self.state.value() != 0 {
                    self.state.pc = target;
                }
            }
            Op::OutputChar => {
                let value = self.state.value();
                let c = output::scalar_for(value)
                    .ok_or(ExecutionError::InvalidCodePoint { value, pos })?;
                let mut buf = [0u8; 4];
                sink(c.encode_utf8(&mut buf));
            }
            Op::OutputCString => {
                let s = output::cstring_at(&self.state.tape, self.state.dp)
                    .map_err(|value| ExecutionError::InvalidCodePoint { value, pos })?;
                sink(&s);
            }
            Op::OutputNewline => sink("\n"),
        }

        self.state.pc += 1;
        Ok(true)
    }

    /// Run to completion. Convenience for hosts that do not pace stepping.
    pub fn run(
        &mut self,
        bits: &mut impl BitSource,
        sink: &mut impl FnMut(&str),
    ) -> Result<(), ExecutionError> {
        while self.step(bits, sink)? {}
        Ok(())
    }
}
