//! The compiled representation of a Feels program.

use crate::SourcePos;

/// One resolved operation. Loop variants carry the index of their partner
/// instruction, fixed up by the compiler; by the time a [`Program`] exists
/// every target is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// `G`: move the data pointer right.
    MoveRight,
    /// `g`: move the data pointer left.
    MoveLeft,
    /// `U`: reset the data pointer to 0.
    Recenter,
    /// `A`: increment the current cell.
    Increment,
    /// `a`: decrement the current cell.
    Decrement,
    /// `W`: XOR the current cell with its left neighbor (32-bit).
    XorLeft,
    /// `w`: XOR the current cell with its right neighbor (32-bit).
    XorRight,
    /// `H`: logical shift left by one (32-bit).
    ShiftLeft,
    /// `h`: logical shift right by one (32-bit).
    ShiftRight,
    /// `F` in the first language revision: arithmetic shift right by one.
    ArithShiftRight,
    /// `F` in the second language revision: copy the cell to the register.
    RegisterStore,
    /// `f` in the second language revision: copy the register to the cell.
    RegisterLoad,
    /// `R`: if the current cell is zero, jump to the matching loop close.
    JumpIfZero(usize),
    /// `r`: if the current cell is nonzero, jump to the matching loop open.
    JumpIfNonzero(usize),
    /// Generic pictograph: emit the current cell as one scalar character.
    OutputChar,
    /// `😢`: emit memory from the data pointer as a zero-terminated string.
    OutputCString,
    /// `😖`: emit a newline.
    OutputNewline,
    /// `😭`: set the current cell to a random 32-bit value.
    Randomize,
    /// `😡`: set the current cell to zero.
    Zero,
    /// `😱`: collapse the current cell into the BMP range.
    Collapse,
}

/// A resolved operation together with the source position it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    pub op: Op,
    pub pos: SourcePos,
}

/// An immutable, ordered sequence of instructions. Compiled once per source
/// text and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    instructions: Vec<Instruction>,
}

impl Program {
    pub(crate) fn new(instructions: Vec<Instruction>) -> Self {
        Self { instructions }
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Instruction> {
        self.instructions.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Instruction> {
        self.instructions.iter()
    }
}
