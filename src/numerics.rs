//! Pure helpers for the 32-bit numeric semantics of the bitwise instructions.
//!
//! Cells are wider than 32 bits, but every bitwise instruction first
//! truncates its operands to 32-bit two's complement, operates at that width,
//! and stores the result back sign- or zero-extended. The `as i32` / `as u32`
//! casts below are exactly that truncation.

use crate::Cell;

/// Largest valid Unicode scalar value.
pub const MAX_SCALAR: Cell = 0x10FFFF;

/// XOR two cells at 32-bit width. The result is a signed 32-bit value.
pub fn xor32(a: Cell, b: Cell) -> Cell {
    ((a as i32) ^ (b as i32)) as Cell
}

/// Logical shift left by one at 32-bit width. The top bit is discarded and
/// the result is signed 32-bit, so a large value can come back negative.
pub fn shl1(value: Cell) -> Cell {
    ((value as i32) << 1) as Cell
}

/// Logical shift right by one: the cell is treated as unsigned 32-bit and
/// the vacated bit is zero-filled.
pub fn shr1(value: Cell) -> Cell {
    ((value as u32) >> 1) as Cell
}

/// Arithmetic shift right by one: the cell is treated as signed 32-bit and
/// the sign bit is duplicated into the vacated position.
pub fn sar1(value: Cell) -> Cell {
    ((value as i32) >> 1) as Cell
}

/// Fold a cell into the Basic Multilingual Plane: XOR of the low and high
/// 16-bit halves of the unsigned 32-bit truncation. Always in `[0, 0xFFFF]`.
pub fn collapse(value: Cell) -> Cell {
    let x = value as u32;
    ((x & 0xFFFF) ^ (x >> 16)) as Cell
}

/// Collapse a cell only if it lies outside the Unicode code point range
/// `[0, 0x10FFFF]`. Used by zero-terminated string output. Note that an
/// in-range surrogate value passes through unchanged.
pub fn collapse_to_scalar(value: Cell) -> Cell {
    if (0..=MAX_SCALAR).contains(&value) {
        value
    } else {
        collapse(value)
    }
}
