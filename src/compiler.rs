//! The Feels compiler: source text in, resolved instruction sequence out.

use thiserror::Error;

use crate::program::{Instruction, Op, Program};
use crate::settings::Revision;
use crate::SourcePos;

/// First code point of the generic pictograph output range.
const PICTOGRAPH_FIRST: u32 = 0x1F600;
/// Last code point of the generic pictograph output range.
const PICTOGRAPH_LAST: u32 = 0x1FAD6;
/// Skin tone modifiers (EMOJI MODIFIER FITZPATRICK TYPE-1-2 through TYPE-6),
/// consumed without effect.
const MODIFIER_FIRST: u32 = 0x1F3FB;
const MODIFIER_LAST: u32 = 0x1F3FF;

/// Errors during compilation. All are fatal: no partial [`Program`] is ever
/// produced.
#[derive(Debug, Error, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CompileError {
    /// An `r` with no matching `R` before it.
    #[error("unmatched loop close (r) at {pos}")]
    UnmatchedLoopClose { pos: SourcePos },
    /// An `R` still unmatched at end of input.
    #[error("unmatched loop open (R) at {pos}")]
    UnmatchedLoopOpen { pos: SourcePos },
    /// A character outside every recognized class.
    #[error("unknown token {token:?} at {pos}")]
    UnknownToken { token: char, pos: SourcePos },
}

/// What a single source character means to the scanner.
#[derive(Debug, PartialEq, Clone, Copy)]
enum Class {
    /// Emits one fixed instruction.
    Simple(Op),
    LoopOpen,
    LoopClose,
    /// Discard the rest of the line.
    Comment,
    /// Consumed with no emission.
    Ignored,
    Unknown,
}

fn classify(c: char, revision: Revision) -> Class {
    match c {
        'G' => Class::Simple(Op::MoveRight),
        'g' => Class::Simple(Op::MoveLeft),
        'U' => Class::Simple(Op::Recenter),
        'A' => Class::Simple(Op::Increment),
        'a' => Class::Simple(Op::Decrement),
        'W' => Class::Simple(Op::XorLeft),
        'w' => Class::Simple(Op::XorRight),
        'H' => Class::Simple(Op::ShiftLeft),
        'h' => Class::Simple(Op::ShiftRight),
        'F' => Class::Simple(match revision {
            Revision::First => Op::ArithShiftRight,
            Revision::Second => Op::RegisterStore,
        }),
        'f' if revision == Revision::Second => Class::Simple(Op::RegisterLoad),
        'R' => Class::LoopOpen,
        'r' => Class::LoopClose,
        '\u{1F622}' => Class::Simple(Op::OutputCString),
        '\u{1F616}' => Class::Simple(Op::OutputNewline),
        '\u{1F62D}' => Class::Simple(Op::Randomize),
        '\u{1F621}' => Class::Simple(Op::Zero),
        '\u{1F631}' => Class::Simple(Op::Collapse),
        '\u{1F624}' => Class::Comment,
        '!' | ' ' | '\n' | '\r' | '\t' | '.' | ',' => Class::Ignored,
        c if (PICTOGRAPH_FIRST..=PICTOGRAPH_LAST).contains(&(c as u32)) => {
            Class::Simple(Op::OutputChar)
        }
        c if (MODIFIER_FIRST..=MODIFIER_LAST).contains(&(c as u32)) => Class::Ignored,
        _ => Class::Unknown,
    }
}

/// Compile source text into a [`Program`].
///
/// A single left-to-right scan over the Unicode scalar values of the source.
/// Loop brackets are resolved with an index stack: `R` emits a placeholder
/// and remembers its index, the matching `r` emits a backward conditional
/// jump and patches the placeholder into a forward one. Both jump targets
/// point *at* the partner instruction; the interpreter's unconditional
/// increment then lands execution one past it.
pub fn compile(source: &str, revision: Revision) -> Result<Program, CompileError> {
    let mut chars = source.char_indices().peekable();
    let mut line = 0usize;
    let mut column = 0usize;
    let mut jump_stack: Vec<(usize, SourcePos)> = vec![];
    let mut instructions: Vec<Instruction> = vec![];

    while let Some((offset, c)) = chars.next() {
        let pos = SourcePos {
            offset,
            line,
            column,
        };
        match classify(c, revision) {
            Class::Simple(op) => instructions.push(Instruction { op, pos }),
            Class::LoopOpen => {
                jump_stack.push((instructions.len(), pos));
                // Placeholder target, patched at the matching close.
                instructions.push(Instruction {
                    op: Op::JumpIfZero(usize::MAX),
                    pos,
                });
            }
            Class::LoopClose => {
                let Some((start, _)) = jump_stack.pop() else {
                    return Err(CompileError::UnmatchedLoopClose { pos });
                };
                let end = instructions.len();
                instructions.push(Instruction {
                    op: Op::JumpIfNonzero(start),
                    pos,
                });
                instructions[start].op = Op::JumpIfZero(end);
            }
            Class::Comment => {
                // Discard up to, but not including, the newline: the scanner
                // sees it next iteration and keeps the line count honest.
                while let Some(&(_, next)) = chars.peek() {
                    if next == '\n' {
                        break;
                    }
                    chars.next();
                }
            }
            Class::Ignored => (),
            Class::Unknown => return Err(CompileError::UnknownToken { token: c, pos }),
        }
        if c == '\n' {
            line += 1;
            column = 0;
        } else {
            column += 1;
        }
    }

    if let Some(&(_, pos)) = jump_stack.first() {
        return Err(CompileError::UnmatchedLoopOpen { pos });
    }
    Ok(Program::new(instructions))
}
