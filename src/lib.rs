//! # Feeloxide - a compiler and stepping interpreter for the Feels esolang
//!
//! Feels is a Brainfuck-derived, output-only language whose instruction set
//! mixes ASCII letters with pictographic Unicode characters. This crate
//! compiles source text into a resolved instruction sequence and executes it
//! one instruction per [`Interpreter::step`] call, so a host can pause,
//! single-step, or run to completion without the core ever blocking.

// Re-export some symbols.
pub use compiler::compile;
pub use compiler::CompileError;
pub use interpreter::ExecutionError;
pub use interpreter::Interpreter;
pub use program::Instruction;
pub use program::Op;
pub use program::Program;
pub use random::BitSource;
pub use random::RngBits;
pub use settings::Revision;
pub use types::Cell;
pub use types::SourcePos;

mod compiler;
mod interpreter;
pub mod numerics;
mod output;
pub mod program;
pub mod random;
pub mod settings;
pub mod state;
pub mod tape;
pub mod types;
