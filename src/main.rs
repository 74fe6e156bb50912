use std::{
    io::{self, Write},
    path::PathBuf,
};

use clap::{Parser, ValueEnum};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use thiserror::Error;

use feeloxide::{compile, CompileError, ExecutionError, Interpreter, Revision, RngBits};

#[derive(Debug, Error)]
pub enum ProgramError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
    #[error("Compile error: {0}")]
    CompileError(#[from] CompileError),
    #[error("Execution error: {0}")]
    ExecutionError(#[from] ExecutionError),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum RevisionArg {
    /// First language revision (F is arithmetic shift right)
    First,
    /// Second language revision (F/f store and load the register)
    Second,
}

impl From<RevisionArg> for Revision {
    fn from(value: RevisionArg) -> Self {
        match value {
            RevisionArg::First => Revision::First,
            RevisionArg::Second => Revision::Second,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input Feels source file
    input_file: PathBuf,

    /// Select language revision
    #[arg(short, long, value_name = "REVISION", default_value = "second")]
    revision: RevisionArg,

    /// Seed for the randomize instruction (entropy-seeded if absent)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Stop after this many steps instead of running to completion
    #[arg(long, value_name = "N")]
    max_steps: Option<u64>,

    /// Enable debug output for the interpreter
    #[arg(long, default_value_t = false)]
    trace: bool,
}

fn main() -> Result<(), ProgramError> {
    let args = Args::parse();

    let source = std::fs::read_to_string(args.input_file)?;
    let program = compile(&source, args.revision.into())?;

    let mut interp = Interpreter::new(program);
    let mut bits = RngBits(match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    });

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut steps: u64 = 0;
    let mut pending = String::new();
    loop {
        if args.max_steps.is_some_and(|limit| steps >= limit) {
            break;
        }
        if args.trace {
            if let Some(pos) = interp.current_position() {
                dbg!((pos, interp.state().dp, interp.state().value()));
            }
        }
        pending.clear();
        let more = interp.step(&mut bits, &mut |frag| pending.push_str(frag))?;
        if !more {
            break;
        }
        out.write_all(pending.as_bytes())?;
        steps += 1;
    }
    out.flush()?;

    Ok(())
}
