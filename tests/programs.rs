//! End-to-end tests driving whole Feels programs through the public API.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use feeloxide::{compile, CompileError, Interpreter, Revision, RngBits};

fn run(source: &str) -> (Interpreter, String) {
    let program = compile(source, Revision::Second).unwrap();
    let mut interp = Interpreter::new(program);
    let mut bits = RngBits(SmallRng::seed_from_u64(1));
    let mut output = String::new();
    interp
        .run(&mut bits, &mut |frag| output.push_str(frag))
        .unwrap();
    (interp, output)
}

/// Repeated doubling: build a code point by shifting and incrementing.
/// 'H' is 72 = 0b1001000.
#[test]
fn test_shift_builds_code_points() {
    // 1, then <<3 = 8, +1 = 9, <<3 = 72.
    let (_, output) = run("AHHHAHHH😀");
    assert_eq!(output, "H");
}

#[test]
fn test_hello_line() {
    // "Hi\n" built cell by cell, emitted as a zero-terminated string.
    let mut source = String::new();
    source.push_str(&"A".repeat('H' as usize));
    source.push('G');
    source.push_str(&"A".repeat('i' as usize));
    source.push('U');
    source.push('😢');
    source.push('😖');
    let (_, output) = run(&source);
    assert_eq!(output, "Hi\n");
}

#[test]
fn test_negative_memory_cstring() {
    // Write 'o', 'k' at offsets -2, -1, walk back to -2 and emit.
    let mut source = String::new();
    source.push_str("gg");
    source.push_str(&"A".repeat('o' as usize));
    source.push('G');
    source.push_str(&"A".repeat('k' as usize));
    source.push('g');
    source.push('😢');
    let (interp, output) = run(&source);
    assert_eq!(output, "ok");
    assert_eq!(interp.state().dp, -2);
}

/// A loop copying a cell through the register, Feels' answer to Brainfuck's
/// `[->+<]` idiom but without destroying the source.
#[test]
fn test_copy_via_register() {
    // Cell 0 := 3; stash in register; move right; load; emit.
    let (interp, output) = run("AAAFGf😀");
    assert_eq!(output, "\u{3}");
    assert_eq!(interp.state().tape.get(0), 3);
    assert_eq!(interp.state().tape.get(1), 3);
}

#[test]
fn test_comments_and_noise_compile_away() {
    let source = "\
😤 this whole line is commentary, even Z and r are fine
AAA 😤 trailing comment
😀!!!
";
    let (_, output) = run(source);
    assert_eq!(output, "\u{3}");
}

#[test]
fn test_randomized_bmp_stays_printable() {
    // randomize + collapse always lands in the BMP, so single-char output
    // can only fail on a surrogate; exercise a few seeds through the full
    // pipeline and check the emitted char round-trips.
    for seed in [0u64, 7, 1234, 0xFEE15] {
        let program = compile("😭😱", Revision::Second).unwrap();
        let mut interp = Interpreter::new(program);
        let mut bits = RngBits(SmallRng::seed_from_u64(seed));
        interp.run(&mut bits, &mut |_| ()).unwrap();
        let v = interp.state().value();
        assert!((0..=0xFFFF).contains(&v), "seed {seed} gave {v}");
    }
}

#[test]
fn test_nested_loops_countdown() {
    // Cells: [2, 3]. The outer loop counts cell 0 down; its body holds an
    // inner zeroing loop over cell 1.
    let (interp, _) = run("AAGAAAU RGRarUar 😖");
    assert_eq!(interp.state().tape.get(0), 0);
    assert_eq!(interp.state().tape.get(1), 0);
}

#[test]
fn test_host_paced_stepping_matches_run() {
    let source = "AAAAARa😀r😖";
    let program = compile(source, Revision::Second).unwrap();

    let mut run_out = String::new();
    let mut interp = Interpreter::new(program.clone());
    interp
        .run(&mut RngBits(SmallRng::seed_from_u64(9)), &mut |frag| {
            run_out.push_str(frag)
        })
        .unwrap();

    // The same program stepped one instruction at a time, host-style.
    let mut step_out = String::new();
    let mut stepped = Interpreter::new(program);
    let mut bits = RngBits(SmallRng::seed_from_u64(9));
    while stepped
        .step(&mut bits, &mut |frag| step_out.push_str(frag))
        .unwrap()
    {
        // A host would poll its pause flag here; stopping early is the
        // entire cancellation contract.
    }
    assert_eq!(step_out, run_out);
}

#[test]
fn test_compile_errors_surface_positions() {
    let err = compile("AA\n  r", Revision::Second).unwrap_err();
    match err {
        CompileError::UnmatchedLoopClose { pos } => {
            assert_eq!(pos.line, 1);
            assert_eq!(pos.column, 2);
            assert_eq!(pos.offset, 5);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
