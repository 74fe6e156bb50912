//! Output formatting: turning cell values into emitted string fragments.

use crate::numerics;
use crate::tape::Tape;
use crate::Cell;

/// Interpret a cell as a single Unicode scalar value. `None` if the value is
/// negative, above U+10FFFF, or a surrogate.
pub(crate) fn scalar_for(value: Cell) -> Option<char> {
    u32::try_from(value).ok().and_then(char::from_u32)
}

/// Build the zero-terminated string starting at the data pointer.
///
/// Scans toward increasing offsets: first through negative offsets while the
/// cells there are nonzero, then, only if the scan reaches offset 0 exactly,
/// onward through non-negative offsets until a zero cell. A strictly
/// positive starting pointer therefore yields the empty string. Values
/// outside the Unicode code point range are folded into the BMP first; a
/// value that still is no scalar (a surrogate) aborts with that cell's
/// original value. The data pointer itself is not moved.
pub(crate) fn cstring_at(tape: &Tape, dp: i64) -> Result<String, Cell> {
    let mut result = String::new();
    let mut at = dp;
    while at < 0 && tape.get(at) != 0 {
        push_collapsed(&mut result, tape.get(at))?;
        at += 1;
    }
    if at == 0 {
        while tape.get(at) != 0 {
            push_collapsed(&mut result, tape.get(at))?;
            at += 1;
        }
    }
    Ok(result)
}

fn push_collapsed(out: &mut String, value: Cell) -> Result<(), Cell> {
    match scalar_for(numerics::collapse_to_scalar(value)) {
        Some(c) => {
            out.push(c);
            Ok(())
        }
        None => Err(value),
    }
}
