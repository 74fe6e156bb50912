//! Fundamental data types used throughout feeloxide

use std::fmt::Display;

/// A Feels memory cell.
///
/// Cells hold plain integers: increment and decrement are unbounded, while
/// the bitwise instruction family truncates to 32 bits before operating (see
/// [`crate::numerics`]). An `i64` comfortably holds every value either side
/// of that truncation can produce.
pub type Cell = i64;

/// Position of a character in the source text.
///
/// Line and column are 0-based; `Display` renders them 1-based for humans.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct SourcePos {
    /// Byte offset into the source text.
    pub offset: usize,
    /// 0-based line number.
    pub line: usize,
    /// 0-based column, counted in characters.
    pub column: usize,
}

impl Display for SourcePos {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "line {}, column {} (offset {})",
            self.line + 1,
            self.column + 1,
            self.offset
        )
    }
}

#[cfg(test)]
mod tests {
    use super::SourcePos;

    #[test]
    fn test_display() {
        let pos = SourcePos {
            offset: 17,
            line: 2,
            column: 0,
        };
        assert_eq!(pos.to_string(), "line 3, column 1 (offset 17)");
    }
}
