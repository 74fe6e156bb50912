//! Settings defining which language revision to compile.

/// The Feels language revision.
///
/// The two revisions disagree on the `F` token: the first defined it as
/// arithmetic shift right, the second repurposed it for the auxiliary
/// register and added `f` to read the register back. Programs written for
/// one revision are not generally valid in the other, so the choice is
/// explicit configuration rather than a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Revision {
    /// `F` is arithmetic shift right; there is no register and `f` is an
    /// unknown token.
    First,
    /// `F` stores the current cell into the register, `f` loads it back.
    #[default]
    Second,
}
