//! The three-valued labelling used by the complete-semantics family, and the
//! numeric codes the variable algebra keys off of.

/// A label assigned to an argument by a complete-family labelling.
///
/// Numeric codes `1, 2, 3` give `Label` a total order; the variable algebra
/// (`sat::variable`) uses the codes directly to place a label's SAT variable
/// inside an argument's block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Label {
    /// The argument is accepted.
    In = 1,
    /// The argument is rejected.
    Out = 2,
    /// The argument's status is undecided.
    Und = 3,
}

impl Label {
    /// The numeric code used by the variable algebra.
    pub fn code(self) -> usize {
        self as usize
    }
}
