//! Clauses and CNF theories.

/// An unordered list of non-zero signed integers: positive literals denote
/// truth, negative literals denote falsity.
pub type Clause = Vec<isize>;

/// Builds a [`Clause`] from a list of integer literals.
///
/// Literals are plain `isize` rather than a newtype wrapper.
#[macro_export]
macro_rules! clause {
    () => (
        Vec::<isize>::new()
    );
    ($($x:expr),+ $(,)?) => (
        vec![$($x as isize),+]
    );
}

/// A conjunction (list) of clauses.
pub type CnfTheory = Vec<Clause>;
