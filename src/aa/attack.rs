//! Attacks.

/// An ordered pair `(attacker, attacked)` of argument values.
///
/// Self-attacks (`attacker == attacked`) are allowed; multi-edges are
/// rejected at parse time, not here (see `io::tgf` / `io::apx`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Attack {
    attacker: usize,
    attacked: usize,
}

impl Attack {
    /// Builds an attack from two argument values.
    pub fn new(attacker: usize, attacked: usize) -> Self {
        Self { attacker, attacked }
    }

    /// The value of the attacking argument.
    pub fn attacker(&self) -> usize {
        self.attacker
    }

    /// The value of the attacked argument.
    pub fn attacked(&self) -> usize {
        self.attacked
    }
}
