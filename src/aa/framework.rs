//! The indexed argumentation framework (C1).
//!
//! Adjacency is precomputed once at construction, as both an attacker-set
//! and an attacked-set index, and never mutated afterwards.

use std::collections::BTreeSet;

use super::{Argument, ArgumentSet, Attack};

/// A finite Dung argumentation framework `(A, R)`.
///
/// Immutable after construction. Holds, for every argument value, the set of
/// its attackers and the set of arguments it attacks.
#[derive(Debug, Clone)]
pub struct Framework {
    args: ArgumentSet,
    attacks: Vec<Attack>,
    attackers_of: Vec<BTreeSet<usize>>,
    attacked_by: Vec<BTreeSet<usize>>,
}

impl Framework {
    /// Builds a framework from an argument set and a list of attacks.
    ///
    /// Attacks must reference values in `1..=args.len()`; this is enforced by
    /// the parsers (`io::tgf`, `io::apx`), not here.
    pub fn new(args: ArgumentSet, attacks: Vec<Attack>) -> Self {
        let n = args.len();
        let mut attackers_of = vec![BTreeSet::new(); n];
        let mut attacked_by = vec![BTreeSet::new(); n];
        for att in &attacks {
            attackers_of[att.attacked() - 1].insert(att.attacker());
            attacked_by[att.attacker() - 1].insert(att.attacked());
        }
        Self {
            args,
            attacks,
            attackers_of,
            attacked_by,
        }
    }

    /// The number of arguments in the framework.
    pub fn len(&self) -> usize {
        self.args.len()
    }

    /// `true` if the framework has no arguments.
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// The underlying argument set.
    pub fn argument_set(&self) -> &ArgumentSet {
        &self.args
    }

    /// Iterates over the argument values `1..=len()` in ascending order.
    pub fn arguments(&self) -> impl Iterator<Item = usize> + '_ {
        self.args.iter().map(Argument::value)
    }

    /// All declared attacks, in declaration order.
    pub fn attacks(&self) -> &[Attack] {
        &self.attacks
    }

    /// The set of arguments attacking `a`.
    pub fn attackers_of(&self, a: usize) -> &BTreeSet<usize> {
        &self.attackers_of[a - 1]
    }

    /// The set of arguments attacked by `a`.
    pub fn attacked_by(&self, a: usize) -> &BTreeSet<usize> {
        &self.attacked_by[a - 1]
    }

    /// The union of `attackers_of(a)` over every `a` in `set`.
    pub fn attackers_of_set(&self, set: &BTreeSet<usize>) -> BTreeSet<usize> {
        set.iter().flat_map(|&a| self.attackers_of(a)).copied().collect()
    }

    /// The union of `attacked_by(a)` over every `a` in `set`.
    pub fn attacked_by_set(&self, set: &BTreeSet<usize>) -> BTreeSet<usize> {
        set.iter().flat_map(|&a| self.attacked_by(a)).copied().collect()
    }

    /// The Dung characteristic operator `F(S) = { a | attackers_of(a) ⊆ attacked_by(S) }`.
    ///
    /// Monotone in `S`; iterating `F` from `∅` converges in at most `len()`
    /// steps.
    pub fn characteristic(&self, set: &BTreeSet<usize>) -> BTreeSet<usize> {
        let defended_by_set = self.attacked_by_set(set);
        self.arguments()
            .filter(|&a| self.attackers_of(a).is_subset(&defended_by_set))
            .collect()
    }
}
