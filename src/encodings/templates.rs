//! Clause templates (C3): per-argument CNF generators for each semantics'
//! legality conditions.

use crate::aa::Framework;
use crate::clause;
use crate::sat::{in_lab, out_lab, und_lab, Clause, VarsPerArgument};

/// A clause template: a pure function of `(argument, framework)` producing
/// the clauses that encode one legality condition for that argument.
///
/// Kept as a function pointer rather than a trait object hierarchy: every
/// template is stateless, so a closure environment would buy nothing.
pub type Template = fn(usize, &Framework) -> Vec<Clause>;

/// Uniqueness clauses (complete family): exactly one of In/Out/Und.
pub fn uniqueness(a: usize, _f: &Framework) -> Vec<Clause> {
    let vpa = VarsPerArgument::Complete;
    let (i, o, u) = (in_lab(vpa, a), out_lab(vpa, a), und_lab(vpa, a));
    vec![
        clause![i, o, u],
        clause![-i, -o],
        clause![-i, -u],
        clause![-o, -u],
    ]
}

/// I1: `in(a)` iff all attackers are Out — `(⋁ ¬out(b)) ∨ in(a)`.
///
/// Degenerates to the unit clause `in(a)` when `a` has no attackers.
pub fn complete_in_1(a: usize, f: &Framework) -> Vec<Clause> {
    let vpa = VarsPerArgument::Complete;
    let mut cl: Clause = f
        .attackers_of(a)
        .iter()
        .map(|&b| -(out_lab(vpa, b) as isize))
        .collect();
    cl.push(in_lab(vpa, a) as isize);
    vec![cl]
}

/// I2: `in(a) → out(b)` for every `b` attacked by `a`.
pub fn complete_in_2(a: usize, f: &Framework) -> Vec<Clause> {
    let vpa = VarsPerArgument::Complete;
    f.attacked_by(a)
        .iter()
        .map(|&b| clause![-(in_lab(vpa, a) as isize), out_lab(vpa, b) as isize])
        .collect()
}

/// O1: `in(b) → out(a)` for every attacker `b` of `a`.
pub fn complete_out_1(a: usize, f: &Framework) -> Vec<Clause> {
    let vpa = VarsPerArgument::Complete;
    f.attackers_of(a)
        .iter()
        .map(|&b| clause![-(in_lab(vpa, b) as isize), out_lab(vpa, a) as isize])
        .collect()
}

/// O2: `out(a) → (⋁ in(b))` over attackers `b` of `a`.
///
/// Degenerates to the unit clause `¬out(a)` when `a` has no attackers.
pub fn complete_out_2(a: usize, f: &Framework) -> Vec<Clause> {
    let vpa = VarsPerArgument::Complete;
    let mut cl: Clause = f
        .attackers_of(a)
        .iter()
        .map(|&b| in_lab(vpa, b) as isize)
        .collect();
    cl.push(-(out_lab(vpa, a) as isize));
    vec![cl]
}

/// The five templates encoding the complete semantics, in declared order.
pub const COMPLETE_TEMPLATES: &[Template] = &[
    uniqueness,
    complete_in_1,
    complete_in_2,
    complete_out_1,
    complete_out_2,
];

/// Stable-In: every argument is In or attacked by an In argument.
pub fn stable_in(a: usize, f: &Framework) -> Vec<Clause> {
    let vpa = VarsPerArgument::Stable;
    let mut cl: Clause = f
        .attackers_of(a)
        .iter()
        .map(|&b| in_lab(vpa, b) as isize)
        .collect();
    cl.push(in_lab(vpa, a) as isize);
    vec![cl]
}

/// Stable-Out: no two In-arguments may attack each other.
pub fn stable_out(a: usize, f: &Framework) -> Vec<Clause> {
    let vpa = VarsPerArgument::Stable;
    f.attackers_of(a)
        .iter()
        .map(|&b| clause![-(in_lab(vpa, b) as isize), -(in_lab(vpa, a) as isize)])
        .collect()
}

/// The two templates encoding the stable semantics, in declared order.
pub const STABLE_TEMPLATES: &[Template] = &[stable_in, stable_out];

/// Generates the full CNF theory for `framework` under `templates`,
/// iterating templates in declared order and arguments in ascending value
/// order.
pub fn generate_theory(framework: &Framework, templates: &[Template]) -> Vec<Clause> {
    let mut clauses = Vec::new();
    for template in templates {
        for a in framework.arguments() {
            clauses.extend(template(a, framework));
        }
    }
    clauses
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aa::{Attack, ArgumentSet};

    fn af(names: &[&str], atts: &[(usize, usize)]) -> Framework {
        let args = ArgumentSet::new_with_names(names);
        let attacks = atts.iter().map(|&(a, b)| Attack::new(a, b)).collect::<Vec<_>>();
        Framework::new(args, attacks)
    }

    #[test]
    fn test_uniqueness_shape() {
        let f = af(&["a"], &[]);
        let cls = uniqueness(1, &f);
        assert_eq!(4, cls.len());
        assert_eq!(vec![1, 2, 3], cls[0]);
    }

    #[test]
    fn test_complete_in_1_no_attackers_is_unit_clause() {
        let f = af(&["a"], &[]);
        assert_eq!(vec![vec![1]], complete_in_1(1, &f));
    }

    #[test]
    fn test_complete_out_2_no_attackers_is_unit_clause() {
        let f = af(&["a"], &[]);
        assert_eq!(vec![vec![-2]], complete_out_2(1, &f));
    }

    #[test]
    fn test_complete_in_1_with_attacker() {
        let f = af(&["a", "b"], &[(1, 2)]);
        // b is attacked by a: I1 for b is (-out(a)) v in(b) = [-2, 4]
        assert_eq!(vec![vec![-2, 4]], complete_in_1(2, &f));
    }

    #[test]
    fn test_self_attack_feeds_both_directions() {
        let f = af(&["a"], &[(1, 1)]);
        assert_eq!(vec![vec![-2, 1]], complete_in_1(1, &f));
        assert_eq!(vec![vec![-1, 2]], complete_in_2(1, &f));
        assert_eq!(vec![vec![-1, 2]], complete_out_1(1, &f));
        assert_eq!(vec![vec![1, -2]], complete_out_2(1, &f));
    }

    #[test]
    fn test_stable_in_no_attackers() {
        let f = af(&["a"], &[]);
        assert_eq!(vec![vec![1]], stable_in(1, &f));
    }

    #[test]
    fn test_stable_out_self_attack_kept() {
        let f = af(&["a"], &[(1, 1)]);
        assert_eq!(vec![vec![-1, -1]], stable_out(1, &f));
    }

    #[test]
    fn test_generate_theory_order_is_deterministic() {
        let f = af(&["a", "b"], &[(1, 2)]);
        let theory1 = generate_theory(&f, COMPLETE_TEMPLATES);
        let theory2 = generate_theory(&f, COMPLETE_TEMPLATES);
        assert_eq!(theory1, theory2);
        // uniqueness for a=1 comes first, then uniqueness for a=2, before I1.
        assert_eq!(vec![1, 2, 3], theory1[0]);
        assert_eq!(vec![4, 5, 6], theory1[1]);
    }

    #[test]
    fn test_only_referenced_variables() {
        // invariant: clauses over `a` only reference
        // var(b, L) for b in {a} ∪ attackers_of(a) ∪ attacked_by(a).
        let f = af(&["a", "b", "c"], &[(1, 2)]);
        let vpa = VarsPerArgument::Complete;
        let allowed: std::collections::HashSet<usize> = [1usize, 2]
            .iter()
            .flat_map(|&x| [in_lab(vpa, x), out_lab(vpa, x), und_lab(vpa, x)])
            .collect();
        for template in COMPLETE_TEMPLATES {
            for cl in template(2, &f) {
                for lit in cl {
                    assert!(allowed.contains(&(lit.unsigned_abs())));
                }
            }
        }
    }

    #[test]
    fn test_only_referenced_variables_stable() {
        let f = af(&["a", "b", "c"], &[(1, 2)]);
        let vpa = VarsPerArgument::Stable;
        let allowed: std::collections::HashSet<usize> =
            [1usize, 2].iter().map(|&x| in_lab(vpa, x)).collect();
        for template in STABLE_TEMPLATES {
            for cl in template(2, &f) {
                for lit in cl {
                    assert!(allowed.contains(&(lit.unsigned_abs())));
                }
            }
        }
    }

    #[test]
    fn test_stable_has_no_free_out_variable() {
        // num_vars for a stable theory is `1 * len`, so there is no variable
        // position left over for `out(a)` to occupy unconstrained.
        let f = af(&["a", "b"], &[(1, 2), (2, 1)]);
        let vpa = VarsPerArgument::Stable;
        assert_eq!(f.len(), vpa.k() * f.len());
        let referenced: std::collections::HashSet<usize> = generate_theory(&f, STABLE_TEMPLATES)
            .into_iter()
            .flatten()
            .map(|lit| lit.unsigned_abs())
            .collect();
        for a in f.arguments() {
            assert!(referenced.contains(&in_lab(vpa, a)));
        }
    }
}
