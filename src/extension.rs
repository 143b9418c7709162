//! Extensions and extension-set operations (C8).

use std::collections::BTreeSet;

/// A subset of argument values — the In-set of a labelling.
///
/// Represented as a sorted set so equality, hashing (via the derived `Hash`
/// on the inner `BTreeSet`'s iteration order) and subset checks are cheap and
/// deterministic, and so it scales past machine-word-sized argument values
/// the way a fixed-width bitmask would not.
pub type Extension = BTreeSet<usize>;

/// `true` if every element of `e` is also in `other`.
pub fn subset(e: &Extension, other: &Extension) -> bool {
    e.is_subset(other)
}

/// The ⊆-maximal elements of `extensions`: every `E` such that no other `F`
/// in `extensions` has `E ⊂ F`.
pub fn maximal(extensions: &[Extension]) -> Vec<Extension> {
    extensions
        .iter()
        .filter(|e| {
            !extensions
                .iter()
                .any(|f| e.len() < f.len() && subset(e, f))
        })
        .cloned()
        .collect()
}

/// The first ⊆-minimal element of `extensions`: one that is a subset of
/// every other element.
///
/// Used only for grounded-variant experiments; not required
/// for the advertised task set, and not wired into the CLI.
pub fn minimal(extensions: &[Extension]) -> Option<Extension> {
    let mut sorted: Vec<&Extension> = extensions.iter().collect();
    sorted.sort_by_key(|e| e.len());
    sorted
        .into_iter()
        .find(|e| extensions.iter().all(|f| subset(e, f)))
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ext(values: &[usize]) -> Extension {
        values.iter().copied().collect()
    }

    #[test]
    fn test_subset() {
        assert!(subset(&ext(&[1]), &ext(&[1, 2])));
        assert!(!subset(&ext(&[1, 3]), &ext(&[1, 2])));
        assert!(subset(&ext(&[]), &ext(&[])));
    }

    #[test]
    fn test_maximal_drops_strict_subsets() {
        let exts = vec![ext(&[]), ext(&[1]), ext(&[2]), ext(&[1, 2])];
        let max = maximal(&exts);
        assert_eq!(vec![ext(&[1, 2])], max);
    }

    #[test]
    fn test_maximal_keeps_incomparable_sets() {
        let exts = vec![ext(&[1]), ext(&[2])];
        let mut max = maximal(&exts);
        max.sort();
        assert_eq!(vec![ext(&[1]), ext(&[2])], max);
    }

    #[test]
    fn test_minimal() {
        let exts = vec![ext(&[1, 2]), ext(&[1]), ext(&[])];
        assert_eq!(Some(ext(&[])), minimal(&exts));
    }
}
