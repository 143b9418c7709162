//! Arguments and the name/value bijection.

use std::collections::HashMap;
use std::fmt;

/// An argument, identified externally by a name and internally by a dense
/// 1-based integer value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Argument {
    value: usize,
    name: String,
}

impl Argument {
    /// The 1-based integer value used internally throughout the crate.
    pub fn value(&self) -> usize {
        self.value
    }

    /// The external, user-facing name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// An ordered, named set of arguments with an invertible name ↔ value
/// bijection.
#[derive(Debug, Clone, Default)]
pub struct ArgumentSet {
    args: Vec<Argument>,
    value_of: HashMap<String, usize>,
}

impl ArgumentSet {
    /// Builds a set from an ordered list of unique names.
    ///
    /// # Panics
    ///
    /// Panics if `names` contains a duplicate; callers that parse untrusted
    /// input must reject duplicates before calling this (see `io::tgf` /
    /// `io::apx`), which is where the "duplicate declaration" error is
    /// actually raised.
    pub fn new_with_names<S>(names: &[S]) -> Self
    where
        S: AsRef<str>,
    {
        let mut args = Vec::with_capacity(names.len());
        let mut value_of = HashMap::with_capacity(names.len());
        for (i, name) in names.iter().enumerate() {
            let value = i + 1;
            let name = name.as_ref().to_string();
            if value_of.insert(name.clone(), value).is_some() {
                panic!("duplicate argument name: {name}");
            }
            args.push(Argument { value, name });
        }
        Self { args, value_of }
    }

    /// Number of arguments in the set.
    pub fn len(&self) -> usize {
        self.args.len()
    }

    /// `true` if the set has no arguments.
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// Iterates over the arguments in ascending value order.
    pub fn iter(&self) -> impl Iterator<Item = &Argument> {
        self.args.iter()
    }

    /// Looks up an argument by its 1-based value.
    pub fn by_value(&self, value: usize) -> &Argument {
        &self.args[value - 1]
    }

    /// Looks up an argument by name.
    pub fn by_name(&self, name: &str) -> Option<&Argument> {
        self.value_of.get(name).map(|&v| self.by_value(v))
    }

    /// Looks up the value of an argument by name.
    pub fn value_of(&self, name: &str) -> Option<usize> {
        self.value_of.get(name).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_are_dense_and_1_based() {
        let set = ArgumentSet::new_with_names(&["a", "b", "c"]);
        assert_eq!(3, set.len());
        assert_eq!(1, set.by_name("a").unwrap().value());
        assert_eq!(2, set.by_name("b").unwrap().value());
        assert_eq!(3, set.by_name("c").unwrap().value());
        assert_eq!("b", set.by_value(2).name());
    }

    #[test]
    fn test_unknown_name() {
        let set = ArgumentSet::new_with_names(&["a"]);
        assert!(set.by_name("z").is_none());
    }

    #[test]
    #[should_panic]
    fn test_duplicate_name_panics() {
        ArgumentSet::new_with_names(&["a", "a"]);
    }
}
