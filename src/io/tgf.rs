//! TGF (Trivial Graph Format) parsing.
//!
//! The `#` pivot line separates argument declarations from attack
//! declarations; the "missing/repeated `#`" check runs once over the whole
//! file rather than mid-loop.

use anyhow::Result;

use crate::aa::{Attack, ArgumentSet, Framework};
use crate::error::AfError;

fn invalid(message: impl Into<String>) -> anyhow::Error {
    anyhow::Error::new(AfError::MalformedInput(message.into()))
}

/// Parses a TGF document into a [`Framework`].
///
/// When `validate` is `true`, enforces strict checks (duplicate declaration,
/// duplicate attack, unknown argument, malformed attack line, exactly one
/// `#`); when `false`, parses leniently, skipping lines that do not conform
/// instead of failing.
pub fn parse(text: &str, validate: bool) -> Result<Framework> {
    let lines: Vec<&str> = text.lines().map(str::trim).filter(|l| !l.is_empty()).collect();

    let hash_count = lines.iter().filter(|l| l.contains('#')).count();
    if validate && hash_count == 0 {
        return Err(invalid("# missing!"));
    }
    if validate && hash_count > 1 {
        return Err(invalid("too many '#' in TGF file!"));
    }

    let pivot = lines.iter().position(|l| l.contains('#'));
    let (arg_lines, att_lines): (&[&str], &[&str]) = match pivot {
        Some(i) => (&lines[..i], &lines[i + 1..]),
        None => (&lines[..], &[]),
    };

    let mut names: Vec<String> = Vec::new();
    for &name in arg_lines {
        if validate {
            if name.split_whitespace().count() > 1 || name.contains(',') {
                return Err(invalid(format!("argument \"{name}\" contains whitespace or comma")));
            }
            if names.iter().any(|n| n == name) {
                return Err(invalid(format!("argument {name} declared more than once!")));
            }
        }
        names.push(name.to_string());
    }
    let args = ArgumentSet::new_with_names(&names);

    let mut attacks = Vec::new();
    let mut seen: Vec<(usize, usize)> = Vec::new();
    for &line in att_lines {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != 2 {
            if validate {
                return Err(invalid(format!(
                    "attack relation \"{line}\" does not conform to TGF standard!"
                )));
            }
            continue;
        }
        let (a, b) = (tokens[0], tokens[1]);
        let (av, bv) = match (args.value_of(a), args.value_of(b)) {
            (Some(av), Some(bv)) => (av, bv),
            _ => {
                if validate {
                    return Err(invalid(format!("undeclared arguments in attack \"{line}\"!")));
                }
                continue;
            }
        };
        if validate && seen.contains(&(av, bv)) {
            return Err(invalid(format!("attack \"{line}\" is declared more than once!")));
        }
        seen.push((av, bv));
        attacks.push(Attack::new(av, bv));
    }

    Ok(Framework::new(args, attacks))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_three_chain() {
        let text = "a\nb\nc\n#\na b\nb c\n";
        let f = parse(text, true).unwrap();
        assert_eq!(3, f.len());
        assert_eq!(2, f.attacks().len());
    }

    #[test]
    fn test_blank_lines_skipped() {
        let text = "a\n\nb\n\n#\n\na b\n";
        let f = parse(text, true).unwrap();
        assert_eq!(2, f.len());
        assert_eq!(1, f.attacks().len());
    }

    #[test]
    fn test_missing_hash_rejected_when_validating() {
        let text = "a\nb\n";
        assert!(parse(text, true).is_err());
    }

    #[test]
    fn test_missing_hash_tolerated_when_not_validating() {
        let text = "a\nb\n";
        let f = parse(text, false).unwrap();
        assert_eq!(2, f.len());
    }

    #[test]
    fn test_duplicate_argument_rejected_when_validating() {
        let text = "a\na\n#\n";
        assert!(parse(text, true).is_err());
    }

    #[test]
    fn test_duplicate_attack_rejected_when_validating() {
        let text = "a\nb\n#\na b\na b\n";
        assert!(parse(text, true).is_err());
    }

    #[test]
    fn test_unknown_argument_in_attack_rejected_when_validating() {
        let text = "a\nb\n#\na c\n";
        assert!(parse(text, true).is_err());
    }

    #[test]
    fn test_self_attack_allowed() {
        let text = "a\n#\na a\n";
        let f = parse(text, true).unwrap();
        assert!(f.attackers_of(1).contains(&1));
    }

    #[test]
    fn test_hash_embedded_in_line_is_treated_as_pivot() {
        // a line containing '#' anywhere is the pivot, not just a bare "#"
        // line; the whole line is dropped, not registered as an argument.
        let text = "a\nb#\nc\n";
        let f = parse(text, false).unwrap();
        assert_eq!(1, f.len());
        assert!(f.attacks().is_empty());
    }

    #[test]
    fn test_two_hash_bearing_lines_rejected_when_validating() {
        let text = "a#\nb\n#\n";
        assert!(parse(text, true).is_err());
    }
}
