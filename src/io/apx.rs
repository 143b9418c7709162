//! APX (Aspartix) parsing.
//!
//! Unknown heads (anything other than `arg`/`att`) are silently skipped
//! rather than rejected.

use anyhow::Result;
use lazy_static::lazy_static;
use regex::Regex;

use crate::aa::{Attack, ArgumentSet, Framework};
use crate::error::AfError;

lazy_static! {
    static ref LINE_RE: Regex = Regex::new(r"(?P<type>\w+)\s*\((?P<args>[\w,\s]+)\)\.").unwrap();
}

fn invalid(message: impl Into<String>) -> anyhow::Error {
    anyhow::Error::new(AfError::MalformedInput(message.into()))
}

/// Parses an APX document into a [`Framework`].
///
/// `validate` behaves as in [`crate::io::tgf::parse`]: `true` enforces
/// whitespace/comma-free unique argument names and unique, fully-declared
/// attacks; `false` parses leniently.
pub fn parse(text: &str, validate: bool) -> Result<Framework> {
    let mut names: Vec<String> = Vec::new();
    let mut raw_attacks: Vec<(String, String)> = Vec::new();

    for line in text.lines() {
        let Some(caps) = LINE_RE.captures(line) else {
            continue;
        };
        let kind = &caps["type"];
        let args_str = &caps["args"];

        match kind {
            "arg" => {
                let name = args_str.trim().to_string();
                if validate {
                    if name.split_whitespace().count() > 1 || name.contains(',') {
                        return Err(invalid(format!("argument \"{name}\" contains whitespace or comma")));
                    }
                    if names.iter().any(|n| n == &name) {
                        return Err(invalid(format!("argument {name} declared more than once!")));
                    }
                }
                names.push(name);
            }
            "att" => {
                let parts: Vec<&str> = args_str.split(',').map(str::trim).collect();
                if parts.len() != 2 {
                    if validate {
                        return Err(invalid(format!(
                            "attack relation \"{}\" does not conform to the APX standard!",
                            line.trim()
                        )));
                    }
                    continue;
                }
                raw_attacks.push((parts[0].to_string(), parts[1].to_string()));
            }
            _ => continue,
        }
    }

    let args = ArgumentSet::new_with_names(&names);

    let mut attacks = Vec::new();
    let mut seen: Vec<(usize, usize)> = Vec::new();
    for (a, b) in raw_attacks {
        let (av, bv) = match (args.value_of(&a), args.value_of(&b)) {
            (Some(av), Some(bv)) => (av, bv),
            _ => {
                if validate {
                    return Err(invalid(format!("undeclared arguments in attack \"att({a},{b}).\"!")));
                }
                continue;
            }
        };
        if validate && seen.contains(&(av, bv)) {
            return Err(invalid(format!("attack \"att({a},{b}).\" is declared more than once!")));
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
        let text = "arg(a).\narg(b).\narg(c).\natt(a,b).\natt(b,c).\n";
        let f = parse(text, true).unwrap();
        assert_eq!(3, f.len());
        assert_eq!(2, f.attacks().len());
    }

    #[test]
    fn test_whitespace_tolerated_inside_parens() {
        let text = "arg( a ).\natt( a , a ).\n";
        let f = parse(text, true).unwrap();
        assert_eq!(1, f.len());
        assert!(f.attackers_of(1).contains(&1));
    }

    #[test]
    fn test_unrecognized_lines_skipped() {
        let text = "% a comment\narg(a).\nbogus(a,b).\n";
        let f = parse(text, true).unwrap();
        assert_eq!(1, f.len());
        assert!(f.attacks().is_empty());
    }

    #[test]
    fn test_duplicate_attack_rejected_when_validating() {
        let text = "arg(a).\narg(b).\natt(a,b).\natt(a,b).\n";
        assert!(parse(text, true).is_err());
    }

    #[test]
    fn test_unknown_argument_in_attack_rejected_when_validating() {
        let text = "arg(a).\natt(a,b).\n";
        assert!(parse(text, true).is_err());
    }
}
