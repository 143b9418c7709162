//! Tasks and semantics — the `(task, semantics)` pair that
//! names a problem, e.g. `EE-CO`, `DC-PR`.

use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Result};
use strum_macros::{Display, EnumIter, EnumString};

/// A reasoning task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
pub enum Task {
    /// Single extension.
    SE,
    /// All extensions (enumeration).
    EE,
    /// Credulous membership.
    DC,
    /// Skeptical membership.
    DS,
}

/// A Dung semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
pub enum Semantics {
    /// Complete semantics.
    CO,
    /// Grounded semantics.
    GR,
    /// Preferred semantics.
    PR,
    /// Stable semantics.
    ST,
}

/// A `(task, semantics)` problem specification, e.g. `EE-CO`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Problem {
    /// The requested task.
    pub task: Task,
    /// The requested semantics.
    pub semantics: Semantics,
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.task, self.semantics)
    }
}

impl Problem {
    /// Parses a problem string such as `"EE-CO"`.
    pub fn parse(s: &str) -> Result<Self> {
        let (task_str, sem_str) = s
            .split_once('-')
            .ok_or_else(|| anyhow!("malformed problem string '{s}', expected TASK-SEMANTICS"))?;
        let task = Task::from_str(task_str)
            .map_err(|_| anyhow!("unknown task '{task_str}'; see --problems"))?;
        let semantics = Semantics::from_str(sem_str)
            .map_err(|_| anyhow!("unknown semantics '{sem_str}'; see --problems"))?;
        Ok(Self { task, semantics })
    }

    /// All task/semantics combinations accepted by `-p`/`--problemTask`:
    /// every `(task, semantics)` pair except `EE-GR`/`DS-GR`, which the
    /// grounded semantics does not support (it names exactly one extension,
    /// so "all extensions"/"skeptical over all extensions" do not apply).
    pub fn all() -> Vec<Problem> {
        use strum::IntoEnumIterator;
        let mut problems = Vec::with_capacity(14);
        for task in [Task::EE, Task::SE, Task::DC, Task::DS] {
            for semantics in Semantics::iter() {
                if semantics == Semantics::GR && matches!(task, Task::EE | Task::DS) {
                    continue;
                }
                problems.push(Problem { task, semantics });
            }
        }
        problems
    }
}
