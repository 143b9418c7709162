//! Solver driver (C5): invokes the external SAT solver as a subprocess.
//!
//! The solver reads a DIMACS payload on stdin and is expected to follow the
//! SAT-competition exit-code convention: a configured UNSAT sentinel code
//! for unsatisfiable instances, any other code paired with a `v `-prefixed
//! model line on stdout for satisfiable ones.

use std::io::{Read, Write};
use std::process::{Command, Stdio};

use anyhow::{Context, Result};
use log::{debug, info};

use super::{CnfAssembly, SatSolverConfig};
use crate::error::AfError;

/// The outcome of a single SAT call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverOutcome {
    /// The instance is satisfiable; carries the signed-literal model.
    Satisfiable(Vec<isize>),
    /// The instance is unsatisfiable.
    Unsatisfiable,
}

/// A SAT solver invoked once per [`CnfAssembly`] payload.
///
/// No incremental interface: every call receives the
/// whole accumulated payload and may spawn a fresh underlying process.
pub trait SatDriver {
    /// Solves `payload`, returning the outcome.
    fn solve(&self, payload: &CnfAssembly) -> Result<SolverOutcome>;
}

/// A [`SatDriver`] that spawns the configured SAT solver binary as a
/// subprocess for every call.
pub struct ExternalSatDriver {
    config: SatSolverConfig,
}

impl ExternalSatDriver {
    /// Builds a driver around the given solver configuration.
    pub fn new(config: SatSolverConfig) -> Self {
        Self { config }
    }
}

impl SatDriver for ExternalSatDriver {
    fn solve(&self, payload: &CnfAssembly) -> Result<SolverOutcome> {
        debug!(
            "launching SAT solver on an instance with {} variables and {} clauses",
            payload.num_vars(),
            payload.num_clauses()
        );
        let mut child = Command::new(&self.config.binary)
            .args(&self.config.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    anyhow::Error::new(AfError::SolverNotFound {
                        binary: self.config.binary.clone(),
                        dependency: "the solver driver",
                    })
                } else {
                    anyhow::Error::from(e).context(format!(
                        "failed to spawn SAT solver '{}'",
                        self.config.binary
                    ))
                }
            })?;

        let mut stdin = child.stdin.take().context("failed to open solver stdin")?;
        let encoded = payload.encode();
        stdin
            .write_all(&encoded)
            .context("failed to write DIMACS payload to solver stdin")?;
        drop(stdin);

        let mut stdout = String::new();
        child
            .stdout
            .take()
            .context("failed to open solver stdout")?
            .read_to_string(&mut stdout)
            .context("failed to read solver stdout")?;

        let status = child.wait().context("failed to wait on solver process")?;
        let code = status.code().unwrap_or(-1);

        if code == self.config.unsat_code {
            info!("SAT solver ended with result UNSAT");
            return Ok(SolverOutcome::Unsatisfiable);
        }

        // Any exit code other than the UNSAT sentinel is treated as SAT,
        // provided a model is actually present; a non-UNSAT exit with no
        // model means the solver failed for some other reason rather than
        // found a satisfying assignment.
        match extract_model(&stdout) {
            Ok(model) => {
                info!("SAT solver ended with result SAT");
                Ok(SolverOutcome::Satisfiable(model))
            }
            Err(_) => Err(anyhow::Error::new(AfError::SolverFailed {
                binary: self.config.binary.clone(),
                code,
            })),
        }
    }
}

/// Extracts the model from solver stdout.
///
/// Locates the last line starting with `v `: more robust than assuming a
/// fixed line position, since solvers vary in how much they log before the
/// model line.
fn extract_model(stdout: &str) -> Result<Vec<isize>> {
    let line = stdout
        .lines()
        .rev()
        .find(|l| l.starts_with("v "))
        .ok_or_else(|| anyhow::anyhow!("no line starting with 'v ' in solver output"))?;
    line.split_whitespace()
        .skip(1)
        .map(|tok| tok.parse::<isize>().context("malformed literal in model line"))
        .filter(|r| !matches!(r, Ok(0)))
        .collect()
}
