//! Error kinds surfaced to the CLI boundary.
//!
//! Library functions return [`anyhow::Result`] for ergonomic `?` propagation
//! and context chaining; [`AfError`] is the small set of *kinds* the CLI
//! downcasts on to pick an exit code and a diagnostic prefix.

use thiserror::Error;

/// A user- or environment-facing error kind.
///
/// Wrapped inside an [`anyhow::Error`] at the point it is raised so call
/// sites keep using `anyhow::Result` and `.context(...)` everywhere; the CLI
/// downcasts the top-level error to this enum to decide how to report it.
#[derive(Debug, Error)]
pub enum AfError {
    /// The input file violates the TGF/APX grammar or an uniqueness
    /// constraint (duplicate argument, duplicate attack, unknown argument).
    #[error("Invalid input file! {0}")]
    MalformedInput(String),

    /// An unknown task/semantics/format was requested, or `-a`/`--argument`
    /// was used incorrectly for the given task.
    #[error("Unsupported configuration: {0}")]
    UnsupportedConfiguration(String),

    /// A query referenced an argument name that is not in the framework.
    #[error("no such argument: {0}")]
    ArgumentNotFound(String),

    /// The configured SAT solver binary could not be found on PATH.
    #[error("cannot execute '{binary}': command not found (required by {dependency})")]
    SolverNotFound {
        /// The binary name that was looked up.
        binary: String,
        /// The component that depends on it.
        dependency: &'static str,
    },

    /// The SAT solver binary exited with an unexpected, non-UNSAT code.
    #[error("SAT solver '{binary}' failed with exit code {code}")]
    SolverFailed {
        /// The binary that was invoked.
        binary: String,
        /// The process exit code.
        code: i32,
    },
}

impl AfError {
    /// The process exit code this error kind should produce at the CLI boundary.
    pub fn exit_code(&self) -> i32 {
        match self {
            AfError::SolverNotFound { .. } => exitcode::ENOENT,
            _ => 1,
        }
    }
}

/// `ENOENT`-like exit code used when the SAT solver binary is missing.
///
/// Kept as a tiny local module rather than pulling in a crate: the only
/// value needed is the POSIX `ENOENT` constant.
mod exitcode {
    pub const ENOENT: i32 = 2;
}
