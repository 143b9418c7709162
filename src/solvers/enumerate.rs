//! Enumeration engine (C6): single and full extension enumeration via
//! blocking clauses.

use anyhow::Result;

use crate::aa::Framework;
use crate::encodings::{generate_theory, Template};
use crate::extension::Extension;
use crate::sat::{arg_of, is_in_var, CnfAssembly, SatDriver, SolverOutcome, VarsPerArgument};

/// Builds the initial [`CnfAssembly`] for `framework` under `templates`/`vpa`.
pub fn build_payload(framework: &Framework, templates: &[Template], vpa: VarsPerArgument) -> CnfAssembly {
    let num_vars = vpa.k() * framework.len();
    let clauses = generate_theory(framework, templates);
    CnfAssembly::build(num_vars, &clauses)
}

/// Projects a signed-literal model onto an [`Extension`].
pub fn model_to_extension(model: &[isize], vpa: VarsPerArgument) -> Extension {
    model
        .iter()
        .filter(|&&lit| lit > 0)
        .filter(|&&lit| is_in_var(vpa, lit as usize))
        .map(|&lit| arg_of(vpa, lit as usize))
        .collect()
}

/// The blocking clause forbidding the exact assignment of `model` on future
/// iterations: the negation of its positive literals.
fn blocking_clause(model: &[isize]) -> Vec<isize> {
    model.iter().filter(|&&lit| lit > 0).map(|&lit| -lit).collect()
}

/// Single enumeration: build, solve once, project to an extension.
///
/// Returns `None` if the theory is unsatisfiable.
pub fn single_extension(
    framework: &Framework,
    templates: &[Template],
    vpa: VarsPerArgument,
    driver: &dyn SatDriver,
) -> Result<Option<Extension>> {
    let payload = build_payload(framework, templates, vpa);
    match driver.solve(&payload)? {
        SolverOutcome::Unsatisfiable => Ok(None),
        SolverOutcome::Satisfiable(model) => Ok(Some(model_to_extension(&model, vpa))),
    }
}

/// A lazy, ordered sequence of extensions produced by full enumeration.
///
/// Each call to [`Iterator::next`] performs exactly one blocking SAT call:
/// solve, emit the extension, append the blocking clause for next time.
/// Terminates once the solver reports UNSAT; each extension is emitted at
/// most once because every iteration forbids the exact total assignment just
/// seen.
pub struct Enumerator<'a> {
    payload: CnfAssembly,
    driver: &'a dyn SatDriver,
    vpa: VarsPerArgument,
    done: bool,
}

impl<'a> Enumerator<'a> {
    /// Starts a full enumeration over `framework` under `templates`/`vpa`.
    pub fn new(framework: &Framework, templates: &[Template], vpa: VarsPerArgument, driver: &'a dyn SatDriver) -> Self {
        Self {
            payload: build_payload(framework, templates, vpa),
            driver,
            vpa,
            done: false,
        }
    }
}

impl Iterator for Enumerator<'_> {
    type Item = Result<Extension>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.driver.solve(&self.payload) {
            Ok(SolverOutcome::Unsatisfiable) => {
                self.done = true;
                None
            }
            Ok(SolverOutcome::Satisfiable(model)) => {
                self.payload.add_clause(&blocking_clause(&model));
                Some(Ok(model_to_extension(&model, self.vpa)))
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
