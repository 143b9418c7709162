//! The SAT solver as process-wide configuration.

/// The external SAT solver binary, its CLI options and its UNSAT sentinel
/// exit code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SatSolverConfig {
    /// The path (or PATH-resolved name) of the SAT solver executable.
    pub binary: String,
    /// CLI options passed to the solver.
    pub args: Vec<String>,
    /// The exit code the solver uses to report unsatisfiability.
    pub unsat_code: i32,
}

impl Default for SatSolverConfig {
    fn default() -> Self {
        Self {
            binary: "glucose-syrup".to_string(),
            args: vec!["-model".to_string(), "-verb=0".to_string()],
            unsat_code: 20,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_solver_config() {
        let cfg = SatSolverConfig::default();
        assert_eq!("glucose-syrup", cfg.binary);
        assert_eq!(vec!["-model", "-verb=0"], cfg.args);
        assert_eq!(20, cfg.unsat_code);
    }
}
