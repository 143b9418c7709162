//! CLI surface, built on `clap` 2's `App`/`Arg` builder API.

use clap::{App, Arg};

use crate::io::FileFormat;
use crate::sat::SatSolverConfig;

/// Everything parsed out of `argv`, before any file I/O happens.
pub struct Args {
    /// `--formats`: print the list of supported formats and exit.
    pub list_formats: bool,
    /// `--problems`: print the list of supported problems and exit.
    pub list_problems: bool,
    /// `-p/--problemTask`.
    pub problem: Option<String>,
    /// `-f/--inputFile`.
    pub input_file: Option<String>,
    /// `-fo/--fileFormat`.
    pub file_format: Option<String>,
    /// `-a/--argument`.
    pub argument: Option<String>,
    /// `-v/--validate`.
    pub validate: bool,
    /// `--verbose`, repeatable.
    pub verbosity: u64,
    /// SAT solver configuration assembled from `--sat-solver`,
    /// `--sat-solver-opt`, `--unsat-code`.
    pub sat_config: SatSolverConfig,
}

fn build_app<'a, 'b>() -> App<'a, 'b> {
    App::new("afsat")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A SAT-based solver for abstract argumentation framework reasoning problems.")
        .arg(
            Arg::with_name("problemTask")
                .short("p")
                .long("problemTask")
                .value_name("TASK")
                .help("The (task, semantics) pair to solve, e.g. EE-CO")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("inputFile")
                .short("f")
                .long("inputFile")
                .value_name("PATH")
                .help("Path to the input file encoding the framework")
                .takes_value(true),
        )
        .arg(
            // clap's `short` is a single character; `-fo` (two letters) has
            // no builder-API equivalent, so this flag is long-only.
            Arg::with_name("fileFormat")
                .long("fileFormat")
                .value_name("FORMAT")
                .help("The input file format")
                .possible_values(FileFormat::all())
                .takes_value(true),
        )
        .arg(
            Arg::with_name("argument")
                .short("a")
                .long("argument")
                .value_name("NAME")
                .help("The argument to check acceptance for (DC/DS tasks only)")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("validate")
                .short("v")
                .long("validate")
                .help("Enable strict parse-time validation of the input file"),
        )
        .arg(
            Arg::with_name("formats")
                .long("formats")
                .help("List all supported input file formats and exit"),
        )
        .arg(
            Arg::with_name("problems")
                .long("problems")
                .help("List all supported problems and exit"),
        )
        .arg(
            Arg::with_name("satSolver")
                .long("sat-solver")
                .value_name("BINARY")
                .help("The SAT solver binary to invoke")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("satSolverOpt")
                .long("sat-solver-opt")
                .value_name("OPT")
                .help("An option passed through to the SAT solver binary (repeatable)")
                .takes_value(true)
                .multiple(true)
                .number_of_values(1),
        )
        .arg(
            Arg::with_name("unsatCode")
                .long("unsat-code")
                .value_name("CODE")
                .help("The exit code the SAT solver uses to report unsatisfiability")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("verbose")
                .long("verbose")
                .short("V")
                .help("Increase logging verbosity (repeatable)")
                .multiple(true),
        )
}

/// Parses `argv` (excluding the program name) into [`Args`].
pub fn parse(argv: &[String]) -> Args {
    let matches = build_app().get_matches_from(argv);

    let mut sat_config = SatSolverConfig::default();
    if let Some(binary) = matches.value_of("satSolver") {
        sat_config.binary = binary.to_string();
    }
    if let Some(opts) = matches.values_of("satSolverOpt") {
        sat_config.args = opts.map(str::to_string).collect();
    }
    if let Some(code) = matches.value_of("unsatCode") {
        if let Ok(code) = code.parse::<i32>() {
            sat_config.unsat_code = code;
        }
    }

    Args {
        list_formats: matches.is_present("formats"),
        list_problems: matches.is_present("problems"),
        problem: matches.value_of("problemTask").map(str::to_string),
        input_file: matches.value_of("inputFile").map(str::to_string),
        file_format: matches.value_of("fileFormat").map(str::to_string),
        argument: matches.value_of("argument").map(str::to_string),
        validate: matches.is_present("validate"),
        verbosity: matches.occurrences_of("verbose"),
        sat_config,
    }
}
