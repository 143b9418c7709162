use std::io;

use anyhow::{Context, Result};
use log::info;

use afsat::aa::{Problem, Semantics, Task};
use afsat::error::AfError;
use afsat::io::{writer, FileFormat};
use afsat::sat::ExternalSatDriver;
use afsat::solvers::{
    dc_co, dc_gr, dc_pr, dc_st, ds_co, ds_pr, ds_st, ee_co, ee_pr, ee_st, se_co, se_gr, se_pr,
    se_st,
};

mod cli;
mod logging;

fn main() {
    let argv: Vec<String> = std::env::args().collect();
    let args = cli::parse(&argv[1..]);

    if let Err(e) = logging::init(args.verbosity) {
        eprintln!("failed to initialize logging: {e}");
    }

    match run(args) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            if let Some(af_err) = e.downcast_ref::<AfError>() {
                eprintln!("{af_err}");
                std::process::exit(af_err.exit_code());
            }
            eprintln!("{e:#}");
            std::process::exit(1);
        }
    }
}

fn run(args: cli::Args) -> Result<i32> {
    if args.list_formats {
        println!("[{}]", FileFormat::all().join(","));
        return Ok(0);
    }
    if args.list_problems {
        let names: Vec<String> = Problem::all().iter().map(Problem::to_string).collect();
        println!("[{}]", names.join(","));
        return Ok(0);
    }

    let problem_str = args.problem.ok_or_else(|| {
        AfError::UnsupportedConfiguration("-p/--problemTask is required".to_string())
    })?;
    let problem = Problem::parse(&problem_str)?;

    if matches!(problem.task, Task::EE | Task::DS) && problem.semantics == Semantics::GR {
        return Err(AfError::UnsupportedConfiguration(format!(
            "{problem} is not a supported problem; see --problems"
        ))
        .into());
    }

    match (problem.task, args.argument.is_some()) {
        (Task::DC, false) | (Task::DS, false) => {
            return Err(AfError::UnsupportedConfiguration(format!(
                "-a/--argument is required for {} tasks",
                problem.task
            ))
            .into())
        }
        (Task::SE, true) | (Task::EE, true) => {
            return Err(AfError::UnsupportedConfiguration(format!(
                "-a/--argument is not allowed for {} tasks",
                problem.task
            ))
            .into())
        }
        _ => {}
    }

    let input_file = args
        .input_file
        .ok_or_else(|| AfError::UnsupportedConfiguration("-f/--inputFile is required".to_string()))?;
    let file_format_str = args.file_format.ok_or_else(|| {
        AfError::UnsupportedConfiguration("-fo/--fileFormat is required".to_string())
    })?;
    let file_format: FileFormat = file_format_str.parse()?;

    let text = std::fs::read_to_string(&input_file)
        .with_context(|| format!("failed to read input file '{input_file}'"))?;
    let framework = file_format.parse(&text, args.validate)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let driver = ExternalSatDriver::new(args.sat_config);

    let arg_value = args
        .argument
        .as_ref()
        .map(|name| {
            framework
                .argument_set()
                .value_of(name)
                .ok_or_else(|| AfError::ArgumentNotFound(name.clone()))
        })
        .transpose()?;

    info!("solving {problem} over an AF with {} arguments", framework.len());

    match (problem.task, problem.semantics) {
        (Task::SE, Semantics::CO) => {
            let ext = se_co(&framework, &driver)?;
            writer::write_single_extension(&mut out, ext.as_ref(), framework.argument_set())?;
        }
        (Task::EE, Semantics::CO) => {
            let exts: Vec<_> = ee_co(&framework, &driver).collect::<Result<_>>()?;
            writer::write_extension_set(&mut out, &exts, framework.argument_set())?;
        }
        (Task::DC, Semantics::CO) => {
            writer::write_decision(&mut out, dc_co(&framework, arg_value.unwrap(), &driver)?)?;
        }
        (Task::DS, Semantics::CO) => {
            writer::write_decision(&mut out, ds_co(&framework, arg_value.unwrap(), &driver)?)?;
        }
        (Task::SE, Semantics::GR) => {
            let ext = se_gr(&framework);
            writer::write_single_extension(&mut out, Some(&ext), framework.argument_set())?;
        }
        (Task::DC, Semantics::GR) => {
            writer::write_decision(&mut out, dc_gr(&framework, arg_value.unwrap()))?;
        }
        (Task::SE, Semantics::PR) => {
            let ext = se_pr(&framework, &driver)?;
            writer::write_single_extension(&mut out, ext.as_ref(), framework.argument_set())?;
        }
        (Task::EE, Semantics::PR) => {
            let exts = ee_pr(&framework, &driver)?;
            writer::write_extension_set(&mut out, &exts, framework.argument_set())?;
        }
        (Task::DC, Semantics::PR) => {
            writer::write_decision(&mut out, dc_pr(&framework, arg_value.unwrap(), &driver)?)?;
        }
        (Task::DS, Semantics::PR) => {
            writer::write_decision(&mut out, ds_pr(&framework, arg_value.unwrap(), &driver)?)?;
        }
        (Task::SE, Semantics::ST) => {
            let ext = se_st(&framework, &driver)?;
            writer::write_single_extension(&mut out, ext.as_ref(), framework.argument_set())?;
        }
        (Task::EE, Semantics::ST) => {
            let exts: Vec<_> = ee_st(&framework, &driver).collect::<Result<_>>()?;
            writer::write_extension_set(&mut out, &exts, framework.argument_set())?;
        }
        (Task::DC, Semantics::ST) => {
            writer::write_decision(&mut out, dc_st(&framework, arg_value.unwrap(), &driver)?)?;
        }
        (Task::DS, Semantics::ST) => {
            writer::write_decision(&mut out, ds_st(&framework, arg_value.unwrap(), &driver)?)?;
        }
        (Task::EE, Semantics::GR) | (Task::DS, Semantics::GR) => unreachable!("rejected above"),
    }

    Ok(0)
}
