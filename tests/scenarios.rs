//! CLI-level smoke tests.
//!
//! Tasks that need a real SAT solver binary (anything but `SE-GR`/`DC-GR`)
//! are exercised as library-level assertions in
//! `solvers::semantics_solver::tests` instead, since this binary is not
//! guaranteed to run alongside an installed `glucose-syrup`.

use assert_cmd::Command;
use predicates::prelude::*;

fn afsat() -> Command {
    Command::cargo_bin("afsat").expect("afsat binary built")
}

#[test]
fn test_formats_lists_tgf_and_apx() {
    afsat()
        .arg("--formats")
        .assert()
        .success()
        .stdout(predicate::str::contains("tgf"))
        .stdout(predicate::str::contains("apx"));
}

#[test]
fn test_problems_lists_fourteen_entries_and_excludes_gr_variants() {
    afsat()
        .arg("--problems")
        .assert()
        .success()
        .stdout(predicate::str::contains("EE-CO"))
        .stdout(predicate::str::contains("SE-GR"))
        .stdout(predicate::str::contains("DC-GR"))
        .stdout(predicate::str::contains("EE-GR").not())
        .stdout(predicate::str::contains("DS-GR").not());
}

#[test]
fn test_missing_problem_task_fails_with_exit_1() {
    let file = assert_fs::NamedTempFile::new("af.tgf").unwrap();
    std::fs::write(file.path(), "a\n#\n").unwrap();

    afsat()
        .args(["-f", file.path().to_str().unwrap(), "-fo", "tgf"])
        .assert()
        .failure()
        .code(1);
}

#[test]
fn test_unknown_file_format_fails_with_exit_1() {
    let file = assert_fs::NamedTempFile::new("af.tgf").unwrap();
    std::fs::write(file.path(), "a\n#\n").unwrap();

    afsat()
        .args([
            "-p",
            "SE-GR",
            "-f",
            file.path().to_str().unwrap(),
            "-fo",
            "xml",
        ])
        .assert()
        .failure()
        .code(1);
}

#[test]
fn test_se_gr_three_chain_needs_no_sat_solver() {
    let file = assert_fs::NamedTempFile::new("af.tgf").unwrap();
    std::fs::write(file.path(), "a\nb\nc\n#\na b\nb c\n").unwrap();

    afsat()
        .args([
            "-p",
            "SE-GR",
            "-f",
            file.path().to_str().unwrap(),
            "-fo",
            "tgf",
        ])
        .assert()
        .success()
        .stdout("[a,c]\n");
}

#[test]
fn test_dc_gr_needs_no_sat_solver() {
    let file = assert_fs::NamedTempFile::new("af.tgf").unwrap();
    std::fs::write(file.path(), "a\nb\nc\n#\na b\nb c\n").unwrap();

    afsat()
        .args([
            "-p",
            "DC-GR",
            "-a",
            "c",
            "-f",
            file.path().to_str().unwrap(),
            "-fo",
            "tgf",
        ])
        .assert()
        .success()
        .stdout("YES\n");
}

#[test]
fn test_argument_forbidden_for_se_task() {
    let file = assert_fs::NamedTempFile::new("af.tgf").unwrap();
    std::fs::write(file.path(), "a\n#\n").unwrap();

    afsat()
        .args([
            "-p",
            "SE-GR",
            "-a",
            "a",
            "-f",
            file.path().to_str().unwrap(),
            "-fo",
            "tgf",
        ])
        .assert()
        .failure()
        .code(1);
}

#[test]
fn test_unknown_query_argument_fails() {
    let file = assert_fs::NamedTempFile::new("af.tgf").unwrap();
    std::fs::write(file.path(), "a\nb\n#\n").unwrap();

    afsat()
        .args([
            "-p",
            "DC-GR",
            "-a",
            "z",
            "-f",
            file.path().to_str().unwrap(),
            "-fo",
            "tgf",
        ])
        .assert()
        .failure()
        .code(1);
}
