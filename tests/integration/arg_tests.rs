//! These tests are mostly here just to ensure that invalid results will be
//! caught when passing arguments.

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::no_cfg_memq_command;

#[test]
fn test_invalid_unit() {
    no_cfg_memq_command()
        .arg("--unit")
        .arg("tb")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'tb'"));
}

#[test]
fn test_unknown_arg() {
    no_cfg_memq_command()
        .arg("--watch")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));
}

#[test]
fn test_help() {
    no_cfg_memq_command()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--meminfo-path"));
}

#[test]
fn test_version() {
    no_cfg_memq_command()
        .arg("-V")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_default_run() {
    no_cfg_memq_command()
        .assert()
        .success()
        .stdout(predicate::str::contains("Physical memory:"))
        .stdout(predicate::str::contains("Free memory:"));
}

#[test]
fn test_json_run() {
    no_cfg_memq_command()
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{\"physical_memory\":"));
}
