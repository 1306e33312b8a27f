//! These tests are for testing some invalid config-file-specific options.

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::memq_command;

#[test]
fn test_toml_mismatch_type() {
    memq_command(&["-C", "./tests/invalid_configs/toml_mismatch_type.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid type"));
}

#[test]
fn test_invalid_unit() {
    memq_command(&["-C", "./tests/invalid_configs/invalid_unit.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'tb' is not a valid unit"));
}

#[test]
fn test_missing_config() {
    memq_command(&["-C", "./tests/invalid_configs/does_not_exist.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unable to read the config file"));
}
