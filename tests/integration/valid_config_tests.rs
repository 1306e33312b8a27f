//! Tests config files that should work.

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::memq_command;

#[test]
fn test_empty() {
    memq_command(&["-C", "./tests/valid_configs/empty_config.toml"])
        .assert()
        .success();
}

#[cfg(target_os = "linux")]
#[test]
fn test_all_options() {
    memq_command(&["-C", "./tests/valid_configs/all_options.toml"])
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "{\"physical_memory\":16000,\"free_memory\":13400}\n",
        ));
}

#[cfg(target_os = "linux")]
#[test]
fn test_args_override_config() {
    memq_command(&[
        "-C",
        "./tests/valid_configs/all_options.toml",
        "--unit",
        "kb",
    ])
    .assert()
    .success()
    .stdout(predicate::str::diff(
        "{\"physical_memory\":16384000,\"free_memory\":13721600}\n",
    ));
}
