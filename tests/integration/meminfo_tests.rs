//! Tests reading meminfo-formatted files from a given path.

use std::io::Write;

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::no_cfg_memq_command;

#[test]
fn test_sample_meminfo() {
    no_cfg_memq_command()
        .args(["--meminfo-path", "./tests/meminfo/sample", "--unit", "b"])
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "Physical memory: 16777216000B\nFree memory:     14050918400B\n",
        ));
}

#[test]
fn test_missing_meminfo() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("meminfo");

    no_cfg_memq_command()
        .arg("--meminfo-path")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::starts_with(
            "Unable to query memory, error opening",
        ))
        .stderr(predicate::function(|stderr: &str| stderr.lines().count() == 1));
}

#[test]
fn test_zero_total_meminfo() {
    no_cfg_memq_command()
        .args(["--meminfo-path", "./tests/meminfo/zero_total"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::diff(
            "Unable to parse memory information, MemTotal reported zero\n",
        ));
}

#[test]
fn test_meminfo_without_total() {
    no_cfg_memq_command()
        .args(["--meminfo-path", "./tests/meminfo/no_total"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no MemTotal entry"));
}

#[test]
fn test_generated_meminfo() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "MemTotal:  2097152 kB").unwrap();
    writeln!(file, "MemFree:   1048576 kB").unwrap();
    writeln!(file, "SwapCached: 999 kB").unwrap();

    no_cfg_memq_command()
        .arg("--meminfo-path")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "Physical memory: 2.0GiB\nFree memory:     1.0GiB\n",
        ));
}
