use std::{collections::HashMap, env, process::Command};

/// Returns a QEMU runner target given an architecture.
fn get_qemu_target(arch: &str) -> &str {
    match arch {
        "armv7" => "arm",
        "i686" => "i386",
        "powerpc" => "ppc",
        "powerpc64le" => "ppc64le",
        _ => arch,
    }
}

/// Running binary tests via cross needs the right runner, which we can find by
/// looking at env variables that only show up while using cross.
fn cross_runner() -> Option<String> {
    const TARGET_RUNNER: &str = "CARGO_TARGET_RUNNER";
    const CROSS_RUNNER: &str = "CROSS_RUNNER";

    let env_mapping = env::vars_os()
        .filter_map(|(k, v)| {
            let (k, v) = (k.to_string_lossy(), v.to_string_lossy());

            if k.starts_with("CARGO_TARGET_") && k.ends_with("_RUNNER") && !v.is_empty() {
                Some((TARGET_RUNNER.to_string(), v.to_string()))
            } else if k == CROSS_RUNNER && !v.is_empty() {
                Some((k.to_string(), v.to_string()))
            } else {
                None
            }
        })
        .collect::<HashMap<_, _>>();

    match env_mapping.get(CROSS_RUNNER) {
        Some(cross_runner) if cross_runner == "qemu-user" => {
            env_mapping.get(TARGET_RUNNER).and_then(|target_runner| {
                target_runner
                    .split_ascii_whitespace()
                    .last()
                    .map(|arch| format!("qemu-{}", get_qemu_target(arch)))
            })
        }
        Some(_) => None,
        None => env_mapping.get(TARGET_RUNNER).cloned(),
    }
}

const MEMQ_EXE_PATH: &str = env!("CARGO_BIN_EXE_memq");
const DEFAULT_CFG: [&str; 2] = ["-C", "./tests/valid_configs/empty_config.toml"];

/// Returns the [`Command`] of a binary invocation of memq with the given args.
pub fn memq_command(args: &[&str]) -> Command {
    let mut cmd = match cross_runner() {
        None => Command::new(MEMQ_EXE_PATH),
        Some(runner) => {
            let mut cmd = Command::new(runner);
            cmd.arg(MEMQ_EXE_PATH);
            cmd
        }
    };

    cmd.args(args);
    cmd
}

/// Like [`memq_command`], but pointed at an empty config so a user's own
/// config can't leak into tests.
pub fn no_cfg_memq_command() -> Command {
    memq_command(&DEFAULT_CFG)
}
