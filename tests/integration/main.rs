//! Integration tests for memq.

mod util;

mod arg_tests;
mod invalid_config_tests;
mod valid_config_tests;

#[cfg(target_os = "linux")]
mod meminfo_tests;
