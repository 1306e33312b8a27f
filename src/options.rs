//! How to handle config files and arguments.

pub mod args;
pub mod config;
mod error;

use std::{
    fs,
    path::{Path, PathBuf},
};

pub use self::error::{OptionError, OptionResult};
use self::{args::Args, config::Config};
use crate::units::DataUnit;

/// Default config file location, relative to the user's config directory.
pub const DEFAULT_CONFIG_FILE_LOCATION: &str = "memquery/memquery.toml";

/// The options for a single run, after merging arguments over the config file.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunOptions {
    /// A fixed unit to print in, or `None` for a human-readable prefix.
    pub unit: Option<DataUnit>,
    pub json: bool,
    pub meminfo_path: Option<PathBuf>,
}

/// Returns the config path to use. An explicit path always wins; otherwise
/// the default location is used only if a file exists there.
pub fn get_config_path(override_config_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(conf_loc) = override_config_path {
        return Some(conf_loc.to_path_buf());
    }

    let path = dirs::config_dir()?.join(DEFAULT_CONFIG_FILE_LOCATION);
    path.exists().then_some(path)
}

/// Reads and parses the config at `config_path`, or returns the default config
/// if there is none. Unlike some tools, this never writes a config file.
pub fn get_config(config_path: Option<&Path>) -> OptionResult<Config> {
    let Some(path) = config_path else {
        return Ok(Config::default());
    };

    let config_string = fs::read_to_string(path).map_err(|err| {
        OptionError::config(format!(
            "unable to read the config file at '{}': {err}",
            path.display()
        ))
    })?;

    Ok(toml_edit::de::from_str(&config_string)?)
}

/// Merges `args` over `config`.
pub fn init_run_options(args: &Args, config: &Config) -> OptionResult<RunOptions> {
    let unit = match &args.output_args.unit {
        Some(unit) => Some(
            unit.parse::<DataUnit>()
                .map_err(|_| OptionError::invalid_arg_value("unit"))?,
        ),
        None => config.general.unit,
    };

    let json = args.output_args.json || config.general.json.unwrap_or(false);

    let meminfo_path = args
        .source_args
        .meminfo_path
        .clone()
        .or_else(|| config.general.meminfo_path.clone());

    Ok(RunOptions {
        unit,
        json,
        meminfo_path,
    })
}
