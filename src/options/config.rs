use std::path::PathBuf;

use serde::Deserialize;

use crate::units::DataUnit;

/// The config file. Every field is optional; arguments take precedence.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct GeneralConfig {
    pub unit: Option<DataUnit>,
    pub json: Option<bool>,
    pub meminfo_path: Option<PathBuf>,
}
