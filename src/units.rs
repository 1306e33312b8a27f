//! Byte unit conversion and formatting.

use std::{fmt, str::FromStr};

use serde::{de, Deserialize, Deserializer};

pub const KIBI_LIMIT: u64 = 1024;
pub const MEBI_LIMIT: u64 = 1024 * 1024;
pub const GIBI_LIMIT: u64 = 1024 * 1024 * 1024;
pub const TEBI_LIMIT: u64 = 1024 * 1024 * 1024 * 1024;

pub const KIBI_LIMIT_F64: f64 = 1024.0;
pub const MEBI_LIMIT_F64: f64 = 1024.0 * 1024.0;
pub const GIBI_LIMIT_F64: f64 = 1024.0 * 1024.0 * 1024.0;
pub const TEBI_LIMIT_F64: f64 = 1024.0 * 1024.0 * 1024.0 * 1024.0;

/// A fixed byte unit. Every step is a factor of 1024.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DataUnit {
    #[default]
    B,
    KB,
    MB,
    GB,
}

impl DataUnit {
    /// How many bytes one of this unit is.
    #[inline]
    pub const fn factor(self) -> u64 {
        match self {
            DataUnit::B => 1,
            DataUnit::KB => KIBI_LIMIT,
            DataUnit::MB => MEBI_LIMIT,
            DataUnit::GB => GIBI_LIMIT,
        }
    }

    /// Converts `bytes` to this unit, truncating any remainder.
    #[inline]
    pub const fn to_unit(self, bytes: u64) -> u64 {
        bytes / self.factor()
    }

    /// Converts `value` of this unit back to bytes. Overflow is not checked.
    #[inline]
    pub const fn from_unit(self, value: u64) -> u64 {
        value * self.factor()
    }

    pub const fn suffix(self) -> &'static str {
        match self {
            DataUnit::B => "B",
            DataUnit::KB => "KB",
            DataUnit::MB => "MB",
            DataUnit::GB => "GB",
        }
    }
}

impl fmt::Display for DataUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

impl FromStr for DataUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "b" => Ok(DataUnit::B),
            "kb" | "kib" => Ok(DataUnit::KB),
            "mb" | "mib" => Ok(DataUnit::MB),
            "gb" | "gib" => Ok(DataUnit::GB),
            _ => Err(format!(
                "'{s}' is not a valid unit, use one of 'b', 'kb', 'mb', or 'gb'"
            )),
        }
    }
}

impl<'de> Deserialize<'de> for DataUnit {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(de::Error::custom)
    }
}

/// Returns a tuple containing the value and the unit in bytes.  In units of
/// 1024. This only supports up to a tebi.
#[inline]
pub fn binary_bytes(bytes: u64) -> (f64, &'static str) {
    match bytes {
        b if b < KIBI_LIMIT => (bytes as f64, "B"),
        b if b < MEBI_LIMIT => (bytes as f64 / KIBI_LIMIT_F64, "KiB"),
        b if b < GIBI_LIMIT => (bytes as f64 / MEBI_LIMIT_F64, "MiB"),
        b if b < TEBI_LIMIT => (bytes as f64 / GIBI_LIMIT_F64, "GiB"),
        _ => (bytes as f64 / TEBI_LIMIT_F64, "TiB"),
    }
}

/// Formats `bytes` with the closest binary prefix and one decimal place.
pub fn binary_bytes_string(bytes: u64) -> String {
    let (value, unit) = binary_bytes(bytes);
    if unit == "B" {
        format!("{value:.0}{unit}")
    } else {
        format!("{value:.1}{unit}")
    }
}
