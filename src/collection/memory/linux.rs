//! Memory collection on Linux, via `/proc/meminfo`.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use super::{MemoryQuery, MemorySnapshot};
use crate::collection::error::{QueryError, QueryResult};

/// Where the kernel exposes memory information.
pub const MEMINFO_PATH: &str = "/proc/meminfo";

/// Reads a meminfo-formatted file, `/proc/meminfo` by default.
#[derive(Debug, Clone)]
pub struct LinuxMemoryQuery {
    meminfo_path: PathBuf,
}

impl Default for LinuxMemoryQuery {
    fn default() -> Self {
        Self {
            meminfo_path: PathBuf::from(MEMINFO_PATH),
        }
    }
}

impl LinuxMemoryQuery {
    /// Read from `path` instead of `/proc/meminfo`.
    pub fn with_path<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            meminfo_path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.meminfo_path
    }
}

impl MemoryQuery for LinuxMemoryQuery {
    fn query(&self) -> QueryResult<MemorySnapshot> {
        let file = File::open(&self.meminfo_path).map_err(|err| {
            QueryError::from_io(format_args!("error opening {}", self.meminfo_path.display()), err)
        })?;

        parse_meminfo(BufReader::new(file))
    }
}

/// Parses meminfo-formatted text into a [`MemorySnapshot`].
///
/// Only `MemTotal`, `MemFree`, `Buffers`, and `Cached` are read, each in kB.
/// Free memory is `MemTotal - MemFree - Buffers - Cached`. A missing or zero
/// `MemTotal` is an error; the other three count as zero if absent.
pub fn parse_meminfo<R: BufRead>(reader: R) -> QueryResult<MemorySnapshot> {
    let mut mem_total = None;
    let mut mem_free = None;
    let mut buffers = None;
    let mut cached = None;

    for line in reader.lines() {
        let line = line.map_err(|err| QueryError::from_io("error reading meminfo", err))?;

        let Some((label, value)) = line.split_once(':') else {
            continue;
        };

        // Matching the whole label keeps lines like `SwapCached:` out.
        let to_write = match label {
            "MemTotal" => &mut mem_total,
            "MemFree" => &mut mem_free,
            "Buffers" => &mut buffers,
            "Cached" => &mut cached,
            _ => {
                continue;
            }
        };

        *to_write = Some(parse_kib_value(label, value)?);
    }

    let physical_memory = match mem_total {
        None => return Err(QueryError::parse("no MemTotal entry in meminfo")),
        Some(0) => return Err(QueryError::parse("MemTotal reported zero")),
        Some(total) => total,
    };
    let free_memory = physical_memory
        .saturating_sub(mem_free.unwrap_or(0))
        .saturating_sub(buffers.unwrap_or(0))
        .saturating_sub(cached.unwrap_or(0));

    Ok(MemorySnapshot {
        physical_memory,
        free_memory,
    })
}

/// Parses the `<integer> kB` part of a meminfo line, returning bytes.
fn parse_kib_value(label: &str, value: &str) -> QueryResult<u64> {
    let Some(number) = value.split_whitespace().next() else {
        return Err(QueryError::parse(format!("{label} has no value")));
    };

    let kib: u64 = number
        .parse()
        .map_err(|err| QueryError::parse(format!("{label} value '{number}' is invalid: {err}")))?;

    kib.checked_mul(1024)
        .ok_or_else(|| QueryError::parse(format!("{label} value '{number}' is too large")))
}
