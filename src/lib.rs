//! A small library to query how much physical memory the host has, and how
//! much of it is free.
//!
//! Linux reads `/proc/meminfo`, macOS asks `sysctl` and the Mach host
//! statistics, and Windows uses `GlobalMemoryStatusEx`. Other targets fall
//! back to [sysinfo](https://docs.rs/sysinfo).
//!
//! ```no_run
//! let snapshot = memquery::query_memory()?;
//! println!("{} of {} bytes free", snapshot.free_memory, snapshot.physical_memory);
//! # Ok::<(), memquery::QueryError>(())
//! ```

pub mod collection;
pub mod options;
pub mod output;
pub mod units;

pub mod utils {
    pub mod logging;
}

pub use collection::{
    diagnostics::{DiagnosticSink, LogSink, StderrSink},
    error::{QueryError, QueryResult},
    memory::{query_memory, query_with_sink, MemoryQuery, MemorySnapshot, NativeMemoryQuery},
};
pub use units::DataUnit;

/// Builds the native query for this target, honouring a meminfo override.
#[cfg(target_os = "linux")]
pub fn native_query(meminfo_path: Option<&std::path::Path>) -> NativeMemoryQuery {
    match meminfo_path {
        Some(path) => NativeMemoryQuery::with_path(path),
        None => NativeMemoryQuery::default(),
    }
}

/// Builds the native query for this target. A meminfo override only means
/// something on Linux, so it is ignored here.
#[cfg(not(target_os = "linux"))]
pub fn native_query(meminfo_path: Option<&std::path::Path>) -> NativeMemoryQuery {
    if let Some(path) = meminfo_path {
        log::debug!("ignoring meminfo path {} on this platform", path.display());
    }

    NativeMemoryQuery::default()
}
