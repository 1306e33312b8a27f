//! Memory data collection.

use serde::Serialize;

use super::{diagnostics::DiagnosticSink, error::QueryResult};

cfg_if::cfg_if! {
    if #[cfg(target_os = "linux")] {
        pub mod linux;
        pub use self::linux::LinuxMemoryQuery as NativeMemoryQuery;
    } else if #[cfg(target_os = "macos")] {
        pub mod macos;
        pub use self::macos::MacosMemoryQuery as NativeMemoryQuery;
    } else if #[cfg(target_os = "windows")] {
        pub mod windows;
        pub use self::windows::WindowsMemoryQuery as NativeMemoryQuery;
    } else {
        pub mod sysinfo;
        pub use self::sysinfo::SysinfoMemoryQuery as NativeMemoryQuery;
    }
}

/// A point-in-time reading of the host's memory. Stale as soon as it is taken.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MemorySnapshot {
    /// Total installed RAM, in bytes.
    pub physical_memory: u64,

    /// RAM not committed to active, wired, or cached use, in bytes. What
    /// counts as "free" depends on the platform.
    pub free_memory: u64,
}

impl MemorySnapshot {
    /// Return the bytes in use.
    #[inline]
    pub fn used_memory(&self) -> u64 {
        self.physical_memory.saturating_sub(self.free_memory)
    }

    /// Return the free percentage, or 0 if the total is 0.
    #[inline]
    pub fn free_percentage(&self) -> f64 {
        if self.physical_memory == 0 {
            return 0.0;
        }

        let free = self.free_memory as f64;
        let total = self.physical_memory as f64;

        free / total * 100.0
    }
}

/// A source of [`MemorySnapshot`]s for the current host.
pub trait MemoryQuery {
    fn query(&self) -> QueryResult<MemorySnapshot>;
}

/// Runs `query` and hands any failure to `sink` before returning it.
pub fn query_with_sink(
    query: &dyn MemoryQuery, sink: &dyn DiagnosticSink,
) -> QueryResult<MemorySnapshot> {
    query.query().inspect_err(|err| sink.report(err))
}

/// Queries memory with the native facility of the build target.
pub fn query_memory() -> QueryResult<MemorySnapshot> {
    NativeMemoryQuery::default().query()
}
