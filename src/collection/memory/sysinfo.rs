//! Collecting memory data using sysinfo, for targets without a native path.

use sysinfo::{MemoryRefreshKind, RefreshKind, System};

use super::{MemoryQuery, MemorySnapshot};
use crate::collection::error::{QueryError, QueryResult};

/// Asks sysinfo for total and available memory.
#[derive(Debug, Default, Clone, Copy)]
pub struct SysinfoMemoryQuery;

impl MemoryQuery for SysinfoMemoryQuery {
    fn query(&self) -> QueryResult<MemorySnapshot> {
        let sys = System::new_with_specifics(
            RefreshKind::nothing().with_memory(MemoryRefreshKind::nothing().with_ram()),
        );

        let physical_memory = sys.total_memory();
        if physical_memory == 0 {
            return Err(QueryError::unavailable(
                "error getting physical memory: sysinfo reported zero",
            ));
        }

        Ok(MemorySnapshot {
            physical_memory,
            free_memory: sys.available_memory().min(physical_memory),
        })
    }
}
