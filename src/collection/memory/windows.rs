use std::mem::size_of;

use windows::Win32::System::SystemInformation::{GlobalMemoryStatusEx, MEMORYSTATUSEX};

use super::{MemoryQuery, MemorySnapshot};
use crate::collection::error::{QueryError, QueryResult};

const MEMORYSTATUSEX_SIZE: u32 = size_of::<MEMORYSTATUSEX>() as _;

/// Reads the global memory status.
#[derive(Debug, Default, Clone, Copy)]
pub struct WindowsMemoryQuery;

impl MemoryQuery for WindowsMemoryQuery {
    fn query(&self) -> QueryResult<MemorySnapshot> {
        let mut status = MEMORYSTATUSEX {
            dwLength: MEMORYSTATUSEX_SIZE,
            ..Default::default()
        };

        // SAFETY: `dwLength` is set as the API requires, and we only touch the
        // rest of `status` if the call succeeds.
        unsafe { GlobalMemoryStatusEx(&mut status) }
            .map_err(|err| QueryError::unavailable(format!("error getting physical memory: {err}")))?;

        Ok(MemorySnapshot {
            physical_memory: status.ullTotalPhys,
            free_memory: status.ullAvailPhys,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn host_reports_memory() {
        let snapshot = WindowsMemoryQuery.query().unwrap();

        assert!(snapshot.physical_memory > 0);
        assert!(snapshot.free_memory <= snapshot.physical_memory);
    }
}
