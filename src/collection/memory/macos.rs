//! Memory collection on macOS, via `sysctl` and the Mach host statistics.
//!
//! Code based on how [sysinfo](https://github.com/GuillaumeGomez/sysinfo) reads the same values.

use std::mem;

use libc::{
    c_int, c_void, vm_statistics64, CTL_HW, HOST_VM_INFO64, HOST_VM_INFO64_COUNT, HW_MEMSIZE,
};
use mach2::{
    kern_return::{kern_return_t, KERN_SUCCESS},
    port::mach_port_t,
    vm_types::vm_size_t,
};

use super::{MemoryQuery, MemorySnapshot};
use crate::collection::error::{QueryError, QueryResult};

extern "C" {
    fn mach_host_self() -> mach_port_t;
    fn host_page_size(host: mach_port_t, out_page_size: *mut vm_size_t) -> kern_return_t;
}

/// Page counts we care about from `HOST_VM_INFO64`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct VmPageCounts {
    active: u64,
    inactive: u64,
    wired: u64,
}

/// Reads `hw.memsize` and the host's VM page statistics.
#[derive(Debug, Default, Clone, Copy)]
pub struct MacosMemoryQuery;

impl MemoryQuery for MacosMemoryQuery {
    fn query(&self) -> QueryResult<MemorySnapshot> {
        let physical_memory = physical_memory()?;

        // SAFETY: Returns a send right to the host port; no preconditions.
        let host = unsafe { mach_host_self() };
        let page_size = page_size(host);
        let pages = vm_page_counts(host)?;

        Ok(snapshot_from_pages(physical_memory, pages, page_size))
    }
}

/// Free memory is whatever is not active, inactive, or wired.
fn snapshot_from_pages(
    physical_memory: u64, pages: VmPageCounts, page_size: u64,
) -> MemorySnapshot {
    let committed = pages
        .active
        .saturating_add(pages.inactive)
        .saturating_add(pages.wired)
        .saturating_mul(page_size);

    MemorySnapshot {
        physical_memory,
        free_memory: physical_memory.saturating_sub(committed),
    }
}

fn physical_memory() -> QueryResult<u64> {
    let mut mib: [c_int; 2] = [CTL_HW, HW_MEMSIZE];
    let mut memsize: u64 = 0;
    let mut length = mem::size_of::<u64>();

    // SAFETY: `memsize` and `length` are valid for writes and `length` matches
    // the buffer size. We only read `memsize` if the call succeeds.
    let ret = unsafe {
        libc::sysctl(
            mib.as_mut_ptr(),
            mib.len() as _,
            &mut memsize as *mut u64 as *mut c_void,
            &mut length,
            std::ptr::null_mut(),
            0,
        )
    };

    if ret != 0 {
        return Err(QueryError::unavailable(format!(
            "error getting physical memory: {}",
            std::io::Error::last_os_error()
        )));
    }

    if memsize == 0 {
        return Err(QueryError::unavailable(
            "error getting physical memory: hw.memsize reported zero",
        ));
    }

    Ok(memsize)
}

fn page_size(host: mach_port_t) -> u64 {
    let mut page_size: vm_size_t = 0;

    // SAFETY: `page_size` is valid for writes.
    if unsafe { host_page_size(host, &mut page_size) } == KERN_SUCCESS && page_size > 0 {
        page_size as u64
    } else {
        // SAFETY: sysconf has no preconditions.
        let fallback = unsafe { libc::sysconf(libc::_SC_PAGESIZE) };
        log::debug!("host_page_size failed, using sysconf page size {fallback}");
        fallback.max(0) as u64
    }
}

fn vm_page_counts(host: mach_port_t) -> QueryResult<VmPageCounts> {
    // SAFETY: `vm_statistics64` is plain old data; all zeroes is a valid value.
    let mut stats: vm_statistics64 = unsafe { mem::zeroed() };
    let mut count: u32 = HOST_VM_INFO64_COUNT as _;

    // SAFETY: `stats` is large enough for `count` integers and is only read on
    // success.
    let ret = unsafe {
        libc::host_statistics64(
            host,
            HOST_VM_INFO64,
            &mut stats as *mut vm_statistics64 as *mut _,
            &mut count,
        )
    };

    if ret != KERN_SUCCESS {
        return Err(QueryError::unavailable(format!(
            "error getting used memory: host_statistics64 returned {ret}"
        )));
    }

    Ok(VmPageCounts {
        active: stats.active_count as u64,
        inactive: stats.inactive_count as u64,
        wired: stats.wire_count as u64,
    })
}
