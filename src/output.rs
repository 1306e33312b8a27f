//! Turning a snapshot into what gets printed.

use serde::Serialize;

use crate::{
    collection::memory::MemorySnapshot,
    units::{binary_bytes_string, DataUnit},
};

#[derive(Debug, Serialize)]
struct JsonSnapshot {
    physical_memory: u64,
    free_memory: u64,
}

/// Renders `snapshot` as text, or as JSON if `json` is set.
///
/// With a `unit`, values are whole numbers of that unit (truncated). Without
/// one, text uses the closest binary prefix and JSON uses bytes.
pub fn render(
    snapshot: &MemorySnapshot, unit: Option<DataUnit>, json: bool,
) -> serde_json::Result<String> {
    if json {
        let unit = unit.unwrap_or_default();
        let out = JsonSnapshot {
            physical_memory: unit.to_unit(snapshot.physical_memory),
            free_memory: unit.to_unit(snapshot.free_memory),
        };

        return serde_json::to_string(&out);
    }

    let format = |bytes: u64| match unit {
        Some(unit) => format!("{}{}", unit.to_unit(bytes), unit),
        None => binary_bytes_string(bytes),
    };

    Ok(format!(
        "Physical memory: {}\nFree memory:     {}",
        format(snapshot.physical_memory),
        format(snapshot.free_memory)
    ))
}
