//! Host data collection. Only memory for now.

pub mod diagnostics;
pub mod error;
pub mod memory;
