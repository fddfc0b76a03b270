#![no_std]
pub mod errors;
pub mod storage_keys;
pub mod types;
pub mod validation;

pub use errors::Error;
pub use storage_keys::*;
pub use types::*;

/// Seconds in one billing hour; `end_time = start_time + duration_hours * SECONDS_PER_HOUR`.
pub const SECONDS_PER_HOUR: u64 = 3600;

// Config
pub const MAX_URI_LENGTH: u32 = 256;
