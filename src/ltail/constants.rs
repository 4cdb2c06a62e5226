/// Bytes requested per backward read when the caller does not pick a size.
pub const DEFAULT_CHUNK_SIZE: u64 = 1024;

pub const NEWLINE: u8 = b'\n';
pub const NUL: u8 = b'\0';

/// Number of mismatches a verification run keeps for reporting.
pub const MAX_REPORTED_FAILURES: usize = 16;

/// A progress line is logged every time this many checks have passed.
pub const PROGRESS_EVERY: u64 = 5000;
