mod args;
mod constants;
mod error;
mod nth_delimiter;
mod read_last_lines;
mod verify;
mod write_std_out;

// Re-export modules
pub use args::Args;
pub use constants::{NEWLINE, NUL};
pub use read_last_lines::{read_last_lines, read_last_lines_with_delimiter};
pub use verify::verify;
pub use write_std_out::{write_header, write_out};
