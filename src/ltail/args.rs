use std::env;

use clap::Parser;

use crate::ltail::constants::DEFAULT_CHUNK_SIZE;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const ABOUT: &str = "Print the last lines of files, reading them backward in fixed-size chunks.";
const USAGE: &str = "\n  ltail [OPTIONS] <FILENAME>...\n";
const EXAMPLES: &str = "\n\x1b[1;4mEXAMPLES:\x1b[0m\n  ltail -n 20 file.txt\n  ltail -n 5 -b 64 app.log\n  ltail -n 20 --verify 1024 data.txt\n";

#[derive(Parser, Debug)]
#[command(version = VERSION, about = ABOUT,
    override_usage = format!("{}{}", USAGE, EXAMPLES))]
pub struct Args {
    #[arg(required = true)]
    pub filename: Vec<String>,

    /// Output the last NUM lines
    #[arg(short, long = "lines", default_value_t = 10,
        value_parser = clap::value_parser!(u64).range(1..))]
    pub num_lines: u64,

    /// Read the file backward BYTES at a time
    #[arg(short = 'b', long, default_value_t = DEFAULT_CHUNK_SIZE,
        value_parser = clap::value_parser!(u64).range(1..))]
    pub chunk_size: u64,

    /// The line delimiter is NUL, not newline
    #[arg(short = 'z', long, default_value_t = false)]
    pub zero_terminated: bool,

    /// Always output headers giving file names
    #[arg(short = 'v', long, default_value_t = false)]
    pub verbose: bool,

    /// Do not output headers giving file names
    #[arg(short = 'q', long = "quiet", alias = "silent", default_value_t = false)]
    pub quiet: bool,

    /// Instead of printing, check every line count up to NUM and every chunk
    /// size up to MAX_CHUNK against a full read of each file
    #[arg(long = "verify", value_name = "MAX_CHUNK",
        value_parser = clap::value_parser!(u64).range(1..))]
    pub verify: Option<u64>,
}
