use clap::Parser;
use std::{env::home_dir, io, process::ExitCode};
use tracing_subscriber::EnvFilter;

mod ltail;
use ltail::{read_last_lines_with_delimiter, verify, write_header, write_out, Args, NEWLINE, NUL};

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ltail=warn")),
        )
        .init();

    let args: Args = Args::parse();

    // Collect inputfiles, expanding ~ to home directory if needed
    let input_files = args
        .filename
        .iter()
        .map(|in_file| {
            if in_file.starts_with('~') {
                if let Some(home_path) = home_dir() {
                    return in_file.replacen('~', &home_path.to_string_lossy(), 1);
                }
            }
            in_file.clone()
        })
        .collect::<Vec<String>>();

    if let Some(max_chunk_size) = args.verify {
        return run_verify(&input_files, args.num_lines, max_chunk_size);
    }

    let line_terminator: u8 = if args.zero_terminated { NUL } else { NEWLINE };
    let print_headers = (input_files.len() > 1 || args.verbose) && !args.quiet;
    let mut stdout = io::stdout().lock();
    let mut failed = false;

    // Process each input file
    for (idx, input_file) in input_files.iter().enumerate() {
        let tail = match read_last_lines_with_delimiter(
            input_file,
            args.num_lines,
            args.chunk_size,
            line_terminator,
        ) {
            Ok(tail) => tail,
            Err(e) => {
                eprintln!("ltail: {}", e);
                failed = true;
                continue;
            }
        };

        if print_headers {
            write_header(&mut stdout, input_file, idx == 0)?;
        }
        write_out(&mut stdout, &tail, line_terminator)?;
    }

    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn run_verify(
    input_files: &[String],
    max_lines: u64,
    max_chunk_size: u64,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let mut all_ok = true;

    for input_file in input_files {
        let report = match verify(input_file, max_lines, max_chunk_size) {
            Ok(report) => report,
            Err(e) => {
                eprintln!("ltail: {}", e);
                all_ok = false;
                continue;
            }
        };

        println!(
            "{}: {} successful of {}",
            input_file, report.passed, report.total
        );
        for mismatch in &report.failures {
            println!(
                "  mismatch at n={} chunk_size={}: expected {:?}, got {:?}",
                mismatch.num_lines, mismatch.chunk_size, mismatch.expected, mismatch.actual
            );
        }

        all_ok &= report.is_success();
    }

    Ok(if all_ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
