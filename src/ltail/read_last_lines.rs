use memchr::memchr_iter;
use std::{fs, fs::File, io, os::unix::fs::FileExt, path::Path};
use tracing::{debug, trace};

use crate::ltail::{
    constants::NEWLINE,
    error::{Result, TailError},
    nth_delimiter::find_nth_delimiter_from_end,
};

/// Returns the last `num_lines` newline-separated lines of the file at `path`,
/// trimmed of surrounding whitespace. Files with fewer lines come back whole.
///
/// The file is read backward `chunk_size` bytes at a time and never loaded in
/// full unless the requested lines span all of it.
pub fn read_last_lines(path: impl AsRef<Path>, num_lines: u64, chunk_size: u64) -> Result<String> {
    read_last_lines_with_delimiter(path, num_lines, chunk_size, NEWLINE)
}

/// [`read_last_lines`] with an arbitrary single-byte line delimiter.
///
/// The delimiter is trimmed from both ends of the result along with whitespace.
pub fn read_last_lines_with_delimiter(
    path: impl AsRef<Path>,
    num_lines: u64,
    chunk_size: u64,
    delimiter: u8,
) -> Result<String> {
    let path = path.as_ref();

    if num_lines == 0 {
        return Err(TailError::InvalidArgument(
            "number of lines must be positive".to_string(),
        ));
    }
    if chunk_size == 0 {
        return Err(TailError::InvalidArgument(
            "chunk size must be positive".to_string(),
        ));
    }

    let metadata = fs::metadata(path).map_err(|e| TailError::from_io(path, e))?;
    if !metadata.is_file() {
        return Err(TailError::NotAFile {
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path).map_err(|e| TailError::from_io(path, e))?;
    let tail = collect_tail(&file, metadata.len(), num_lines, chunk_size, delimiter)
        .map_err(|e| TailError::from_io(path, e))?;
    drop(file);

    trace!(path = %path.display(), bytes = tail.len(), "collected tail");

    let text = String::from_utf8_lossy(&tail);
    let terminator = char::from(delimiter);
    Ok(text
        .trim_matches(|c: char| c.is_whitespace() || c == terminator)
        .to_string())
}

/// Walks `file` backward from `size` and returns the raw bytes of the tail,
/// starting at the `num_lines`-th delimiter from the end (inclusive) or at
/// byte 0 if there are not that many.
fn collect_tail(
    file: &File,
    size: u64,
    num_lines: u64,
    chunk_size: u64,
    delimiter: u8,
) -> io::Result<Vec<u8>> {
    let mut pos: u64 = size;
    let mut lines_found: u64 = 0;

    // Chunks in read order, i.e. last chunk of the file first
    let mut pieces: Vec<Vec<u8>> = Vec::new();
    let mut chunk_buffer: Vec<u8> = vec![0; chunk_size.min(size) as usize];

    while pos > 0 && lines_found < num_lines {
        let read_size = chunk_size.min(pos);

        // The final read is shortened so it stops at byte 0
        pos -= read_size;

        let chunk = &mut chunk_buffer[..read_size as usize];
        file.read_exact_at(chunk, pos)?;
        let chunk = &chunk[..];

        let lines = memchr_iter(delimiter, chunk).count() as u64;
        debug!(offset = pos, len = read_size, lines, "read chunk");

        if lines == 0 {
            pieces.push(chunk.to_vec());
            continue;
        }

        if lines_found + lines >= num_lines {
            // The last boundary we need is inside this chunk
            let remaining = num_lines - lines_found;
            let start = find_nth_delimiter_from_end(chunk, delimiter, remaining);
            pieces.push(chunk[start..].to_vec());
        } else {
            pieces.push(chunk.to_vec());
        }

        lines_found += lines;
    }

    pieces.reverse();
    Ok(pieces.concat())
}
