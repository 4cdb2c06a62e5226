use std::{fs, path::Path};
use tracing::{info, warn};

use crate::ltail::{
    constants::{MAX_REPORTED_FAILURES, PROGRESS_EVERY},
    error::{Result, TailError},
    read_last_lines,
};

/// One `(num_lines, chunk_size)` pair whose result differed from a full read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub num_lines: u64,
    pub chunk_size: u64,
    pub expected: String,
    pub actual: String,
}

#[derive(Debug, Default)]
pub struct VerifyReport {
    pub total: u64,
    pub passed: u64,
    /// First few mismatches only, see `MAX_REPORTED_FAILURES`.
    pub failures: Vec<Mismatch>,
}

impl VerifyReport {
    pub fn is_success(&self) -> bool {
        self.passed == self.total
    }
}

/// Cross-checks [`read_last_lines`] against a whole-file read of `path` for
/// every line count in `1..=max_lines` and chunk size in `1..=max_chunk_size`.
pub fn verify(path: impl AsRef<Path>, max_lines: u64, max_chunk_size: u64) -> Result<VerifyReport> {
    let path = path.as_ref();

    if max_lines == 0 || max_chunk_size == 0 {
        return Err(TailError::InvalidArgument(
            "verification ranges must be positive".to_string(),
        ));
    }

    let content = fs::read(path).map_err(|e| TailError::from_io(path, e))?;
    let content = String::from_utf8_lossy(&content);
    let pieces: Vec<&str> = content.split('\n').collect();

    let mut report = VerifyReport {
        total: max_lines * max_chunk_size,
        ..Default::default()
    };

    for num_lines in 1..=max_lines {
        let start = pieces.len().saturating_sub(num_lines as usize);
        let expected = pieces[start..].join("\n").trim().to_string();

        for chunk_size in 1..=max_chunk_size {
            let actual = read_last_lines(path, num_lines, chunk_size)?;

            if actual == expected {
                report.passed += 1;
                if report.passed % PROGRESS_EVERY == 0 {
                    info!(passed = report.passed, total = report.total, "verification progress");
                }
            } else {
                warn!(num_lines, chunk_size, "result differs from full read");
                if report.failures.len() < MAX_REPORTED_FAILURES {
                    report.failures.push(Mismatch {
                        num_lines,
                        chunk_size,
                        expected: expected.clone(),
                        actual,
                    });
                }
            }
        }
    }

    info!(passed = report.passed, total = report.total, "verification finished");

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn realistic_file_has_no_mismatches() {
        let content = "Lorem ipsum dolor sit amet, consectetur adipiscing elit.\n\
                       Sed do eiusmod tempor incididunt ut labore.\n\
                       \n\
                       Ut enim ad minim veniam, quis nostrud exercitation.\n\
                       Duis aute irure dolor in reprehenderit.\n\
                       Excepteur sint occaecat cupidatat non proident.\n\
                       Sunt in culpa qui officia deserunt mollit anim id est laborum.";
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();

        let report = verify(file.path(), 10, content.len() as u64 + 8).unwrap();

        assert_eq!(report.total, 10 * (content.len() as u64 + 8));
        assert!(report.is_success(), "{:?}", report.failures);
        assert!(report.failures.is_empty());
    }

    #[test]
    fn missing_file_fails_before_checking() {
        let dir = tempfile::tempdir().unwrap();
        let result = verify(dir.path().join("nope.txt"), 3, 3);

        assert!(matches!(result, Err(TailError::NotFound { .. })));
    }

    #[test]
    fn zero_range_is_rejected() {
        let file = NamedTempFile::new().unwrap();

        assert!(matches!(
            verify(file.path(), 0, 10),
            Err(TailError::InvalidArgument(_))
        ));
    }
}
