use memchr::memrchr_iter;

/// Index of the `n`-th `delimiter` counted from the end of `text`, where
/// `n = 1` is the last occurrence. `None` if `n` is zero or `text` holds
/// fewer than `n` delimiters.
pub fn nth_delimiter_from_end(text: &[u8], delimiter: u8, n: u64) -> Option<usize> {
    let skip = n.checked_sub(1)?;
    let skip = usize::try_from(skip).ok()?;

    memrchr_iter(delimiter, text).nth(skip)
}

/// Same walk as [`nth_delimiter_from_end`], falling back to 0 (start of
/// `text`) when the delimiter does not occur often enough.
///
/// Callers only ask for a count the chunk is known to hold, so the fallback
/// is never taken on the read path.
pub fn find_nth_delimiter_from_end(text: &[u8], delimiter: u8, n: u64) -> usize {
    nth_delimiter_from_end(text, delimiter, n).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_from_end_is_last_occurrence() {
        assert_eq!(find_nth_delimiter_from_end(b"a\nb\nc", b'\n', 1), 3);
        assert_eq!(find_nth_delimiter_from_end(b"a\nb\nc\n", b'\n', 1), 5);
    }

    #[test]
    fn walks_backward_past_skipped_delimiters() {
        let text = b"a\nb\nc\nd\ne";
        assert_eq!(find_nth_delimiter_from_end(text, b'\n', 2), 5);
        assert_eq!(find_nth_delimiter_from_end(text, b'\n', 4), 1);
    }

    #[test]
    fn delimiter_at_index_zero_is_found() {
        assert_eq!(nth_delimiter_from_end(b"\nabc", b'\n', 1), Some(0));
        assert_eq!(nth_delimiter_from_end(b"\n\n", b'\n', 2), Some(0));
    }

    #[test]
    fn too_few_delimiters() {
        assert_eq!(nth_delimiter_from_end(b"a\nb", b'\n', 2), None);
        assert_eq!(nth_delimiter_from_end(b"abc", b'\n', 1), None);
        assert_eq!(nth_delimiter_from_end(b"", b'\n', 1), None);
        assert_eq!(find_nth_delimiter_from_end(b"a\nb", b'\n', 2), 0);
    }

    #[test]
    fn zero_is_not_a_position() {
        assert_eq!(nth_delimiter_from_end(b"a\nb", b'\n', 0), None);
        assert_eq!(find_nth_delimiter_from_end(b"a\nb", b'\n', 0), 0);
    }

    #[test]
    fn custom_delimiter() {
        assert_eq!(nth_delimiter_from_end(b"a\0b\0c", b'\0', 2), Some(1));
        assert_eq!(nth_delimiter_from_end(b"a\nb\0c", b'\0', 2), None);
    }
}
