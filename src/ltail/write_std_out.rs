use std::io::Write;

/// Write `text` followed by `line_terminator`. Nothing is written for an
/// empty result so empty files produce no output.
pub fn write_out<W: Write>(out: &mut W, text: &str, line_terminator: u8) -> std::io::Result<()> {
    if text.is_empty() {
        return Ok(());
    }

    out.write_all(text.as_bytes())?;
    out.write_all(&[line_terminator])?;
    out.flush()
}

/// Header printed before each file when several files are tailed.
pub fn write_header<W: Write>(out: &mut W, file_name: &str, first: bool) -> std::io::Result<()> {
    let pre_new_line: &str = if first { "" } else { "\n" };
    writeln!(out, "{}==> {} <==", pre_new_line, file_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_terminator() {
        let mut out = Vec::new();
        write_out(&mut out, "d\ne", b'\n').unwrap();
        assert_eq!(out, b"d\ne\n");

        let mut out = Vec::new();
        write_out(&mut out, "a\0b", b'\0').unwrap();
        assert_eq!(out, b"a\0b\0");
    }

    #[test]
    fn empty_result_writes_nothing() {
        let mut out = Vec::new();
        write_out(&mut out, "", b'\n').unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn headers_are_separated() {
        let mut out = Vec::new();
        write_header(&mut out, "a.log", true).unwrap();
        write_header(&mut out, "b.log", false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "==> a.log <==\n\n==> b.log <==\n");
    }
}
