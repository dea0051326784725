//! Point-in-time metrics of a log file.

use std::io::{self, Read};

use crate::BYTES_IN_MEGABYTE;

const READ_BUFFER_SIZE: usize = 64 * 1024;

/// Size and line count of a log file as observed at one moment.
///
/// A snapshot is never refreshed. After a rotation, open a new
/// [`LogHandle`](crate::LogHandle) to observe the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LogSnapshot {
    size_bytes: u64,
    line_count: u64,
}

impl LogSnapshot {
    pub fn new(size_bytes: u64, line_count: u64) -> Self {
        Self {
            size_bytes,
            line_count,
        }
    }

    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    /// Size in decimal megabytes (1 MB = 1,000,000 bytes).
    pub fn size_megabytes(&self) -> f64 {
        self.size_bytes as f64 / BYTES_IN_MEGABYTE as f64
    }

    pub fn line_count(&self) -> u64 {
        self.line_count
    }
}

/// Count the lines yielded by `reader`.
///
/// Lines are delimited by `\n` over raw bytes. A trailing fragment without a
/// final `\n` counts as one line, so `"a\nb"` and `"a\nb\n"` both have two
/// lines and an empty input has none.
pub fn count_lines<R: Read>(mut reader: R) -> io::Result<u64> {
    let mut buf = vec![0u8; READ_BUFFER_SIZE];
    let mut newlines = 0u64;
    let mut last_byte = None;

    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        let chunk = &buf[..n];
        newlines += chunk.iter().filter(|&&b| b == b'\n').count() as u64;
        last_byte = chunk.last().copied();
    }

    match last_byte {
        Some(b'\n') | None => Ok(newlines),
        Some(_) => Ok(newlines + 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn lines(data: &[u8]) -> u64 {
        count_lines(Cursor::new(data)).expect("in-memory read cannot fail")
    }

    #[test]
    fn test_empty_input_has_no_lines() {
        assert_eq!(lines(b""), 0);
    }

    #[test]
    fn test_unterminated_final_fragment_counts() {
        assert_eq!(lines(b"line 0\nline 1\n line 2"), 3);
        assert_eq!(lines(b"single"), 1);
    }

    #[test]
    fn test_terminated_final_line_is_not_double_counted() {
        assert_eq!(lines(b"line 0\nline 1\n"), 2);
        assert_eq!(lines(b"\n"), 1);
        assert_eq!(lines(b"\n\n\n"), 3);
    }

    #[test]
    fn test_crlf_counts_once() {
        assert_eq!(lines(b"a\r\nb\r\n"), 2);
    }

    #[test]
    fn test_non_utf8_content_is_counted() {
        assert_eq!(lines(&[0xff, 0xfe, b'\n', 0x80]), 2);
    }

    #[test]
    fn test_lines_spanning_buffer_boundaries() {
        let mut data = vec![b'x'; READ_BUFFER_SIZE - 1];
        data.push(b'\n');
        data.extend(std::iter::repeat_n(b'y', READ_BUFFER_SIZE + 10));
        assert_eq!(lines(&data), 2);
    }

    #[test]
    fn test_size_in_decimal_megabytes() {
        let snapshot = LogSnapshot::new(12_000_000, 0);
        assert_eq!(snapshot.size_megabytes(), 12.0);

        let snapshot = LogSnapshot::new(45, 3);
        assert_eq!(snapshot.size_megabytes(), 45.0 / 1_000_000.0);
        assert_eq!(snapshot.line_count(), 3);
    }
}
