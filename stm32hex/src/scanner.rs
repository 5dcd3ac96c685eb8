//! The `scanner` module splits a raw byte buffer into record texts.
//!
//! A record starts at a ':' and ends at the next CRLF. Anything outside of a record
//! (blank lines, comments, stray bytes) is skipped without complaint.

/// Longest record text the scanner keeps, the rest of a longer line is dropped.
pub const LINE_BUFFER_LEN: usize = 512;

/// Single-pass iterator over the record texts of a buffer, created by [`scan`].
///
/// Each item is the record text from the ':' start code up to, not including, the
/// CRLF. The scanner state lives in the iterator itself, so independent buffers can
/// be scanned at the same time.
#[derive(Debug, Clone)]
pub struct RecordScanner<'a> {
    buffer: &'a [u8],
    pos: usize,
    inside_record: bool,
    start: usize,
}

/// Scan `buffer` for ':'...CRLF delimited records.
///
/// A ':' inside an unterminated record starts over (the partial record is dropped),
/// and a record that is still open at the end of the buffer is never yielded.
///
/// # Example
/// ```
/// use stm32hex::scan;
///
/// let buffer = b":020000040800F2\r\n:00000001FF\r\n";
/// let records: Vec<&[u8]> = scan(buffer).collect();
///
/// assert_eq!(records, [&b":020000040800F2"[..], &b":00000001FF"[..]]);
/// ```
#[must_use]
pub const fn scan(buffer: &[u8]) -> RecordScanner<'_> {
    RecordScanner {
        buffer,
        pos: 0,
        inside_record: false,
        start: 0,
    }
}

impl<'a> Iterator for RecordScanner<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&byte) = self.buffer.get(self.pos) {
            let i = self.pos;
            self.pos += 1;

            if byte == b':' {
                self.inside_record = true;
                self.start = i;
                continue;
            }

            if self.inside_record && byte == b'\n' && self.buffer[i - 1] == b'\r' {
                self.inside_record = false;
                let end = (i - 1).min(self.start + LINE_BUFFER_LEN);
                return Some(&self.buffer[self.start..end]);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_records_in_order() {
        // Arrange
        let buffer = b":020000040800F2\r\n:03000000000102FA\r\n:00000001FF\r\n";

        // Act
        let records: Vec<&[u8]> = scan(buffer).collect();

        // Assert
        assert_eq!(
            records,
            [
                &b":020000040800F2"[..],
                &b":03000000000102FA"[..],
                &b":00000001FF"[..]
            ]
        );
    }

    #[test]
    fn test_scan_skips_text_outside_records() {
        let buffer = b"header\r\n\r\n:00000001FF\r\ntrailer without colon\r\n";
        let records: Vec<&[u8]> = scan(buffer).collect();
        assert_eq!(records, [&b":00000001FF"[..]]);
    }

    #[test]
    fn test_scan_requires_crlf() {
        // LF-only line endings never terminate a record
        let buffer = b":00000001FF\n:00000001FF\n";
        assert_eq!(scan(buffer).count(), 0);

        // Lone CR does not either
        let buffer = b":00000001FF\r:00000001FF\r\n";
        let records: Vec<&[u8]> = scan(buffer).collect();
        assert_eq!(records, [&b":00000001FF"[..]]);
    }

    #[test]
    fn test_scan_last_start_code_wins() {
        let buffer = b":0300000000:00000001FF\r\n";
        let records: Vec<&[u8]> = scan(buffer).collect();
        assert_eq!(records, [&b":00000001FF"[..]]);
    }

    #[test]
    fn test_scan_drops_unterminated_record() {
        let buffer = b":020000040800F2\r\n:00000001FF";
        let records: Vec<&[u8]> = scan(buffer).collect();
        assert_eq!(records, [&b":020000040800F2"[..]]);
    }

    #[test]
    fn test_scan_truncates_long_lines() {
        // Arrange
        let mut buffer = vec![b':'];
        buffer.extend(std::iter::repeat_n(b'A', 700));
        buffer.extend_from_slice(b"\r\n");

        // Act
        let records: Vec<&[u8]> = scan(&buffer).collect();

        // Assert
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].len(), LINE_BUFFER_LEN);
        assert_eq!(records[0][0], b':');
    }

    #[test]
    fn test_scan_handles_leading_line_feed() {
        let buffer = b"\n:00000001FF\r\n";
        assert_eq!(scan(buffer).count(), 1);
    }

    #[test]
    fn test_scan_empty_buffer() {
        assert_eq!(scan(&[]).next(), None);
    }

    #[test]
    fn test_scanners_are_independent() {
        let a = b":00000001FF\r\n";
        let b = b":020000040800F2\r\n";

        let mut scan_a = scan(a);
        let mut scan_b = scan(b);

        assert_eq!(scan_b.next(), Some(&b":020000040800F2"[..]));
        assert_eq!(scan_a.next(), Some(&b":00000001FF"[..]));
        assert_eq!(scan_a.next(), None);
        assert_eq!(scan_b.next(), None);
    }
}
