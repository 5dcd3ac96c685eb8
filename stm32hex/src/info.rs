//! Human readable per-record report of an Intel HEX stream, as printed by `hexinfo`.

use crate::record::{Record, RecordType};
use crate::scanner::scan;

/// Longest raw record text echoed back for a record with a bad checksum.
const RAW_TEXT_LEN: usize = 511;

const fn address_label(rtype: RecordType) -> Option<&'static str> {
    match rtype {
        RecordType::Data | RecordType::EndOfFile => None,
        RecordType::ExtendedSegmentAddress => Some("extended segment address"),
        RecordType::StartSegmentAddress => Some("start segment address"),
        RecordType::ExtendedLinearAddress => Some("extended linear address"),
        RecordType::StartLinearAddress => Some("start linear address"),
    }
}

/// Describe a single record text. `index` is the 1-based position in its stream.
///
/// # Example
/// ```
/// use stm32hex::describe;
///
/// assert_eq!(
///     describe(1, b":00000001FF"),
///     "record #1: type EndOfFile, len 0, offset 0x0000, checksum 0xFF (valid)"
/// );
/// ```
#[must_use]
pub fn describe(index: usize, text: &[u8]) -> String {
    let decoded = match Record::decode(text) {
        Ok(decoded) => decoded,
        Err(e) => return format!("record #{index}: {}", e.kind()),
    };
    let record = &decoded.record;

    let mut line = format!(
        "record #{index}: type {:?}, len {}, offset 0x{:04X}, checksum 0x{:02X}",
        record.rtype(),
        record.length(),
        record.address(),
        decoded.checksum,
    );

    if let Err(e) = decoded.verify() {
        let raw = &text[..text.len().min(RAW_TEXT_LEN)];
        line.push_str(&format!(
            " (invalid)\n  warning: {}\n  raw: {}",
            e.kind(),
            String::from_utf8_lossy(raw)
        ));
        return line;
    }
    line.push_str(" (valid)");

    if let (Some(label), Some(address)) = (address_label(record.rtype()), record.absolute_address())
    {
        line.push_str(&format!("\n  (0x{address:08X}) {label}"));
    }

    line
}

/// Describe every record found in `buffer`.
#[must_use]
pub fn report(buffer: &[u8]) -> Vec<String> {
    scan(buffer)
        .enumerate()
        .map(|(i, text)| describe(i + 1, text))
        .collect()
}
