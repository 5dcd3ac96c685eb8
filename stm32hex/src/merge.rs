//! The `merge` module concatenates several Intel HEX streams into one.
//!
//! Records are passed through as text, so the output keeps the exact digits of the
//! inputs. Only end-of-file and start linear address records are removed, and a
//! single end-of-file record closes the merged output.

use crate::record::{RECORD_END, RecordType, record_type_of};
use crate::scanner::scan;
use std::error::Error;
use std::io::Write;

/// End-of-file record written once at the end of a merged stream.
pub const EOF_RECORD: &str = ":00000001FF\r\n";

/// What the merger does with a single record.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MergeAction {
    Keep,
    Drop,
}

/// Decide whether a record text is carried into the merged output.
///
/// Only the type field is read, the checksum is not verified.
///
/// # Example
/// ```
/// use stm32hex::{MergeAction, classify};
///
/// assert_eq!(classify(b":03000000000102FA"), MergeAction::Keep);
/// assert_eq!(classify(b":00000001FF"), MergeAction::Drop);
/// ```
#[must_use]
pub fn classify(text: &[u8]) -> MergeAction {
    match record_type_of(text) {
        Some(
            RecordType::Data
            | RecordType::ExtendedSegmentAddress
            | RecordType::StartSegmentAddress
            | RecordType::ExtendedLinearAddress,
        ) => MergeAction::Keep,
        Some(RecordType::EndOfFile | RecordType::StartLinearAddress) | None => MergeAction::Drop,
    }
}

/// Merge the records of all `streams` into `writer`, in order, and close the output
/// with a single end-of-file record.
///
/// Returns the number of records passed through (the closing record not counted).
///
/// # Errors
/// Returns an error if the writer fails.
///
/// # Example
/// ```
/// use stm32hex::merge;
///
/// let a = b":0100000011EE\r\n:00000001FF\r\n";
/// let b = b":0100100022CD\r\n:00000001FF\r\n";
/// let mut out = Vec::new();
///
/// let count = merge([&a[..], &b[..]], &mut out).unwrap();
///
/// assert_eq!(count, 2);
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     ":0100000011EE\r\n:0100100022CD\r\n:00000001FF\r\n"
/// );
/// ```
pub fn merge<'a, I, W>(streams: I, writer: &mut W) -> Result<usize, Box<dyn Error>>
where
    I: IntoIterator<Item = &'a [u8]>,
    W: Write,
{
    let mut count = 0;

    for stream in streams {
        for text in scan(stream) {
            match classify(text) {
                MergeAction::Keep => {
                    writer.write_all(text)?;
                    writer.write_all(RECORD_END.as_bytes())?;
                    count += 1;
                }
                MergeAction::Drop => {}
            }
        }
    }

    writer.write_all(EOF_RECORD.as_bytes())?;
    writer.flush()?;

    Ok(count)
}
