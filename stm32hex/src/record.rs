//! The `record` module defines the [`Record`] and [`RecordType`] which are used for encoding
//! and decoding Intel HEX records, together with the record checksum.

use crate::error::{HexError, HexErrorKind};

mod ranges {
    use std::ops::Range;
    pub const RECORD_LEN_RANGE: Range<usize> = 1..3;
    pub const RECORD_ADDR_RANGE: Range<usize> = 3..7;
    pub const RECORD_TYPE_RANGE: Range<usize> = 7..9;
}
mod sizes {
    pub const BYTE_CHAR_LEN: usize = 2;
    // 13 characters of framing plus 3 spare
    pub const ENCODE_OVERHEAD: usize = 16;
}

/// Line terminator appended to every encoded record.
pub const RECORD_END: &str = "\r\n";

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RecordType {
    Data = 0x0,
    EndOfFile = 0x1,
    ExtendedSegmentAddress = 0x2,
    StartSegmentAddress = 0x3,
    ExtendedLinearAddress = 0x4,
    StartLinearAddress = 0x5,
}

impl RecordType {
    fn parse(byte: u8) -> Result<Self, HexError> {
        match byte {
            0x00 => Ok(Self::Data),
            0x01 => Ok(Self::EndOfFile),
            0x02 => Ok(Self::ExtendedSegmentAddress),
            0x03 => Ok(Self::StartSegmentAddress),
            0x04 => Ok(Self::ExtendedLinearAddress),
            0x05 => Ok(Self::StartLinearAddress),
            _ => Err(HexError::DecodeRecordError(
                HexErrorKind::InvalidRecordType(byte),
            )),
        }
    }
}

/// Maps a single hex digit to its value.
///
/// Lookup is permissive: `'0'..='9'`, `'a'..='f'` and `'A'..='F'` map to 0-15 and
/// any other byte maps to 0 instead of failing. Decoding relies on this, so a
/// damaged digit shows up as a checksum mismatch rather than a parse error.
#[must_use]
pub const fn hex_digit(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        b'A'..=b'F' => c - b'A' + 10,
        _ => 0,
    }
}

/// Decodes the two hex digits at `pos`. Positions past the end of `text` read as 0.
fn hex_pair(text: &[u8], pos: usize) -> u8 {
    let digit = |i: usize| text.get(i).map_or(0, |&c| hex_digit(c));
    (digit(pos) << 4) | digit(pos + 1)
}

/// Calculate the two's-complement checksum of the provided bytes.
///
/// # Example
/// ```
/// use stm32hex::checksum;
///
/// let bytes = [0x03, 0x00, 0x00, 0x00, 0x00, 0x01, 0x02];
/// assert_eq!(checksum(&bytes), 0xFA);
/// ```
#[must_use]
pub fn checksum(bytes: &[u8]) -> u8 {
    let sum = bytes.iter().fold(0u8, |acc, b| acc.wrapping_add(*b));
    (!sum).wrapping_add(1) // two's complement
}

/// Reads only the type field of a record text, without verifying the checksum.
/// Returns `None` if the field does not hold a known record type.
#[must_use]
pub fn record_type_of(text: &[u8]) -> Option<RecordType> {
    RecordType::parse(hex_pair(text, ranges::RECORD_TYPE_RANGE.start)).ok()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub(crate) length: u8,
    pub(crate) address: u16,
    pub(crate) rtype: RecordType,
    pub(crate) data: Vec<u8>,
}

/// A [`Record`] read back from text together with its trailing checksum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedRecord {
    pub record: Record,
    pub checksum: u8,
    pub checksum_valid: bool,
}

impl DecodedRecord {
    /// Turns a checksum mismatch into an error for callers that need strict records.
    ///
    /// # Errors
    /// Returns `RecordChecksumMismatch(expected, found)` if the checksum is invalid.
    pub fn verify(&self) -> Result<(), HexError> {
        if self.checksum_valid {
            return Ok(());
        }
        Err(HexError::DecodeRecordError(
            HexErrorKind::RecordChecksumMismatch(self.record.checksum(), self.checksum),
        ))
    }
}

impl Record {
    /// Create a record from address, type and payload.
    ///
    /// # Errors
    /// Returns an error if the payload is longer than 255 bytes.
    ///
    /// # Example
    /// ```
    /// use stm32hex::{Record, RecordType};
    ///
    /// let record = Record::new(0x0010, RecordType::Data, &[0xAA, 0xBB]).unwrap();
    /// assert_eq!(record.length(), 2);
    /// ```
    pub fn new(address: u16, rtype: RecordType, data: &[u8]) -> Result<Self, HexError> {
        let length = u8::try_from(data.len()).map_err(|_| {
            HexError::EncodeRecordError(HexErrorKind::RecordTooLong(data.len()))
        })?;

        Ok(Self {
            length,
            address,
            rtype,
            data: data.to_vec(),
        })
    }

    #[must_use]
    pub const fn length(&self) -> u8 {
        self.length
    }

    #[must_use]
    pub const fn address(&self) -> u16 {
        self.address
    }

    #[must_use]
    pub const fn rtype(&self) -> RecordType {
        self.rtype
    }

    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Calculate checksum from the Record instance.
    #[must_use]
    pub fn checksum(&self) -> u8 {
        let [addr_high_byte, addr_low_byte] = self.address.to_be_bytes();

        let mut bytes = Vec::with_capacity(4 + self.data.len());
        bytes.extend_from_slice(&[self.length, addr_high_byte, addr_low_byte, self.rtype as u8]);
        bytes.extend_from_slice(&self.data);

        checksum(&bytes)
    }

    /// Encode the record into its text form, terminated with CRLF.
    ///
    /// `capacity` is the size of the destination the text is meant for. It has to
    /// hold at least `16 + 2 * length` characters.
    ///
    /// # Errors
    /// Returns an error if `capacity` is too small for this record.
    ///
    /// # Example
    /// ```
    /// use stm32hex::{Record, RecordType};
    ///
    /// let record = Record::new(0x0000, RecordType::Data, &[0x00, 0x01, 0x02]).unwrap();
    /// assert_eq!(record.encode(256).unwrap(), ":03000000000102FA\r\n");
    /// ```
    pub fn encode(&self, capacity: usize) -> Result<String, HexError> {
        let required = sizes::ENCODE_OVERHEAD + sizes::BYTE_CHAR_LEN * self.length as usize;
        if required > capacity {
            return Err(HexError::EncodeRecordError(
                HexErrorKind::BufferTooSmall(required, capacity),
            ));
        }

        let mut text = String::with_capacity(required);
        text.push_str(&format!(
            ":{:02X}{:04X}{:02X}{}",
            self.length,
            self.address,
            self.rtype as u8,
            self.data.iter().map(|b| format!("{b:02X}")).collect::<String>(),
        ));

        // Checksum is taken from the rendered fields, everything after the start code
        let rendered: Vec<u8> = (1..text.len())
            .step_by(sizes::BYTE_CHAR_LEN)
            .map(|i| hex_pair(text.as_bytes(), i))
            .collect();

        text.push_str(&format!("{:02X}{RECORD_END}", checksum(&rendered)));

        Ok(text)
    }

    /// Decode a record text (starting with the ':' start code, CRLF optional).
    ///
    /// Decoding is permissive: every hex digit goes through [`hex_digit`] and missing
    /// characters read as zero. The checksum is recomputed and compared with the
    /// trailing byte, a mismatch is reported via [`DecodedRecord::checksum_valid`].
    ///
    /// # Errors
    /// Returns an error if the type field is not one of the six known record types.
    ///
    /// # Example
    /// ```
    /// use stm32hex::{Record, RecordType};
    ///
    /// let decoded = Record::decode(b":00000001FF").unwrap();
    /// assert_eq!(decoded.record.rtype(), RecordType::EndOfFile);
    /// assert!(decoded.checksum_valid);
    /// ```
    pub fn decode(text: &[u8]) -> Result<DecodedRecord, HexError> {
        let length = hex_pair(text, ranges::RECORD_LEN_RANGE.start);
        let address = u16::from_be_bytes([
            hex_pair(text, ranges::RECORD_ADDR_RANGE.start),
            hex_pair(text, ranges::RECORD_ADDR_RANGE.start + sizes::BYTE_CHAR_LEN),
        ]);
        let rtype = RecordType::parse(hex_pair(text, ranges::RECORD_TYPE_RANGE.start))?;

        let data_start = ranges::RECORD_TYPE_RANGE.end;
        let data_end = data_start + sizes::BYTE_CHAR_LEN * length as usize;
        let data: Vec<u8> = (data_start..data_end)
            .step_by(sizes::BYTE_CHAR_LEN)
            .map(|i| hex_pair(text, i))
            .collect();

        let record = Self {
            length,
            address,
            rtype,
            data,
        };
        let checksum = hex_pair(text, data_end);
        let checksum_valid = record.checksum() == checksum;

        Ok(DecodedRecord {
            record,
            checksum,
            checksum_valid,
        })
    }
}
