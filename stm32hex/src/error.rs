//! The `error` module defines the [`HexError`] enum that describes the errors that
//! can occur when encoding, decoding, or loading Intel HEX data.
//! It carries two pieces of information:
//! 1. When the error occurs, e.g., while encoding a record or loading an input file.
//! 2. What kind of error was encountered (via [`HexErrorKind`] enum).

use std::error::Error;
use std::fmt;

#[derive(Debug, PartialEq, Eq)]
pub enum HexError {
    EncodeRecordError(HexErrorKind),
    DecodeRecordError(HexErrorKind),
    LoadError(HexErrorKind),
}

impl HexError {
    /// Returns the kind of the error regardless of where it was raised.
    #[must_use]
    pub const fn kind(&self) -> &HexErrorKind {
        match self {
            Self::EncodeRecordError(kind)
            | Self::DecodeRecordError(kind)
            | Self::LoadError(kind) => kind,
        }
    }
}

impl fmt::Display for HexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EncodeRecordError(base_err) => {
                write!(f, "Error encountered during encoding of hex record:\n{base_err}")
            }
            Self::DecodeRecordError(base_err) => {
                write!(f, "Error encountered during decoding of hex record:\n{base_err}")
            }
            Self::LoadError(base_err) => {
                write!(f, "Error encountered during loading of input file:\n{base_err}")
            }
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum HexErrorKind {
    /// Output capacity cannot hold the encoded record (required, capacity)
    BufferTooSmall(usize, usize),
    /// Payload does not fit into the one-byte length field
    RecordTooLong(usize),
    /// Record type field holds a value outside of 0x00..=0x05
    InvalidRecordType(u8),
    /// Record checksum mismatch (expected, found)
    RecordChecksumMismatch(u8, u8),
    /// Input file has no content
    EmptyFile,
}

impl fmt::Display for HexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BufferTooSmall(required, capacity) => {
                write!(
                    f,
                    "Output buffer too small - required: {required} bytes, available: {capacity} bytes"
                )
            }
            Self::RecordTooLong(length) => {
                write!(f, "Record payload of {length} bytes exceeds 255 bytes")
            }
            Self::InvalidRecordType(rtype) => {
                write!(f, "Invalid record type 0x{rtype:02X}")
            }
            Self::RecordChecksumMismatch(expected, found) => {
                write!(
                    f,
                    "Invalid record checksum - expected: 0x{expected:02X}, found: 0x{found:02X}"
                )
            }
            Self::EmptyFile => {
                write!(f, "File has no content")
            }
        }
    }
}

impl Error for HexError {}
impl Error for HexErrorKind {}
