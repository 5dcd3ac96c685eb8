//! # `stm32hex`
//!
//! `stm32hex` is a Rust library for encoding, decoding and merging Intel HEX records.
//!
//! The library provides:
//! - Record codec with checksum calculation (via [`Record`] struct).
//! - Scanner that extracts record texts from a raw buffer (via [`scan`]).
//! - Conversion of a binary image into HEX records (via [`records`] and [`write_hex`]).
//! - Merging of several HEX streams into one (via [`merge`]).
//! - Error handling with [`HexError`].
//!
//! ## Example
//!
//! ```
//! use stm32hex::{Record, scan, write_hex};
//!
//! let mut hex = Vec::new();
//! write_hex(0x0800_0000, &[0xDE, 0xAD, 0xBE, 0xEF], &mut hex).unwrap();
//!
//! for text in scan(&hex) {
//!     let decoded = Record::decode(text).unwrap();
//!     assert!(decoded.checksum_valid);
//! }
//! ```

mod address;
mod error;
pub mod file;
mod info;
mod merge;
mod record;
mod scanner;
mod transcode;

// Public APIs
pub use error::{HexError, HexErrorKind};
pub use info::{describe, report};
pub use merge::{EOF_RECORD, MergeAction, classify, merge};
pub use record::{DecodedRecord, RECORD_END, Record, RecordType, checksum, hex_digit, record_type_of};
pub use scanner::{LINE_BUFFER_LEN, RecordScanner, scan};
pub use transcode::{DATA_RECORD_LEN, RECORD_BUFFER_LEN, records, write_hex};
