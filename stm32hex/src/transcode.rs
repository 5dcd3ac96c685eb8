//! The `transcode` module turns a flat binary image into Intel HEX records.
//!
//! The output always has the same shape: one extended linear address record carrying
//! the upper 16 bits of the base address, the data records, and the end-of-file record.
//! Data record offsets are relative to the start of the binary.

use crate::record::{Record, RecordType};
use std::error::Error;
use std::io::Write;

/// Payload size of the data records produced from a binary.
pub const DATA_RECORD_LEN: usize = 16;

/// Capacity of the text buffer every record is encoded into.
pub const RECORD_BUFFER_LEN: usize = 256;

/// Split a binary into the records of its HEX image.
///
/// A binary whose length is a multiple of 16 ends with a full data record, an empty
/// binary yields a single zero-length data record.
///
/// # Example
/// ```
/// use stm32hex::{RecordType, records};
///
/// let binary = [0u8; 40];
/// let lengths: Vec<(RecordType, u8)> = records(0x0800_0000, &binary)
///     .map(|r| (r.rtype(), r.length()))
///     .collect();
///
/// assert_eq!(
///     lengths,
///     [
///         (RecordType::ExtendedLinearAddress, 2),
///         (RecordType::Data, 16),
///         (RecordType::Data, 16),
///         (RecordType::Data, 8),
///         (RecordType::EndOfFile, 0),
///     ]
/// );
/// ```
pub fn records(base_address: u32, binary: &[u8]) -> impl Iterator<Item = Record> + '_ {
    let [high, low, _, _] = base_address.to_be_bytes();
    let header = Record {
        length: 2,
        address: 0,
        rtype: RecordType::ExtendedLinearAddress,
        data: vec![high, low],
    };
    let footer = Record {
        length: 0,
        address: 0,
        rtype: RecordType::EndOfFile,
        data: Vec::new(),
    };

    std::iter::once(header)
        .chain(data_records(binary))
        .chain(std::iter::once(footer))
}

#[allow(clippy::cast_possible_truncation)]
fn data_records(binary: &[u8]) -> impl Iterator<Item = Record> + '_ {
    // An empty binary still gets one (empty) data record
    let count = binary.len().div_ceil(DATA_RECORD_LEN).max(1);

    (0..count).map(move |i| {
        let start = i * DATA_RECORD_LEN;
        let end = (start + DATA_RECORD_LEN).min(binary.len());
        let chunk = &binary[start..end];

        Record {
            length: chunk.len() as u8,
            address: start as u16,
            rtype: RecordType::Data,
            data: chunk.to_vec(),
        }
    })
}

/// Encode a binary as Intel HEX and write it to `writer`.
///
/// # Errors
/// Returns an error if a record cannot be encoded or the writer fails.
///
/// # Example
/// ```
/// use stm32hex::write_hex;
///
/// let mut out = Vec::new();
/// write_hex(0x0800_0000, &[0x00, 0x01, 0x02], &mut out).unwrap();
///
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     ":020000040800F2\r\n:03000000000102FA\r\n:00000001FF\r\n"
/// );
/// ```
pub fn write_hex<W: Write>(
    base_address: u32,
    binary: &[u8],
    writer: &mut W,
) -> Result<(), Box<dyn Error>> {
    for record in records(base_address, binary) {
        let text = record.encode(RECORD_BUFFER_LEN)?;
        writer.write_all(text.as_bytes())?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn data_lengths(binary: &[u8]) -> Vec<u8> {
        records(0, binary)
            .filter(|r| r.rtype == RecordType::Data)
            .map(|r| r.length)
            .collect()
    }

    #[test]
    fn test_header_carries_upper_address_bits() {
        // Arrange
        let base_address = 0x0801_2345;

        // Act
        let header = records(base_address, &[0xAA]).next();

        // Assert
        let Some(header) = header else {
            panic!("transcoder produced no records");
        };
        assert_eq!(header.rtype, RecordType::ExtendedLinearAddress);
        assert_eq!(header.address, 0);
        assert_eq!(header.data, vec![0x08, 0x01]);
        assert_eq!(header.absolute_address(), Some(0x0801_0000));
    }

    #[test]
    fn test_last_record_is_eof() {
        let last = records(0, &[1, 2, 3]).last();
        assert_eq!(
            last.map(|r| (r.rtype, r.length, r.address)),
            Some((RecordType::EndOfFile, 0, 0))
        );
    }

    #[test]
    fn test_data_offsets_are_relative() {
        let binary = [0x55u8; 50];
        let offsets: Vec<u16> = records(0x2000_0000, &binary)
            .filter(|r| r.rtype == RecordType::Data)
            .map(|r| r.address)
            .collect();

        assert_eq!(offsets, [0x00, 0x10, 0x20, 0x30]);
    }

    #[test]
    fn test_chunk_boundaries() {
        assert_eq!(data_lengths(&[0u8; 1]), [1]);
        assert_eq!(data_lengths(&[0u8; 15]), [15]);
        assert_eq!(data_lengths(&[0u8; 16]), [16]);
        assert_eq!(data_lengths(&[0u8; 17]), [16, 1]);
        assert_eq!(data_lengths(&[0u8; 32]), [16, 16]);
    }

    #[test]
    fn test_empty_binary_yields_one_empty_data_record() {
        let all: Vec<(RecordType, u8)> = records(0, &[]).map(|r| (r.rtype, r.length)).collect();

        assert_eq!(
            all,
            [
                (RecordType::ExtendedLinearAddress, 2),
                (RecordType::Data, 0),
                (RecordType::EndOfFile, 0),
            ]
        );
    }

    #[test]
    fn test_chunking_completeness_random_lengths() {
        let mut rng = rand::rng();

        for _ in 0..50 {
            // Arrange
            let length = rng.random_range(1..2000);
            let binary: Vec<u8> = (&mut rng)
                .sample_iter(rand::distr::StandardUniform)
                .take(length)
                .collect();

            // Act
            let all: Vec<Record> = records(0x0800_0000, &binary).collect();
            let data: Vec<&Record> = all.iter().filter(|r| r.rtype == RecordType::Data).collect();

            // Assert
            assert_eq!(all.len(), data.len() + 2);
            assert_eq!(data.len(), length.div_ceil(DATA_RECORD_LEN));
            assert!(data.iter().all(|r| r.length as usize <= DATA_RECORD_LEN));
            let joined: Vec<u8> = data.iter().flat_map(|r| r.data.iter().copied()).collect();
            assert_eq!(joined, binary);
        }
    }

    #[test]
    fn test_write_hex_output() {
        // Arrange
        let binary: Vec<u8> = (0u8..20).collect();
        let mut out = Vec::new();

        // Act
        let res = write_hex(0x0800_0000, &binary, &mut out);

        // Assert
        assert!(res.is_ok());
        assert_eq!(
            String::from_utf8_lossy(&out),
            concat!(
                ":020000040800F2\r\n",
                ":10000000000102030405060708090A0B0C0D0E0F78\r\n",
                ":0400100010111213A6\r\n",
                ":00000001FF\r\n",
            )
        );
    }
}
