//! Interpretation of the four address record types.

use crate::record::{Record, RecordType};

impl Record {
    /// Get the absolute address carried by an address record.
    ///
    /// The payload is read big-endian and shifted according to the record type:
    /// extended segment address by 4 bits, extended linear address by 16 bits,
    /// start addresses unshifted. Data and end-of-file records carry no address.
    ///
    /// # Example
    /// ```
    /// use stm32hex::{Record, RecordType};
    ///
    /// let ela = Record::new(0, RecordType::ExtendedLinearAddress, &[0x08, 0x00]).unwrap();
    /// assert_eq!(ela.absolute_address(), Some(0x0800_0000));
    /// ```
    #[must_use]
    pub fn absolute_address(&self) -> Option<u32> {
        // Bytes beyond the fourth shift the leading ones out
        let value = self
            .data
            .iter()
            .fold(0u32, |acc, b| (acc << 8) | u32::from(*b));

        match self.rtype {
            RecordType::Data | RecordType::EndOfFile => None,
            RecordType::ExtendedSegmentAddress => Some(value << 4),
            RecordType::StartSegmentAddress | RecordType::StartLinearAddress => Some(value),
            RecordType::ExtendedLinearAddress => Some(value << 16),
        }
    }
}
