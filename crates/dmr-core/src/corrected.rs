use core::fmt;

use crate::bitbuffer::BitBuffer;
use crate::bitfield::BitField;

/// Output of the FEC stage: the corrected bits, an overall validity flag and the
/// number of bit errors the decoder repaired. Individual corrected positions are not tracked.
#[derive(Clone, PartialEq, Eq)]
pub struct CorrectedBinaryMessage {
    bits: BitBuffer,
    valid: bool,
    corrected_bits: u8,
}

impl CorrectedBinaryMessage {
    pub fn new(bits: BitBuffer, valid: bool) -> Self {
        CorrectedBinaryMessage { bits, valid, corrected_bits: 0 }
    }

    pub fn with_corrected_bits(mut self, corrected_bits: u8) -> Self {
        self.corrected_bits = corrected_bits;
        self
    }

    /// True if the FEC stage reported the payload as good (CRC/checksum passed)
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn corrected_bits(&self) -> u8 {
        self.corrected_bits
    }

    pub fn bits(&self) -> &BitBuffer {
        &self.bits
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn get_int(&self, field: &BitField) -> u64 {
        self.bits.get_int(field)
    }

    pub fn get_flag(&self, field: &BitField) -> bool {
        self.bits.get_flag(field)
    }

    pub fn get_hex(&self, field: &BitField, min_digits: usize) -> String {
        self.bits.get_hex(field, min_digits)
    }

    pub fn to_hex_string(&self) -> String {
        self.bits.dump_hex()
    }
}

impl fmt::Debug for CorrectedBinaryMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CorrectedBinaryMessage {{ valid: {} corrected_bits: {} bits: {} }}",
            self.valid,
            self.corrected_bits,
            self.bits.dump_hex()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corrected_bits() {
        let msg = CorrectedBinaryMessage::new(BitBuffer::from_bytes(&[0xA5]), true);
        assert_eq!(msg.corrected_bits(), 0);

        let msg = msg.with_corrected_bits(4);
        assert!(msg.is_valid());
        assert_eq!(msg.corrected_bits(), 4);
        assert_eq!(msg.to_hex_string(), "A5");
        assert_eq!(format!("{:?}", msg), "CorrectedBinaryMessage { valid: true corrected_bits: 4 bits: A5 }");
    }
}
