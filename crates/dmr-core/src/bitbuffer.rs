use std::fmt;

use crate::bitfield::{BitField, MAX_FIELD_BITS};
use crate::pdu_parse_error::PduParseErr;

/// Read-only bit sequence. Bits are addressed by absolute position, position 0
/// being the most significant bit of the first byte.
///
/// All field access goes through `BitField` position lists; no caller does its
/// own shifting and masking.
#[derive(Clone, PartialEq, Eq)]
pub struct BitBuffer {
    buffer: Vec<u8>,
    len: usize,
}

impl BitBuffer {
    /// Wrap an existing byte-vector as a BitBuffer. All bits are addressable.
    pub fn from_vec(data: Vec<u8>) -> Self {
        let len = data.len() * 8;
        BitBuffer { buffer: data, len }
    }

    pub fn from_bytes(data: &[u8]) -> Self {
        Self::from_vec(data.to_vec())
    }

    /// Wrap bytes of which only the first `len_bits` bits are addressable.
    pub fn from_bytes_len(data: &[u8], len_bits: usize) -> Result<Self, PduParseErr> {
        let needed_bytes = (len_bits + 7) / 8;
        if data.len() < needed_bytes {
            return Err(PduParseErr::InconsistentLength { expected: len_bits, found: data.len() * 8 });
        }
        Ok(BitBuffer { buffer: data[..needed_bytes].to_vec(), len: len_bits })
    }

    /// Construct a BitBuffer from a string of '0'/'1' characters.
    pub fn from_bitstr(bitstr: &str) -> Result<Self, PduParseErr> {
        let mut buffer = vec![0u8; (bitstr.len() + 7) / 8];
        for (i, c) in bitstr.chars().enumerate() {
            match c {
                '0' => {}
                '1' => buffer[i / 8] |= 0x80 >> (i % 8),
                other => return Err(PduParseErr::InvalidCharacter { field: "bitstr", found: other }),
            }
        }
        Ok(BitBuffer { buffer, len: bitstr.len() })
    }

    /// Construct a BitBuffer from a hex string, 4 bits per digit. Case-insensitive.
    pub fn from_hexstr(hexstr: &str) -> Result<Self, PduParseErr> {
        let mut buffer = vec![0u8; (hexstr.len() + 1) / 2];
        for (i, c) in hexstr.chars().enumerate() {
            let Some(nibble) = c.to_digit(16) else {
                return Err(PduParseErr::InvalidCharacter { field: "hexstr", found: c });
            };
            let shift = if i % 2 == 0 { 4 } else { 0 };
            buffer[i / 2] |= (nibble as u8) << shift;
        }
        Ok(BitBuffer { buffer, len: hexstr.len() * 4 })
    }

    /// Construct a BitBuffer from a byte array holding one bit (0 or 1) per byte,
    /// the representation handed over by the FEC stage.
    pub fn from_bitarr(data: &[u8]) -> Result<Self, PduParseErr> {
        let mut buffer = vec![0u8; (data.len() + 7) / 8];
        for (i, &bit) in data.iter().enumerate() {
            match bit {
                0 => {}
                1 => buffer[i / 8] |= 0x80 >> (i % 8),
                other => return Err(PduParseErr::InvalidValue { field: "bitarr", value: other as u64 }),
            }
        }
        Ok(BitBuffer { buffer, len: data.len() })
    }

    /// Length in bits
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Read a single bit. Returns None if `pos` is beyond the end.
    pub fn read_bit_at(&self, pos: usize) -> Option<u8> {
        if pos >= self.len {
            return None;
        }
        Some(self.read_bit_at_unchecked(pos))
    }

    /// Read `num_bits` consecutive bits starting at `pos`, without a field map.
    /// Returns None on overflow or if `num_bits > 64`.
    pub fn peek_bits_at(&self, pos: usize, num_bits: usize) -> Option<u64> {
        if num_bits > MAX_FIELD_BITS || pos + num_bits > self.len {
            return None;
        }
        let mut result = 0u64;
        for i in pos..pos + num_bits {
            result = (result << 1) | self.read_bit_at_unchecked(i) as u64;
        }
        Some(result)
    }

    /// Pack the bits addressed by `field` into the low bits of a u64, first
    /// position as most significant bit.
    ///
    /// Panics if the field does not fit this buffer. Field maps are validated
    /// against the record length before use, so this indicates a programming error.
    pub fn get_int(&self, field: &BitField) -> u64 {
        assert!(
            field.width() <= MAX_FIELD_BITS && field.fits(self.len),
            "field {} does not fit a {}-bit buffer",
            field,
            self.len
        );
        self.read_field_unchecked(field)
    }

    /// Like `get_int`, but returns None instead of panicking when the field does not fit.
    pub fn try_get_int(&self, field: &BitField) -> Option<u64> {
        if field.width() > MAX_FIELD_BITS || !field.fits(self.len) {
            return None;
        }
        Some(self.read_field_unchecked(field))
    }

    /// True if the (usually single-bit) field is non-zero.
    pub fn get_flag(&self, field: &BitField) -> bool {
        self.get_int(field) != 0
    }

    /// Render the bits addressed by `field` as uppercase hex. Bits are grouped into
    /// nibbles from the least significant end; the result has at least `min_digits`
    /// digits, left-padded with zeros.
    pub fn get_hex(&self, field: &BitField, min_digits: usize) -> String {
        let value = self.get_int(field);
        let digits = usize::max((field.width() + 3) / 4, min_digits);
        format!("{:0width$X}", value, width = digits)
    }

    // String representations /////////////////////////////

    /// Dump all bits as a hex string (uppercase, no separators). If the length isn't
    /// a multiple of 4, the last nibble is padded on the right with zeros.
    pub fn dump_hex(&self) -> String {
        let n_nibbles = (self.len + 3) / 4;
        let mut s = String::with_capacity(n_nibbles);
        for i in 0..n_nibbles {
            let bit_pos = i * 4;
            let take = usize::min(4, self.len - bit_pos);
            let mut digit = 0u8;
            for j in 0..take {
                digit = (digit << 1) | self.read_bit_at_unchecked(bit_pos + j);
            }
            // if <4 bits, pad low side
            if take < 4 {
                digit <<= 4 - take;
            }
            s.push_str(&format!("{:X}", digit));
        }
        s
    }

    /// Dump all bits as a binary string of '0'/'1'.
    pub fn dump_bin(&self) -> String {
        (0..self.len)
            .map(|i| if self.read_bit_at_unchecked(i) == 1 { '1' } else { '0' })
            .collect()
    }

    /// Caller must ensure every position of `field` is below `len` and the field is at most 64 bits wide
    fn read_field_unchecked(&self, field: &BitField) -> u64 {
        field
            .positions
            .iter()
            .fold(0u64, |acc, &pos| (acc << 1) | self.read_bit_at_unchecked(pos as usize) as u64)
    }

    /// Caller must ensure `bit_pos < len`
    fn read_bit_at_unchecked(&self, bit_pos: usize) -> u8 {
        (self.buffer[bit_pos / 8] >> (7 - (bit_pos % 8))) & 1
    }
}

impl fmt::Debug for BitBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitBuffer {{ len: {} {} }}", self.len, self.dump_bin())
    }
}

impl fmt::Display for BitBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dump_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitfield::span;

    #[test]
    fn test_from_bitstr() {
        let bb = BitBuffer::from_bitstr("1010000011").unwrap();
        assert_eq!(bb.len(), 10);
        assert_eq!(bb.dump_bin(), "1010000011");
        assert_eq!(bb.read_bit_at(0), Some(1));
        assert_eq!(bb.read_bit_at(1), Some(0));
        assert_eq!(bb.read_bit_at(10), None);
    }

    #[test]
    fn test_from_bitstr_invalid() {
        assert_eq!(
            BitBuffer::from_bitstr("0102"),
            Err(PduParseErr::InvalidCharacter { field: "bitstr", found: '2' })
        );
    }

    #[test]
    fn test_from_hexstr() {
        let bb = BitBuffer::from_hexstr("aBc").unwrap();
        assert_eq!(bb.len(), 12);
        assert_eq!(bb.dump_hex(), "ABC");
        assert_eq!(bb.dump_bin(), "101010111100");
        assert!(BitBuffer::from_hexstr("0g").is_err());
    }

    #[test]
    fn test_from_bitarr() {
        let bb = BitBuffer::from_bitarr(&[1, 0, 1, 1]).unwrap();
        assert_eq!(bb.dump_bin(), "1011");
        assert_eq!(
            BitBuffer::from_bitarr(&[1, 2]),
            Err(PduParseErr::InvalidValue { field: "bitarr", value: 2 })
        );
    }

    #[test]
    fn test_from_bytes_len() {
        let bb = BitBuffer::from_bytes_len(&[0xFF, 0xF0, 0xAA], 12).unwrap();
        assert_eq!(bb.len(), 12);
        assert_eq!(bb.dump_hex(), "FFF");
        assert!(BitBuffer::from_bytes_len(&[0xFF], 12).is_err());
    }

    #[test]
    fn test_peek_bits_at() {
        // 0xABCD = 1010_1011 1100_1101
        let bb = BitBuffer::from_bytes(&[0xAB, 0xCD]);
        assert_eq!(bb.peek_bits_at(0, 4), Some(0xA));
        assert_eq!(bb.peek_bits_at(5, 6), Some(0b011110));
        assert_eq!(bb.peek_bits_at(0, 0), Some(0));
        assert_eq!(bb.peek_bits_at(12, 5), None);
    }

    #[test]
    fn test_get_int_contiguous_across_bytes() {
        const BITS: [u16; 12] = span(4);
        let field = BitField::new("mid", &BITS);
        let bb = BitBuffer::from_bytes(&[0xAB, 0xCD]);
        assert_eq!(bb.get_int(&field), 0xBCD);
    }

    #[test]
    fn test_get_int_scattered_positions() {
        // Order of positions decides significance, not their place in the buffer
        let field = BitField::new("scattered", &[15, 0, 8]);
        let bb = BitBuffer::from_bitstr("1000000000000001").unwrap();
        assert_eq!(bb.get_int(&field), 0b110);
    }

    #[test]
    fn test_get_hex() {
        const BITS: [u16; 12] = span(4);
        let field = BitField::new("mid", &BITS);
        let bb = BitBuffer::from_bytes(&[0x0A, 0x0D]);
        assert_eq!(bb.get_hex(&field, 0), "A0D");
        assert_eq!(bb.get_hex(&field, 6), "000A0D");

        // Odd widths round up to whole nibbles
        let odd = BitField::new("odd", &[0, 1, 2, 3, 4]);
        let bb = BitBuffer::from_bitstr("10001").unwrap();
        assert_eq!(bb.get_hex(&odd, 1), "11");
    }

    #[test]
    fn test_hex_agrees_with_int() {
        let bb = BitBuffer::from_hexstr("C3A55A0FF0123456789ABCDE").unwrap();
        for start in 0..bb.len() as u16 {
            for width in 1..=usize::min(64, bb.len() - start as usize) {
                let positions: Vec<u16> = (start..start + width as u16).collect();
                let positions: &'static [u16] = Box::leak(positions.into_boxed_slice());
                let field = BitField::new("f", positions);
                let int = bb.get_int(&field);
                let hex = bb.get_hex(&field, 1);
                assert_eq!(u64::from_str_radix(&hex, 16).unwrap(), int, "start {} width {}", start, width);
            }
        }
    }

    #[test]
    fn test_hex_agrees_with_int_scattered() {
        let bb = BitBuffer::from_hexstr("C3A55A0FF0123456789ABCDE").unwrap();
        let lists: [&'static [u16]; 5] = [
            &[95, 3, 40, 7, 0, 66, 12],
            &[71, 70, 69, 68, 67, 66, 65, 64, 63],
            &[1, 9, 17, 25, 33, 41, 49, 57, 65, 73, 81],
            &[50, 2, 93, 14],
            &[5],
        ];
        for positions in lists {
            let field = BitField::new("f", positions);
            let int = bb.get_int(&field);
            let natural = (positions.len() + 3) / 4;
            let hex = bb.get_hex(&field, natural + 2);
            assert_eq!(hex.len(), natural + 2, "positions {:?}", positions);
            assert!(hex.starts_with("00"), "positions {:?}", positions);
            assert_eq!(u64::from_str_radix(&hex, 16).unwrap(), int, "positions {:?}", positions);
        }

        let field = BitField::new("f", &[95, 3, 40, 7, 0, 66, 12]);
        assert_eq!(bb.get_int(&field), 0xE);
        assert_eq!(bb.get_hex(&field, 4), "000E");
    }

    #[test]
    fn test_try_get_int() {
        let bb = BitBuffer::from_bytes(&[0xFF]);
        assert_eq!(bb.try_get_int(&BitField::new("ok", &[7])), Some(1));
        assert_eq!(bb.try_get_int(&BitField::new("oob", &[8])), None);
    }

    #[test]
    #[should_panic]
    fn test_get_int_out_of_range() {
        let bb = BitBuffer::from_bytes(&[0xFF]);
        bb.get_int(&BitField::new("oob", &[3, 8]));
    }

    #[test]
    fn test_get_flag() {
        let bb = BitBuffer::from_bitstr("01").unwrap();
        assert!(!bb.get_flag(&BitField::new("b0", &[0])));
        assert!(bb.get_flag(&BitField::new("b1", &[1])));
    }

    #[test]
    fn test_dump_hex() {
        let bb = BitBuffer::from_bytes(&[0xAB, 0xCD]);
        assert_eq!(bb.dump_hex(), "ABCD");
        assert_eq!(bb.to_string(), "ABCD");
        // Partial nibble is padded on the low side
        let bb = BitBuffer::from_bitstr("101").unwrap();
        assert_eq!(bb.dump_hex(), "A");
    }
}
