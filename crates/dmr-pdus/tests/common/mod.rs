use dmr_core::{BitBuffer, BitField, CorrectedBinaryMessage};
use dmr_pdus::flc::FLC_BITS;

/// Builds a 96-bit FLC payload by placing values into the positions of the given fields.
/// Bits not covered by any field are zero.
pub fn build_payload(fields: &[(BitField, u64)], valid: bool) -> CorrectedBinaryMessage {
    let mut bits = vec![0u8; FLC_BITS];
    for (field, value) in fields {
        let width = field.width();
        for (i, &pos) in field.positions.iter().enumerate() {
            bits[pos as usize] = ((value >> (width - 1 - i)) & 1) as u8;
        }
    }
    let buf = BitBuffer::from_bitarr(&bits).expect("bits are 0 or 1");
    CorrectedBinaryMessage::new(buf, valid)
}
