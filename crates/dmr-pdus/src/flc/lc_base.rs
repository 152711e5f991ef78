use core::fmt;

use dmr_core::bitfield::{field_map_is_valid, span};
use dmr_core::{BitField, CorrectedBinaryMessage, Identifier, PduParseErr, Timeslot, Timestamp, expect_len};

use crate::flc::enums::{flc_opcode::FlcOpcode, vendor::Vendor};
use crate::flc::{FLC_BITS, FLC_INFO_BITS};

/// Protect flag, set when the link control content is encrypted
pub const ENCRYPTED: BitField = BitField::new("encrypted", &[0]);
/// Should always be zero
pub const RESERVED: BitField = BitField::new("reserved", &[1]);
const OPCODE_BITS: [u16; 6] = span(2);
pub const OPCODE: BitField = BitField::new("opcode", &OPCODE_BITS);
const VENDOR_BITS: [u16; 8] = span(8);
pub const VENDOR: BitField = BitField::new("vendor", &VENDOR_BITS);

/// Leading fields shared by every full link control variant. Variant field maps
/// start with these and add their own fields from bit 16 on.
pub const HEADER_FIELDS: &[BitField] = &[ENCRYPTED, RESERVED, OPCODE, VENDOR];

const _: () = assert!(field_map_is_valid(HEADER_FIELDS, FLC_INFO_BITS));

/// Base full link control record: the FEC-corrected payload plus burst metadata.
/// Read-only after construction.
#[derive(Debug, Clone)]
pub struct LcBase {
    message: CorrectedBinaryMessage,
    timestamp: Timestamp,
    timeslot: Timeslot,
}

impl LcBase {
    /// Wrap a corrected FLC payload. The payload must be exactly 96 bits
    /// (72 information bits followed by the Reed-Solomon parity). A payload that
    /// failed FEC is accepted and decoded on a best-effort basis.
    pub fn new(message: CorrectedBinaryMessage, timestamp: Timestamp, timeslot: Timeslot) -> Result<Self, PduParseErr> {
        expect_len!(message.len(), FLC_BITS)?;
        tracing::trace!(slot = %timeslot, "flc payload {} valid {}", message.to_hex_string(), message.is_valid());
        Ok(LcBase { message, timestamp, timeslot })
    }

    /// True if the FEC stage passed the payload
    pub fn is_valid(&self) -> bool {
        self.message.is_valid()
    }

    pub fn is_encrypted(&self) -> bool {
        self.message.get_flag(&ENCRYPTED)
    }

    pub fn is_reserved_bit_set(&self) -> bool {
        self.message.get_flag(&RESERVED)
    }

    pub fn opcode_raw(&self) -> u8 {
        self.message.get_int(&OPCODE) as u8
    }

    /// Standard feature set interpretation of the opcode
    pub fn opcode(&self) -> FlcOpcode {
        FlcOpcode::from_raw(self.opcode_raw())
    }

    pub fn vendor(&self) -> Vendor {
        Vendor::from_raw(self.message.get_int(&VENDOR) as u8)
    }

    pub fn message(&self) -> &CorrectedBinaryMessage {
        &self.message
    }

    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    pub fn timeslot(&self) -> Timeslot {
        self.timeslot
    }
}

/// Contract shared by every full link control variant.
///
/// Variants own an `LcBase`, read their fields through a static field map, and
/// compute their identifiers once in their constructor, so `identifiers()`
/// always returns the same slice.
pub trait LinkControl: fmt::Debug {
    fn base(&self) -> &LcBase;

    /// Identifiers contributed by this record, in a stable order
    fn identifiers(&self) -> &[Identifier];

    /// Write the variant-specific part of the summary
    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;

    fn is_valid(&self) -> bool {
        self.base().is_valid()
    }

    fn is_encrypted(&self) -> bool {
        self.base().is_encrypted()
    }

    fn is_reserved_bit_set(&self) -> bool {
        self.base().is_reserved_bit_set()
    }

    fn timestamp(&self) -> Timestamp {
        self.base().timestamp()
    }

    fn timeslot(&self) -> Timeslot {
        self.base().timeslot()
    }

    fn message(&self) -> &CorrectedBinaryMessage {
        self.base().message()
    }
}

/// Write the diagnostic summary of a link control record:
/// `[CRC-ERROR] *ENCRYPTED* *RESERVED-BIT* <variant fields> MSG:<payload hex>`.
/// Flag markers only appear when set; all fields are always written, also for invalid records.
pub fn write_summary<T: LinkControl + ?Sized>(lc: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if !lc.is_valid() {
        write!(f, "[CRC-ERROR] ")?;
    }
    if lc.is_encrypted() {
        write!(f, "*ENCRYPTED* ")?;
    }
    if lc.is_reserved_bit_set() {
        write!(f, "*RESERVED-BIT* ")?;
    }
    lc.describe(f)?;
    write!(f, " MSG:{}", lc.message().to_hex_string())
}
