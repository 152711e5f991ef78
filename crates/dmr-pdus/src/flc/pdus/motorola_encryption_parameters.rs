use core::fmt;

use dmr_core::bitfield::{field_map_is_valid, span};
use dmr_core::{BitField, CorrectedBinaryMessage, Identifier, PduParseErr, Timeslot, Timestamp};

use crate::flc::FLC_INFO_BITS;
use crate::flc::enums::encryption_algorithm::EncryptionAlgorithm;
use crate::flc::lc_base::{ENCRYPTED, LcBase, LinkControl, OPCODE, RESERVED, VENDOR, write_summary};

const KEY_ID_BITS: [u16; 8] = span(16);
pub const KEY_ID: BitField = BitField::new("key_id", &KEY_ID_BITS);
const INITIALIZATION_VECTOR_BITS: [u16; 32] = span(24);
/// Probable position of the IV, not verified against live traffic
pub const INITIALIZATION_VECTOR: BitField = BitField::new("initialization_vector", &INITIALIZATION_VECTOR_BITS);
const ALGORITHM_BITS: [u16; 8] = span(56);
pub const ALGORITHM: BitField = BitField::new("algorithm", &ALGORITHM_BITS);
const DESTINATION_GROUP_BITS: [u16; 8] = span(64);
pub const DESTINATION_GROUP: BitField = BitField::new("destination_group", &DESTINATION_GROUP_BITS);
// Reed Solomon FEC: 72-95

pub const FIELDS: &[BitField] = &[
    ENCRYPTED,
    RESERVED,
    OPCODE,
    VENDOR,
    KEY_ID,
    INITIALIZATION_VECTOR,
    ALGORITHM,
    DESTINATION_GROUP,
];

const _: () = assert!(field_map_is_valid(FIELDS, FLC_INFO_BITS));

/// Motorola Encryption Parameters
///
/// Observed as FLC payload of a PI header burst, also on a Hytera system
/// configured as IP Site Connect compatible. The IV position and the 8-bit
/// destination group width are taken from captures and are provisional.
#[derive(Debug, Clone)]
pub struct MotorolaEncryptionParameters {
    base: LcBase,
    algorithm: EncryptionAlgorithm,
    identifiers: [Identifier; 1],
}

impl MotorolaEncryptionParameters {
    pub fn new(base: LcBase) -> Self {
        let algorithm = EncryptionAlgorithm::from_raw(base.message().get_int(&ALGORITHM) as u8);
        let talkgroup = Identifier::talkgroup(base.message().get_int(&DESTINATION_GROUP) as u32);
        MotorolaEncryptionParameters { base, algorithm, identifiers: [talkgroup] }
    }

    pub fn from_message(message: CorrectedBinaryMessage, timestamp: Timestamp, timeslot: Timeslot) -> Result<Self, PduParseErr> {
        Ok(Self::new(LcBase::new(message, timestamp, timeslot)?))
    }

    pub fn algorithm(&self) -> EncryptionAlgorithm {
        self.algorithm
    }

    pub fn key_id(&self) -> u8 {
        self.base.message().get_int(&KEY_ID) as u8
    }

    /// Probable initialization vector, as 8 hex digits
    pub fn initialization_vector(&self) -> String {
        self.base.message().get_hex(&INITIALIZATION_VECTOR, 8)
    }

    pub fn talkgroup(&self) -> Identifier {
        self.identifiers[0]
    }
}

impl LinkControl for MotorolaEncryptionParameters {
    fn base(&self) -> &LcBase {
        &self.base
    }

    fn identifiers(&self) -> &[Identifier] {
        &self.identifiers
    }

    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FLC MOTOROLA ENCRYPTION PARAMETERS - ALGORITHM:{} KEY:{} IV?:{} TALKGROUP:{}",
            self.algorithm(),
            self.key_id(),
            self.initialization_vector(),
            self.talkgroup()
        )
    }
}

impl fmt::Display for MotorolaEncryptionParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_summary(self, f)
    }
}
