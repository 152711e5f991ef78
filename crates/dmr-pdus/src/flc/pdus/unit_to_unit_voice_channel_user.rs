use core::fmt;

use dmr_core::bitfield::{field_map_is_valid, span};
use dmr_core::{BitField, CorrectedBinaryMessage, Identifier, IdentifierRole, PduParseErr, Timeslot, Timestamp};

use crate::flc::FLC_INFO_BITS;
use crate::flc::fields::service_options::ServiceOptions;
use crate::flc::lc_base::{ENCRYPTED, LcBase, LinkControl, OPCODE, RESERVED, VENDOR, write_summary};

const SERVICE_OPTIONS_BITS: [u16; 8] = span(16);
pub const SERVICE_OPTIONS: BitField = BitField::new("service_options", &SERVICE_OPTIONS_BITS);
const TARGET_ADDRESS_BITS: [u16; 24] = span(24);
pub const TARGET_ADDRESS: BitField = BitField::new("target_address", &TARGET_ADDRESS_BITS);
const SOURCE_ADDRESS_BITS: [u16; 24] = span(48);
pub const SOURCE_ADDRESS: BitField = BitField::new("source_address", &SOURCE_ADDRESS_BITS);

pub const FIELDS: &[BitField] = &[
    ENCRYPTED,
    RESERVED,
    OPCODE,
    VENDOR,
    SERVICE_OPTIONS,
    TARGET_ADDRESS,
    SOURCE_ADDRESS,
];

const _: () = assert!(field_map_is_valid(FIELDS, FLC_INFO_BITS));

/// Unit to Unit Voice Channel User (FLCO 0b000011, standard feature set)
#[derive(Debug, Clone)]
pub struct UnitToUnitVoiceChannelUser {
    base: LcBase,
    /// Target radio, then source radio
    identifiers: [Identifier; 2],
}

impl UnitToUnitVoiceChannelUser {
    pub fn new(base: LcBase) -> Self {
        let target = Identifier::radio(base.message().get_int(&TARGET_ADDRESS) as u32, IdentifierRole::To);
        let source = Identifier::radio(base.message().get_int(&SOURCE_ADDRESS) as u32, IdentifierRole::From);
        UnitToUnitVoiceChannelUser { base, identifiers: [target, source] }
    }

    pub fn from_message(message: CorrectedBinaryMessage, timestamp: Timestamp, timeslot: Timeslot) -> Result<Self, PduParseErr> {
        Ok(Self::new(LcBase::new(message, timestamp, timeslot)?))
    }

    pub fn service_options(&self) -> ServiceOptions {
        ServiceOptions::new(self.base.message().get_int(&SERVICE_OPTIONS) as u8)
    }

    pub fn target(&self) -> Identifier {
        self.identifiers[0]
    }

    pub fn source(&self) -> Identifier {
        self.identifiers[1]
    }
}

impl LinkControl for UnitToUnitVoiceChannelUser {
    fn base(&self) -> &LcBase {
        &self.base
    }

    fn identifiers(&self) -> &[Identifier] {
        &self.identifiers
    }

    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FLC UNIT-TO-UNIT VOICE CHANNEL USER FM:{} TO:{} {}",
            self.source(),
            self.target(),
            self.service_options()
        )
    }
}

impl fmt::Display for UnitToUnitVoiceChannelUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_summary(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dmr_core::BitBuffer;

    #[test]
    fn test_unit_to_unit_voice_channel_user() {
        // opcode 3, vendor 0, options 0x40 (privacy), target 0x000064 (100), source 0x0000C8 (200)
        let msg = CorrectedBinaryMessage::new(BitBuffer::from_hexstr("0300400000640000C8000000").unwrap(), true);
        let lc = UnitToUnitVoiceChannelUser::from_message(msg, 0, Timeslot::Ts2).unwrap();
        assert!(lc.service_options().privacy());
        assert_eq!(lc.identifiers(), &[
            Identifier::radio(100, IdentifierRole::To),
            Identifier::radio(200, IdentifierRole::From),
        ]);
        assert_eq!(lc.base().opcode_raw(), 3);
        assert_eq!(lc.timeslot(), Timeslot::Ts2);
    }
}
