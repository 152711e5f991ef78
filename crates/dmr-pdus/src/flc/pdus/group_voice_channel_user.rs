use core::fmt;

use dmr_core::bitfield::{field_map_is_valid, span};
use dmr_core::{BitField, CorrectedBinaryMessage, Identifier, IdentifierRole, PduParseErr, Timeslot, Timestamp};

use crate::flc::FLC_INFO_BITS;
use crate::flc::fields::service_options::ServiceOptions;
use crate::flc::lc_base::{ENCRYPTED, LcBase, LinkControl, OPCODE, RESERVED, VENDOR, write_summary};

const SERVICE_OPTIONS_BITS: [u16; 8] = span(16);
pub const SERVICE_OPTIONS: BitField = BitField::new("service_options", &SERVICE_OPTIONS_BITS);
const GROUP_ADDRESS_BITS: [u16; 24] = span(24);
pub const GROUP_ADDRESS: BitField = BitField::new("group_address", &GROUP_ADDRESS_BITS);
const SOURCE_ADDRESS_BITS: [u16; 24] = span(48);
pub const SOURCE_ADDRESS: BitField = BitField::new("source_address", &SOURCE_ADDRESS_BITS);

pub const FIELDS: &[BitField] = &[
    ENCRYPTED,
    RESERVED,
    OPCODE,
    VENDOR,
    SERVICE_OPTIONS,
    GROUP_ADDRESS,
    SOURCE_ADDRESS,
];

const _: () = assert!(field_map_is_valid(FIELDS, FLC_INFO_BITS));

/// Group Voice Channel User (FLCO 0b000000, standard feature set)
/// Identifies the talkgroup and the transmitting radio of a group call.
#[derive(Debug, Clone)]
pub struct GroupVoiceChannelUser {
    base: LcBase,
    /// Talkgroup, then source radio
    identifiers: [Identifier; 2],
}

impl GroupVoiceChannelUser {
    pub fn new(base: LcBase) -> Self {
        let talkgroup = Identifier::talkgroup(base.message().get_int(&GROUP_ADDRESS) as u32);
        let source = Identifier::radio(base.message().get_int(&SOURCE_ADDRESS) as u32, IdentifierRole::From);
        GroupVoiceChannelUser { base, identifiers: [talkgroup, source] }
    }

    pub fn from_message(message: CorrectedBinaryMessage, timestamp: Timestamp, timeslot: Timeslot) -> Result<Self, PduParseErr> {
        Ok(Self::new(LcBase::new(message, timestamp, timeslot)?))
    }

    pub fn service_options(&self) -> ServiceOptions {
        ServiceOptions::new(self.base.message().get_int(&SERVICE_OPTIONS) as u8)
    }

    pub fn talkgroup(&self) -> Identifier {
        self.identifiers[0]
    }

    pub fn source(&self) -> Identifier {
        self.identifiers[1]
    }
}

impl LinkControl for GroupVoiceChannelUser {
    fn base(&self) -> &LcBase {
        &self.base
    }

    fn identifiers(&self) -> &[Identifier] {
        &self.identifiers
    }

    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FLC GROUP VOICE CHANNEL USER FM:{} TO:{} {}",
            self.source(),
            self.talkgroup(),
            self.service_options()
        )
    }
}

impl fmt::Display for GroupVoiceChannelUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_summary(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dmr_core::BitBuffer;

    #[test]
    fn test_group_voice_channel_user() {
        // opcode 0, vendor 0, options 0x82 (emergency, priority 2), group 0x0003F2 (1010), source 0x2FAF08 (3125000)
        let msg = CorrectedBinaryMessage::new(BitBuffer::from_hexstr("0000820003F22FAF08ABCDEF").unwrap(), true);
        let lc = GroupVoiceChannelUser::from_message(msg, 42, Timeslot::Ts1).unwrap();
        let opts = lc.service_options();
        assert!(opts.emergency());
        assert!(!opts.privacy());
        assert_eq!(opts.priority(), 2);
        assert_eq!(lc.talkgroup(), Identifier::talkgroup(1010));
        assert_eq!(lc.source(), Identifier::radio(3125000, IdentifierRole::From));
        assert_eq!(lc.identifiers().len(), 2);
        assert_eq!(
            lc.to_string(),
            "FLC GROUP VOICE CHANNEL USER FM:3125000 TO:1010 EMERGENCY PRIORITY:2 MSG:0000820003F22FAF08ABCDEF"
        );
    }
}
