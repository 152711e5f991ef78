use core::fmt;

use dmr_core::bitfield::validate_field_map;
use dmr_core::{BitField, CorrectedBinaryMessage, FieldMapErr, Identifier, PduParseErr, Timeslot, Timestamp};

use crate::flc::FLC_INFO_BITS;
use crate::flc::enums::{flc_opcode::FlcOpcode, slot_type::SlotType, vendor::Vendor};
use crate::flc::lc_base::{HEADER_FIELDS, LcBase, LinkControl, write_summary};
use crate::flc::pdus::{
    group_voice_channel_user::{self, GroupVoiceChannelUser},
    motorola_encryption_parameters::{self, MotorolaEncryptionParameters},
    unit_to_unit_voice_channel_user::{self, UnitToUnitVoiceChannelUser},
    unknown_flc::UnknownFlc,
};

/// Field maps of every decoder `FullLc::decode` can select
pub const REGISTERED_FIELD_MAPS: &[(&str, &[BitField])] = &[
    ("header", HEADER_FIELDS),
    ("group_voice_channel_user", group_voice_channel_user::FIELDS),
    ("unit_to_unit_voice_channel_user", unit_to_unit_voice_channel_user::FIELDS),
    ("motorola_encryption_parameters", motorola_encryption_parameters::FIELDS),
];

/// Runtime self-check of all registered field maps. The same checks run as
/// const assertions, so this only fails if a map was edited without them.
pub fn validate_field_maps() -> Result<(), FieldMapErr> {
    for (name, map) in REGISTERED_FIELD_MAPS {
        validate_field_map(map, FLC_INFO_BITS)?;
        tracing::trace!("field map {} ok ({} fields)", name, map.len());
    }
    Ok(())
}

/// A decoded full link control record
#[derive(Debug, Clone)]
pub enum FullLc {
    GroupVoiceChannelUser(GroupVoiceChannelUser),
    UnitToUnitVoiceChannelUser(UnitToUnitVoiceChannelUser),
    MotorolaEncryptionParameters(MotorolaEncryptionParameters),
    Unknown(UnknownFlc),
}

impl FullLc {
    /// Select and run the decoder for a corrected FLC payload. `slot_type` comes from
    /// the slot type field of the burst the payload was carried in.
    ///
    /// Fails only if the payload is not 96 bits long. Payloads that failed FEC and
    /// unrecognized opcodes still decode.
    pub fn decode(
        slot_type: SlotType,
        message: CorrectedBinaryMessage,
        timestamp: Timestamp,
        timeslot: Timeslot,
    ) -> Result<Self, PduParseErr> {
        let base = LcBase::new(message, timestamp, timeslot)?;

        let lc = match slot_type {
            SlotType::PiHeader => FullLc::MotorolaEncryptionParameters(MotorolaEncryptionParameters::new(base)),
            SlotType::VoiceLcHeader | SlotType::TerminatorWithLc => match (base.vendor(), base.opcode()) {
                (Vendor::Standard, FlcOpcode::GroupVoiceChannelUser) => {
                    FullLc::GroupVoiceChannelUser(GroupVoiceChannelUser::new(base))
                }
                (Vendor::Standard, FlcOpcode::UnitToUnitVoiceChannelUser) => {
                    FullLc::UnitToUnitVoiceChannelUser(UnitToUnitVoiceChannelUser::new(base))
                }
                (vendor, opcode) => {
                    tracing::debug!(slot = %timeslot, "no decoder for {} opcode {}", vendor, opcode);
                    FullLc::Unknown(UnknownFlc::new(base, slot_type))
                }
            },
            _ => {
                tracing::debug!(slot = %timeslot, "slot type {} does not carry full link control", slot_type);
                FullLc::Unknown(UnknownFlc::new(base, slot_type))
            }
        };

        if !lc.is_valid() {
            tracing::debug!(slot = %timeslot, "decoded flc failed crc: {}", lc);
        }
        Ok(lc)
    }

    fn inner(&self) -> &dyn LinkControl {
        match self {
            FullLc::GroupVoiceChannelUser(lc) => lc,
            FullLc::UnitToUnitVoiceChannelUser(lc) => lc,
            FullLc::MotorolaEncryptionParameters(lc) => lc,
            FullLc::Unknown(lc) => lc,
        }
    }
}

impl LinkControl for FullLc {
    fn base(&self) -> &LcBase {
        self.inner().base()
    }

    fn identifiers(&self) -> &[Identifier] {
        self.inner().identifiers()
    }

    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inner().describe(f)
    }
}

impl fmt::Display for FullLc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_summary(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dmr_core::BitBuffer;

    fn msg(hex: &str) -> CorrectedBinaryMessage {
        CorrectedBinaryMessage::new(BitBuffer::from_hexstr(hex).unwrap(), true)
    }

    #[test]
    fn test_registered_field_maps_valid() {
        assert_eq!(validate_field_maps(), Ok(()));
    }

    #[test]
    fn test_dispatch_pi_header() {
        let lc = FullLc::decode(SlotType::PiHeader, msg("000001000000000005000000"), 0, Timeslot::Ts1).unwrap();
        assert!(matches!(lc, FullLc::MotorolaEncryptionParameters(_)));
        assert_eq!(lc.identifiers(), &[Identifier::talkgroup(5)]);
    }

    #[test]
    fn test_dispatch_voice_headers() {
        let lc = FullLc::decode(SlotType::VoiceLcHeader, msg("0000000003F2000001000000"), 0, Timeslot::Ts1).unwrap();
        assert!(matches!(lc, FullLc::GroupVoiceChannelUser(_)));

        let lc = FullLc::decode(SlotType::TerminatorWithLc, msg("030000000064000001000000"), 0, Timeslot::Ts1).unwrap();
        assert!(matches!(lc, FullLc::UnitToUnitVoiceChannelUser(_)));
    }

    #[test]
    fn test_dispatch_unknown() {
        // Talker alias header: known opcode, no decoder
        let lc = FullLc::decode(SlotType::VoiceLcHeader, msg("040000000000000000000000"), 0, Timeslot::Ts1).unwrap();
        assert!(matches!(lc, FullLc::Unknown(_)));
        assert!(lc.identifiers().is_empty());

        // Group voice opcode under a vendor feature set
        let lc = FullLc::decode(SlotType::VoiceLcHeader, msg("0010000003F2000001000000"), 0, Timeslot::Ts1).unwrap();
        assert!(matches!(lc, FullLc::Unknown(_)));
        assert_eq!(
            lc.to_string(),
            "FLC UNKNOWN VOICE_LC_HEADER VENDOR:MOTOROLA CAPACITY+ OPCODE:0 MSG:0010000003F2000001000000"
        );

        let lc = FullLc::decode(SlotType::Csbk, msg("000000000000000000000000"), 0, Timeslot::Ts1).unwrap();
        assert!(matches!(lc, FullLc::Unknown(_)));
    }

    #[test]
    fn test_wrong_length() {
        let err = FullLc::decode(SlotType::PiHeader, msg("0000"), 0, Timeslot::Ts1).unwrap_err();
        assert_eq!(err, PduParseErr::InconsistentLength { expected: 96, found: 16 });
    }
}
