/// Full link control opcode (FLCO) of the standard feature set (ETSI TS 102 361-2 clause 7.1.1)
/// Bits: 6
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlcOpcode {
    GroupVoiceChannelUser,
    UnitToUnitVoiceChannelUser,
    TalkerAliasHeader,
    TalkerAliasBlock1,
    TalkerAliasBlock2,
    TalkerAliasBlock3,
    GpsInfo,
    /// Reserved or vendor-specific opcode
    Unknown(u8),
}

impl FlcOpcode {
    pub fn from_raw(x: u8) -> Self {
        match x {
            0b000000 => FlcOpcode::GroupVoiceChannelUser,
            0b000011 => FlcOpcode::UnitToUnitVoiceChannelUser,
            0b000100 => FlcOpcode::TalkerAliasHeader,
            0b000101 => FlcOpcode::TalkerAliasBlock1,
            0b000110 => FlcOpcode::TalkerAliasBlock2,
            0b000111 => FlcOpcode::TalkerAliasBlock3,
            0b001000 => FlcOpcode::GpsInfo,
            other => FlcOpcode::Unknown(other),
        }
    }

    /// Convert this enum back into the raw integer value
    pub fn into_raw(self) -> u8 {
        match self {
            FlcOpcode::GroupVoiceChannelUser => 0b000000,
            FlcOpcode::UnitToUnitVoiceChannelUser => 0b000011,
            FlcOpcode::TalkerAliasHeader => 0b000100,
            FlcOpcode::TalkerAliasBlock1 => 0b000101,
            FlcOpcode::TalkerAliasBlock2 => 0b000110,
            FlcOpcode::TalkerAliasBlock3 => 0b000111,
            FlcOpcode::GpsInfo => 0b001000,
            FlcOpcode::Unknown(x) => x,
        }
    }
}

impl From<FlcOpcode> for u8 {
    fn from(e: FlcOpcode) -> Self { e.into_raw() }
}

impl core::fmt::Display for FlcOpcode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FlcOpcode::GroupVoiceChannelUser => write!(f, "GROUP VOICE CHANNEL USER"),
            FlcOpcode::UnitToUnitVoiceChannelUser => write!(f, "UNIT-TO-UNIT VOICE CHANNEL USER"),
            FlcOpcode::TalkerAliasHeader => write!(f, "TALKER ALIAS HEADER"),
            FlcOpcode::TalkerAliasBlock1 => write!(f, "TALKER ALIAS BLOCK 1"),
            FlcOpcode::TalkerAliasBlock2 => write!(f, "TALKER ALIAS BLOCK 2"),
            FlcOpcode::TalkerAliasBlock3 => write!(f, "TALKER ALIAS BLOCK 3"),
            FlcOpcode::GpsInfo => write!(f, "GPS INFO"),
            FlcOpcode::Unknown(x) => write!(f, "UNK({})", x),
        }
    }
}
