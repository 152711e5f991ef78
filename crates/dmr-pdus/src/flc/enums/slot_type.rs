/// Data type carried in the slot type field of a data/control burst (ETSI TS 102 361-1 clause 9.3.6)
/// Bits: 4
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotType {
    /// Privacy indicator header
    PiHeader,
    /// Voice link control header
    VoiceLcHeader,
    /// Terminator with link control
    TerminatorWithLc,
    Csbk,
    MbcHeader,
    MbcContinuation,
    DataHeader,
    Rate12Data,
    Rate34Data,
    Idle,
    Rate1Data,
    /// Reserved data type value
    Unknown(u8),
}

impl SlotType {
    pub fn from_raw(x: u8) -> Self {
        match x {
            0 => SlotType::PiHeader,
            1 => SlotType::VoiceLcHeader,
            2 => SlotType::TerminatorWithLc,
            3 => SlotType::Csbk,
            4 => SlotType::MbcHeader,
            5 => SlotType::MbcContinuation,
            6 => SlotType::DataHeader,
            7 => SlotType::Rate12Data,
            8 => SlotType::Rate34Data,
            9 => SlotType::Idle,
            10 => SlotType::Rate1Data,
            other => SlotType::Unknown(other),
        }
    }

    /// Convert this enum back into the raw integer value
    pub fn into_raw(self) -> u8 {
        match self {
            SlotType::PiHeader => 0,
            SlotType::VoiceLcHeader => 1,
            SlotType::TerminatorWithLc => 2,
            SlotType::Csbk => 3,
            SlotType::MbcHeader => 4,
            SlotType::MbcContinuation => 5,
            SlotType::DataHeader => 6,
            SlotType::Rate12Data => 7,
            SlotType::Rate34Data => 8,
            SlotType::Idle => 9,
            SlotType::Rate1Data => 10,
            SlotType::Unknown(x) => x,
        }
    }

    /// True for the burst types whose payload is a full link control record
    pub fn carries_full_lc(self) -> bool {
        matches!(self, SlotType::PiHeader | SlotType::VoiceLcHeader | SlotType::TerminatorWithLc)
    }
}

impl From<SlotType> for u8 {
    fn from(e: SlotType) -> Self { e.into_raw() }
}

impl core::fmt::Display for SlotType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SlotType::PiHeader => write!(f, "PI_HEADER"),
            SlotType::VoiceLcHeader => write!(f, "VOICE_LC_HEADER"),
            SlotType::TerminatorWithLc => write!(f, "TERMINATOR_WITH_LC"),
            SlotType::Csbk => write!(f, "CSBK"),
            SlotType::MbcHeader => write!(f, "MBC_HEADER"),
            SlotType::MbcContinuation => write!(f, "MBC_CONTINUATION"),
            SlotType::DataHeader => write!(f, "DATA_HEADER"),
            SlotType::Rate12Data => write!(f, "RATE_1/2_DATA"),
            SlotType::Rate34Data => write!(f, "RATE_3/4_DATA"),
            SlotType::Idle => write!(f, "IDLE"),
            SlotType::Rate1Data => write!(f, "RATE_1_DATA"),
            SlotType::Unknown(x) => write!(f, "UNKNOWN({})", x),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_type_raw() {
        for raw in 0..16u8 {
            assert_eq!(SlotType::from_raw(raw).into_raw(), raw);
        }
        assert_eq!(SlotType::from_raw(0), SlotType::PiHeader);
        assert_eq!(SlotType::from_raw(12), SlotType::Unknown(12));
        assert!(SlotType::TerminatorWithLc.carries_full_lc());
        assert!(!SlotType::Csbk.carries_full_lc());
    }
}
