//! Burst-level types shared by the FEC, framing and link control layers

use crate::pdu_parse_error::PduParseErr;

/// TDMA timeslot of a two-slot DMR channel
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Timeslot {
    /// First timeslot, index 0
    Ts1,
    /// Second timeslot, index 1
    Ts2,
}

impl Timeslot {
    /// Map a 0-based timeslot index to a Timeslot
    pub fn from_index(index: u8) -> Result<Self, PduParseErr> {
        match index {
            0 => Ok(Timeslot::Ts1),
            1 => Ok(Timeslot::Ts2),
            _ => Err(PduParseErr::InvalidValue { field: "timeslot", value: index as u64 }),
        }
    }

    /// 0-based index of this timeslot
    pub fn index(self) -> u8 {
        match self {
            Timeslot::Ts1 => 0,
            Timeslot::Ts2 => 1,
        }
    }
}

impl TryFrom<u8> for Timeslot {
    type Error = PduParseErr;
    fn try_from(x: u8) -> Result<Self, Self::Error> {
        Timeslot::from_index(x)
    }
}

impl core::fmt::Display for Timeslot {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Timeslot::Ts1 => write!(f, "TS1"),
            Timeslot::Ts2 => write!(f, "TS2"),
        }
    }
}
