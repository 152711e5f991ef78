/// Feature set id (FID) qualifying the link control opcode
/// Bits: 8
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vendor {
    /// ETSI standard feature set
    Standard,
    FlydeMicro,
    ProdElSpa,
    MotorolaConnectPlus,
    RadioData,
    Hytera8,
    MotorolaCapacityPlus,
    EmcSpa,
    RadioActivity,
    Tait,
    Hytera68,
    VertexStandard,
    Unknown(u8),
}

impl Vendor {
    pub fn from_raw(x: u8) -> Self {
        match x {
            0x00 => Vendor::Standard,
            0x04 => Vendor::FlydeMicro,
            0x05 => Vendor::ProdElSpa,
            0x06 => Vendor::MotorolaConnectPlus,
            0x07 => Vendor::RadioData,
            0x08 => Vendor::Hytera8,
            0x10 => Vendor::MotorolaCapacityPlus,
            0x13 => Vendor::EmcSpa,
            0x1C => Vendor::RadioActivity,
            0x58 => Vendor::Tait,
            0x68 => Vendor::Hytera68,
            0x77 => Vendor::VertexStandard,
            other => Vendor::Unknown(other),
        }
    }

    /// Convert this enum back into the raw integer value
    pub fn into_raw(self) -> u8 {
        match self {
            Vendor::Standard => 0x00,
            Vendor::FlydeMicro => 0x04,
            Vendor::ProdElSpa => 0x05,
            Vendor::MotorolaConnectPlus => 0x06,
            Vendor::RadioData => 0x07,
            Vendor::Hytera8 => 0x08,
            Vendor::MotorolaCapacityPlus => 0x10,
            Vendor::EmcSpa => 0x13,
            Vendor::RadioActivity => 0x1C,
            Vendor::Tait => 0x58,
            Vendor::Hytera68 => 0x68,
            Vendor::VertexStandard => 0x77,
            Vendor::Unknown(x) => x,
        }
    }
}

impl From<Vendor> for u8 {
    fn from(e: Vendor) -> Self { e.into_raw() }
}

impl core::fmt::Display for Vendor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Vendor::Standard => write!(f, "STANDARD"),
            Vendor::FlydeMicro => write!(f, "FLYDE MICRO"),
            Vendor::ProdElSpa => write!(f, "PROD-EL SPA"),
            Vendor::MotorolaConnectPlus => write!(f, "MOTOROLA CONNECT+"),
            Vendor::RadioData => write!(f, "RADIODATA"),
            Vendor::Hytera8 | Vendor::Hytera68 => write!(f, "HYTERA"),
            Vendor::MotorolaCapacityPlus => write!(f, "MOTOROLA CAPACITY+"),
            Vendor::EmcSpa => write!(f, "EMC SPA"),
            Vendor::RadioActivity => write!(f, "RADIO ACTIVITY"),
            Vendor::Tait => write!(f, "TAIT"),
            Vendor::VertexStandard => write!(f, "VERTEX STANDARD"),
            Vendor::Unknown(x) => write!(f, "UNK({})", x),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vendor_raw() {
        for raw in 0..=255u8 {
            assert_eq!(Vendor::from_raw(raw).into_raw(), raw);
        }
        assert_eq!(Vendor::from_raw(0x10), Vendor::MotorolaCapacityPlus);
        assert_eq!(Vendor::from_raw(0x68).to_string(), "HYTERA");
        assert_eq!(Vendor::from_raw(0xFE).to_string(), "UNK(254)");
    }
}
