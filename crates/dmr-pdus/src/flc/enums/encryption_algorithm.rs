/// Encryption algorithm code carried by the Motorola encryption parameters link control
/// Bits: 8
///
/// Codes other than the ones listed are not an error: they are future or
/// unsupported algorithms and decode to `Unknown`, keeping the raw code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EncryptionAlgorithm {
    /// Enhanced Privacy / ARC4
    EpArc4,
    Unknown(u8),
}

impl EncryptionAlgorithm {
    pub fn from_raw(x: u8) -> Self {
        match x {
            0 => EncryptionAlgorithm::EpArc4,
            other => EncryptionAlgorithm::Unknown(other),
        }
    }

    /// Convert this enum back into the raw integer value
    pub fn into_raw(self) -> u8 {
        match self {
            EncryptionAlgorithm::EpArc4 => 0,
            EncryptionAlgorithm::Unknown(x) => x,
        }
    }
}

impl From<EncryptionAlgorithm> for u8 {
    fn from(e: EncryptionAlgorithm) -> Self { e.into_raw() }
}

impl core::fmt::Display for EncryptionAlgorithm {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            EncryptionAlgorithm::EpArc4 => write!(f, "EP/ARC4"),
            EncryptionAlgorithm::Unknown(x) => write!(f, "UNK({})", x),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_algorithm() {
        assert_eq!(EncryptionAlgorithm::from_raw(0), EncryptionAlgorithm::EpArc4);
        assert_eq!(EncryptionAlgorithm::from_raw(0).to_string(), "EP/ARC4");
    }

    #[test]
    fn test_unknown_algorithm_keeps_code() {
        for code in 1..=255u8 {
            let alg = EncryptionAlgorithm::from_raw(code);
            assert_eq!(alg, EncryptionAlgorithm::Unknown(code));
            assert_eq!(alg.into_raw(), code);
            assert!(alg.to_string().contains(&code.to_string()));
        }
    }
}
