use core::fmt;

/// Service options of a voice channel user link control (ETSI TS 102 361-2 clause 7.2.1)
/// Bits: 8. Emergency, privacy, 2 reserved, broadcast, open voice call mode, 2 bits priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceOptions(u8);

impl ServiceOptions {
    pub fn new(raw: u8) -> Self {
        ServiceOptions(raw)
    }

    pub fn raw(&self) -> u8 {
        self.0
    }

    pub fn emergency(&self) -> bool {
        self.0 & 0x80 != 0
    }

    /// Voice payload is encrypted
    pub fn privacy(&self) -> bool {
        self.0 & 0x40 != 0
    }

    pub fn reserved(&self) -> u8 {
        (self.0 >> 4) & 0x3
    }

    pub fn broadcast(&self) -> bool {
        self.0 & 0x08 != 0
    }

    /// Open voice call mode
    pub fn ovcm(&self) -> bool {
        self.0 & 0x04 != 0
    }

    /// Priority level, 0 (none) to 3 (highest)
    pub fn priority(&self) -> u8 {
        self.0 & 0x3
    }
}

impl fmt::Display for ServiceOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.emergency() {
            write!(f, "EMERGENCY ")?;
        }
        if self.privacy() {
            write!(f, "PRIVACY ")?;
        }
        if self.broadcast() {
            write!(f, "BROADCAST ")?;
        }
        if self.ovcm() {
            write!(f, "OVCM ")?;
        }
        write!(f, "PRIORITY:{}", self.priority())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_options() {
        let o = ServiceOptions::new(0b1100_1110);
        assert!(o.emergency());
        assert!(o.privacy());
        assert_eq!(o.reserved(), 0);
        assert!(o.broadcast());
        assert!(o.ovcm());
        assert_eq!(o.priority(), 2);
        assert_eq!(o.to_string(), "EMERGENCY PRIVACY BROADCAST OVCM PRIORITY:2");

        let o = ServiceOptions::new(0b0011_0001);
        assert!(!o.emergency());
        assert!(!o.privacy());
        assert_eq!(o.reserved(), 3);
        assert_eq!(o.priority(), 1);
        assert_eq!(o.to_string(), "PRIORITY:1");
    }
}
