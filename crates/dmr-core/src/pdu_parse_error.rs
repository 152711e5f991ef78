use core::fmt;

#[derive(Debug, PartialEq, Eq)]
pub enum PduParseErr {
    InconsistentLength { expected: usize, found: usize },
    InvalidValue { field: &'static str, value: u64 },
    InvalidCharacter { field: &'static str, found: char },
}

impl fmt::Display for PduParseErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PduParseErr::InconsistentLength { expected, found } => {
                write!(f, "inconsistent length: expected {} bits, found {}", expected, found)
            }
            PduParseErr::InvalidValue { field, value } => write!(f, "invalid value {} for {}", value, field),
            PduParseErr::InvalidCharacter { field, found } => write!(f, "invalid character {:?} in {}", found, field),
        }
    }
}

impl std::error::Error for PduParseErr {}

/// Checks whether a buffer length matches the expected length. If not, returns PduParseErr::InconsistentLength
#[macro_export]
macro_rules! expect_len {
    ($found:expr, $expected:expr) => {{
        let found = $found;
        if found == $expected {
            Ok(())
        } else {
            Err($crate::PduParseErr::InconsistentLength {
                expected: $expected,
                found,
            })
        }
    }};
}
