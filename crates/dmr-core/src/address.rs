use serde::Serialize;

/// Direction of an identifier relative to the call it was decoded from
#[derive(Copy, Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentifierRole {
    /// Destination of the call
    To,
    /// Originator of the call
    From,
}

impl core::fmt::Display for IdentifierRole {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            IdentifierRole::To => write!(f, "TO"),
            IdentifierRole::From => write!(f, "FROM"),
        }
    }
}

/// Typed identifier produced by link control decoders and handed to the
/// identifier-correlation layer.
#[derive(Copy, Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Identifier {
    /// Group call destination
    Talkgroup { id: u32, role: IdentifierRole },
    /// Individual radio (subscriber unit) address
    Radio { id: u32, role: IdentifierRole },
}

impl Identifier {
    /// Convenience constructor for a destination talkgroup
    pub fn talkgroup(id: u32) -> Self {
        Identifier::Talkgroup { id, role: IdentifierRole::To }
    }

    pub fn radio(id: u32, role: IdentifierRole) -> Self {
        Identifier::Radio { id, role }
    }

    pub fn id(&self) -> u32 {
        match self {
            Identifier::Talkgroup { id, .. } | Identifier::Radio { id, .. } => *id,
        }
    }

    pub fn role(&self) -> IdentifierRole {
        match self {
            Identifier::Talkgroup { role, .. } | Identifier::Radio { role, .. } => *role,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Identifier::Talkgroup { .. } => "TALKGROUP",
            Identifier::Radio { .. } => "RADIO",
        }
    }
}

/// Renders the bare number, as it appears in link control summaries
impl core::fmt::Display for Identifier {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_accessors() {
        let tg = Identifier::talkgroup(5);
        assert_eq!(tg.id(), 5);
        assert_eq!(tg.role(), IdentifierRole::To);
        assert_eq!(tg.kind(), "TALKGROUP");
        assert_eq!(tg.to_string(), "5");

        let radio = Identifier::radio(1234567, IdentifierRole::From);
        assert_eq!(radio.kind(), "RADIO");
        assert_eq!(radio.role().to_string(), "FROM");
        assert_ne!(Identifier::radio(5, IdentifierRole::To), tg);
    }
}
