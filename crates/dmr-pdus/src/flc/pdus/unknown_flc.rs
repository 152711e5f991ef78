use core::fmt;

use dmr_core::Identifier;

use crate::flc::enums::slot_type::SlotType;
use crate::flc::lc_base::{LcBase, LinkControl, write_summary};

/// Full link control record without a registered decoder. Keeps the payload for
/// diagnostics and contributes no identifiers.
#[derive(Debug, Clone)]
pub struct UnknownFlc {
    base: LcBase,
    slot_type: SlotType,
}

impl UnknownFlc {
    pub fn new(base: LcBase, slot_type: SlotType) -> Self {
        UnknownFlc { base, slot_type }
    }

    pub fn slot_type(&self) -> SlotType {
        self.slot_type
    }
}

impl LinkControl for UnknownFlc {
    fn base(&self) -> &LcBase {
        &self.base
    }

    fn identifiers(&self) -> &[Identifier] {
        &[]
    }

    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FLC UNKNOWN {} VENDOR:{} OPCODE:{}",
            self.slot_type,
            self.base.vendor(),
            self.base.opcode_raw()
        )
    }
}

impl fmt::Display for UnknownFlc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_summary(self, f)
    }
}
