use dmr_core::Timeslot;
use serde::Deserialize;

/// Slot type assumed for payloads given without one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum CfgSlotType {
    PiHeader,
    VoiceLcHeader,
    TerminatorWithLc,
}

/// Decoding behaviour
#[derive(Debug, Clone)]
pub struct CfgDecoder {
    /// Suppress records that failed FEC instead of printing them with a CRC-ERROR marker
    pub drop_invalid: bool,
    pub default_timeslot: Timeslot,
    pub default_slot_type: CfgSlotType,
}

impl Default for CfgDecoder {
    fn default() -> Self {
        Self {
            drop_invalid: false,
            default_timeslot: Timeslot::Ts1,
            default_slot_type: CfgSlotType::VoiceLcHeader,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DecoderConfig {
    /// Optional verbose log file
    pub debug_log: Option<String>,
    pub decoder: CfgDecoder,
}

impl DecoderConfig {
    /// Validate that all configuration fields are properly set.
    pub fn validate(&self) -> Result<(), &str> {
        if let Some(ref path) = self.debug_log {
            if path.trim().is_empty() {
                return Err("debug_log must not be empty when given");
            }
        }
        Ok(())
    }
}
