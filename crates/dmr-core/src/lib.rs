//! Core utilities for the DMR link control decoder
//!
//! This crate provides fundamental types used across the decoder:
//! - BitBuffer and BitField for position-addressed field extraction
//! - CorrectedBinaryMessage as handed over by the FEC stage
//! - Identifier types (talkgroup, radio)
//! - Timeslot and logging setup

pub mod address;
pub mod bitbuffer;
pub mod bitfield;
pub mod corrected;
pub mod debug;
pub mod pdu_parse_error;
pub mod phy_types;

// Re-export commonly used items
pub use address::*;
pub use bitbuffer::BitBuffer;
pub use bitfield::{BitField, FieldMapErr};
pub use corrected::CorrectedBinaryMessage;
pub use pdu_parse_error::PduParseErr;
pub use phy_types::*;

/// Monotonic receive time of a burst, in milliseconds
pub type Timestamp = u64;
