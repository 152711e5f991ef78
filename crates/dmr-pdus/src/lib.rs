//! DMR PDU decoders
//!
//! Currently covers full link control. Each record type lives in its own module
//! with a static field map, read through `dmr_core::BitBuffer`.

pub mod flc;
