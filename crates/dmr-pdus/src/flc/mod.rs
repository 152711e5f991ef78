//! Full link control (FLC) records carried in voice LC headers, terminators and PI headers

pub mod enums;
pub mod fields;
pub mod full_lc;
pub mod lc_base;
pub mod pdus;

pub use full_lc::{FullLc, validate_field_maps};
pub use lc_base::{LcBase, LinkControl};

/// Length of a corrected FLC payload: information bits plus Reed-Solomon parity
pub const FLC_BITS: usize = 96;
/// Information bits of an FLC payload. Field maps never address the parity after these.
pub const FLC_INFO_BITS: usize = 72;
