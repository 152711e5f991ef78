//! Decoder configuration management
//!
//! This crate provides configuration loading and parsing for the FLC decoder tool:
//! - TOML configuration file parsing
//! - Decoder configuration structures

pub mod decoder_config;
pub mod toml_config;

pub use decoder_config::*;
pub use toml_config::*;
