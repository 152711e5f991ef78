use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use dmr_core::Timeslot;
use serde::Deserialize;
use toml::Value;

use super::decoder_config::{CfgDecoder, CfgSlotType, DecoderConfig};

/// Build `DecoderConfig` from a TOML configuration string
pub fn from_toml_str(toml_str: &str) -> Result<DecoderConfig, Box<dyn std::error::Error>> {
    let root: TomlConfigRoot = toml::from_str(toml_str)?;

    let expected_config_version = "0.1";
    if !root.config_version.eq(expected_config_version) {
        return Err(format!(
            "Unrecognized config_version: {}, expect {}",
            root.config_version, expected_config_version
        )
        .into());
    }
    if !root.extra.is_empty() {
        return Err(format!("Unrecognized top-level fields: {:?}", sorted_keys(&root.extra)).into());
    }
    if let Some(ref dec) = root.decoder {
        if !dec.extra.is_empty() {
            return Err(format!("Unrecognized fields in decoder: {:?}", sorted_keys(&dec.extra)).into());
        }
    }

    let mut cfg = DecoderConfig {
        debug_log: root.debug_log,
        decoder: CfgDecoder::default(),
    };

    if let Some(dec) = root.decoder {
        apply_decoder_patch(&mut cfg.decoder, dec)?;
    }

    cfg.validate()?;
    Ok(cfg)
}

/// Build `DecoderConfig` from any reader.
pub fn from_reader<R: Read>(reader: R) -> Result<DecoderConfig, Box<dyn std::error::Error>> {
    let mut contents = String::new();
    let mut reader = BufReader::new(reader);
    reader.read_to_string(&mut contents)?;
    from_toml_str(&contents)
}

/// Build `DecoderConfig` from a file path.
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<DecoderConfig, Box<dyn std::error::Error>> {
    let f = File::open(path)?;
    from_reader(f)
}

fn apply_decoder_patch(dst: &mut CfgDecoder, src: DecoderDto) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(v) = src.drop_invalid {
        dst.drop_invalid = v;
    }
    if let Some(v) = src.default_timeslot {
        dst.default_timeslot = Timeslot::from_index(v)?;
    }
    if let Some(v) = src.default_slot_type {
        dst.default_slot_type = v;
    }
    Ok(())
}

fn sorted_keys(map: &HashMap<String, Value>) -> Vec<&str> {
    let mut v: Vec<&str> = map.keys().map(|s| s.as_str()).collect();
    v.sort_unstable();
    v
}

/// ----------------------- DTOs for input shape -----------------------

#[derive(Deserialize)]
struct TomlConfigRoot {
    config_version: String,
    debug_log: Option<String>,

    #[serde(default)]
    decoder: Option<DecoderDto>,

    #[serde(flatten)]
    extra: HashMap<String, Value>,
}

#[derive(Default, Deserialize)]
struct DecoderDto {
    pub drop_invalid: Option<bool>,
    pub default_timeslot: Option<u8>,
    pub default_slot_type: Option<CfgSlotType>,

    #[serde(flatten)]
    extra: HashMap<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config() {
        let cfg = from_toml_str("config_version = \"0.1\"\n").unwrap();
        assert_eq!(cfg.debug_log, None);
        assert!(!cfg.decoder.drop_invalid);
        assert_eq!(cfg.decoder.default_timeslot, Timeslot::Ts1);
        assert_eq!(cfg.decoder.default_slot_type, CfgSlotType::VoiceLcHeader);
    }

    #[test]
    fn test_full_config() {
        let toml = r#"
            config_version = "0.1"
            debug_log = "flc.log"

            [decoder]
            drop_invalid = true
            default_timeslot = 1
            default_slot_type = "PiHeader"
        "#;
        let cfg = from_reader(toml.as_bytes()).unwrap();
        assert_eq!(cfg.debug_log.as_deref(), Some("flc.log"));
        assert!(cfg.decoder.drop_invalid);
        assert_eq!(cfg.decoder.default_timeslot, Timeslot::Ts2);
        assert_eq!(cfg.decoder.default_slot_type, CfgSlotType::PiHeader);
    }

    #[test]
    fn test_rejects_bad_version() {
        let err = from_toml_str("config_version = \"0.5\"\n").unwrap_err();
        assert!(err.to_string().contains("config_version"));
    }

    #[test]
    fn test_rejects_unknown_fields() {
        let err = from_toml_str("config_version = \"0.1\"\nfoo = 1\n").unwrap_err();
        assert!(err.to_string().contains("foo"));

        let err = from_toml_str("config_version = \"0.1\"\n[decoder]\nbar = true\n").unwrap_err();
        assert!(err.to_string().contains("bar"));
    }

    #[test]
    fn test_rejects_bad_timeslot() {
        let err = from_toml_str("config_version = \"0.1\"\n[decoder]\ndefault_timeslot = 2\n").unwrap_err();
        assert!(err.to_string().contains("timeslot"));
    }

    #[test]
    fn test_rejects_empty_debug_log() {
        assert!(from_toml_str("config_version = \"0.1\"\ndebug_log = \" \"\n").is_err());
    }
}
