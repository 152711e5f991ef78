use clap::Parser;

use std::time::{SystemTime, UNIX_EPOCH};

use dmr_config::{CfgSlotType, DecoderConfig, toml_config};
use dmr_core::{BitBuffer, CorrectedBinaryMessage, Timeslot, Timestamp, debug};
use dmr_pdus::flc::enums::slot_type::SlotType;
use dmr_pdus::flc::{FLC_BITS, FullLc, LinkControl, validate_field_maps};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "DMR Full Link Control Decoder",
    long_about = "Decodes a corrected 96-bit full link control payload and prints its summary and identifiers"
)]
struct Args {
    /// Corrected FLC payload
    #[arg(help = "Payload as a 96-char bitstring or a 24-char hex string")]
    payload: String,

    #[arg(
        short = 's',
        long = "slot-type",
        help = "Slot type the payload was carried in: [ pi | vlc | tlc ]. Defaults to the configured slot type"
    )]
    slot_type: Option<String>,

    /// Mark the payload as failed by the FEC stage
    #[arg(long)]
    invalid: bool,

    #[arg(long = "corrected-bits", default_value_t = 0, help = "Number of bit errors the FEC stage repaired")]
    corrected_bits: u8,

    #[arg(long, help = "Burst receive time in milliseconds. Defaults to wall-clock time since the Unix epoch")]
    timestamp: Option<Timestamp>,

    #[arg(short = 't', long, help = "Timeslot index: [ 0 | 1 ]. Defaults to the configured timeslot")]
    timeslot: Option<u8>,

    #[arg(short = 'c', long, help = "Path to a TOML decoder configuration file")]
    config: Option<String>,

    /// Print the decoded record as JSON
    #[arg(long)]
    json: bool,
}

fn load_config(cfg_path: Option<&str>) -> DecoderConfig {
    let Some(path) = cfg_path else {
        return DecoderConfig::default();
    };
    match toml_config::from_file(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration from {}: {}", path, e);
            std::process::exit(1);
        }
    }
}

fn parse_slot_type(arg: &str) -> Result<SlotType, String> {
    match arg.to_lowercase().as_str() {
        "pi" | "pi_header" => Ok(SlotType::PiHeader),
        "vlc" | "voice_lc_header" => Ok(SlotType::VoiceLcHeader),
        "tlc" | "terminator" => Ok(SlotType::TerminatorWithLc),
        _ => Err(format!("Unsupported slot type '{}'. Use: pi, vlc, tlc", arg)),
    }
}

fn slot_type_from_cfg(cfg: CfgSlotType) -> SlotType {
    match cfg {
        CfgSlotType::PiHeader => SlotType::PiHeader,
        CfgSlotType::VoiceLcHeader => SlotType::VoiceLcHeader,
        CfgSlotType::TerminatorWithLc => SlotType::TerminatorWithLc,
    }
}

/// Accepts the payload as bits or hex digits, told apart by length.
/// Whitespace and underscores are ignored so grouped input can be pasted.
fn parse_payload(arg: &str) -> Result<BitBuffer, String> {
    let cleaned: String = arg.chars().filter(|c| !c.is_whitespace() && *c != '_').collect();
    let parsed = if cleaned.len() == FLC_BITS {
        BitBuffer::from_bitstr(&cleaned)
    } else if cleaned.len() == FLC_BITS / 4 {
        BitBuffer::from_hexstr(&cleaned)
    } else {
        return Err(format!(
            "Payload must be {} bits or {} hex digits, got {} characters",
            FLC_BITS,
            FLC_BITS / 4,
            cleaned.len()
        ));
    };
    parsed.map_err(|e| format!("Invalid payload: {}", e))
}

/// Wall-clock fallback for payloads given without a receive time
fn now_ms() -> Timestamp {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as Timestamp)
        .unwrap_or(0)
}

fn build_message(bits: BitBuffer, invalid: bool, corrected_bits: u8) -> CorrectedBinaryMessage {
    CorrectedBinaryMessage::new(bits, !invalid).with_corrected_bits(corrected_bits)
}

fn print_plain(lc: &FullLc) {
    println!("{}", lc);
    for ident in lc.identifiers() {
        println!("  {:<9} {:<4} {}", ident.kind(), ident.role(), ident.id());
    }
}

fn print_json(lc: &FullLc) {
    let out = serde_json::json!({
        "summary": lc.to_string(),
        "valid": lc.is_valid(),
        "encrypted": lc.is_encrypted(),
        "reserved_bit": lc.is_reserved_bit_set(),
        "timeslot": lc.timeslot().index(),
        "timestamp": lc.timestamp(),
        "message": lc.message().to_hex_string(),
        "corrected_bits": lc.message().corrected_bits(),
        "identifiers": lc.identifiers(),
    });
    println!("{}", out);
}

fn main() {
    eprintln!("[+] DMR Full Link Control decoding tool");

    let args = Args::parse();
    let cfg = load_config(args.config.as_deref());
    let _log_guard = debug::setup_logging_default(cfg.debug_log.clone());

    if let Err(e) = validate_field_maps() {
        eprintln!("Error: broken field map: {}", e);
        std::process::exit(1);
    }

    let slot_type = match args.slot_type.as_deref() {
        Some(s) => parse_slot_type(s),
        None => Ok(slot_type_from_cfg(cfg.decoder.default_slot_type)),
    };
    let slot_type = slot_type.unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let timeslot = match args.timeslot {
        Some(idx) => Timeslot::from_index(idx).unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }),
        None => cfg.decoder.default_timeslot,
    };

    let bits = parse_payload(&args.payload).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let message = build_message(bits, args.invalid, args.corrected_bits);
    let timestamp = args.timestamp.unwrap_or_else(now_ms);
    let lc = match FullLc::decode(slot_type, message, timestamp, timeslot) {
        Ok(lc) => lc,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if !lc.is_valid() && cfg.decoder.drop_invalid {
        tracing::info!(slot = %timeslot, "dropping record that failed crc");
        return;
    }

    if args.json {
        print_json(&lc);
    } else {
        print_plain(&lc);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_payload_formats() {
        let hex = parse_payload("00001000 00010000 00000500").unwrap();
        let bits = parse_payload(&format!("{}1{}", "0".repeat(20), "0".repeat(75))).unwrap();
        assert_eq!(hex.len(), 96);
        assert_eq!(bits.len(), 96);
        assert_eq!(hex.peek_bits_at(16, 8), Some(0x10));
        assert_eq!(bits.peek_bits_at(20, 1), Some(1));
    }

    #[test]
    fn test_parse_payload_rejects() {
        assert!(parse_payload("0011").is_err());
        assert!(parse_payload(&"z".repeat(24)).is_err());
        assert!(parse_payload(&"2".repeat(96)).is_err());
    }

    #[test]
    fn test_build_message_carries_fec_status() {
        let bits = parse_payload("000001000000000005000000").unwrap();
        let msg = build_message(bits, true, 3);
        assert!(!msg.is_valid());
        assert_eq!(msg.corrected_bits(), 3);

        let lc = FullLc::decode(SlotType::PiHeader, msg, 1234, Timeslot::Ts2).unwrap();
        assert_eq!(lc.message().corrected_bits(), 3);
        assert_eq!(lc.timestamp(), 1234);
        assert!(lc.to_string().starts_with("[CRC-ERROR] "));
    }

    #[test]
    fn test_args_timestamp_and_corrected_bits() {
        let args = Args::parse_from(["flc-tool", "--corrected-bits", "2", "--timestamp", "500", "000001000000000005000000"]);
        assert_eq!(args.corrected_bits, 2);
        assert_eq!(args.timestamp, Some(500));

        let args = Args::parse_from(["flc-tool", "000001000000000005000000"]);
        assert_eq!(args.corrected_bits, 0);
        assert_eq!(args.timestamp, None);
    }

    #[test]
    fn test_parse_slot_type() {
        assert_eq!(parse_slot_type("PI"), Ok(SlotType::PiHeader));
        assert_eq!(parse_slot_type("tlc"), Ok(SlotType::TerminatorWithLc));
        assert!(parse_slot_type("csbk").is_err());
    }
}
