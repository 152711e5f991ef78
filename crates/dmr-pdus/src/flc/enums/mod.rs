pub mod encryption_algorithm;
pub mod flc_opcode;
pub mod slot_type;
pub mod vendor;
