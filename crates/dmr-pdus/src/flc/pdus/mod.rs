pub mod group_voice_channel_user;
pub mod motorola_encryption_parameters;
pub mod unit_to_unit_voice_channel_user;
pub mod unknown_flc;
