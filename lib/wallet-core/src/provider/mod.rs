pub mod issuance_protocol;
pub mod key_algorithm;
pub mod key_storage;
pub mod remote_config;
