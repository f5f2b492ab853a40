// src/config/mod.rs
// Configuration: config file plus environment overrides

pub mod env;
pub mod file;

pub use env::EnvConfig;
pub use file::RankConfig;
