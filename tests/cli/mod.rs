//! CLI Integration Test Modules

pub mod coalescing;
pub mod toml_config;
