//! Command-line interface: argument parsing and configuration loading

pub mod args;
pub mod config;
