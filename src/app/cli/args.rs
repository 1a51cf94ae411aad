//! Command-line arguments
//!
//! Every option except the inputs is optional so that values left unset can
//! be filled from the configuration file; see [`Settings`](super::config::Settings).

use crate::core::validation::{validate_log_format, validate_log_level, validate_positive_int};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "uniqueq")]
#[command(about = "Coalesce duplicate lines across inputs, keeping first-seen order")]
#[command(version, long_version = crate::core::version::long_version())]
pub struct Args {
    /// Input files ('-' or none reads stdin)
    #[arg(value_name = "INPUT")]
    pub inputs: Vec<PathBuf>,

    /// Configuration file path
    #[arg(short = 'c', long = "config-file", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Producer threads feeding the queue
    #[arg(short = 'w', long = "workers", value_name = "N", value_parser = validate_positive_int)]
    pub workers: Option<usize>,

    /// Initial queue capacity
    #[arg(long = "capacity", value_name = "N")]
    pub capacity: Option<usize>,

    /// Print admission statistics to stderr
    #[arg(short = 's', long = "stats")]
    pub stats: bool,

    /// Trim surrounding whitespace before comparing lines
    #[arg(long = "trim")]
    pub trim: bool,

    /// Drop lines that are empty or contain only whitespace
    #[arg(long = "ignore-blank")]
    pub ignore_blank: bool,

    /// Write coalesced lines to FILE instead of stdout
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Log level
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = validate_log_level)]
    pub log_level: Option<String>,

    /// Log output format (text, ext, json)
    #[arg(long = "log-format", value_name = "FORMAT", value_parser = validate_log_format)]
    pub log_format: Option<String>,

    /// Log file path (use 'none' to disable file logging)
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Force coloured output
    #[arg(long = "color", conflicts_with = "no_color")]
    pub color: bool,

    /// Disable coloured output
    #[arg(long = "no-color")]
    pub no_color: bool,
}

impl Args {
    /// Colour choice from the command line: `None` when neither flag was given
    pub fn color_choice(&self) -> Option<bool> {
        match (self.color, self.no_color) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}
