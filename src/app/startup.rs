//! Application startup: configuration, logging, then the coalescing run

use super::cli::args::Args;
use super::cli::config::{load_config_file, Settings};
use super::coalesce::{format_stats, Coalescer, InputSource};
use crate::core::logging::init_logging;
use crate::core::styles::palette_to_clap;
use crate::core::version;
use clap::{CommandFactory, FromArgMatches};
use std::fs::File;
use std::io::{self, BufWriter, IsTerminal};

/// Entry point used by the binary; exits with status 1 on failure
pub fn startup() {
    let help_color = io::stdout().is_terminal();
    let matches = Args::command()
        .styles(palette_to_clap(help_color))
        .get_matches();
    let args = match Args::from_arg_matches(&matches) {
        Ok(args) => args,
        Err(e) => e.exit(),
    };

    if let Err(e) = run(args) {
        log::error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Resolve settings, start logging, coalesce the inputs and write the result
pub fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config_file(args.config_file.as_deref())?;
    let settings = Settings::resolve(&args, config.as_ref())?;
    let use_color = settings
        .color
        .unwrap_or_else(|| io::stderr().is_terminal());

    let log_file = settings
        .log_file
        .as_ref()
        .map(|path| path.to_string_lossy().to_string());
    if let Err(e) = init_logging(
        settings.log_level.as_deref(),
        settings.log_format.as_deref(),
        log_file.as_deref(),
        use_color,
    ) {
        eprintln!("Warning: logging could not be initialised: {}", e);
    }

    log::info!("uniqueq {} starting", version::long_version());
    log::debug!("Resolved settings: {:?}", settings);

    let sources = InputSource::from_paths(&args.inputs);
    let coalescer = Coalescer::new(&settings);
    coalescer.ingest(&sources)?;

    let written = match &args.output {
        Some(path) => coalescer.write_to(BufWriter::new(File::create(path)?))?,
        None => coalescer.write_to(io::stdout().lock())?,
    };
    log::info!("Wrote {} unique line(s)", written);

    if settings.stats {
        eprintln!("{}", format_stats(&coalescer.stats(), use_color));
    }

    Ok(())
}
