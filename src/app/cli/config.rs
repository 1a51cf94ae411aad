//! TOML configuration file parsing and settings resolution
//!
//! Values are resolved with the precedence command line > configuration file >
//! built-in default. The configuration file is either the one named with
//! `--config-file` (which must exist) or `<config dir>/Uniqueq/uniqueq.toml`
//! when present.

use crate::core::validation::{validate_log_format, validate_log_level};
use std::path::{Path, PathBuf};

use super::args::Args;

/// Default initial queue capacity
pub const DEFAULT_CAPACITY: usize = 1024;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("The specified configuration file does not exist: {path}")]
    NotFound { path: PathBuf },

    #[error("Error reading configuration file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error parsing configuration file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid value for '{key}' in configuration file: {message}")]
    InvalidValue { key: String, message: String },
}

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Fully resolved runtime settings
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub workers: usize,
    pub capacity: usize,
    pub stats: bool,
    pub trim: bool,
    pub ignore_blank: bool,
    pub log_level: Option<String>,
    pub log_format: Option<String>,
    pub log_file: Option<PathBuf>,
    /// `None` means decide from the terminal
    pub color: Option<bool>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            workers: std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1),
            capacity: DEFAULT_CAPACITY,
            stats: false,
            trim: false,
            ignore_blank: false,
            log_level: None,
            log_format: None,
            log_file: None,
            color: None,
        }
    }
}

/// Location of the per-user configuration file, if the platform has one
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("Uniqueq").join("uniqueq.toml"))
}

/// Load the configuration file named on the command line, or the default one
///
/// Returns `Ok(None)` when no file was named and the default does not exist.
pub fn load_config_file(config_file: Option<&Path>) -> ConfigResult<Option<toml::Table>> {
    let config_path = match config_file {
        Some(path) if !path.exists() => {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            })
        }
        Some(path) => path.to_path_buf(),
        None => match default_config_path() {
            Some(path) if path.exists() => path,
            _ => return Ok(None),
        },
    };

    log::debug!("Loading configuration from {}", config_path.display());
    let contents = std::fs::read_to_string(&config_path).map_err(|source| ConfigError::Read {
        path: config_path.clone(),
        source,
    })?;
    let table = toml::from_str::<toml::Table>(&contents).map_err(|source| ConfigError::Parse {
        path: config_path,
        source,
    })?;
    Ok(Some(table))
}

impl Settings {
    /// Merge defaults, an optional configuration table and the command line
    pub fn resolve(args: &Args, config: Option<&toml::Table>) -> ConfigResult<Self> {
        let mut settings = Self::default();
        if let Some(config) = config {
            settings.apply_toml_values(config)?;
        }
        settings.apply_args(args);
        Ok(settings)
    }

    /// Apply TOML configuration values on top of the current settings
    pub fn apply_toml_values(&mut self, config: &toml::Table) -> ConfigResult<()> {
        if let Some(workers) = get_positive(config, "workers")? {
            self.workers = workers;
        }
        if let Some(capacity) = get_integer(config, "capacity")? {
            self.capacity = usize::try_from(capacity)
                .map_err(|_| invalid("capacity", "must not be negative"))?;
        }
        if let Some(stats) = get_bool(config, "stats")? {
            self.stats = stats;
        }
        if let Some(trim) = get_bool(config, "trim")? {
            self.trim = trim;
        }
        if let Some(ignore_blank) = get_bool(config, "ignore-blank")? {
            self.ignore_blank = ignore_blank;
        }
        if let Some(color) = get_bool(config, "color")? {
            self.color = Some(color);
        }
        if let Some(log_level) = get_str(config, "log-level")? {
            self.log_level = Some(
                validate_log_level(log_level).map_err(|message| invalid("log-level", &message))?,
            );
        }
        if let Some(log_format) = get_str(config, "log-format")? {
            self.log_format = Some(
                validate_log_format(log_format).map_err(|message| invalid("log-format", &message))?,
            );
        }
        if let Some(log_file) = get_str(config, "log-file")? {
            self.log_file = log_file_setting(Path::new(log_file));
        }
        Ok(())
    }

    /// Command-line values win over everything else
    fn apply_args(&mut self, args: &Args) {
        if let Some(workers) = args.workers {
            self.workers = workers;
        }
        if let Some(capacity) = args.capacity {
            self.capacity = capacity;
        }
        self.stats |= args.stats;
        self.trim |= args.trim;
        self.ignore_blank |= args.ignore_blank;
        if let Some(color) = args.color_choice() {
            self.color = Some(color);
        }
        if let Some(log_level) = &args.log_level {
            self.log_level = Some(log_level.clone());
        }
        if let Some(log_format) = &args.log_format {
            self.log_format = Some(log_format.clone());
        }
        if let Some(log_file) = &args.log_file {
            self.log_file = log_file_setting(log_file);
        }
    }
}

// Magic values "none" and "-" disable file logging
fn log_file_setting(value: &Path) -> Option<PathBuf> {
    let raw = value.as_os_str();
    if raw.eq_ignore_ascii_case("none") || raw == "-" {
        None
    } else {
        Some(value.to_path_buf())
    }
}

fn invalid(key: &str, message: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        message: message.to_string(),
    }
}

fn get_bool(config: &toml::Table, key: &str) -> ConfigResult<Option<bool>> {
    match config.get(key) {
        None => Ok(None),
        Some(value) => value
            .as_bool()
            .map(Some)
            .ok_or_else(|| invalid(key, "expected true or false")),
    }
}

fn get_str<'a>(config: &'a toml::Table, key: &str) -> ConfigResult<Option<&'a str>> {
    match config.get(key) {
        None => Ok(None),
        Some(value) => value
            .as_str()
            .map(Some)
            .ok_or_else(|| invalid(key, "expected a string")),
    }
}

fn get_integer(config: &toml::Table, key: &str) -> ConfigResult<Option<i64>> {
    match config.get(key) {
        None => Ok(None),
        Some(value) => value
            .as_integer()
            .map(Some)
            .ok_or_else(|| invalid(key, "expected an integer")),
    }
}

fn get_positive(config: &toml::Table, key: &str) -> ConfigResult<Option<usize>> {
    match get_integer(config, key)? {
        None => Ok(None),
        Some(n) if n > 0 => Ok(Some(n as usize)),
        Some(_) => Err(invalid(key, "Value must be greater than 0")),
    }
}
