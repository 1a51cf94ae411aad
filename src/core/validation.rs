//! Validation utilities for CLI and configuration values

/// Validate positive integer value
pub fn validate_positive_int(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("Value must be greater than 0".to_string()),
        Ok(n) => Ok(n),
        Err(_) => Err(format!("'{}' is not a valid positive integer", value)),
    }
}

/// Validate a log level name
pub fn validate_log_level(value: &str) -> Result<String, String> {
    let lowered = value.to_ascii_lowercase();
    match lowered.as_str() {
        "trace" | "debug" | "info" | "warn" | "error" | "off" => Ok(lowered),
        _ => Err(format!(
            "'{}' is not a log level (trace, debug, info, warn, error, off)",
            value
        )),
    }
}

/// Validate a log format name
pub fn validate_log_format(value: &str) -> Result<String, String> {
    let lowered = value.to_ascii_lowercase();
    match lowered.as_str() {
        "text" | "ext" | "json" => Ok(lowered),
        _ => Err(format!("'{}' is not a log format (text, ext, json)", value)),
    }
}
