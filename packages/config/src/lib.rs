// ABOUTME: Environment-driven configuration for decomp tooling
// ABOUTME: Typed readers over the variables named in `constants`

pub mod constants;

use std::env;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value}")]
    InvalidValue { var: String, value: String },
}

/// Read a string variable, ignoring unset and blank values
pub fn env_string(var: &str) -> Option<String> {
    env::var(var)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Read a string variable with a default
pub fn env_or(var: &str, default: &str) -> String {
    env_string(var).unwrap_or_else(|| default.to_string())
}

/// Read and parse a variable, falling back to `default` when unset
pub fn env_parse<T: FromStr>(var: &str, default: T) -> Result<T, ConfigError> {
    match env_string(var) {
        None => Ok(default),
        Some(raw) => raw.parse::<T>().map_err(|_| {
            debug!(var = %var, value = %raw, "Rejecting unparsable environment value");
            ConfigError::InvalidValue {
                var: var.to_string(),
                value: raw,
            }
        }),
    }
}
