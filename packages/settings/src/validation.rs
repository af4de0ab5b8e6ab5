// ABOUTME: Input validation for persisted settings
// ABOUTME: Type-specific rules applied before any value is written

use serde_json::Value;
use thiserror::Error;

use crate::types::{DataType, SettingKey, Theme};

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Invalid boolean value: {0}. Must be 'true' or 'false'")]
    InvalidBoolean(String),

    #[error("Invalid integer value: {0}. {1}")]
    InvalidInteger(String, String),

    #[error("Invalid number value: {0}. {1}")]
    InvalidFloat(String, String),

    #[error("Invalid enum value: {0}. Must be one of: {1}")]
    InvalidEnum(String, String),

    #[error("Value cannot be empty")]
    EmptyValue,

    #[error("Unknown setting key: {0}")]
    UnknownKey(String),

    #[error("Expected a {expected} for {key}, got {value}")]
    WrongType {
        key: String,
        expected: &'static str,
        value: String,
    },
}

/// Parse raw command-line text into the JSON value stored for `key`
pub fn parse_setting_value(key: SettingKey, raw: &str) -> Result<Value, ValidationError> {
    let raw = raw.trim();

    let value = match key.data_type() {
        DataType::Theme => Value::from(raw.parse::<Theme>()?.as_str()),
        DataType::Boolean => Value::from(parse_boolean(raw)?),
        DataType::Integer => Value::from(parse_integer(raw)?),
        DataType::Float => Value::from(parse_float(raw)?),
        DataType::String => {
            if raw.is_empty() {
                return Err(ValidationError::EmptyValue);
            }
            Value::from(raw)
        }
        // An empty font family clears the override
        DataType::OptionalString => {
            if raw.is_empty() || raw == "none" {
                Value::Null
            } else {
                Value::from(raw)
            }
        }
    };

    validate_setting_value(key, &value)?;
    Ok(value)
}

/// Validate a JSON value against the type and bounds of `key`
pub fn validate_setting_value(key: SettingKey, value: &Value) -> Result<(), ValidationError> {
    let wrong_type = |expected: &'static str| ValidationError::WrongType {
        key: key.to_string(),
        expected,
        value: value.to_string(),
    };

    match key.data_type() {
        DataType::Theme => {
            let s = value.as_str().ok_or_else(|| wrong_type("string"))?;
            s.parse::<Theme>()?;
        }
        DataType::Boolean => {
            value.as_bool().ok_or_else(|| wrong_type("boolean"))?;
        }
        DataType::Integer => {
            let n = value.as_i64().ok_or_else(|| wrong_type("integer"))?;
            let min = match key {
                SettingKey::CodeFontSize => 1,
                _ => 0,
            };
            // Integer slots are read back as u32
            validate_integer(n, Some(min), Some(u32::MAX as i64))?;
        }
        DataType::Float => {
            let n = value.as_f64().ok_or_else(|| wrong_type("number"))?;
            validate_positive(n)?;
        }
        DataType::String => {
            let s = value.as_str().ok_or_else(|| wrong_type("string"))?;
            if s.trim().is_empty() {
                return Err(ValidationError::EmptyValue);
            }
        }
        DataType::OptionalString => {
            if !value.is_null() {
                let s = value.as_str().ok_or_else(|| wrong_type("string"))?;
                if s.trim().is_empty() {
                    return Err(ValidationError::EmptyValue);
                }
            }
        }
    }

    Ok(())
}

fn parse_boolean(value: &str) -> Result<bool, ValidationError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ValidationError::InvalidBoolean(value.to_string())),
    }
}

fn parse_integer(value: &str) -> Result<i64, ValidationError> {
    value.parse::<i64>().map_err(|_| {
        ValidationError::InvalidInteger(value.to_string(), "Not a valid integer".to_string())
    })
}

fn parse_float(value: &str) -> Result<f64, ValidationError> {
    value.parse::<f64>().map_err(|_| {
        ValidationError::InvalidFloat(value.to_string(), "Not a valid number".to_string())
    })
}

/// Validate integer value with optional min/max bounds
fn validate_integer(value: i64, min: Option<i64>, max: Option<i64>) -> Result<(), ValidationError> {
    if let Some(min_val) = min {
        if value < min_val {
            return Err(ValidationError::InvalidInteger(
                value.to_string(),
                format!("Must be >= {}", min_val),
            ));
        }
    }

    if let Some(max_val) = max {
        if value > max_val {
            return Err(ValidationError::InvalidInteger(
                value.to_string(),
                format!("Must be <= {}", max_val),
            ));
        }
    }

    Ok(())
}

fn validate_positive(value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::InvalidFloat(
            value.to_string(),
            "Must be a positive number".to_string(),
        ))
    }
}
