// ABOUTME: Type definitions for persisted settings
// ABOUTME: Setting keys, the theme enum, and listing structures

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt;
use std::str::FromStr;

use crate::validation::ValidationError;

/// Site colour theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    Light,
    Auto,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
            Theme::Auto => "auto",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            "auto" => Ok(Theme::Auto),
            _ => Err(ValidationError::InvalidEnum(
                s.to_string(),
                "dark, light, auto".to_string(),
            )),
        }
    }
}

/// Shape of the value held in a setting slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    Theme,
    Boolean,
    Integer,
    Float,
    String,
    OptionalString,
}

/// Every recognised setting slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SettingKey {
    Theme,
    AutoRecompile,
    AutoRecompileDelay,
    CodeFontSize,
    MonospaceFont,
    CodeLineHeight,
    CodeColorScheme,
}

impl SettingKey {
    pub const ALL: [SettingKey; 7] = [
        SettingKey::Theme,
        SettingKey::AutoRecompile,
        SettingKey::AutoRecompileDelay,
        SettingKey::CodeFontSize,
        SettingKey::MonospaceFont,
        SettingKey::CodeLineHeight,
        SettingKey::CodeColorScheme,
    ];

    /// Storage key, identical to the name used by the web client
    pub fn as_str(&self) -> &'static str {
        match self {
            SettingKey::Theme => "theme",
            SettingKey::AutoRecompile => "autoRecompile",
            SettingKey::AutoRecompileDelay => "autoRecompileDelay",
            SettingKey::CodeFontSize => "codeFontSize",
            SettingKey::MonospaceFont => "monospaceFont",
            SettingKey::CodeLineHeight => "codeLineHeight",
            SettingKey::CodeColorScheme => "codeColorScheme",
        }
    }

    pub fn data_type(&self) -> DataType {
        match self {
            SettingKey::Theme => DataType::Theme,
            SettingKey::AutoRecompile => DataType::Boolean,
            SettingKey::AutoRecompileDelay | SettingKey::CodeFontSize => DataType::Integer,
            SettingKey::MonospaceFont => DataType::OptionalString,
            SettingKey::CodeLineHeight => DataType::Float,
            SettingKey::CodeColorScheme => DataType::String,
        }
    }

    /// Documented default, in its JSON form
    pub fn default_value(&self) -> Value {
        match self {
            SettingKey::Theme => json!("auto"),
            SettingKey::AutoRecompile => json!(true),
            SettingKey::AutoRecompileDelay => json!(500),
            SettingKey::CodeFontSize => json!(11),
            SettingKey::MonospaceFont => Value::Null,
            SettingKey::CodeLineHeight => json!(1.5),
            SettingKey::CodeColorScheme => json!("Frog Dark"),
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SettingKey::Theme => "Site theme (dark, light, auto)",
            SettingKey::AutoRecompile => "Recompile automatically after edits",
            SettingKey::AutoRecompileDelay => "Delay before automatic recompile (ms)",
            SettingKey::CodeFontSize => "Editor font size (pt)",
            SettingKey::MonospaceFont => "Editor font family",
            SettingKey::CodeLineHeight => "Editor line height",
            SettingKey::CodeColorScheme => "Editor colour scheme",
        }
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SettingKey {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SettingKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownKey(s.to_string()))
    }
}

/// A setting as reported by `SettingsStore::entries`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingEntry {
    pub key: SettingKey,
    pub value: Value,
    pub is_default: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_round_trip_through_strings() {
        for key in SettingKey::ALL {
            assert_eq!(key.as_str().parse::<SettingKey>().unwrap(), key);
        }
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        assert!(matches!(
            "fontSize".parse::<SettingKey>(),
            Err(ValidationError::UnknownKey(k)) if k == "fontSize"
        ));
    }

    #[test]
    fn test_theme_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        assert_eq!(
            serde_json::from_str::<Theme>("\"auto\"").unwrap(),
            Theme::Auto
        );
        assert!(serde_json::from_str::<Theme>("\"sepia\"").is_err());
    }
}
