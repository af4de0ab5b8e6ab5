// ABOUTME: Credits page configuration
// ABOUTME: The contributor roster, static link sections, and HTTP client settings

use decomp_config::constants::{
    DECOMP_API_URL, DECOMP_GITHUB_API_URL, DECOMP_HTTP_TIMEOUT_SECS, DECOMP_SITE_URL,
    DEFAULT_API_URL, DEFAULT_GITHUB_API_URL, DEFAULT_HTTP_TIMEOUT_SECS, DEFAULT_SITE_URL,
    GITHUB_TOKEN,
};
use decomp_config::{env_or, env_parse, env_string};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::debug;

use crate::types::Link;
use crate::{CreditsError, Result};

const MAINTAINERS: [&str; 2] = ["nanaian", "ethteck"];

const CONTRIBUTORS: [&str; 13] = [
    "zbanks",
    "simonlindholm",
    "mkst",
    "FluentCoding",
    "TGEnigma",
    "octorock",
    "JoshDuMan",
    "Henny022",
    "AngheloAlf",
    "EpochFlame",
    "SeekyCt",
    "Trevor89",
    "MegaMech",
];

/// Everything the credits page is built from
///
/// Missing fields in a TOML file take the built-in values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreditsConfig {
    pub site_url: String,
    pub maintainers: Vec<String>,
    pub contributors: Vec<String>,
    pub projects: Vec<Link>,
    pub icons: Vec<Link>,
}

impl Default for CreditsConfig {
    fn default() -> Self {
        Self {
            site_url: DEFAULT_SITE_URL.to_string(),
            maintainers: MAINTAINERS.iter().map(|s| s.to_string()).collect(),
            contributors: CONTRIBUTORS.iter().map(|s| s.to_string()).collect(),
            projects: vec![
                Link::new(
                    "simonlindholm/asm-differ",
                    "https://github.com/simonlindholm/asm-differ",
                ),
                Link::new("matt-kempster/m2c", "https://github.com/matt-kempster/m2c"),
            ],
            icons: vec![
                Link::text("Octicons by GitHub"),
                Link::new("file-icons/icons", "https://github.com/file-icons/icons"),
                Link::new(
                    "coreui/coreui-icons",
                    "https://github.com/coreui/coreui-icons",
                ),
                Link::new(
                    "New Fontendo 23DSi Lite XL",
                    "https://www.deviantart.com/maxigamer/art/FONT-New-Fontendo-23DSi-Lite-XL-DOWNLOAD-ZIP-552834059",
                ),
                Link::new(
                    "GBA SVG by Andrew Vester from NounProject.com",
                    "https://thenounproject.com/icon/gameboy-advanced-752507/",
                ),
                Link::new(
                    "Happy Mac by NiloGlock",
                    "https://commons.wikimedia.org/wiki/File:Happy_Mac.svg",
                ),
                Link::new(
                    "Tiger-like-x by Althepal",
                    "https://commons.wikimedia.org/wiki/File:Tiger-like-x.svg",
                ),
            ],
        }
    }
}

impl CreditsConfig {
    /// Load and validate a TOML roster file
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        debug!(path = %path.display(), "Loaded credits configuration");
        Ok(config)
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// The maintainer sentence names exactly two people
    pub fn validate(&self) -> Result<()> {
        if self.maintainers.len() != 2 {
            return Err(CreditsError::InvalidConfig(format!(
                "expected exactly 2 maintainers, found {}",
                self.maintainers.len()
            )));
        }

        if let Some(blank) = self
            .maintainers
            .iter()
            .chain(self.contributors.iter())
            .find(|name| name.trim().is_empty())
        {
            return Err(CreditsError::InvalidConfig(format!(
                "usernames cannot be empty (got {:?})",
                blank
            )));
        }

        Ok(())
    }
}

/// Endpoints and limits for the two lookup sources
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub api_url: String,
    pub github_api_url: String,
    pub github_token: Option<String>,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            github_api_url: DEFAULT_GITHUB_API_URL.to_string(),
            github_token: None,
            timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Result<Self> {
        let timeout_secs = env_parse(DECOMP_HTTP_TIMEOUT_SECS, DEFAULT_HTTP_TIMEOUT_SECS)
            .map_err(|e| CreditsError::InvalidConfig(e.to_string()))?;

        Ok(Self {
            api_url: env_or(DECOMP_API_URL, DEFAULT_API_URL),
            github_api_url: env_or(DECOMP_GITHUB_API_URL, DEFAULT_GITHUB_API_URL),
            github_token: env_string(GITHUB_TOKEN),
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

/// Site URL from `DECOMP_SITE_URL`, if set
pub fn site_url_from_env() -> Option<String> {
    env_string(DECOMP_SITE_URL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serial_test::serial;
    use std::env;

    #[test]
    fn test_default_roster() {
        let config = CreditsConfig::default();

        assert_eq!(config.maintainers, vec!["nanaian", "ethteck"]);
        assert_eq!(config.contributors.len(), 13);
        assert_eq!(config.contributors.first().map(String::as_str), Some("zbanks"));
        assert_eq!(config.contributors.last().map(String::as_str), Some("MegaMech"));
        assert_eq!(config.projects.len(), 2);
        assert_eq!(config.icons.len(), 7);
        assert_eq!(config.icons[0].url, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = CreditsConfig::from_toml_str(
            r#"
            contributors = ["alice", "bob"]
            "#,
        )
        .unwrap();

        assert_eq!(config.maintainers, vec!["nanaian", "ethteck"]);
        assert_eq!(config.contributors, vec!["alice", "bob"]);
        assert_eq!(config.icons, CreditsConfig::default().icons);
    }

    #[test]
    fn test_toml_links() {
        let config = CreditsConfig::from_toml_str(
            r#"
            [[projects]]
            label = "example/tool"
            url = "https://example.com/tool"

            [[projects]]
            label = "offline"
            "#,
        )
        .unwrap();

        assert_eq!(
            config.projects,
            vec![
                Link::new("example/tool", "https://example.com/tool"),
                Link::text("offline"),
            ]
        );
    }

    #[test]
    fn test_rejects_wrong_maintainer_count() {
        let err = CreditsConfig::from_toml_str(r#"maintainers = ["solo"]"#).unwrap_err();
        assert!(matches!(err, CreditsError::InvalidConfig(msg) if msg.contains("exactly 2")));
    }

    #[test]
    fn test_rejects_blank_usernames() {
        let err = CreditsConfig::from_toml_str(r#"contributors = ["ok", " "]"#).unwrap_err();
        assert!(matches!(err, CreditsError::InvalidConfig(_)));
    }

    #[test]
    fn test_from_toml_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("credits.toml");
        std::fs::write(&path, "maintainers = [\"a\", \"b\"]\ncontributors = []\n").unwrap();

        let config = CreditsConfig::from_toml_file(&path).unwrap();

        assert_eq!(config.maintainers, vec!["a", "b"]);
        assert!(config.contributors.is_empty());
        assert_eq!(config.site_url, DEFAULT_SITE_URL);
    }

    #[test]
    fn test_from_toml_file_missing() {
        let result = CreditsConfig::from_toml_file(Path::new("/nonexistent/credits.toml"));
        assert!(matches!(result, Err(CreditsError::Io(_))));
    }

    #[test]
    fn test_rejects_malformed_toml() {
        assert!(matches!(
            CreditsConfig::from_toml_str("maintainers = "),
            Err(CreditsError::Toml(_))
        ));
    }

    #[test]
    #[serial]
    fn test_client_config_from_env() {
        env::set_var(DECOMP_API_URL, "http://localhost:8000/api");
        env::set_var(DECOMP_HTTP_TIMEOUT_SECS, "3");
        env::remove_var(DECOMP_GITHUB_API_URL);
        env::remove_var(GITHUB_TOKEN);

        let config = ClientConfig::from_env().unwrap();

        env::remove_var(DECOMP_API_URL);
        env::remove_var(DECOMP_HTTP_TIMEOUT_SECS);

        assert_eq!(config.api_url, "http://localhost:8000/api");
        assert_eq!(config.github_api_url, DEFAULT_GITHUB_API_URL);
        assert_eq!(config.github_token, None);
        assert_eq!(config.timeout, Duration::from_secs(3));
    }

    #[test]
    #[serial]
    fn test_client_config_rejects_bad_timeout() {
        env::set_var(DECOMP_HTTP_TIMEOUT_SECS, "fast");
        let result = ClientConfig::from_env();
        env::remove_var(DECOMP_HTTP_TIMEOUT_SECS);

        assert!(matches!(result, Err(CreditsError::InvalidConfig(_))));
    }
}
