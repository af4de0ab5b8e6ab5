// ABOUTME: Contributor data model
// ABOUTME: Directory users, external profiles, and the tagged union over both

use serde::{Deserialize, Serialize};

/// User record returned by the site's own `/users/{username}` endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryUser {
    #[serde(default)]
    pub id: Option<u64>,
    pub username: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub github_html_url: Option<String>,
    #[serde(default)]
    pub is_anonymous: bool,
}

/// Minimal profile from the external profile service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalProfile {
    pub login: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
}

impl ExternalProfile {
    /// Username-only record used when the service gives nothing usable
    pub fn degraded(username: &str) -> Self {
        Self {
            login: username.to_string(),
            avatar_url: None,
            html_url: None,
        }
    }
}

/// A resolved contributor identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "user", rename_all = "lowercase")]
pub enum Contributor {
    Internal(DirectoryUser),
    External(ExternalProfile),
}

impl Contributor {
    /// Stable identity: internal username or external login
    pub fn key(&self) -> &str {
        match self {
            Contributor::Internal(user) => &user.username,
            Contributor::External(profile) => &profile.login,
        }
    }

    pub fn is_internal(&self) -> bool {
        matches!(self, Contributor::Internal(_))
    }

    pub fn avatar_url(&self) -> Option<&str> {
        match self {
            Contributor::Internal(user) => user.avatar_url.as_deref(),
            Contributor::External(profile) => profile.avatar_url.as_deref(),
        }
    }
}

/// A static link on the page; entries without a URL render as plain text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    #[serde(default)]
    pub url: Option<String>,
}

impl Link {
    pub fn new(label: &str, url: &str) -> Self {
        Self {
            label: label.to_string(),
            url: Some(url.to_string()),
        }
    }

    pub fn text(label: &str) -> Self {
        Self {
            label: label.to_string(),
            url: None,
        }
    }
}
