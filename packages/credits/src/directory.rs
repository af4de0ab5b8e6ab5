// ABOUTME: Internal user directory lookup
// ABOUTME: Fetches user records from the site's own API

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::config::ClientConfig;
use crate::types::DirectoryUser;
use crate::{CreditsError, Result};

/// Primary source of contributor records
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Look up a user; any error means "not found" to callers
    async fn get_user(&self, username: &str) -> Result<DirectoryUser>;
}

/// `GET {api_url}/users/{username}`
pub struct DirectoryClient {
    client: Client,
    base_url: String,
}

impl DirectoryClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self::with_client(client, &config.api_url))
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl UserDirectory for DirectoryClient {
    async fn get_user(&self, username: &str) -> Result<DirectoryUser> {
        let url = format!(
            "{}/users/{}",
            self.base_url,
            urlencoding::encode(username)
        );
        debug!(url = %url, "Directory lookup");

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CreditsError::Status {
                username: username.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.json::<DirectoryUser>().await?)
    }
}
