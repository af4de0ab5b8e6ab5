// ABOUTME: External profile service client
// ABOUTME: Fetches public GitHub user profiles as raw JSON

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::config::ClientConfig;
use crate::Result;

const USER_AGENT: &str = "decomp-credits";

/// Fallback source of contributor profiles
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileService: Send + Sync {
    /// Fetch the response body for a user, whatever its status
    async fn get_profile(&self, username: &str) -> Result<Value>;
}

/// `GET {github_api_url}/users/{username}`
pub struct GitHubClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl GitHubClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self::with_client(
            client,
            &config.github_api_url,
            config.github_token.clone(),
        ))
    }

    pub fn with_client(client: Client, base_url: &str, token: Option<String>) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }
}

#[async_trait]
impl ProfileService for GitHubClient {
    async fn get_profile(&self, username: &str) -> Result<Value> {
        let url = format!(
            "{}/users/{}",
            self.base_url,
            urlencoding::encode(username)
        );

        let mut request = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .header("Accept", "application/vnd.github.v3+json");
        if let Some(token) = &self.token {
            request = request.header("Authorization", format!("Bearer {}", token));
        }

        let response = request.send().await?;
        let status = response.status();
        debug!(url = %url, status = %status, "Profile lookup");

        // Rate-limit and error bodies carry a "message" field that the
        // resolver inspects, so the body is returned regardless of status
        Ok(response.json::<Value>().await?)
    }
}
