// ABOUTME: Credits page generation for decomp.me
// ABOUTME: Resolves maintainers and contributors, then renders a static HTML page

pub mod config;
pub mod directory;
pub mod github;
pub mod render;
pub mod resolver;
pub mod types;

use thiserror::Error;
use tracing::info;

pub use config::{ClientConfig, CreditsConfig};
pub use directory::{DirectoryClient, UserDirectory};
pub use github::{GitHubClient, ProfileService};
pub use render::{ContributorView, CreditsPage, Renderer};
pub use resolver::{interpret_profile, ContributorResolver};
pub use types::{Contributor, DirectoryUser, ExternalProfile, Link};

#[derive(Debug, Error)]
pub enum CreditsError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Lookup for {username} returned status {status}")]
    Status { username: String, status: u16 },

    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, CreditsError>;

/// Resolve both rosters; the lists are looked up concurrently with each other
pub async fn resolve_page<D, P>(
    config: &CreditsConfig,
    resolver: &ContributorResolver<D, P>,
) -> CreditsPage
where
    D: UserDirectory,
    P: ProfileService,
{
    let (maintainers, contributors) = futures::join!(
        resolver.resolve_all(&config.maintainers),
        resolver.resolve_all(&config.contributors),
    );

    CreditsPage {
        maintainers,
        contributors,
    }
}

/// Resolve and render the whole page
pub async fn build_credits_page<D, P>(
    config: &CreditsConfig,
    resolver: &ContributorResolver<D, P>,
) -> Result<String>
where
    D: UserDirectory,
    P: ProfileService,
{
    config.validate()?;

    let renderer = Renderer::new()?;
    let page = resolve_page(config, resolver).await;
    let html = renderer.render(config, &page)?;

    info!(
        maintainers = page.maintainers.len(),
        contributors = page.contributors.len(),
        bytes = html.len(),
        "Credits page rendered"
    );

    Ok(html)
}
