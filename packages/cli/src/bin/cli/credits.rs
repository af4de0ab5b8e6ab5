// ABOUTME: CLI commands for the credits page
// ABOUTME: Resolves the roster and writes the rendered HTML

use anyhow::Context;
use clap::Subcommand;
use colored::*;
use decomp_credits::{build_credits_page, ClientConfig, ContributorResolver, CreditsConfig};
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum CreditsCommands {
    /// Resolve contributors and render the credits page
    Build {
        /// TOML file overriding the built-in roster and links
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Write the page here instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// Site API base URL (default: DECOMP_API_URL or https://decomp.me/api)
        #[arg(long)]
        api_url: Option<String>,
        /// GitHub API base URL (default: DECOMP_GITHUB_API_URL or https://api.github.com)
        #[arg(long)]
        github_api_url: Option<String>,
        /// Site URL used for profile links (default: DECOMP_SITE_URL or https://decomp.me)
        #[arg(long)]
        site_url: Option<String>,
    },
}

pub async fn handle_credits_command(command: CreditsCommands) -> anyhow::Result<()> {
    match command {
        CreditsCommands::Build {
            config,
            out,
            api_url,
            github_api_url,
            site_url,
        } => build(config, out, api_url, github_api_url, site_url).await,
    }
}

async fn build(
    config_path: Option<PathBuf>,
    out: Option<PathBuf>,
    api_url: Option<String>,
    github_api_url: Option<String>,
    site_url: Option<String>,
) -> anyhow::Result<()> {
    let mut credits = match &config_path {
        Some(path) => CreditsConfig::from_toml_file(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => CreditsConfig::default(),
    };
    if let Some(site_url) = site_url.or_else(decomp_credits::config::site_url_from_env) {
        credits.site_url = site_url;
    }

    let mut client = ClientConfig::from_env()?;
    if let Some(api_url) = api_url {
        client.api_url = api_url;
    }
    if let Some(github_api_url) = github_api_url {
        client.github_api_url = github_api_url;
    }

    let resolver = ContributorResolver::from_config(&client)?;
    let html = build_credits_page(&credits, &resolver).await?;

    match out {
        Some(path) => {
            tokio::fs::write(&path, &html)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!(
                "{} Credits page written to {}",
                "✅".green(),
                path.display().to_string().cyan()
            );
        }
        None => print!("{}", html),
    }

    Ok(())
}
