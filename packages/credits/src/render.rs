// ABOUTME: Static credits page rendering
// ABOUTME: Maps resolved contributors to link views and renders the Tera template

use serde::Serialize;
use tera::{Context, Tera};

use crate::config::CreditsConfig;
use crate::types::Contributor;
use crate::Result;

const TEMPLATE_NAME: &str = "credits.html";
const TEMPLATE: &str = include_str!("../templates/credits.html");

/// Resolved people for one page build
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreditsPage {
    pub maintainers: Vec<Contributor>,
    pub contributors: Vec<Contributor>,
}

/// What the template needs to draw one user link
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContributorView {
    pub key: String,
    pub kind: &'static str,
    pub name: String,
    pub href: String,
    pub avatar_url: Option<String>,
}

impl ContributorView {
    pub fn new(contributor: &Contributor, site_url: &str) -> Self {
        match contributor {
            Contributor::Internal(user) => Self {
                key: user.username.clone(),
                kind: "internal",
                name: user
                    .name
                    .clone()
                    .filter(|n| !n.trim().is_empty())
                    .unwrap_or_else(|| user.username.clone()),
                href: format!(
                    "{}/u/{}",
                    site_url.trim_end_matches('/'),
                    urlencoding::encode(&user.username)
                ),
                avatar_url: user.avatar_url.clone(),
            },
            Contributor::External(profile) => Self {
                key: profile.login.clone(),
                kind: "external",
                name: profile.login.clone(),
                href: profile.html_url.clone().unwrap_or_else(|| {
                    format!("https://github.com/{}", urlencoding::encode(&profile.login))
                }),
                avatar_url: profile.avatar_url.clone(),
            },
        }
    }
}

pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_template(TEMPLATE_NAME, TEMPLATE)?;
        Ok(Self { tera })
    }

    pub fn render(&self, config: &CreditsConfig, page: &CreditsPage) -> Result<String> {
        let views = |list: &[Contributor]| -> Vec<ContributorView> {
            list.iter()
                .map(|c| ContributorView::new(c, &config.site_url))
                .collect()
        };

        let mut context = Context::new();
        context.insert("maintainers", &views(&page.maintainers));
        context.insert("contributors", &views(&page.contributors));
        context.insert("projects", &config.projects);
        context.insert("icons", &config.icons);

        Ok(self.tera.render(TEMPLATE_NAME, &context)?)
    }
}
