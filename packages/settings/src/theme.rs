// ABOUTME: Effective site theme resolution
// ABOUTME: Combines the stored theme with the host's colour scheme preference

use decomp_config::constants::DECOMP_PREFERS_COLOR_SCHEME;

use crate::types::Theme;

/// Source of the host environment's presentation preference
pub trait ColorSchemeProbe: Send + Sync {
    /// Whether the host explicitly asks for a light presentation
    fn prefers_light(&self) -> bool;
}

/// Reads `DECOMP_PREFERS_COLOR_SCHEME`; only `light` counts as an explicit preference
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvColorScheme;

impl ColorSchemeProbe for EnvColorScheme {
    fn prefers_light(&self) -> bool {
        decomp_config::env_string(DECOMP_PREFERS_COLOR_SCHEME)
            .map(|v| v.eq_ignore_ascii_case("light"))
            .unwrap_or(false)
    }
}

/// Fixed answer, for callers that already know the preference
#[derive(Debug, Default, Clone, Copy)]
pub struct FixedColorScheme {
    pub prefers_light: bool,
}

impl ColorSchemeProbe for FixedColorScheme {
    fn prefers_light(&self) -> bool {
        self.prefers_light
    }
}

/// Whether the site should render dark for the given theme
pub fn is_dark(theme: Theme, probe: &dyn ColorSchemeProbe) -> bool {
    match theme {
        Theme::Dark => true,
        Theme::Light => false,
        Theme::Auto => !probe.prefers_light(),
    }
}
