// ABOUTME: Environment variable name constants
// ABOUTME: Centralized definitions of all environment variable names used across decomp tooling

// Upstream endpoints
pub const DECOMP_API_URL: &str = "DECOMP_API_URL";
pub const DECOMP_SITE_URL: &str = "DECOMP_SITE_URL";
pub const DECOMP_GITHUB_API_URL: &str = "DECOMP_GITHUB_API_URL";
pub const GITHUB_TOKEN: &str = "GITHUB_TOKEN";

// HTTP client tuning
pub const DECOMP_HTTP_TIMEOUT_SECS: &str = "DECOMP_HTTP_TIMEOUT_SECS";

// Settings persistence
pub const DECOMP_SETTINGS_DB: &str = "DECOMP_SETTINGS_DB";

// Host presentation preference ("light" or "dark")
pub const DECOMP_PREFERS_COLOR_SCHEME: &str = "DECOMP_PREFERS_COLOR_SCHEME";

// System Environment Variables
pub const HOME: &str = "HOME";

// Defaults
pub const DEFAULT_API_URL: &str = "https://decomp.me/api";
pub const DEFAULT_SITE_URL: &str = "https://decomp.me";
pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;
