// ABOUTME: Contributor resolution with directory-first, profile-service fallback
// ABOUTME: Every username yields exactly one Contributor; lookups never fail overall

use futures::future::join_all;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::config::ClientConfig;
use crate::directory::{DirectoryClient, UserDirectory};
use crate::github::{GitHubClient, ProfileService};
use crate::types::{Contributor, ExternalProfile};
use crate::Result;

pub struct ContributorResolver<D, P> {
    directory: D,
    profiles: P,
}

impl ContributorResolver<DirectoryClient, GitHubClient> {
    /// Resolver backed by the real HTTP clients
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Ok(Self::new(
            DirectoryClient::new(config)?,
            GitHubClient::new(config)?,
        ))
    }
}

impl<D: UserDirectory, P: ProfileService> ContributorResolver<D, P> {
    pub fn new(directory: D, profiles: P) -> Self {
        Self {
            directory,
            profiles,
        }
    }

    /// Resolve one username
    pub async fn resolve(&self, username: &str) -> Contributor {
        match self.directory.get_user(username).await {
            Ok(user) => Contributor::Internal(user),
            Err(e) => {
                debug!(username = %username, error = %e, "Directory lookup failed, trying profile service");
                Contributor::External(self.resolve_external(username).await)
            }
        }
    }

    /// Resolve every username concurrently, preserving input order
    pub async fn resolve_all(&self, usernames: &[String]) -> Vec<Contributor> {
        let contributors = join_all(usernames.iter().map(|u| self.resolve(u))).await;

        let internal = contributors.iter().filter(|c| c.is_internal()).count();
        info!(
            total = contributors.len(),
            internal,
            external = contributors.len() - internal,
            "Resolved contributors"
        );

        contributors
    }

    async fn resolve_external(&self, username: &str) -> ExternalProfile {
        match self.profiles.get_profile(username).await {
            Ok(body) => interpret_profile(username, body),
            Err(e) => {
                warn!(username = %username, error = %e, "Profile service unreachable, using bare username");
                ExternalProfile::degraded(username)
            }
        }
    }
}

/// Turn a profile-service body into a profile, degrading on the "message" sentinel
///
/// Only a truthy message counts: `null`, `false`, `0` and `""` are ignored.
pub fn interpret_profile(username: &str, body: Value) -> ExternalProfile {
    if let Some(message) = body.get("message").filter(|m| is_truthy(m)) {
        warn!(username = %username, message = %message, "Profile service refused lookup, using bare username");
        return ExternalProfile::degraded(username);
    }

    match serde_json::from_value::<ExternalProfile>(body) {
        Ok(profile) => profile,
        Err(e) => {
            warn!(username = %username, error = %e, "Unusable profile body, using bare username");
            ExternalProfile::degraded(username)
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::MockUserDirectory;
    use crate::github::MockProfileService;
    use crate::types::DirectoryUser;
    use crate::CreditsError;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    fn user(username: &str) -> DirectoryUser {
        DirectoryUser {
            id: Some(7),
            username: username.to_string(),
            name: Some(format!("{} (site)", username)),
            avatar_url: Some(format!("https://cdn.example/{}.png", username)),
            github_html_url: None,
            is_anonymous: false,
        }
    }

    fn not_found(username: &str) -> CreditsError {
        CreditsError::Status {
            username: username.to_string(),
            status: 404,
        }
    }

    #[tokio::test]
    async fn test_internal_hit_wraps_record_and_skips_fallback() {
        let mut directory = MockUserDirectory::new();
        directory
            .expect_get_user()
            .times(1)
            .returning(|username| Ok(user(username)));
        let mut profiles = MockProfileService::new();
        profiles.expect_get_profile().never();

        let resolver = ContributorResolver::new(directory, profiles);
        let contributor = resolver.resolve("nanaian").await;

        assert_eq!(contributor, Contributor::Internal(user("nanaian")));
    }

    #[tokio::test]
    async fn test_internal_miss_uses_external_profile() {
        let mut directory = MockUserDirectory::new();
        directory
            .expect_get_user()
            .returning(|username| Err(not_found(username)));
        let mut profiles = MockProfileService::new();
        profiles.expect_get_profile().times(1).returning(|username| {
            Ok(json!({
                "login": username,
                "avatar_url": "https://avatars.example/u/1",
                "id": 1
            }))
        });

        let resolver = ContributorResolver::new(directory, profiles);
        let contributor = resolver.resolve("zbanks").await;

        assert_eq!(
            contributor,
            Contributor::External(ExternalProfile {
                login: "zbanks".to_string(),
                avatar_url: Some("https://avatars.example/u/1".to_string()),
                html_url: None,
            })
        );
    }

    #[tokio::test]
    async fn test_rate_limited_external_degrades_to_username() {
        let mut directory = MockUserDirectory::new();
        directory
            .expect_get_user()
            .returning(|username| Err(not_found(username)));
        let mut profiles = MockProfileService::new();
        profiles
            .expect_get_profile()
            .returning(|_| Ok(json!({"message": "API rate limit exceeded"})));

        let resolver = ContributorResolver::new(directory, profiles);
        let contributor = resolver.resolve("mkst").await;

        assert_eq!(
            contributor,
            Contributor::External(ExternalProfile::degraded("mkst"))
        );
        assert_eq!(contributor.avatar_url(), None);
    }

    #[tokio::test]
    async fn test_unreachable_external_degrades_to_username() {
        let mut directory = MockUserDirectory::new();
        directory
            .expect_get_user()
            .returning(|username| Err(not_found(username)));
        let mut profiles = MockProfileService::new();
        profiles
            .expect_get_profile()
            .returning(|_| Err(CreditsError::InvalidConfig("offline".to_string())));

        let resolver = ContributorResolver::new(directory, profiles);

        assert_eq!(
            resolver.resolve("octorock").await,
            Contributor::External(ExternalProfile::degraded("octorock"))
        );
    }

    #[tokio::test]
    async fn test_resolve_all_preserves_order_across_mixed_outcomes() {
        let mut directory = MockUserDirectory::new();
        directory.expect_get_user().returning(|username| match username {
            "alice" | "carol" => Ok(user(username)),
            other => Err(not_found(other)),
        });
        let mut profiles = MockProfileService::new();
        profiles.expect_get_profile().returning(|username| match username {
            "bob" => Ok(json!({"login": "bob"})),
            _ => Ok(json!({"message": "Not Found"})),
        });

        let resolver = ContributorResolver::new(directory, profiles);
        let usernames: Vec<String> = ["alice", "bob", "carol", "dave"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let contributors = resolver.resolve_all(&usernames).await;
        let keys: Vec<&str> = contributors.iter().map(Contributor::key).collect();

        assert_eq!(keys, vec!["alice", "bob", "carol", "dave"]);
        assert!(contributors[0].is_internal());
        assert!(!contributors[1].is_internal());
        assert!(contributors[2].is_internal());
        assert_eq!(
            contributors[3],
            Contributor::External(ExternalProfile::degraded("dave"))
        );
    }

    #[tokio::test]
    async fn test_resolve_all_empty() {
        let resolver =
            ContributorResolver::new(MockUserDirectory::new(), MockProfileService::new());
        assert!(resolver.resolve_all(&[]).await.is_empty());
    }

    #[rstest]
    #[case::rate_limited(json!({"message": "API rate limit exceeded"}))]
    #[case::not_found(json!({"message": "Not Found", "documentation_url": "https://docs"}))]
    #[case::message_object(json!({"message": {"text": "blocked"}, "login": "someone"}))]
    #[case::not_an_object(json!("oops"))]
    #[case::null_body(Value::Null)]
    fn test_interpret_profile_degrades(#[case] body: Value) {
        assert_eq!(
            interpret_profile("EpochFlame", body),
            ExternalProfile::degraded("EpochFlame")
        );
    }

    #[rstest]
    #[case::empty_string(json!(""))]
    #[case::zero(json!(0))]
    #[case::false_flag(json!(false))]
    fn test_interpret_profile_ignores_falsy_message(#[case] message: Value) {
        let profile = interpret_profile(
            "AngheloAlf",
            json!({"login": "AngheloAlf", "message": message, "avatar_url": "https://a/c"}),
        );
        assert_eq!(profile.avatar_url.as_deref(), Some("https://a/c"));
    }

    #[test]
    fn test_interpret_profile_null_message_is_not_a_sentinel() {
        let profile = interpret_profile(
            "SeekyCt",
            json!({"login": "SeekyCt", "message": null, "avatar_url": "https://a/b"}),
        );
        assert_eq!(profile.login, "SeekyCt");
        assert_eq!(profile.avatar_url.as_deref(), Some("https://a/b"));
    }

    #[test]
    fn test_interpret_profile_without_login_degrades() {
        let profile = interpret_profile("Trevor89", json!({"avatar_url": "https://a/b"}));
        assert_eq!(profile, ExternalProfile::degraded("Trevor89"));
    }
}
