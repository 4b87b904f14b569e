use crate::core::fallback::fallback_result;
use crate::core::input::parse_usernames;
use crate::core::intersect::{intersect_all, intersect_by_identity};
use crate::domain::model::{DataSource, Resolution, ResolutionResult, UserCollection};
use crate::domain::ports::UserDirectory;
use crate::utils::error::{MutualError, Result};
use futures::future::try_join_all;
use std::future::Future;
use std::sync::Arc;

/// Finds mutual followers/following for one or more usernames.
///
/// Throttled fetches are answered with the mock dataset from
/// [`fallback_result`]; every other failure is returned to the caller.
pub struct MutualResolver<D: UserDirectory + 'static> {
    directory: Arc<D>,
}

#[derive(Debug, Clone, Copy)]
enum Relation {
    Followers,
    Following,
}

impl<D: UserDirectory + 'static> MutualResolver<D> {
    pub fn new(directory: D) -> Self {
        Self {
            directory: Arc::new(directory),
        }
    }

    pub async fn resolve_input(&self, raw: &str) -> Result<Resolution> {
        self.resolve(&parse_usernames(raw)).await
    }

    pub async fn resolve(&self, usernames: &[String]) -> Result<Resolution> {
        if usernames.is_empty() {
            return Err(MutualError::EmptyInput);
        }

        tracing::info!("🔍 Resolving mutuals for: {}", usernames.join(", "));

        match self.resolve_live(usernames).await {
            Ok(result) => Ok(Resolution {
                source: DataSource::Live,
                result,
            }),
            Err(e) if e.is_throttled() => {
                tracing::warn!("⚠️ {}. Showing mock data", e);
                Ok(Resolution {
                    source: DataSource::Fallback,
                    result: fallback_result(usernames)?,
                })
            }
            Err(e) => {
                tracing::error!("❌ Resolution failed: {}", e);
                Err(e)
            }
        }
    }

    async fn resolve_live(&self, usernames: &[String]) -> Result<ResolutionResult> {
        match usernames {
            [] => Err(MutualError::EmptyInput),
            [username] => {
                let (followers, following) = tokio::try_join!(
                    self.spawn_listing(username, Relation::Followers),
                    self.spawn_listing(username, Relation::Following)
                )?;

                Ok(ResolutionResult::Single {
                    mutual_followers: intersect_by_identity(&followers, &following),
                })
            }
            _ => {
                let followers = try_join_all(
                    usernames
                        .iter()
                        .map(|name| self.spawn_listing(name, Relation::Followers)),
                );
                let following = try_join_all(
                    usernames
                        .iter()
                        .map(|name| self.spawn_listing(name, Relation::Following)),
                );
                let (followers, following) = tokio::try_join!(followers, following)?;

                Ok(ResolutionResult::Multi {
                    mutual_followers: intersect_all(&followers)?,
                    mutual_following: intersect_all(&following)?,
                })
            }
        }
    }

    // Each listing runs as its own task, so a failed join leaves the other
    // requests running to completion; their results are discarded.
    fn spawn_listing(
        &self,
        username: &str,
        relation: Relation,
    ) -> impl Future<Output = Result<UserCollection>> {
        let directory = Arc::clone(&self.directory);
        let username = username.to_string();

        let handle = tokio::spawn(async move {
            match relation {
                Relation::Followers => directory.followers(&username).await,
                Relation::Following => directory.following(&username).await,
            }
        });

        async move {
            match handle.await {
                Ok(listing) => listing,
                Err(e) => Err(MutualError::Task(e)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{UserCollection, UserRecord};
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn user(login: &str) -> UserRecord {
        UserRecord {
            identity: login.to_string(),
            display_handle: login.to_string(),
            avatar_url: format!("https://avatars.example.com/{}", login),
            profile_url: format!("https://github.com/{}", login),
        }
    }

    fn users(logins: &[&str]) -> UserCollection {
        logins.iter().map(|login| user(login)).collect()
    }

    fn identities(collection: &[UserRecord]) -> Vec<&str> {
        collection.iter().map(|u| u.identity.as_str()).collect()
    }

    #[derive(Clone, Copy)]
    enum Failure {
        Throttled,
        Server,
    }

    #[derive(Default)]
    struct MockDirectory {
        followers: HashMap<String, UserCollection>,
        following: HashMap<String, UserCollection>,
        failures: HashMap<String, Failure>,
        calls: AtomicUsize,
    }

    impl MockDirectory {
        fn with_user(mut self, name: &str, followers: &[&str], following: &[&str]) -> Self {
            self.followers.insert(name.to_string(), users(followers));
            self.following.insert(name.to_string(), users(following));
            self
        }

        fn failing(mut self, key: &str, failure: Failure) -> Self {
            self.failures.insert(key.to_string(), failure);
            self
        }

        fn lookup(
            &self,
            table: &HashMap<String, UserCollection>,
            username: &str,
            relation: &str,
        ) -> Result<UserCollection> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let key = format!("{}/{}", username, relation);
            let url = format!("http://mock/users/{}", key);
            match self.failures.get(&key) {
                Some(Failure::Throttled) => Err(MutualError::RateLimited { status: 403, url }),
                Some(Failure::Server) => Err(MutualError::Api { status: 500, url }),
                None => Ok(table.get(username).cloned().unwrap_or_default()),
            }
        }
    }

    #[async_trait]
    impl UserDirectory for MockDirectory {
        async fn followers(&self, username: &str) -> Result<UserCollection> {
            self.lookup(&self.followers, username, "followers")
        }

        async fn following(&self, username: &str) -> Result<UserCollection> {
            self.lookup(&self.following, username, "following")
        }
    }

    #[tokio::test]
    async fn test_single_user_mutual_followers() {
        let directory = MockDirectory::default().with_user(
            "alice",
            &["bob", "carol", "dave"],
            &["carol", "dave", "erin"],
        );
        let resolver = MutualResolver::new(directory);

        let resolution = resolver.resolve_input("alice").await.unwrap();

        assert_eq!(resolution.source, DataSource::Live);
        match &resolution.result {
            ResolutionResult::Single { mutual_followers } => {
                assert_eq!(identities(mutual_followers), vec!["carol", "dave"]);
            }
            other => panic!("expected single-user result, got {:?}", other),
        }
        assert!(resolution.result.mutual_following().is_none());
    }

    #[tokio::test]
    async fn test_multi_user_intersections() {
        let directory = MockDirectory::default()
            .with_user("alice", &["carol", "dave"], &["frank"])
            .with_user("bob", &["dave", "erin"], &["frank", "carol"]);
        let resolver = MutualResolver::new(directory);

        let resolution = resolver.resolve_input("alice, bob").await.unwrap();

        assert_eq!(identities(resolution.result.mutual_followers()), vec!["dave"]);
        assert_eq!(
            identities(resolution.result.mutual_following().unwrap()),
            vec!["frank"]
        );
        assert_eq!(resolver.directory.calls.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn test_blank_input_is_rejected_before_fetching() {
        let resolver = MutualResolver::new(MockDirectory::default());

        assert!(matches!(
            resolver.resolve_input("").await,
            Err(MutualError::EmptyInput)
        ));
        assert!(matches!(
            resolver.resolve_input(",  ,").await,
            Err(MutualError::EmptyInput)
        ));
        assert_eq!(resolver.directory.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_throttled_single_user_falls_back() {
        let directory = MockDirectory::default()
            .with_user("alice", &["bob"], &["bob"])
            .failing("alice/followers", Failure::Throttled);
        let resolver = MutualResolver::new(directory);

        let resolution = resolver.resolve_input("alice").await.unwrap();

        assert!(resolution.is_fallback());
        assert_eq!(
            identities(resolution.result.mutual_followers()),
            vec!["mockUser4", "mockUser5", "mockUser6", "mockUser7"]
        );
    }

    #[tokio::test]
    async fn test_throttled_multi_user_falls_back() {
        let directory = MockDirectory::default()
            .with_user("alice", &["carol"], &["frank"])
            .with_user("bob", &["carol"], &["frank"])
            .failing("bob/following", Failure::Throttled);
        let resolver = MutualResolver::new(directory);

        let resolution = resolver.resolve_input("alice,bob").await.unwrap();

        assert!(resolution.is_fallback());
        assert_eq!(
            identities(resolution.result.mutual_followers()),
            vec!["mockUser4", "mockUser5", "mockUser6", "mockUser7"]
        );
        assert_eq!(
            identities(resolution.result.mutual_following().unwrap()),
            vec![
                "mockUser4",
                "mockUser5",
                "mockUser6",
                "mockUser7",
                "mockUser8",
                "mockUser9",
                "mockUser10"
            ]
        );
    }

    #[tokio::test]
    async fn test_server_error_is_surfaced() {
        let directory = MockDirectory::default()
            .with_user("alice", &["bob"], &["bob"])
            .failing("alice/following", Failure::Server);
        let resolver = MutualResolver::new(directory);

        let err = resolver.resolve_input("alice").await.unwrap_err();

        assert!(!err.is_throttled());
        assert!(err.to_string().contains("500"));
    }

    /// Fails followers at once and finishes following after a delay.
    #[derive(Default)]
    struct SlowSiblingDirectory {
        completed: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl UserDirectory for SlowSiblingDirectory {
        async fn followers(&self, username: &str) -> Result<UserCollection> {
            Err(MutualError::Api {
                status: 500,
                url: format!("http://mock/users/{}/followers", username),
            })
        }

        async fn following(&self, _username: &str) -> Result<UserCollection> {
            tokio::time::sleep(std::time::Duration::from_millis(50)).await;
            self.completed.fetch_add(1, Ordering::SeqCst);
            Ok(users(&["bob"]))
        }
    }

    #[tokio::test]
    async fn test_failed_join_lets_sibling_fetch_finish() {
        let directory = SlowSiblingDirectory::default();
        let completed = Arc::clone(&directory.completed);
        let resolver = MutualResolver::new(directory);

        let err = resolver.resolve_input("alice").await.unwrap_err();
        assert!(matches!(err, MutualError::Api { status: 500, .. }));
        assert_eq!(completed.load(Ordering::SeqCst), 0);

        tokio::time::sleep(std::time::Duration::from_millis(200)).await;
        assert_eq!(completed.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_resolution_is_idempotent() {
        let directory = MockDirectory::default()
            .with_user("alice", &["carol", "dave"], &["frank"])
            .with_user("bob", &["dave", "erin"], &["frank", "carol"]);
        let resolver = MutualResolver::new(directory);

        let first = resolver.resolve_input("alice,bob").await.unwrap();
        let second = resolver.resolve_input("alice,bob").await.unwrap();

        assert_eq!(first, second);
    }
}
