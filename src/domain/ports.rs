use crate::domain::model::UserCollection;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn api_base_url(&self) -> &str;
    fn per_page(&self) -> u32;
    fn timeout_seconds(&self) -> u64;
    fn user_agent(&self) -> &str;
}

/// Where the resolver gets a user's relationship listings from.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn followers(&self, username: &str) -> Result<UserCollection>;
    async fn following(&self, username: &str) -> Result<UserCollection>;
}
