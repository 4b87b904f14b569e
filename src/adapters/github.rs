use crate::core::fetcher::PaginatedFetcher;
use crate::domain::model::UserCollection;
use crate::domain::ports::{ConfigProvider, UserDirectory};
use crate::utils::error::{MutualError, Result};
use async_trait::async_trait;
use url::Url;

/// Live directory backed by the GitHub REST API (`/users/{name}/followers|following`).
#[derive(Debug, Clone)]
pub struct GitHubDirectory {
    fetcher: PaginatedFetcher,
    api_base: Url,
    per_page: u32,
}

impl GitHubDirectory {
    pub fn new<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        let api_base = Url::parse(config.api_base_url()).map_err(|source| {
            MutualError::InvalidUrl {
                url: config.api_base_url().to_string(),
                source,
            }
        })?;

        Ok(Self {
            fetcher: PaginatedFetcher::new(config)?,
            api_base,
            per_page: config.per_page(),
        })
    }

    /// First-page URL of a listing. Later pages come from the `Link` header.
    pub fn listing_url(&self, username: &str, relation: &str) -> Result<Url> {
        let mut url = self.api_base.clone();
        url.path_segments_mut()
            .map_err(|_| MutualError::ConfigValidationError {
                field: "api.base_url".to_string(),
                message: format!("{} cannot be used as a base URL", self.api_base),
            })?
            .pop_if_empty()
            .extend(["users", username, relation]);
        url.query_pairs_mut()
            .append_pair("per_page", &self.per_page.to_string());
        Ok(url)
    }

    async fn listing(&self, username: &str, relation: &str) -> Result<UserCollection> {
        let url = self.listing_url(username, relation)?;
        let users = self.fetcher.fetch_all(url.as_str()).await?;
        tracing::info!("📥 {} {}: {} users", username, relation, users.len());
        Ok(users)
    }
}

#[async_trait]
impl UserDirectory for GitHubDirectory {
    async fn followers(&self, username: &str) -> Result<UserCollection> {
        self.listing(username, "followers").await
    }

    async fn following(&self, username: &str) -> Result<UserCollection> {
        self.listing(username, "following").await
    }
}
