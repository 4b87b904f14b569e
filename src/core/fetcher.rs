use crate::core::link_header::next_link;
use crate::domain::model::{ApiUser, UserCollection, UserRecord};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{MutualError, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, LINK};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use url::Url;

const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";

/// Follows `rel="next"` links until the listing is exhausted.
#[derive(Debug, Clone)]
pub struct PaginatedFetcher {
    client: Client,
}

impl PaginatedFetcher {
    pub fn new<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_MEDIA_TYPE));

        let client = Client::builder()
            .user_agent(config.user_agent().to_string())
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_seconds()))
            .build()?;

        Ok(Self { client })
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    pub async fn fetch_all(&self, endpoint: &str) -> Result<UserCollection> {
        let mut records = Vec::new();
        let mut next = Some(parse_url(endpoint)?);
        let mut page = 0usize;

        // 逐頁抓取：下一頁的網址只有在本頁回應後才知道
        while let Some(url) = next.take() {
            page += 1;
            tracing::debug!("Fetching page {} from: {}", page, url);

            let response = self.client.get(url.clone()).send().await?;
            let status = response.status();
            tracing::debug!("API response status: {}", status);

            if !status.is_success() {
                return Err(classify_status(status, &url));
            }

            let link = link_header(response.headers(), &url)?;

            let body = response.bytes().await?;
            let users: Vec<ApiUser> =
                serde_json::from_slice(&body).map_err(|source| MutualError::Decode {
                    url: url.to_string(),
                    source,
                })?;

            tracing::debug!("Page {} returned {} records", page, users.len());
            records.extend(users.into_iter().map(UserRecord::from));

            next = match link.as_deref().and_then(next_link) {
                Some(href) => Some(url.join(&href).map_err(|source| MutualError::InvalidUrl {
                    url: href.clone(),
                    source,
                })?),
                None => None,
            };
        }

        tracing::debug!(
            "Fetched {} records across {} pages from: {}",
            records.len(),
            page,
            endpoint
        );
        Ok(records)
    }
}

fn parse_url(raw: &str) -> Result<Url> {
    Url::parse(raw).map_err(|source| MutualError::InvalidUrl {
        url: raw.to_string(),
        source,
    })
}

/// Raw `Link` value. A value that is not visible ASCII fails the fetch
/// instead of silently ending pagination.
pub fn link_header(headers: &HeaderMap, url: &Url) -> Result<Option<String>> {
    match headers.get(LINK) {
        Some(value) => value
            .to_str()
            .map(|v| Some(v.to_owned()))
            .map_err(|_| MutualError::MalformedHeader {
                header: "Link",
                url: url.to_string(),
            }),
        None => Ok(None),
    }
}

/// 403 and 429 are quota rejections; everything else is a plain API error.
pub fn classify_status(status: StatusCode, url: &Url) -> MutualError {
    match status {
        StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS => MutualError::RateLimited {
            status: status.as_u16(),
            url: url.to_string(),
        },
        _ => MutualError::Api {
            status: status.as_u16(),
            url: url.to_string(),
        },
    }
}
