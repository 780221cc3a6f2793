use crate::error::{PortfolioError, Result};
use crate::types::GitHubRepo;
use reqwest::Client;
use tracing::{debug, warn};
use url::Url;

pub const API_BASE_URL: &str = "https://api.github.com";
/// Largest page the upstream listing endpoint accepts.
pub const MAX_PAGE_SIZE: usize = 100;

/// Unauthenticated client for the public repository listing endpoint.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    client: Client,
    base_url: Url,
}

impl GitHubClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(API_BASE_URL)
    }

    /// Point the client at another API root (a mirror, or a mock server in tests).
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(PortfolioError::InvalidBaseUrl(base_url.to_string()));
        }

        // No timeout: the transport default applies.
        let client = Client::builder()
            .user_agent(concat!("portfolio-server/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(GitHubClient { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn repositories_url(&self, account: &str, page_size: usize) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| PortfolioError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(["users", account, "repos"]);
        url.query_pairs_mut()
            .append_pair("sort", "updated")
            .append_pair("per_page", &page_size.to_string());
        Ok(url)
    }

    /// Fetch the most recently updated repositories of `account`.
    ///
    /// Exactly one request is sent per call. Nothing is retried: a non-2xx
    /// status, a transport failure or a body that is not a repository array
    /// all come back as an error for the caller to surface.
    pub async fn fetch_repositories(
        &self,
        account: &str,
        page_size: usize,
    ) -> Result<Vec<GitHubRepo>> {
        let account = account.trim();
        if account.is_empty() {
            return Err(PortfolioError::InvalidAccount("account must not be empty".to_string()));
        }
        if page_size == 0 || page_size > MAX_PAGE_SIZE {
            return Err(PortfolioError::InvalidPageSize(page_size));
        }

        let url = self.repositories_url(account, page_size)?;
        debug!(%url, account, page_size, "Fetching repositories");

        let response = self
            .client
            .get(url)
            .header("Accept", "application/vnd.github.v3+json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(account, status = status.as_u16(), "Repository listing failed");
            return Err(PortfolioError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        let repos: Vec<GitHubRepo> = serde_json::from_slice(&bytes)?;
        debug!(account, count = repos.len(), "Fetched repositories");
        Ok(repos)
    }
}
