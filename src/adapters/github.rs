use crate::config::GitHubConfig;
use crate::domain::model::{RawRepository, RepositoryRecord};
use crate::domain::ports::RepositorySource;
use crate::utils::error::{PortfolioError, Result};
use async_trait::async_trait;
use reqwest::Client;

pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch repositories";

const ACCEPT_GITHUB_JSON: &str = "application/vnd.github+json";
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Reads an account's public repositories from the GitHub REST API.
pub struct GitHubClient {
    client: Client,
    config: GitHubConfig,
}

impl GitHubClient {
    pub fn new(config: GitHubConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| PortfolioError::network(None, e.to_string()))?;
        Ok(Self { client, config })
    }

    pub fn repos_url(&self, account: &str) -> String {
        format!(
            "{}/users/{}/repos",
            self.config.api_base.trim_end_matches('/'),
            account
        )
    }
}

#[async_trait]
impl RepositorySource for GitHubClient {
    async fn fetch_repositories(&self, account: &str) -> Result<Vec<RepositoryRecord>> {
        let url = self.repos_url(account);
        tracing::debug!("Fetching repositories from: {}", url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("per_page", self.config.per_page.to_string()),
                ("sort", self.config.sort.clone()),
            ])
            .header("Accept", ACCEPT_GITHUB_JSON)
            .header("X-GitHub-Api-Version", &self.config.api_version)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Repository request failed: {}", e);
                PortfolioError::network(None, format!("{}: {}", FETCH_FAILED_MESSAGE, e))
            })?;

        let status = response.status();
        tracing::debug!("GitHub response status: {}", status);

        if !status.is_success() {
            tracing::warn!("GitHub returned {} for account {}", status, account);
            return Err(PortfolioError::network(
                Some(status.as_u16()),
                FETCH_FAILED_MESSAGE,
            ));
        }

        let raw: Vec<RawRepository> = response.json().await.map_err(|e| {
            PortfolioError::network(
                Some(status.as_u16()),
                format!("{}: {}", FETCH_FAILED_MESSAGE, e),
            )
        })?;

        tracing::debug!("Fetched {} repositories for {}", raw.len(), account);
        Ok(raw.into_iter().map(RepositoryRecord::from).collect())
    }
}
