//! GitHub profile and repository listing for one configured account.

use async_trait::async_trait;
use log::info;

use crate::core::fetch::FetchError;
use crate::providers::http::HttpClient;
use crate::providers::provider::RepositoryHost;
use crate::providers::types::{Profile, RepoListing, Repository};

pub const DEFAULT_GITHUB_BASE_URL: &str = "https://api.github.com";

/// Repositories requested per listing; the provider default page is used
/// otherwise.
const REPOS_PER_PAGE: u32 = 50;

pub struct GitHubClient {
    http: HttpClient,
    base_url: String,
    username: String,
}

impl GitHubClient {
    pub fn new(http: HttpClient, base_url: Option<String>, username: String) -> Self {
        Self {
            http,
            base_url: base_url.unwrap_or_else(|| DEFAULT_GITHUB_BASE_URL.to_string()),
            username,
        }
    }

    pub async fn profile(&self) -> Result<Profile, FetchError> {
        self.http
            .get_json(&format!("{}/users/{}", self.base_url, self.username), &[])
            .await
    }

    /// Most recently updated repositories first.
    pub async fn repositories(&self) -> Result<Vec<Repository>, FetchError> {
        self.http
            .get_json(
                &format!("{}/users/{}/repos", self.base_url, self.username),
                &[
                    ("sort", "updated".to_string()),
                    ("per_page", REPOS_PER_PAGE.to_string()),
                ],
            )
            .await
    }
}

#[async_trait]
impl RepositoryHost for GitHubClient {
    async fn listing(&self) -> Result<RepoListing, FetchError> {
        let profile = self.profile().await?;
        let repos = self.repositories().await?;
        info!(
            "Fetched GitHub listing for {}: {} repositories",
            self.username,
            repos.len()
        );
        Ok(RepoListing { profile, repos })
    }
}
