//! JSONPlaceholder user directory.

use async_trait::async_trait;
use log::info;

use crate::core::fetch::FetchError;
use crate::core::remote_list::ListSource;
use crate::providers::http::HttpClient;
use crate::providers::types::User;

pub const DEFAULT_USERS_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

pub struct JsonPlaceholderClient {
    http: HttpClient,
    base_url: String,
}

impl JsonPlaceholderClient {
    pub fn new(http: HttpClient, base_url: Option<String>) -> Self {
        Self {
            http,
            base_url: base_url.unwrap_or_else(|| DEFAULT_USERS_BASE_URL.to_string()),
        }
    }
}

#[async_trait]
impl ListSource<User> for JsonPlaceholderClient {
    async fn fetch_list(&self) -> Result<Vec<User>, FetchError> {
        let users: Vec<User> = self
            .http
            .get_json(&format!("{}/users", self.base_url), &[])
            .await?;
        info!("Fetched {} users", users.len());
        Ok(users)
    }
}
