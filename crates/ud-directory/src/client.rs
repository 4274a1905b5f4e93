use crate::{DirectoryError, DirectoryResult, DirectoryUser};

use log::{debug, error};
use reqwest::{Client as ReqwestClient, RequestBuilder};
use serde::de::DeserializeOwned;

/// Public demo directory used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// HTTP client for the user directory.
///
/// Every call is a single GET: no retry, no timeout, no caching. Faults are
/// logged and handed back to the caller unchanged.
#[derive(Debug, Clone)]
pub struct DirectoryClient {
    pub base_url: String,
    client: ReqwestClient,
}

impl Default for DirectoryClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl DirectoryClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Directory URL (e.g., "https://jsonplaceholder.typicode.com")
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: ReqwestClient::new(),
        }
    }

    fn get(&self, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {url}");
        self.client.get(url)
    }

    /// Send once, reject non-success, then decode the body.
    async fn fetch<T: DeserializeOwned>(&self, req: RequestBuilder) -> DirectoryResult<T> {
        let response = req.send().await?;

        if !response.status().is_success() {
            debug!("Directory responded with {}", response.status());
            return Err(DirectoryError::network_not_ok());
        }

        let body = response.text().await?;
        let value = serde_json::from_str(&body)?;
        Ok(value)
    }

    /// List all users, in the order the directory returns them
    pub async fn list_users(&self) -> DirectoryResult<Vec<DirectoryUser>> {
        let req = self.get("/users");
        self.fetch(req)
            .await
            .inspect_err(|e| error!("Error fetching users: {e}"))
    }

    /// Get a single user by ID
    pub async fn get_user(&self, id: u64) -> DirectoryResult<DirectoryUser> {
        let req = self.get(&format!("/users/{id}"));
        self.fetch(req)
            .await
            .inspect_err(|e| error!("Error fetching user {id}: {e}"))
    }
}
