//! Fabric HTTP client for API interactions

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config::api;
use crate::error::{Result, StorageError};
use crate::fabric::models::{FabricItem, FabricWorkspace, ListResponse};
use crate::fabric::traits::PlatformClient;

/// Fabric REST API client
pub struct FabricClient {
    client: Client,
    token: String,
    base_url: String,
}

impl FabricClient {
    /// Create a new client against the public Fabric API
    pub fn new(token: String) -> Self {
        Self::with_base_url(token, api::DEFAULT_BASE_URL.to_string())
    }

    /// Create a client with a custom base URL (sovereign clouds, mock servers)
    pub fn with_base_url(token: String, base_url: String) -> Self {
        let client = Client::builder()
            // Connection pool settings - reuse connections
            .pool_max_idle_per_host(20)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(60))
            // Timeouts
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            token,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Base URL for API requests, without trailing slash
    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a GET request builder with standard headers
    fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.client
            .get(url)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", "application/json")
    }

    /// Parse an API response, returning error for non-success status codes
    async fn parse_api_response<T>(
        &self,
        response: reqwest::Response,
        error_context: &str,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        if !status.is_success() {
            return Err(StorageError::Api {
                status: status.as_u16(),
                message: format!("Failed to fetch {}", error_context),
            });
        }
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Fetch every page of a Fabric list endpoint.
    ///
    /// Pages are walked one after another, following `continuationUri` or
    /// `continuationToken` until the server stops announcing a next page.
    /// Items keep the order the server returned them in.
    pub async fn fetch_all_pages<T>(&self, path: &str, error_context: &str) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let first_page_url = format!("{}{}", self.base_url(), path);
        let mut url = first_page_url.clone();
        let mut all_items = Vec::new();

        for page_num in 1..=api::MAX_PAGES {
            debug!("Fetching page {} from: {}", page_num, url);

            let response = self.get(&url).send().await?;
            let page_context = format!("{} (page {})", error_context, page_num);
            let page: ListResponse<T> = self.parse_api_response(response, &page_context).await?;

            let next = page.next_page_url(&first_page_url);
            debug!("Page {} returned {} items", page_num, page.value.len());
            all_items.extend(page.value);

            match next {
                Some(next_url) => url = next_url,
                None => {
                    debug!(
                        "Fetched {} total items for {}",
                        all_items.len(),
                        error_context
                    );
                    return Ok(all_items);
                }
            }
        }

        Err(StorageError::Api {
            status: 200,
            message: format!(
                "Gave up on {} after {} pages",
                error_context,
                api::MAX_PAGES
            ),
        })
    }
}

#[async_trait]
impl PlatformClient for FabricClient {
    async fn list_workspaces(&self) -> Result<Vec<FabricWorkspace>> {
        let path = format!("/{}", api::WORKSPACES);
        self.fetch_all_pages::<FabricWorkspace>(&path, "workspaces")
            .await
    }

    async fn list_items(&self, workspace_id: &str) -> Result<Vec<FabricItem>> {
        let path = format!(
            "/{}/{}/{}",
            api::WORKSPACES,
            urlencoding::encode(workspace_id),
            api::ITEMS
        );
        let error_context = format!("items for workspace '{}'", workspace_id);
        self.fetch_all_pages::<FabricItem>(&path, &error_context)
            .await
    }
}
