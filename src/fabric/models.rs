//! Fabric REST API data models

use serde::Deserialize;

/// Paged list envelope used by Fabric list endpoints
#[derive(Deserialize, Debug)]
pub struct ListResponse<T> {
    #[serde(default = "Vec::new")]
    pub value: Vec<T>,
    #[serde(rename = "continuationToken", default)]
    pub continuation_token: Option<String>,
    #[serde(rename = "continuationUri", default)]
    pub continuation_uri: Option<String>,
}

impl<T> ListResponse<T> {
    /// URL of the next page, if the server announced one.
    ///
    /// `continuationUri` wins; a bare `continuationToken` is appended to
    /// `page_url` (the first page's URL) as a query parameter.
    pub fn next_page_url(&self, page_url: &str) -> Option<String> {
        if let Some(uri) = self.continuation_uri.as_deref().filter(|u| !u.is_empty()) {
            return Some(uri.to_string());
        }

        let token = self.continuation_token.as_deref().filter(|t| !t.is_empty())?;
        let separator = if page_url.contains('?') { "&" } else { "?" };
        Some(format!(
            "{}{}{}={}",
            page_url,
            separator,
            crate::config::api::CONTINUATION_TOKEN_PARAM,
            urlencoding::encode(token)
        ))
    }
}

/// Workspace as returned by the Fabric API
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct FabricWorkspace {
    pub id: String,
    #[serde(rename = "displayName", default)]
    pub display_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type", default)]
    pub workspace_type: Option<String>,
    #[serde(rename = "capacityId", default)]
    pub capacity_id: Option<String>,
}

impl FabricWorkspace {
    /// Get capacity id, treating an empty string as unassigned
    pub fn capacity_id(&self) -> Option<&str> {
        self.capacity_id.as_deref().filter(|c| !c.is_empty())
    }

    /// Check whether the workspace runs on an assigned capacity
    pub fn is_capacity_assigned(&self) -> bool {
        self.capacity_id().is_some()
    }
}

/// Workspace item as returned by the Fabric API
///
/// `size` stays raw JSON: the platform does not guarantee a numeric value,
/// and summation decides what to make of it.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct FabricItem {
    pub id: String,
    #[serde(rename = "displayName", default)]
    pub display_name: String,
    #[serde(rename = "type", default)]
    pub item_type: Option<String>,
    #[serde(default)]
    pub size: Option<serde_json::Value>,
}

impl FabricItem {
    /// Size in whole bytes; missing, negative or non-numeric sizes count as 0
    pub fn size_bytes(&self) -> u64 {
        let Some(value) = self.size.as_ref() else {
            return 0;
        };

        if let Some(bytes) = value.as_u64() {
            return bytes;
        }

        match value.as_f64() {
            Some(f) if f.is_finite() && f >= 0.0 => f.trunc() as u64,
            _ => 0,
        }
    }
}
