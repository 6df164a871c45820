//! HTTP client for the post endpoint.

use reqwest::{Client, StatusCode};
use tracing::debug;
use url::Url;

use crate::types::PostResponse;
use postview_common::{Error, Result};

/// Client for fetching shared posts.
pub struct PostClient {
    http: Client,
}

impl PostClient {
    /// Create a new post client.
    pub fn new() -> Self {
        let http = Client::builder()
            .user_agent("postview/0.1")
            .build()
            .expect("Failed to create HTTP client");

        Self { http }
    }

    /// Fetch and parse the post behind a resolved fetch URI.
    ///
    /// Every failure mode is surfaced as a typed error; a blank screen
    /// on network trouble is explicitly not an option here.
    ///
    /// # Errors
    /// - `Error::InvalidInput` for an unparseable URI
    /// - `Error::NotFound` for a 404
    /// - `Error::Network` for transport failures and other statuses
    /// - `Error::Serialization` when the body is not a valid post JSON
    pub async fn fetch_post(&self, fetch_uri: &str) -> Result<PostResponse> {
        let url = Url::parse(fetch_uri)
            .map_err(|e| Error::InvalidInput(format!("Invalid fetch URI: {}", e)))?;

        debug!("fetching post from {}", url);

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Network(format!("Failed to fetch post: {}", e)))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(Error::NotFound("Post not found".to_string()));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Network(format!(
                "Fetch failed: {} - {}",
                status, body
            )));
        }

        response
            .json::<PostResponse>()
            .await
            .map_err(|e| Error::Serialization(format!("Failed to parse post response: {}", e)))
    }
}

impl Default for PostClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_invalid_uri_is_rejected() {
        let client = PostClient::new();
        let result = client.fetch_post("not a uri").await;

        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_a_network_error() {
        let client = PostClient::new();
        // Reserved TLD, guaranteed not to resolve.
        let result = client.fetch_post("http://postview.invalid/v1/post/a/b").await;

        assert!(matches!(result, Err(Error::Network(_))));
    }
}
