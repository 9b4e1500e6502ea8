//! Typed HTTP client for the inventory API.
//!
//! Used by front ends and tooling that talk to a running server. Every call
//! is a single attempt; there are no retries.

use kemomimi_core::models::{Category, Product, PublicItem, User};
use kemomimi_core::query::ListParams;
use kemomimi_core::registration::{NewProduct, NewPublicItem};
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Errors surfaced to callers of [`InventoryClient`].
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The base URL does not parse or cannot carry path segments.
    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// The request could not be sent or the response could not be decoded.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },
}

impl ClientError {
    /// HTTP status of a [`ClientError::Status`] error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(err) => err.status().map(|s| s.as_u16()),
            Self::InvalidBaseUrl { .. } => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct InventoryClient {
    http: reqwest::Client,
    base_url: Url,
}

impl InventoryClient {
    /// `base_url` is the API root, e.g. `http://localhost:3000/api/v1`.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_http_client(reqwest::Client::new(), base_url)
    }

    pub fn with_http_client(http: reqwest::Client, base_url: &str) -> Result<Self, ClientError> {
        let invalid = |reason: String| ClientError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason,
        };

        let parsed = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
        if parsed.cannot_be_a_base() {
            return Err(invalid("not a hierarchical URL".into()));
        }

        Ok(Self {
            http,
            base_url: parsed,
        })
    }

    pub async fn fetch_products(&self, params: &ListParams) -> Result<Vec<Product>, ClientError> {
        self.get_json(&["products"], Some(params)).await
    }

    pub async fn fetch_product(&self, product_id: &str) -> Result<Product, ClientError> {
        self.get_json(&["products", product_id], None).await
    }

    pub async fn fetch_public_items(
        &self,
        params: &ListParams,
    ) -> Result<Vec<PublicItem>, ClientError> {
        self.get_json(&["public-items"], Some(params)).await
    }

    pub async fn fetch_categories(&self) -> Result<Vec<Category>, ClientError> {
        self.get_json(&["categories"], None).await
    }

    pub async fn fetch_users(&self) -> Result<Vec<User>, ClientError> {
        self.get_json(&["users"], None).await
    }

    pub async fn register_product(&self, payload: &NewProduct) -> Result<Product, ClientError> {
        self.post_json(&["products"], payload).await
    }

    pub async fn register_public_item(
        &self,
        payload: &NewPublicItem,
    ) -> Result<PublicItem, ClientError> {
        self.post_json(&["public-items"], payload).await
    }

    /// Append `segments` to the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // Checked in the constructor.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        params: Option<&ListParams>,
    ) -> Result<T, ClientError> {
        let mut request = self.http.get(self.endpoint(segments));
        if let Some(params) = params {
            request = request.query(params);
        }

        let response = check_status(request.send().await?).await?;
        Ok(response.json().await?)
    }

    async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> Result<T, ClientError> {
        let response = self
            .http
            .post(self.endpoint(segments))
            .json(body)
            .send()
            .await?;

        let response = check_status(response).await?;
        Ok(response.json().await?)
    }
}

/// Turn a non-success response into [`ClientError::Status`], pulling the
/// message out of the `{ "error": ... }` body when there is one.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<serde_json::Value>(&text)
        .ok()
        .and_then(|body| body["error"].as_str().map(str::to_string))
        .unwrap_or(text);

    tracing::warn!(status = status.as_u16(), %message, "Inventory API request failed");

    Err(ClientError::Status {
        status: status.as_u16(),
        message,
    })
}
