//! HTTP client for the Inventory API

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Error type for API client operations
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Cannot connect to server at {base_url}. Make sure the server is running.")]
    Connection {
        base_url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    Parse(#[from] reqwest::Error),

    #[error("Invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ClientResult<T> = Result<T, ClientError>;

/// Inventory item as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub in_stock: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// Item fields sent on create and update; absent fields are not serialized
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_stock: Option<bool>,
}

/// Normalized listing response
#[derive(Debug, Clone, PartialEq)]
pub struct ItemsPage {
    pub items: Vec<Item>,
    pub total: u64,
    pub page: u64,
    pub limit: u64,
}

impl ItemsPage {
    /// Build a page from whatever shape the server returned
    ///
    /// Accepts a bare JSON array of items or an object carrying an `items`
    /// array plus optional `total`/`page`/`limit` counters. Missing pieces
    /// fall back to safe defaults instead of failing the render.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        match value {
            Value::Array(_) => {
                let items: Vec<Item> = serde_json::from_value(value)?;
                let total = items.len() as u64;

                Ok(Self {
                    items,
                    total,
                    page: 1,
                    limit: 10,
                })
            }
            Value::Object(ref map) => {
                let items: Vec<Item> = match map.get("items") {
                    Some(raw) => serde_json::from_value(raw.clone())?,
                    None => Vec::new(),
                };
                let total = map
                    .get("total")
                    .and_then(Value::as_u64)
                    .unwrap_or(items.len() as u64);
                let page = map.get("page").and_then(Value::as_u64).unwrap_or(1);
                let limit = map.get("limit").and_then(Value::as_u64).unwrap_or(10);

                Ok(Self {
                    items,
                    total,
                    page,
                    limit,
                })
            }
            _ => Ok(Self {
                items: Vec::new(),
                total: 0,
                page: 1,
                limit: 10,
            }),
        }
    }
}

/// Error body returned by the API on failures
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Client for the Inventory API
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send a request, mapping connectivity failures and HTTP error
    /// statuses into [`ClientError`]
    async fn send(&self, request: reqwest::RequestBuilder) -> ClientResult<reqwest::Response> {
        let response = request
            .send()
            .await
            .map_err(|source| ClientError::Connection {
                base_url: self.base_url.clone(),
                source,
            })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        // Error bodies carry {error, message}; fall back to the status line
        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.message,
            Err(_) => status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string(),
        };

        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }

    /// List items matching an already-encoded query string (empty for all)
    pub async fn list_items(&self, query: &str) -> ClientResult<ItemsPage> {
        let url = if query.is_empty() {
            format!("{}/items", self.base_url)
        } else {
            format!("{}/items?{}", self.base_url, query)
        };

        let response = self.send(self.client.get(&url)).await?;
        let value = response.json::<Value>().await?;

        Ok(ItemsPage::from_value(value)?)
    }

    pub async fn get_item(&self, id: u64) -> ClientResult<Item> {
        let url = format!("{}/items/{}", self.base_url, id);
        let response = self.send(self.client.get(&url)).await?;

        Ok(response.json::<Item>().await?)
    }

    pub async fn create_item(&self, payload: &ItemPayload) -> ClientResult<Item> {
        let url = format!("{}/items", self.base_url);
        let response = self.send(self.client.post(&url).json(payload)).await?;

        Ok(response.json::<Item>().await?)
    }

    pub async fn update_item(&self, id: u64, payload: &ItemPayload) -> ClientResult<Item> {
        let url = format!("{}/items/{}", self.base_url, id);
        let response = self.send(self.client.put(&url).json(payload)).await?;

        Ok(response.json::<Item>().await?)
    }

    pub async fn delete_item(&self, id: u64) -> ClientResult<()> {
        let url = format!("{}/items/{}", self.base_url, id);
        self.send(self.client.delete(&url)).await?;

        Ok(())
    }

    pub async fn health(&self) -> ClientResult<Value> {
        let url = format!("{}/health", self.base_url);
        let response = self.send(self.client.get(&url)).await?;

        Ok(response.json::<Value>().await?)
    }
}
