//! HTTP client for the itemstore API.

pub mod items;

use serde_json::Value;

use crate::error::{ClientError, Result};

pub use items::{Item, ItemPage};

/// HTTP client for the itemstore API.
#[derive(Debug, Clone)]
pub struct ItemstoreClient {
    client: reqwest::Client,
    base_url: String,
}

impl ItemstoreClient {
    /// Create a new client with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Create from environment (ITEMSTORE_URL or default).
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("ITEMSTORE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
        Self::new(base_url)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// URL of a single item, with `id` percent-encoded as one path segment.
    fn item_url(&self, id: &str) -> Result<reqwest::Url> {
        let mut url = reqwest::Url::parse(&self.base_url).map_err(|e| {
            ClientError::InvalidInput(format!("invalid base URL '{}': {e}", self.base_url))
        })?;

        url.path_segments_mut()
            .map_err(|_| {
                ClientError::InvalidInput(format!("base URL '{}' cannot carry a path", self.base_url))
            })?
            .pop_if_empty()
            .extend(["items", id]);

        Ok(url)
    }

    /// Decode a success body or turn the error contract into a [`ClientError`].
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
        id: Option<&str>,
    ) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            return response.json().await.map_err(ClientError::from);
        }

        let body = response.text().await.unwrap_or_default();
        match (status.as_u16(), id) {
            (404, Some(id)) => Err(ClientError::NotFound { id: id.to_string() }),
            (status, _) => Err(ClientError::ServerError {
                status,
                message: error_message(&body),
            }),
        }
    }
}

/// Render the server's JSON error body as a single line.
///
/// Validation failures list every field issue; 500s carry the underlying
/// error detail. Bodies that are not JSON are returned as-is.
pub fn error_message(body: &str) -> String {
    let Ok(json) = serde_json::from_str::<Value>(body) else {
        return if body.is_empty() {
            "Unknown error".to_string()
        } else {
            body.to_string()
        };
    };

    let message = json
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or("Unknown error");

    if let Some(errors) = json.get("errors").and_then(Value::as_array) {
        let issues: Vec<String> = errors
            .iter()
            .map(|e| {
                format!(
                    "{}: {}",
                    e.get("field").and_then(Value::as_str).unwrap_or("?"),
                    e.get("issue").and_then(Value::as_str).unwrap_or("?")
                )
            })
            .collect();
        return format!("{message} ({})", issues.join("; "));
    }

    match json.get("error").and_then(Value::as_str) {
        Some(detail) => format!("{message}: {detail}"),
        None => message.to_string(),
    }
}
