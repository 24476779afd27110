//! REST client implementation for the SalesforceIQ API.
//!
//! This module provides the [`RestClient`] type for making REST API requests
//! with automatic path normalization and verbatim query passthrough.

use crate::clients::rest::RestError;
use crate::clients::{HttpClient, HttpMethod, HttpRequest, HttpResponse};
use crate::config::IqConfig;

/// REST API client for the SalesforceIQ API.
///
/// Provides convenient methods (`get`, `post`, `put`, `delete`) for making
/// REST API requests with automatic path normalization.
///
/// Query strings are passed through verbatim. Callers hand over a single
/// pre-encoded string (e.g., `"_start=0&_limit=5"`), and the client appends
/// it to the URL without re-encoding or reordering.
///
/// # Thread Safety
///
/// `RestClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use salesforceiq_api::{ApiKey, ApiSecretKey, IqConfig, RestClient};
///
/// let config = IqConfig::builder()
///     .api_key(ApiKey::new("my-key")?)
///     .api_secret_key(ApiSecretKey::new("my-secret")?)
///     .build()?;
///
/// let client = RestClient::new(&config);
///
/// // GET request
/// let response = client.get("accounts", None).await?;
///
/// // POST request with body
/// let body = serde_json::json!({"name": "New Account"});
/// let response = client.post("accounts", body).await?;
/// ```
#[derive(Debug)]
pub struct RestClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a new REST client from the given configuration.
    ///
    /// # Example
    ///
    /// ```rust
    /// use salesforceiq_api::{ApiKey, ApiSecretKey, IqConfig, RestClient};
    ///
    /// let config = IqConfig::builder()
    ///     .api_key(ApiKey::new("my-key").unwrap())
    ///     .api_secret_key(ApiSecretKey::new("my-secret").unwrap())
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = RestClient::new(&config);
    /// ```
    #[must_use]
    pub fn new(config: &IqConfig) -> Self {
        Self {
            http_client: HttpClient::new(config),
        }
    }

    /// Sends a GET request to the specified path.
    ///
    /// # Arguments
    ///
    /// * `path` - The REST API path (e.g., "accounts", "accounts/123")
    /// * `query` - Optional pre-encoded query string, appended verbatim
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is invalid (e.g., empty).
    /// Returns [`RestError::Http`] for HTTP-level errors.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// // Simple GET
    /// let response = client.get("accounts", None).await?;
    ///
    /// // GET with a pre-encoded query string
    /// let response = client.get("lists/abc/listitems", Some("_start=0&_limit=5")).await?;
    /// ```
    pub async fn get(&self, path: &str, query: Option<&str>) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Get, path, None, query).await
    }

    /// Sends a POST request to the specified path.
    ///
    /// # Arguments
    ///
    /// * `path` - The REST API path (e.g., "accounts")
    /// * `body` - The JSON body to send
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is invalid.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let body = serde_json::json!({"name": "Test - Sigma Software"});
    /// let response = client.post("accounts", body).await?;
    /// ```
    pub async fn post(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Post, path, Some(body), None)
            .await
    }

    /// Sends a PUT request to the specified path.
    ///
    /// # Arguments
    ///
    /// * `path` - The REST API path (e.g., "lists/abc/listitems/123")
    /// * `body` - The JSON body to send
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is invalid.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let body = serde_json::json!({"id": "123", "listId": "abc"});
    /// let response = client.put("lists/abc/listitems/123", body).await?;
    /// ```
    pub async fn put(&self, path: &str, body: serde_json::Value) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Put, path, Some(body), None)
            .await
    }

    /// Sends a DELETE request to the specified path.
    ///
    /// # Arguments
    ///
    /// * `path` - The REST API path (e.g., "accounts/123")
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is invalid.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let response = client.delete("accounts/123").await?;
    /// ```
    pub async fn delete(&self, path: &str) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Delete, path, None, None)
            .await
    }

    /// Internal helper to build and send requests.
    async fn make_request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
        query: Option<&str>,
    ) -> Result<HttpResponse, RestError> {
        // Normalize the path
        let normalized_path = normalize_path(path)?;

        // Build the request
        let mut builder = HttpRequest::builder(method, &normalized_path);

        // Add body if present
        if let Some(body_value) = body {
            builder = builder.body(body_value);
        }

        // Add the raw query string if present
        if let Some(query_string) = query {
            builder = builder.raw_query(query_string);
        }

        // Build and send the request
        let request = builder.build().map_err(|e| RestError::Http(e.into()))?;

        self.http_client.request(request).await.map_err(Into::into)
    }
}

/// Normalizes a REST API path.
///
/// This function:
/// 1. Strips leading `/` characters
/// 2. Returns an error for empty paths
///
/// # Examples
///
/// ```rust,ignore
/// assert_eq!(normalize_path("accounts")?, "accounts");
/// assert_eq!(normalize_path("/accounts")?, "accounts");
/// ```
fn normalize_path(path: &str) -> Result<String, RestError> {
    // Strip leading slashes
    let path = path.trim_start_matches('/');

    // Check for empty path
    if path.is_empty() {
        return Err(RestError::InvalidPath {
            path: String::new(),
        });
    }

    Ok(path.to_string())
}
