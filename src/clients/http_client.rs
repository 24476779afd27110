//! HTTP client for SalesforceIQ API communication.
//!
//! This module provides the [`HttpClient`] type for making signed requests
//! to the SalesforceIQ API.
//!
//! Each invocation performs exactly one network call. There is no retry
//! loop; retry policy, if any, belongs to the caller.

use std::collections::HashMap;

use crate::auth::RequestSigner;
use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;
use crate::config::IqConfig;

/// Versioned base path shared by every API endpoint.
pub const API_BASE_PATH: &str = "/v2";

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the SalesforceIQ API.
///
/// The client handles:
/// - Base URI construction from the configured [`crate::ApiUrl`]
/// - Default headers including User-Agent and Accept
/// - Per-request credential signing
/// - Response normalization into [`HttpResponse`]
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use salesforceiq_api::{HttpClient, HttpRequest, HttpMethod, IqConfig};
///
/// let client = HttpClient::new(&config);
///
/// let request = HttpRequest::builder(HttpMethod::Get, "lists")
///     .build()
///     .unwrap();
///
/// let response = client.request(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URI (e.g., `https://api.salesforceiq.com`).
    base_uri: String,
    /// Versioned base path (`/v2`).
    base_path: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
    /// Signs each outgoing request.
    signer: RequestSigner,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    ///
    /// # Example
    ///
    /// ```rust
    /// use salesforceiq_api::{ApiKey, ApiSecretKey, IqConfig};
    /// use salesforceiq_api::clients::HttpClient;
    ///
    /// let config = IqConfig::builder()
    ///     .api_key(ApiKey::new("key").unwrap())
    ///     .api_secret_key(ApiSecretKey::new("secret").unwrap())
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = HttpClient::new(&config);
    /// ```
    #[must_use]
    pub fn new(config: &IqConfig) -> Self {
        let base_uri = config.api_url().as_ref().to_string();

        // Build User-Agent header
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}SalesforceIQ API Library v{SDK_VERSION} | Rust {rust_version}"
        );

        // Build default headers
        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        // Create reqwest client
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_uri,
            base_path: API_BASE_PATH.to_string(),
            default_headers,
            signer: RequestSigner::from_config(config),
        }
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the base path for this client.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends an HTTP request to the SalesforceIQ API.
    ///
    /// This method handles:
    /// - Request validation
    /// - URL construction (the raw query string is appended verbatim)
    /// - Header merging and credential signing
    /// - Response parsing
    ///
    /// Exactly one network call is made per invocation.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - Network error occurs (`Network`)
    /// - Non-2xx response received (`Response`)
    /// - A 2xx response body is not valid JSON (`Decode`)
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let request = HttpRequest::builder(HttpMethod::Get, "lists/abc/listitems")
    ///     .raw_query("_start=0&_limit=5")
    ///     .build()
    ///     .unwrap();
    ///
    /// let response = client.request(request).await?;
    /// if response.is_ok() {
    ///     println!("Items: {}", response.body);
    /// }
    /// ```
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        // Validate request first
        request.verify()?;

        // Build full URL; the query string is already encoded by the caller
        let wire_path = format!("{}/{}", self.base_path, request.path);
        let mut url = format!("{}{}", self.base_uri, wire_path);
        if let Some(query) = &request.query {
            url.push('?');
            url.push_str(query);
        }

        // Merge headers
        let mut headers = self.default_headers.clone();
        if request.body.is_some() {
            headers.insert("Content-Type".to_string(), "application/json".to_string());
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }

        // Build the reqwest request
        let mut req_builder = match request.http_method {
            crate::clients::http_request::HttpMethod::Get => self.client.get(&url),
            crate::clients::http_request::HttpMethod::Post => self.client.post(&url),
            crate::clients::http_request::HttpMethod::Put => self.client.put(&url),
            crate::clients::http_request::HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }

        // Sign the request; the credential covers method and wire path
        let credential = self
            .signer
            .credential(&request.http_method.to_string(), &wire_path);
        for (key, value) in credential.headers() {
            req_builder = req_builder.header(key, value);
        }

        // Add body
        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_string());
        }

        tracing::debug!(
            "Sending {} request to {}",
            request.http_method,
            request.path
        );

        // Send request; exactly one attempt
        let res = req_builder.send().await?;

        // Parse response
        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await?;

        // Parse body as JSON; empty bodies normalize to null
        let body = if body_text.is_empty() {
            serde_json::Value::Null
        } else {
            match serde_json::from_str(&body_text) {
                Ok(value) => value,
                // Error statuses may carry non-JSON bodies; keep them inspectable
                Err(_) if code >= 400 => serde_json::Value::String(body_text),
                Err(e) => return Err(HttpError::Decode(e)),
            }
        };

        let response = HttpResponse::new(code, res_headers, body);

        if response.is_ok() {
            tracing::debug!("Request to {} completed with status {}", request.path, code);
            return Ok(response);
        }

        tracing::warn!("Request to {} failed with status {}", request.path, code);

        let error_reference = response.request_id().map(String::from);
        Err(HttpError::Response(HttpResponseError {
            code: response.code,
            body: response.body,
            error_reference,
        }))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}
