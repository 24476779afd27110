//! HTTP-specific error types for the SalesforceIQ API SDK.
//!
//! This module contains error types for HTTP operations, including provider
//! response errors, transport failures, and request validation failures.
//!
//! # Error Handling
//!
//! The SDK uses specific error types for different failure scenarios:
//!
//! - [`HttpResponseError`]: Non-2xx HTTP responses from the API, carrying
//!   the status code and the parsed response body
//! - [`InvalidHttpRequestError`]: When a request fails validation before sending
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! # Example
//!
//! ```rust,ignore
//! use salesforceiq_api::clients::{HttpClient, HttpRequest, HttpMethod, HttpError};
//!
//! match client.request(request).await {
//!     Ok(response) => println!("Success: {}", response.body),
//!     Err(HttpError::Response(e)) => {
//!         println!("API error {}: {}", e.code, e.body);
//!     }
//!     Err(HttpError::InvalidRequest(e)) => {
//!         println!("Invalid request: {}", e);
//!     }
//!     Err(HttpError::Network(e)) => {
//!         println!("Network error: {}", e);
//!     }
//!     Err(HttpError::Decode(e)) => {
//!         println!("Malformed response: {}", e);
//!     }
//! }
//! ```

use thiserror::Error;

/// Error returned when an HTTP request receives a non-successful response.
///
/// The provider's response body is parsed and attached for caller
/// inspection: JSON bodies are carried as parsed values, non-JSON bodies as
/// a JSON string, and empty bodies as `Null`.
///
/// # Example
///
/// ```rust
/// use salesforceiq_api::clients::HttpResponseError;
/// use serde_json::json;
///
/// let error = HttpResponseError {
///     code: 404,
///     body: json!({"message": "Object not found"}),
///     error_reference: Some("abc-123".to_string()),
/// };
///
/// println!("Status {}: {}", error.code, error.body);
/// ```
#[derive(Debug, Error)]
#[error("API responded with status {code}: {body}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The parsed response body.
    pub body: serde_json::Value,
    /// Reference ID for error reporting (from X-Request-Id header).
    pub error_reference: Option<String>,
}

/// Error returned when an HTTP request fails validation.
///
/// This error is raised before a request is sent if it fails validation
/// checks, such as a missing body for POST/PUT requests.
///
/// # Example
///
/// ```rust
/// use salesforceiq_api::clients::InvalidHttpRequestError;
///
/// let error = InvalidHttpRequestError::MissingBody {
///     method: "post".to_string(),
/// };
///
/// println!("{}", error); // "Cannot use post without specifying data."
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A POST or PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },
}

/// Unified error type for all HTTP-related errors.
///
/// This enum provides a single error type for HTTP operations, making it
/// easier to handle errors at API boundaries. Use pattern matching to
/// handle specific error types.
///
/// Transport-level failures are `Network` (connection refused, timeout)
/// and `Decode` (a 2xx response whose body is not valid JSON). Provider
/// failures with a status code are `Response`.
///
/// # Example
///
/// ```rust,ignore
/// use salesforceiq_api::HttpError;
///
/// let result = client.request(request).await;
/// match result {
///     Ok(response) => { /* handle success */ }
///     Err(HttpError::Response(e)) => { /* handle API error */ }
///     Err(HttpError::InvalidRequest(e)) => { /* handle validation error */ }
///     Err(HttpError::Network(e)) => { /* handle network error */ }
///     Err(HttpError::Decode(e)) => { /* handle malformed response */ }
/// }
/// ```
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A successful response carried a body that is not valid JSON.
    #[error("Malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}
