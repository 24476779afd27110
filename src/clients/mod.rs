//! HTTP client types for SalesforceIQ API communication.
//!
//! This module provides the foundational HTTP client layer for making
//! signed requests to the SalesforceIQ API. It handles request/response
//! processing and response normalization.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async HTTP client for API communication
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A parsed response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`rest::RestClient`]: Higher-level REST API client
//! - [`rest::RestError`]: REST-specific error types
//!
//! # Example
//!
//! ```rust,ignore
//! use salesforceiq_api::{ApiKey, ApiSecretKey, IqConfig};
//! use salesforceiq_api::clients::{HttpClient, HttpMethod, HttpRequest};
//!
//! let config = IqConfig::builder()
//!     .api_key(ApiKey::new("my-key")?)
//!     .api_secret_key(ApiSecretKey::new("my-secret")?)
//!     .build()?;
//!
//! // Create an HTTP client
//! let client = HttpClient::new(&config);
//!
//! // Build and send a request
//! let request = HttpRequest::builder(HttpMethod::Get, "accounts")
//!     .build()
//!     .unwrap();
//!
//! let response = client.request(request).await?;
//! ```
//!
//! # Retry Behavior
//!
//! The client performs exactly one network call per invocation and never
//! retries. Callers that need retry semantics wrap the call themselves.

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod rest;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, API_BASE_PATH, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;

// Re-export REST client types at the clients module level
pub use rest::{RestClient, RestError};
