//! # SalesforceIQ API Rust SDK
//!
//! A Rust SDK for the SalesforceIQ REST API, providing type-safe
//! configuration, HMAC request signing, and typed resource operations for
//! CRM integrations.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`IqConfig`] and [`IqConfigBuilder`]
//! - Validated newtypes for API credentials and the API base URL
//! - Per-request HMAC-SHA256 signing via [`auth::RequestSigner`]
//! - An async HTTP client that issues exactly one attempt per call
//! - Typed resources (Account, Contact, Event, List, `ListItem`) built on
//!   the [`rest::RestResource`] trait
//!
//! ## Quick Start
//!
//! ```rust
//! use salesforceiq_api::{ApiKey, ApiSecretKey, IqConfig};
//!
//! // Create configuration using the builder pattern
//! let config = IqConfig::builder()
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .api_secret_key(ApiSecretKey::new("your-api-secret").unwrap())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Working with Resources
//!
//! ```rust,ignore
//! use salesforceiq_api::rest::resources::{Account, NewAccount};
//! use salesforceiq_api::rest::RestResource;
//! use salesforceiq_api::{IqConfig, RestClient};
//!
//! let client = RestClient::new(&config);
//!
//! // Create an account, read it back, delete it
//! let account = Account::create(&client, &NewAccount::new("Acme Corp")).await?;
//! let id = account.id.clone().unwrap();
//! let fetched = Account::find(&client, id).await?;
//! fetched.delete(&client).await?;
//!
//! // Collection reads accept pre-encoded query strings for pagination
//! let page = Account::all(&client, Some("_start=0&_limit=50")).await?;
//! ```
//!
//! ## Making Raw API Requests
//!
//! The typed resources cover the common operations; the HTTP layer is also
//! public for anything else:
//!
//! ```rust,ignore
//! use salesforceiq_api::clients::{HttpClient, HttpMethod, HttpRequest};
//!
//! let client = HttpClient::new(&config);
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "lists")
//!     .build()
//!     .unwrap();
//!
//! let response = client.request(request).await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **One request per call**: No hidden retries; callers decide retry policy

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use auth::{RequestCredential, RequestSigner};
pub use config::{ApiKey, ApiSecretKey, ApiUrl, IqConfig, IqConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError, RestClient, RestError,
};

// Re-export resource infrastructure
pub use rest::{ResourceError, RestResource};
