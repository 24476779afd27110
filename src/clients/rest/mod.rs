//! REST API client for the SalesforceIQ API.
//!
//! This module provides a higher-level REST API client built on top of the
//! [`HttpClient`](crate::clients::HttpClient) that offers convenient methods
//! for interacting with the SalesforceIQ REST API.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`RestClient`]: The REST API client with `get()`, `post()`, `put()`, `delete()` methods
//! - [`RestError`]: Error type for REST API operations
//!
//! # Example
//!
//! ```rust,ignore
//! use salesforceiq_api::{ApiKey, ApiSecretKey, IqConfig, RestClient};
//!
//! // Create configuration
//! let config = IqConfig::builder()
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .api_secret_key(ApiSecretKey::new("your-secret").unwrap())
//!     .build()
//!     .unwrap();
//!
//! // Create REST client
//! let client = RestClient::new(&config);
//!
//! // Make requests
//! let response = client.get("accounts", None).await?;
//! println!("Accounts: {}", response.body);
//! ```
//!
//! # Path Normalization
//!
//! The client strips leading slashes (`/accounts` -> `accounts`) and rejects
//! empty paths. The versioned `/v2` base path is prepended by the underlying
//! [`HttpClient`](crate::clients::HttpClient).
//!
//! # Query Strings
//!
//! Query strings are accepted as single pre-encoded strings and appended to
//! the URL verbatim. The client never re-encodes, reorders, or inspects them.

mod client;
mod errors;

pub use client::RestClient;
pub use errors::RestError;
