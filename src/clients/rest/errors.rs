//! REST-specific error types for the SalesforceIQ API SDK.
//!
//! This module contains error types for REST API operations, including
//! invalid paths and wrapped HTTP errors.
//!
//! # Error Handling
//!
//! The SDK uses specific error types for different failure scenarios:
//!
//! - [`RestError::InvalidPath`]: When a REST API path fails validation
//! - [`RestError::Http`]: Wraps underlying HTTP errors
//!
//! # Example
//!
//! ```rust,ignore
//! use salesforceiq_api::clients::rest::{RestClient, RestError};
//!
//! match client.get("accounts", None).await {
//!     Ok(response) => println!("Accounts: {}", response.body),
//!     Err(RestError::InvalidPath { path }) => {
//!         println!("Invalid path: {}", path);
//!     }
//!     Err(RestError::Http(e)) => {
//!         println!("HTTP error: {}", e);
//!     }
//! }
//! ```

use crate::clients::HttpError;
use thiserror::Error;

/// Error type for REST API operations.
///
/// This enum provides specific error types for REST API operations,
/// wrapping HTTP errors and adding REST-specific error cases.
///
/// # Example
///
/// ```rust
/// use salesforceiq_api::clients::rest::RestError;
///
/// // Invalid path error
/// let error = RestError::InvalidPath { path: "".to_string() };
/// assert!(error.to_string().contains("Invalid"));
/// ```
#[derive(Debug, Error)]
pub enum RestError {
    /// The REST API path is invalid.
    ///
    /// This error is returned when a path fails validation, such as
    /// when it is empty after normalization.
    #[error("Invalid REST API path: {path}")]
    InvalidPath {
        /// The invalid path that was provided.
        path: String,
    },

    /// An HTTP-level error occurred.
    ///
    /// This variant wraps [`HttpError`] for unified error handling.
    #[error(transparent)]
    Http(#[from] HttpError),
}
