//! Resource-specific error types for REST API operations.
//!
//! This module contains error types for REST resource operations, extending
//! the base [`RestError`](crate::clients::RestError) with resource-specific
//! semantics like `NotFound` and `UnsupportedOperation`.
//!
//! # Error Handling
//!
//! The SDK maps HTTP status codes to semantic error variants:
//!
//! - **404**: [`ResourceError::NotFound`] - Resource doesn't exist
//! - **Other 4xx/5xx**: [`ResourceError::Http`] - Wrapped HTTP error
//!
//! Client-side failures get their own variants:
//!
//! - [`ResourceError::UnsupportedOperation`] - The resource has no path for the operation
//! - [`ResourceError::InvalidInput`] - Input validation failed before any network call
//! - [`ResourceError::Decode`] - The response body did not match the resource shape
//!
//! # Example
//!
//! ```rust,ignore
//! use salesforceiq_api::rest::{RestResource, ResourceError};
//!
//! match Account::find(&client, "abc123").await {
//!     Ok(account) => println!("Found: {}", account.name),
//!     Err(ResourceError::NotFound { resource, id }) => {
//!         println!("{} with id {} not found", resource, id);
//!     }
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```

use crate::clients::{HttpError, RestError};
use thiserror::Error;

/// Error type for REST resource operations.
///
/// This enum provides semantic error types for resource operations,
/// mapping HTTP error codes to meaningful variants while preserving
/// the request ID for debugging.
///
/// # Example
///
/// ```rust
/// use salesforceiq_api::rest::ResourceError;
///
/// // Not found error
/// let error = ResourceError::NotFound {
///     resource: "Account",
///     id: "abc123".to_string(),
/// };
/// assert!(error.to_string().contains("Account"));
/// assert!(error.to_string().contains("abc123"));
/// ```
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The resource was not found (HTTP 404).
    ///
    /// This error is returned when attempting to find, update, or delete
    /// a resource that doesn't exist. Deleting the same resource twice
    /// surfaces the second attempt as this error.
    #[error("{resource} with id {id} not found")]
    NotFound {
        /// The type name of the resource (e.g., "Account", "Contact").
        resource: &'static str,
        /// The ID that was requested.
        id: String,
    },

    /// The resource has no path for the requested operation.
    ///
    /// This error is returned when attempting an operation the resource
    /// does not declare, such as updating an account or deleting a list.
    #[error("{resource} does not support the {operation} operation")]
    UnsupportedOperation {
        /// The type name of the resource.
        resource: &'static str,
        /// The operation that was attempted (e.g., "update", "delete").
        operation: &'static str,
    },

    /// Input validation failed before any network call was made.
    ///
    /// This error is returned when required input is missing or empty,
    /// such as creating an account without a name.
    #[error("Invalid input for {resource}: {reason}")]
    InvalidInput {
        /// The type name of the resource.
        resource: &'static str,
        /// Why the input was rejected.
        reason: String,
    },

    /// The response body did not match the expected resource shape.
    #[error("Failed to decode {resource} response: {source}")]
    Decode {
        /// The type name of the resource.
        resource: &'static str,
        /// The underlying deserialization error.
        #[source]
        source: serde_json::Error,
    },

    /// An HTTP-level error occurred.
    ///
    /// This variant wraps [`HttpError`] for errors that don't map to
    /// a specific resource error type.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// A REST-level error occurred.
    ///
    /// This variant wraps [`RestError`] for REST client errors.
    #[error(transparent)]
    Rest(#[from] RestError),
}

impl ResourceError {
    /// Maps a [`RestError`] into a resource-level error.
    ///
    /// A 404 response becomes [`ResourceError::NotFound`] using the given
    /// resource name and ID. Every other error passes through unchanged.
    ///
    /// # Arguments
    ///
    /// * `error` - The REST client error to map
    /// * `resource` - The resource type name (e.g., "Account")
    /// * `id` - The resource ID the request targeted (if applicable)
    ///
    /// # Example
    ///
    /// ```rust
    /// use salesforceiq_api::clients::{HttpError, HttpResponseError, RestError};
    /// use salesforceiq_api::rest::ResourceError;
    ///
    /// let rest_error = RestError::Http(HttpError::Response(HttpResponseError {
    ///     code: 404,
    ///     body: serde_json::Value::Null,
    ///     error_reference: None,
    /// }));
    ///
    /// let error = ResourceError::from_rest(rest_error, "Account", Some("abc123"));
    /// assert!(matches!(error, ResourceError::NotFound { .. }));
    /// ```
    #[must_use]
    pub fn from_rest(error: RestError, resource: &'static str, id: Option<&str>) -> Self {
        match error {
            RestError::Http(HttpError::Response(e)) if e.code == 404 => Self::NotFound {
                resource,
                id: id.unwrap_or("unknown").to_string(),
            },
            RestError::Http(e) => Self::Http(e),
            other => Self::Rest(other),
        }
    }

    /// Returns the request ID if available.
    ///
    /// Useful for debugging and error reporting.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::Http(HttpError::Response(e))
            | Self::Rest(RestError::Http(HttpError::Response(e))) => e.error_reference.as_deref(),
            _ => None,
        }
    }
}

// Verify ResourceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpResponseError;
    use serde_json::json;

    fn response_error(code: u16, body: serde_json::Value) -> RestError {
        RestError::Http(HttpError::Response(HttpResponseError {
            code,
            body,
            error_reference: Some("req-123".to_string()),
        }))
    }

    #[test]
    fn test_not_found_error_formats_message_with_resource_and_id() {
        let error = ResourceError::NotFound {
            resource: "Account",
            id: "abc123".to_string(),
        };
        let message = error.to_string();

        assert!(message.contains("Account"));
        assert!(message.contains("abc123"));
        assert!(message.contains("not found"));
    }

    #[test]
    fn test_unsupported_operation_includes_resource_and_operation() {
        let error = ResourceError::UnsupportedOperation {
            resource: "Account",
            operation: "update",
        };
        let message = error.to_string();

        assert!(message.contains("Account"));
        assert!(message.contains("update"));
        assert!(message.contains("does not support"));
    }

    #[test]
    fn test_invalid_input_includes_reason() {
        let error = ResourceError::InvalidInput {
            resource: "Account",
            reason: "name cannot be empty".to_string(),
        };
        let message = error.to_string();

        assert!(message.contains("Account"));
        assert!(message.contains("name cannot be empty"));
    }

    #[test]
    fn test_decode_error_names_resource() {
        let source = serde_json::from_str::<Vec<String>>("{}").unwrap_err();
        let error = ResourceError::Decode {
            resource: "Contact",
            source,
        };
        let message = error.to_string();

        assert!(message.contains("Failed to decode"));
        assert!(message.contains("Contact"));
    }

    #[test]
    fn test_http_error_wraps_correctly() {
        let http_error = HttpError::Response(HttpResponseError {
            code: 500,
            body: json!({"error": "Internal Server Error"}),
            error_reference: Some("req-xyz".to_string()),
        });

        let resource_error = ResourceError::Http(http_error);
        let message = resource_error.to_string();

        assert!(message.contains("Internal Server Error"));
    }

    #[test]
    fn test_from_http_error_conversion() {
        let http_error = HttpError::Response(HttpResponseError {
            code: 503,
            body: serde_json::Value::String("Service unavailable".to_string()),
            error_reference: None,
        });

        let resource_error: ResourceError = http_error.into();
        assert!(matches!(resource_error, ResourceError::Http(_)));
    }

    #[test]
    fn test_from_rest_error_conversion() {
        let rest_error = RestError::InvalidPath {
            path: "/bad/path".to_string(),
        };

        let resource_error: ResourceError = rest_error.into();
        assert!(matches!(resource_error, ResourceError::Rest(_)));
    }

    #[test]
    fn test_from_rest_maps_404_to_not_found() {
        let error = ResourceError::from_rest(
            response_error(404, serde_json::Value::Null),
            "Account",
            Some("abc123"),
        );

        assert!(matches!(
            error,
            ResourceError::NotFound { resource: "Account", id } if id == "abc123"
        ));
    }

    #[test]
    fn test_from_rest_uses_unknown_for_missing_id() {
        let error =
            ResourceError::from_rest(response_error(404, serde_json::Value::Null), "List", None);

        assert!(matches!(
            error,
            ResourceError::NotFound { resource: "List", id } if id == "unknown"
        ));
    }

    #[test]
    fn test_from_rest_keeps_other_status_codes_as_http() {
        let error = ResourceError::from_rest(
            response_error(500, json!({"error": "Internal error"})),
            "Account",
            Some("abc123"),
        );

        assert!(matches!(error, ResourceError::Http(_)));
    }

    #[test]
    fn test_from_rest_keeps_invalid_path_as_rest() {
        let error = ResourceError::from_rest(
            RestError::InvalidPath {
                path: String::new(),
            },
            "Account",
            None,
        );

        assert!(matches!(
            error,
            ResourceError::Rest(RestError::InvalidPath { .. })
        ));
    }

    #[test]
    fn test_request_id_extraction() {
        let error = ResourceError::Http(HttpError::Response(HttpResponseError {
            code: 500,
            body: serde_json::Value::Null,
            error_reference: Some("req-abc".to_string()),
        }));
        assert_eq!(error.request_id(), Some("req-abc"));

        let error = ResourceError::NotFound {
            resource: "Account",
            id: "123".to_string(),
        };
        assert_eq!(error.request_id(), None);
    }

    #[test]
    fn test_all_error_variants_implement_std_error() {
        let errors: Vec<ResourceError> = vec![
            ResourceError::NotFound {
                resource: "Account",
                id: "123".to_string(),
            },
            ResourceError::UnsupportedOperation {
                resource: "List",
                operation: "delete",
            },
            ResourceError::InvalidInput {
                resource: "ListItem",
                reason: "listId cannot be empty".to_string(),
            },
            ResourceError::Rest(RestError::InvalidPath {
                path: "test".to_string(),
            }),
        ];

        for error in &errors {
            let _: &dyn std::error::Error = error;
        }
    }
}
