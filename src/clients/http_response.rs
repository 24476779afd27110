//! HTTP response types for the SalesforceIQ API SDK.
//!
//! This module provides the [`HttpResponse`] type for accessing normalized
//! API response data.

use std::collections::HashMap;

/// An HTTP response from the SalesforceIQ API.
///
/// Contains the response status code, headers, and the parsed JSON body.
/// An empty response body (for example the 204 answered by event upserts
/// and deletes) is represented as [`serde_json::Value::Null`].
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body; `Null` when the provider sent no body.
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    ///
    /// Header names are expected to be lowercased by the transport layer.
    #[must_use]
    pub const fn new(code: u16, headers: HashMap<String, Vec<String>>, body: serde_json::Value) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the `X-Request-Id` header value, if present.
    ///
    /// This ID is useful for debugging and should be included in error reports.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.headers
            .get("x-request-id")
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}
