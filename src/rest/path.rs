//! Path building infrastructure for REST resources.
//!
//! This module provides the path resolution system that enables resources to
//! declare the operations and URL patterns they support.
//!
//! # Path Resolution
//!
//! Each resource declares a table of [`ResourcePath`] entries. An entry names
//! the HTTP method, the operation it serves, the IDs it requires, and a URL
//! template. For example, a `ListItem` is only reachable nested under its
//! list:
//! - `lists/{list_id}/listitems` (collection)
//! - `lists/{list_id}/listitems/{id}` (single item)
//!
//! The path resolution system selects the most specific path that matches
//! the available IDs. An operation a resource does not declare has no
//! matching path, which surfaces as an unsupported-operation error.
//!
//! # Example
//!
//! ```rust
//! use salesforceiq_api::rest::{ResourcePath, ResourceOperation, get_path, build_path};
//! use salesforceiq_api::HttpMethod;
//! use std::collections::HashMap;
//!
//! // Define paths for a resource
//! const PATHS: &[ResourcePath] = &[
//!     ResourcePath::new(
//!         HttpMethod::Get,
//!         ResourceOperation::All,
//!         &["list_id"],
//!         "lists/{list_id}/listitems",
//!     ),
//!     ResourcePath::new(
//!         HttpMethod::Get,
//!         ResourceOperation::Find,
//!         &["list_id", "id"],
//!         "lists/{list_id}/listitems/{id}",
//!     ),
//! ];
//!
//! // Find the path for the operation
//! let available_ids = vec!["list_id", "id"];
//! let path = get_path(PATHS, ResourceOperation::Find, &available_ids);
//! assert!(path.is_some());
//!
//! // Build the actual URL
//! let mut ids = HashMap::new();
//! ids.insert("list_id", "abc");
//! ids.insert("id", "456");
//! let url = build_path(path.unwrap().template, &ids);
//! assert_eq!(url, "lists/abc/listitems/456");
//! ```

use crate::clients::HttpMethod;
use std::collections::HashMap;
use std::fmt::Display;

/// Operations that can be performed on a REST resource.
///
/// Each operation corresponds to a specific HTTP method and URL pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceOperation {
    /// Find a single resource by ID (GET /resources/{id}).
    Find,
    /// List all resources (GET /resources).
    All,
    /// Create a new resource (POST /resources).
    Create,
    /// Update an existing resource (PUT /resources/{id}).
    Update,
    /// Delete a resource (DELETE /resources/{id}).
    Delete,
    /// Find resources by a field filter (GET /resources?field=value).
    FindBy,
}

impl ResourceOperation {
    /// Returns the default HTTP method for this operation.
    ///
    /// A path entry may override this. The API creates events with PUT,
    /// for example, so the event path table maps `Create` to `Put`.
    #[must_use]
    pub const fn default_http_method(&self) -> HttpMethod {
        match self {
            Self::Find | Self::All | Self::FindBy => HttpMethod::Get,
            Self::Create => HttpMethod::Post,
            Self::Update => HttpMethod::Put,
            Self::Delete => HttpMethod::Delete,
        }
    }

    /// Returns the operation name as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Find => "find",
            Self::All => "all",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::FindBy => "find_by",
        }
    }
}

impl Display for ResourceOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A path configuration for a REST resource operation.
///
/// Each `ResourcePath` defines how to access a resource for a specific
/// operation, including the HTTP method, required IDs, and URL template.
///
/// # Path Templates
///
/// Templates use `{id_name}` placeholders for ID interpolation:
/// - `accounts/{id}` - Single ID
/// - `lists/{list_id}/listitems/{id}` - Multiple IDs
///
/// # Example
///
/// ```rust
/// use salesforceiq_api::rest::{ResourcePath, ResourceOperation};
/// use salesforceiq_api::HttpMethod;
///
/// const ACCOUNT_FIND: ResourcePath = ResourcePath::new(
///     HttpMethod::Get,
///     ResourceOperation::Find,
///     &["id"],
///     "accounts/{id}",
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourcePath {
    /// The HTTP method for this path.
    pub http_method: HttpMethod,
    /// The operation this path is used for.
    pub operation: ResourceOperation,
    /// Required ID parameters in order (e.g., `["list_id", "id"]`).
    pub ids: &'static [&'static str],
    /// The URL template with `{id}` placeholders.
    pub template: &'static str,
}

impl ResourcePath {
    /// Creates a new `ResourcePath`.
    ///
    /// This is a `const fn` to allow paths to be defined as constants.
    ///
    /// # Arguments
    ///
    /// * `http_method` - The HTTP method for this path
    /// * `operation` - The operation this path handles
    /// * `ids` - Required ID parameter names in order
    /// * `template` - The URL template with `{id}` placeholders
    #[must_use]
    pub const fn new(
        http_method: HttpMethod,
        operation: ResourceOperation,
        ids: &'static [&'static str],
        template: &'static str,
    ) -> Self {
        Self {
            http_method,
            operation,
            ids,
            template,
        }
    }

    /// Returns the number of required IDs for this path.
    #[must_use]
    pub const fn id_count(&self) -> usize {
        self.ids.len()
    }

    /// Checks if all required IDs are available.
    ///
    /// # Arguments
    ///
    /// * `available_ids` - Slice of available ID parameter names
    #[must_use]
    pub fn matches_ids(&self, available_ids: &[&str]) -> bool {
        self.ids.iter().all(|id| available_ids.contains(id))
    }
}

/// Selects the best matching path for an operation.
///
/// The function filters paths by operation type and then selects the
/// path that:
/// 1. Has all required IDs available
/// 2. Has the most required IDs (most specific)
///
/// # Arguments
///
/// * `paths` - Available paths for the resource
/// * `operation` - The operation to perform
/// * `available_ids` - IDs that are available for path building
///
/// # Returns
///
/// The most specific matching path, or `None` if no path matches.
///
/// # Example
///
/// ```rust
/// use salesforceiq_api::rest::{ResourcePath, ResourceOperation, get_path};
/// use salesforceiq_api::HttpMethod;
///
/// const PATHS: &[ResourcePath] = &[
///     ResourcePath::new(HttpMethod::Get, ResourceOperation::Find, &["list_id", "id"], "lists/{list_id}/listitems/{id}"),
///     ResourcePath::new(HttpMethod::Get, ResourceOperation::Find, &["id"], "listitems/{id}"),
/// ];
///
/// // With both IDs, prefers the nested path
/// let path = get_path(PATHS, ResourceOperation::Find, &["list_id", "id"]);
/// assert_eq!(path.unwrap().template, "lists/{list_id}/listitems/{id}");
///
/// // With only id, uses the standalone path
/// let path = get_path(PATHS, ResourceOperation::Find, &["id"]);
/// assert_eq!(path.unwrap().template, "listitems/{id}");
/// ```
#[must_use]
pub fn get_path<'a>(
    paths: &'a [ResourcePath],
    operation: ResourceOperation,
    available_ids: &[&str],
) -> Option<&'a ResourcePath> {
    paths
        .iter()
        // Filter by operation
        .filter(|p| p.operation == operation)
        // Filter by available IDs
        .filter(|p| p.matches_ids(available_ids))
        // Select the most specific (most IDs)
        .max_by_key(|p| p.id_count())
}

/// Builds a URL from a template by interpolating IDs.
///
/// Replaces `{id_name}` placeholders in the template with values from
/// the provided map.
///
/// # Arguments
///
/// * `template` - The URL template with placeholders
/// * `ids` - A map of ID names to values
///
/// # Returns
///
/// The interpolated URL string.
///
/// # Example
///
/// ```rust
/// use salesforceiq_api::rest::build_path;
/// use std::collections::HashMap;
///
/// let mut ids = HashMap::new();
/// ids.insert("list_id", "abc");
/// ids.insert("id", "456");
///
/// let url = build_path("lists/{list_id}/listitems/{id}", &ids);
/// assert_eq!(url, "lists/abc/listitems/456");
/// ```
#[must_use]
#[allow(clippy::implicit_hasher)]
pub fn build_path<V: Display>(template: &str, ids: &HashMap<&str, V>) -> String {
    let mut result = template.to_string();

    for (key, value) in ids {
        let placeholder = format!("{{{key}}}");
        result = result.replace(&placeholder, &value.to_string());
    }

    result
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceOperation>();
    assert_send_sync::<ResourcePath>();
};
