//! REST Resource trait for CRUD operations.
//!
//! This module defines the [`RestResource`] trait, which provides a standardized
//! interface for interacting with SalesforceIQ REST API resources. Resources that
//! implement this trait gain `find()`, `all()`, `find_by()`, and `delete()`
//! methods, plus parent-scoped variants for nested resources.
//!
//! # Implementing a Resource
//!
//! To implement a REST resource:
//!
//! 1. Define a struct with serde derives
//! 2. Implement the `RestResource` trait with associated types and constants
//! 3. The trait provides default implementations for the declared operations
//!
//! An operation without a matching path entry fails with
//! [`ResourceError::UnsupportedOperation`]. A read-only resource simply
//! declares fewer paths.
//!
//! # Example
//!
//! ```rust,ignore
//! use salesforceiq_api::rest::{RestResource, ResourcePath, ResourceOperation, ResourceError};
//! use salesforceiq_api::{HttpMethod, RestClient};
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Debug, Clone, Serialize, Deserialize)]
//! #[serde(rename_all = "camelCase")]
//! pub struct Account {
//!     pub id: Option<String>,
//!     pub name: String,
//! }
//!
//! impl RestResource for Account {
//!     type Id = String;
//!
//!     const NAME: &'static str = "Account";
//!     const PATHS: &'static [ResourcePath] = &[
//!         ResourcePath::new(HttpMethod::Get, ResourceOperation::Find, &["id"], "accounts/{id}"),
//!         ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "accounts"),
//!         ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "accounts"),
//!         ResourcePath::new(HttpMethod::Delete, ResourceOperation::Delete, &["id"], "accounts/{id}"),
//!     ];
//!
//!     fn get_id(&self) -> Option<Self::Id> {
//!         self.id.clone()
//!     }
//! }
//!
//! // Usage:
//! let account = Account::find(&client, "abc123".to_string()).await?;
//! let accounts = Account::all(&client, None).await?;
//! ```
//!
//! # Body Shapes
//!
//! Single resources arrive as bare JSON objects. Collections arrive wrapped
//! in an `objects` envelope:
//!
//! ```json
//! { "objects": [ { "id": "..." }, { "id": "..." } ] }
//! ```
//!
//! The [`decode_resource`] and [`decode_collection`] helpers handle both
//! shapes, treating a missing or null envelope as an empty collection.

use std::collections::HashMap;
use std::fmt::Display;

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::clients::RestClient;
use crate::rest::{build_path, get_path, ResourceError, ResourceOperation, ResourcePath};

/// A REST resource that can be fetched, listed, and deleted.
///
/// This trait provides a standardized interface for operations on
/// SalesforceIQ REST API resources. Implementors define the resource's
/// paths and name, and get default implementations for the operations
/// those paths declare.
///
/// Creation and update bodies differ per resource, so resources define
/// those as inherent methods rather than trait defaults.
///
/// # Associated Types
///
/// - `Id`: The type of the resource's identifier (a hex object ID string)
///
/// # Associated Constants
///
/// - `NAME`: The resource name used in error messages (e.g., "Account")
/// - `PATHS`: Available paths for different operations
///
/// # Required Bounds
///
/// Resources must be serializable, deserializable, cloneable, and thread-safe.
#[allow(async_fn_in_trait)]
pub trait RestResource: Serialize + DeserializeOwned + Clone + Send + Sync + Sized {
    /// The type of the resource's identifier.
    type Id: Display + Clone + Send + Sync;

    /// The name of the resource (e.g., "Account").
    ///
    /// Used in error messages.
    const NAME: &'static str;

    /// Available paths for this resource.
    ///
    /// Define paths for each operation the resource supports. The path
    /// selection logic will choose the most specific path that matches
    /// the available IDs. Operations without a path entry fail with
    /// [`ResourceError::UnsupportedOperation`].
    const PATHS: &'static [ResourcePath];

    /// Returns the resource's ID if it exists.
    ///
    /// Returns `None` for new resources that haven't been saved yet.
    fn get_id(&self) -> Option<Self::Id>;

    /// Finds a single resource by ID.
    ///
    /// # Arguments
    ///
    /// * `client` - The REST client to use for the request
    /// * `id` - The resource ID to find
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the resource doesn't exist.
    /// Returns [`ResourceError::UnsupportedOperation`] if no find path is declared.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let account = Account::find(&client, "abc123".to_string()).await?;
    /// println!("Found: {}", account.name);
    /// ```
    async fn find(client: &RestClient, id: Self::Id) -> Result<Self, ResourceError> {
        let id_string = id.to_string();
        let mut ids: HashMap<&str, String> = HashMap::new();
        ids.insert("id", id_string.clone());

        let available_ids: Vec<&str> = ids.keys().copied().collect();
        let path = get_path(Self::PATHS, ResourceOperation::Find, &available_ids).ok_or(
            ResourceError::UnsupportedOperation {
                resource: Self::NAME,
                operation: "find",
            },
        )?;

        let url = build_path(path.template, &ids);
        let response = client
            .get(&url, None)
            .await
            .map_err(|e| ResourceError::from_rest(e, Self::NAME, Some(&id_string)))?;

        decode_resource(response.body, Self::NAME)
    }

    /// Finds a single nested resource by parent ID and resource ID.
    ///
    /// For resources that only exist under a parent (e.g., list items
    /// under lists).
    ///
    /// # Arguments
    ///
    /// * `client` - The REST client to use
    /// * `parent_id_name` - The name of the parent ID parameter (e.g., `list_id`)
    /// * `parent_id` - The parent resource ID
    /// * `id` - The resource ID to find
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the resource doesn't exist.
    /// Returns [`ResourceError::UnsupportedOperation`] if no matching path is declared.
    async fn find_with_parent<ParentId: Display + Send>(
        client: &RestClient,
        parent_id_name: &str,
        parent_id: ParentId,
        id: Self::Id,
    ) -> Result<Self, ResourceError> {
        let id_string = id.to_string();
        let mut ids: HashMap<&str, String> = HashMap::new();
        ids.insert(parent_id_name, parent_id.to_string());
        ids.insert("id", id_string.clone());

        let available_ids: Vec<&str> = ids.keys().copied().collect();
        let path = get_path(Self::PATHS, ResourceOperation::Find, &available_ids).ok_or(
            ResourceError::UnsupportedOperation {
                resource: Self::NAME,
                operation: "find",
            },
        )?;

        let url = build_path(path.template, &ids);
        let response = client
            .get(&url, None)
            .await
            .map_err(|e| ResourceError::from_rest(e, Self::NAME, Some(&id_string)))?;

        decode_resource(response.body, Self::NAME)
    }

    /// Lists all resources.
    ///
    /// # Arguments
    ///
    /// * `client` - The REST client to use for the request
    /// * `query` - Optional pre-encoded query string (e.g., `"_start=0&_limit=5"`),
    ///   appended to the URL verbatim
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::UnsupportedOperation`] if no list path is declared.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let accounts = Account::all(&client, Some("_start=0&_limit=50")).await?;
    /// for account in &accounts {
    ///     println!("Account: {}", account.name);
    /// }
    /// ```
    async fn all(client: &RestClient, query: Option<&str>) -> Result<Vec<Self>, ResourceError> {
        let path = get_path(Self::PATHS, ResourceOperation::All, &[]).ok_or(
            ResourceError::UnsupportedOperation {
                resource: Self::NAME,
                operation: "all",
            },
        )?;

        let response = client
            .get(path.template, query)
            .await
            .map_err(|e| ResourceError::from_rest(e, Self::NAME, None))?;

        decode_collection(response.body, Self::NAME)
    }

    /// Lists resources nested under a parent resource.
    ///
    /// # Arguments
    ///
    /// * `client` - The REST client to use
    /// * `parent_id_name` - The name of the parent ID parameter (e.g., `list_id`)
    /// * `parent_id` - The parent resource ID
    /// * `query` - Optional pre-encoded query string, appended verbatim
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::UnsupportedOperation`] if no matching path is declared.
    async fn all_with_parent<ParentId: Display + Send>(
        client: &RestClient,
        parent_id_name: &str,
        parent_id: ParentId,
        query: Option<&str>,
    ) -> Result<Vec<Self>, ResourceError> {
        let mut ids: HashMap<&str, String> = HashMap::new();
        ids.insert(parent_id_name, parent_id.to_string());

        let available_ids: Vec<&str> = ids.keys().copied().collect();
        let path = get_path(Self::PATHS, ResourceOperation::All, &available_ids).ok_or(
            ResourceError::UnsupportedOperation {
                resource: Self::NAME,
                operation: "all",
            },
        )?;

        let url = build_path(path.template, &ids);
        let response = client
            .get(&url, query)
            .await
            .map_err(|e| ResourceError::from_rest(e, Self::NAME, None))?;

        decode_collection(response.body, Self::NAME)
    }

    /// Finds resources matching a field filter.
    ///
    /// The filter is a pre-encoded query string such as
    /// `"properties.email=bob%40example.com"`. The result may be empty;
    /// a lookup with no matches is not an error.
    ///
    /// # Arguments
    ///
    /// * `client` - The REST client to use
    /// * `filter` - The pre-encoded filter query string, appended verbatim
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::UnsupportedOperation`] if no filter path is declared.
    async fn find_by(client: &RestClient, filter: &str) -> Result<Vec<Self>, ResourceError> {
        let path = get_path(Self::PATHS, ResourceOperation::FindBy, &[]).ok_or(
            ResourceError::UnsupportedOperation {
                resource: Self::NAME,
                operation: "find_by",
            },
        )?;

        let response = client
            .get(path.template, Some(filter))
            .await
            .map_err(|e| ResourceError::from_rest(e, Self::NAME, None))?;

        decode_collection(response.body, Self::NAME)
    }

    /// Finds nested resources matching a field filter.
    ///
    /// # Arguments
    ///
    /// * `client` - The REST client to use
    /// * `parent_id_name` - The name of the parent ID parameter (e.g., `list_id`)
    /// * `parent_id` - The parent resource ID
    /// * `filter` - The pre-encoded filter query string, appended verbatim
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::UnsupportedOperation`] if no matching path is declared.
    async fn find_by_with_parent<ParentId: Display + Send>(
        client: &RestClient,
        parent_id_name: &str,
        parent_id: ParentId,
        filter: &str,
    ) -> Result<Vec<Self>, ResourceError> {
        let mut ids: HashMap<&str, String> = HashMap::new();
        ids.insert(parent_id_name, parent_id.to_string());

        let available_ids: Vec<&str> = ids.keys().copied().collect();
        let path = get_path(Self::PATHS, ResourceOperation::FindBy, &available_ids).ok_or(
            ResourceError::UnsupportedOperation {
                resource: Self::NAME,
                operation: "find_by",
            },
        )?;

        let url = build_path(path.template, &ids);
        let response = client
            .get(&url, Some(filter))
            .await
            .map_err(|e| ResourceError::from_rest(e, Self::NAME, None))?;

        decode_collection(response.body, Self::NAME)
    }

    /// Deletes a resource by ID.
    ///
    /// Deleting a resource that no longer exists surfaces the API's 404
    /// as [`ResourceError::NotFound`].
    ///
    /// # Arguments
    ///
    /// * `client` - The REST client to use
    /// * `id` - The resource ID to delete
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the resource doesn't exist.
    /// Returns [`ResourceError::UnsupportedOperation`] if no delete path is declared.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// Account::delete_by_id(&client, "abc123".to_string()).await?;
    /// ```
    async fn delete_by_id(client: &RestClient, id: Self::Id) -> Result<(), ResourceError> {
        let id_string = id.to_string();
        let mut ids: HashMap<&str, String> = HashMap::new();
        ids.insert("id", id_string.clone());

        let available_ids: Vec<&str> = ids.keys().copied().collect();
        let path = get_path(Self::PATHS, ResourceOperation::Delete, &available_ids).ok_or(
            ResourceError::UnsupportedOperation {
                resource: Self::NAME,
                operation: "delete",
            },
        )?;

        let url = build_path(path.template, &ids);
        client
            .delete(&url)
            .await
            .map_err(|e| ResourceError::from_rest(e, Self::NAME, Some(&id_string)))?;

        Ok(())
    }

    /// Deletes this resource instance.
    ///
    /// # Arguments
    ///
    /// * `client` - The REST client to use
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidInput`] if the resource has no ID.
    /// Returns [`ResourceError::NotFound`] if the resource doesn't exist.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let account = Account::find(&client, "abc123".to_string()).await?;
    /// account.delete(&client).await?;
    /// ```
    async fn delete(&self, client: &RestClient) -> Result<(), ResourceError> {
        let id = self.get_id().ok_or_else(|| ResourceError::InvalidInput {
            resource: Self::NAME,
            reason: "cannot delete a resource without an id".to_string(),
        })?;

        Self::delete_by_id(client, id).await
    }

    /// Deletes a nested resource by parent ID and resource ID.
    ///
    /// # Arguments
    ///
    /// * `client` - The REST client to use
    /// * `parent_id_name` - The name of the parent ID parameter (e.g., `list_id`)
    /// * `parent_id` - The parent resource ID
    /// * `id` - The resource ID to delete
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the resource doesn't exist.
    /// Returns [`ResourceError::UnsupportedOperation`] if no matching path is declared.
    async fn delete_with_parent<ParentId: Display + Send>(
        client: &RestClient,
        parent_id_name: &str,
        parent_id: ParentId,
        id: Self::Id,
    ) -> Result<(), ResourceError> {
        let id_string = id.to_string();
        let mut ids: HashMap<&str, String> = HashMap::new();
        ids.insert(parent_id_name, parent_id.to_string());
        ids.insert("id", id_string.clone());

        let available_ids: Vec<&str> = ids.keys().copied().collect();
        let path = get_path(Self::PATHS, ResourceOperation::Delete, &available_ids).ok_or(
            ResourceError::UnsupportedOperation {
                resource: Self::NAME,
                operation: "delete",
            },
        )?;

        let url = build_path(path.template, &ids);
        client
            .delete(&url)
            .await
            .map_err(|e| ResourceError::from_rest(e, Self::NAME, Some(&id_string)))?;

        Ok(())
    }
}

/// Collection responses wrap their items in an `objects` key.
///
/// `objects` is an `Option` so an explicit `{"objects": null}` decodes the
/// same as a missing key.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: serde::Deserialize<'de>"))]
struct CollectionEnvelope<T> {
    #[serde(default)]
    objects: Option<Vec<T>>,
}

/// Decodes a single resource from a response body.
///
/// # Errors
///
/// Returns [`ResourceError::Decode`] if the body does not match the
/// resource shape.
pub fn decode_resource<T: DeserializeOwned>(
    body: serde_json::Value,
    resource: &'static str,
) -> Result<T, ResourceError> {
    serde_json::from_value(body).map_err(|source| ResourceError::Decode { resource, source })
}

/// Decodes a collection of resources from an `objects` envelope.
///
/// A null body, a missing `objects` key, or an explicitly null `objects`
/// key all decode as an empty collection.
///
/// # Errors
///
/// Returns [`ResourceError::Decode`] if the body does not match the
/// envelope shape.
pub fn decode_collection<T: DeserializeOwned>(
    body: serde_json::Value,
    resource: &'static str,
) -> Result<Vec<T>, ResourceError> {
    if body.is_null() {
        return Ok(Vec::new());
    }

    let envelope: CollectionEnvelope<T> = serde_json::from_value(body)
        .map_err(|source| ResourceError::Decode { resource, source })?;

    Ok(envelope.objects.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::{ResourceOperation, ResourcePath};
    use crate::HttpMethod;
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    // Test resource implementation
    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    #[serde(rename_all = "camelCase")]
    struct MockAccount {
        #[serde(skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        name: String,
    }

    impl RestResource for MockAccount {
        type Id = String;

        const NAME: &'static str = "Account";
        const PATHS: &'static [ResourcePath] = &[
            ResourcePath::new(
                HttpMethod::Get,
                ResourceOperation::Find,
                &["id"],
                "accounts/{id}",
            ),
            ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "accounts"),
            ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "accounts"),
            ResourcePath::new(
                HttpMethod::Delete,
                ResourceOperation::Delete,
                &["id"],
                "accounts/{id}",
            ),
        ];

        fn get_id(&self) -> Option<Self::Id> {
            self.id.clone()
        }
    }

    // Nested resource for testing
    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    #[serde(rename_all = "camelCase")]
    struct MockListItem {
        #[serde(skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        list_id: String,
    }

    impl RestResource for MockListItem {
        type Id = String;

        const NAME: &'static str = "ListItem";
        const PATHS: &'static [ResourcePath] = &[
            ResourcePath::new(
                HttpMethod::Get,
                ResourceOperation::Find,
                &["list_id", "id"],
                "lists/{list_id}/listitems/{id}",
            ),
            ResourcePath::new(
                HttpMethod::Get,
                ResourceOperation::All,
                &["list_id"],
                "lists/{list_id}/listitems",
            ),
            ResourcePath::new(
                HttpMethod::Get,
                ResourceOperation::FindBy,
                &["list_id"],
                "lists/{list_id}/listitems",
            ),
        ];

        fn get_id(&self) -> Option<Self::Id> {
            self.id.clone()
        }
    }

    #[test]
    fn test_resource_defines_name_and_paths() {
        assert_eq!(MockAccount::NAME, "Account");
        assert!(!MockAccount::PATHS.is_empty());
    }

    #[test]
    fn test_get_id_returns_none_for_new_resource() {
        let account = MockAccount {
            id: None,
            name: "New".to_string(),
        };
        assert!(account.get_id().is_none());
    }

    #[test]
    fn test_get_id_returns_some_for_existing_resource() {
        let account = MockAccount {
            id: Some("abc123".to_string()),
            name: "Existing".to_string(),
        };
        assert_eq!(account.get_id(), Some("abc123".to_string()));
    }

    #[test]
    fn test_nested_resource_path_selection() {
        // With list_id available, should select nested path for All
        let path = get_path(MockListItem::PATHS, ResourceOperation::All, &["list_id"]);
        assert!(path.is_some());
        assert_eq!(path.unwrap().template, "lists/{list_id}/listitems");

        // With both list_id and id, should select nested Find path
        let path = get_path(
            MockListItem::PATHS,
            ResourceOperation::Find,
            &["list_id", "id"],
        );
        assert!(path.is_some());
        assert_eq!(path.unwrap().template, "lists/{list_id}/listitems/{id}");

        // With only id, there is no Find path
        let path = get_path(MockListItem::PATHS, ResourceOperation::Find, &["id"]);
        assert!(path.is_none());
    }

    #[test]
    fn test_undeclared_operation_has_no_path() {
        // MockListItem declares no Delete path
        let path = get_path(MockListItem::PATHS, ResourceOperation::Delete, &["list_id", "id"]);
        assert!(path.is_none());
    }

    #[test]
    fn test_resource_trait_bounds() {
        fn assert_trait_bounds<T: RestResource>() {}
        assert_trait_bounds::<MockAccount>();
        assert_trait_bounds::<MockListItem>();
    }

    // === Decode Helper Tests ===

    #[test]
    fn test_decode_resource_parses_bare_object() {
        let body = json!({"id": "abc123", "name": "Test Account"});

        let account: MockAccount = decode_resource(body, "Account").unwrap();
        assert_eq!(account.id, Some("abc123".to_string()));
        assert_eq!(account.name, "Test Account");
    }

    #[test]
    fn test_decode_resource_error_names_resource() {
        let body = json!(["not", "an", "object"]);

        let result: Result<MockAccount, _> = decode_resource(body, "Account");
        assert!(matches!(
            result,
            Err(ResourceError::Decode {
                resource: "Account",
                ..
            })
        ));
    }

    #[test]
    fn test_decode_collection_parses_objects_envelope() {
        let body = json!({
            "objects": [
                {"id": "a1", "name": "First"},
                {"id": "a2", "name": "Second"}
            ]
        });

        let accounts: Vec<MockAccount> = decode_collection(body, "Account").unwrap();
        assert_eq!(accounts.len(), 2);
        assert_eq!(accounts[0].name, "First");
        assert_eq!(accounts[1].name, "Second");
    }

    #[test]
    fn test_decode_collection_empty_envelope() {
        let body = json!({"objects": []});

        let accounts: Vec<MockAccount> = decode_collection(body, "Account").unwrap();
        assert!(accounts.is_empty());
    }

    #[test]
    fn test_decode_collection_null_body_is_empty() {
        let accounts: Vec<MockAccount> =
            decode_collection(serde_json::Value::Null, "Account").unwrap();
        assert!(accounts.is_empty());
    }

    #[test]
    fn test_decode_collection_missing_objects_key_is_empty() {
        let body = json!({"size": 0});

        let accounts: Vec<MockAccount> = decode_collection(body, "Account").unwrap();
        assert!(accounts.is_empty());
    }

    #[test]
    fn test_decode_collection_null_objects_key_is_empty() {
        let body = json!({"objects": null});

        let accounts: Vec<MockAccount> = decode_collection(body, "Account").unwrap();
        assert!(accounts.is_empty());
    }

    #[test]
    fn test_decode_collection_malformed_items_error() {
        let body = json!({"objects": [{"name": 42}]});

        let result: Result<Vec<MockAccount>, _> = decode_collection(body, "Account");
        assert!(matches!(
            result,
            Err(ResourceError::Decode {
                resource: "Account",
                ..
            })
        ));
    }
}
