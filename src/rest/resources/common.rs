//! Shared value types used across resources.
//!
//! SalesforceIQ wraps most scalar attributes in single-key objects: contact
//! properties are lists of `{"value": ...}`, list-item field values are lists
//! of `{"raw": ...}` keyed by numeric-string field IDs, and cross-list links
//! are lists of `{"itemId": ...}` keyed by `list.<listId>`. The types here
//! model those wrappers once so every resource uses the same shapes.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A single value of a multi-valued attribute, e.g. one email address.
///
/// Contact properties are maps from attribute name to `Vec<PropertyValue>`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PropertyValue {
    /// The attribute value.
    pub value: String,
}

impl PropertyValue {
    /// Creates a new property value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Wraps a single value in the one-element list the API expects.
    ///
    /// # Example
    ///
    /// ```rust
    /// use salesforceiq_api::rest::resources::PropertyValue;
    ///
    /// let values = PropertyValue::single("bob@example.com");
    /// assert_eq!(values.len(), 1);
    /// assert_eq!(values[0].value, "bob@example.com");
    /// ```
    #[must_use]
    pub fn single(value: impl Into<String>) -> Vec<Self> {
        vec![Self::new(value)]
    }
}

/// A single raw field value on a list item.
///
/// Field values are maps from numeric-string field IDs to `Vec<FieldValue>`,
/// ordered by the API.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct FieldValue {
    /// The raw field value.
    pub raw: String,
}

impl FieldValue {
    /// Creates a new raw field value.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// Wraps a single raw value in the one-element list the API expects.
    #[must_use]
    pub fn single(raw: impl Into<String>) -> Vec<Self> {
        vec![Self::new(raw)]
    }
}

/// Custom field values keyed by numeric-string field ID.
///
/// ```json
/// { "10": [ { "raw": "5629499534213120" } ] }
/// ```
pub type FieldValues = HashMap<String, Vec<FieldValue>>;

/// A reference to an item in another list.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LinkedItem {
    /// The ID of the linked item.
    pub item_id: String,
}

impl LinkedItem {
    /// Creates a new linked-item reference.
    #[must_use]
    pub fn new(item_id: impl Into<String>) -> Self {
        Self {
            item_id: item_id.into(),
        }
    }

    /// Wraps a single reference in the one-element list the API expects.
    #[must_use]
    pub fn single(item_id: impl Into<String>) -> Vec<Self> {
        vec![Self::new(item_id)]
    }
}

/// Cross-list links keyed by `list.<listId>`.
///
/// ```json
/// { "list.abc123": [ { "itemId": "def456" } ] }
/// ```
///
/// Use [`list_link_key`] to build the map keys.
pub type LinkedItemIds = HashMap<String, Vec<LinkedItem>>;

/// Builds the `linkedItemIds` map key for items in the given list.
///
/// # Example
///
/// ```rust
/// use salesforceiq_api::rest::resources::list_link_key;
///
/// assert_eq!(list_link_key("abc123"), "list.abc123");
/// ```
#[must_use]
pub fn list_link_key(list_id: &str) -> String {
    format!("list.{list_id}")
}

/// One choice of a select-type custom field.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct FieldOption {
    /// The option ID referenced by raw field values.
    pub id: String,
    /// The human-readable label.
    pub display: String,
}

/// Schema metadata for one custom field.
///
/// Returned by the account field-schema endpoint and embedded in lists.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SchemaField {
    /// The field ID; raw values reference fields by this ID.
    pub id: String,
    /// The field display name.
    pub name: String,
    /// The field data type (e.g., "Text", "List").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,
    /// Whether the field accepts multiple values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_multi_select: Option<bool>,
    /// The choices for select-type fields.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub list_options: Vec<FieldOption>,
}
