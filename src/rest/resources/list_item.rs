//! List item resource implementation.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::RestClient;
use crate::rest::resource::decode_resource;
use crate::rest::{
    build_path, get_path, ResourceError, ResourceOperation, ResourcePath, RestResource,
};
use crate::HttpMethod;

use super::common::{FieldValues, LinkedItemIds};

/// A row in a SalesforceIQ list.
///
/// List items only exist inside a list, so every operation takes the owning
/// list's ID. The inherent methods on this type ([`ListItem::find`],
/// [`ListItem::all`], [`ListItem::create`], [`ListItem::update`],
/// [`ListItem::delete`]) are the list-scoped entry points; they shadow the
/// single-ID [`RestResource`] defaults, which remain reachable as
/// `<ListItem as RestResource>::...` but fail with
/// [`ResourceError::UnsupportedOperation`] because no path matches a bare
/// `id`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListItem {
    /// Server-assigned object ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The ID of the list this item belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_id: Option<String>,
    /// The item's display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The account this item refers to, for account lists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    /// The contacts this item refers to, for contact lists.
    ///
    /// Always serialized, even when empty: updates are whole-object
    /// replaces, so an omitted collection and a cleared one must not look
    /// the same on the wire.
    #[serde(default)]
    pub contact_ids: Vec<String>,
    /// Custom column values keyed by the list's field IDs.
    ///
    /// Always serialized, even when empty (see `contact_ids`).
    #[serde(default)]
    pub field_values: FieldValues,
    /// Links to items in other lists, keyed by `list.<list_id>`.
    ///
    /// Always serialized, even when empty (see `contact_ids`).
    #[serde(default)]
    pub linked_item_ids: LinkedItemIds,
    /// Creation time, epoch milliseconds on the wire.
    #[serde(
        default,
        with = "chrono::serde::ts_milliseconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_date: Option<DateTime<Utc>>,
    /// Last modification time, epoch milliseconds on the wire.
    #[serde(
        default,
        with = "chrono::serde::ts_milliseconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub modified_date: Option<DateTime<Utc>>,
}

/// Payload for creating a list item.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewListItem {
    /// The item's display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The account this item refers to, for account lists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    /// The contacts this item refers to, for contact lists.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contact_ids: Vec<String>,
    /// Custom column values keyed by the list's field IDs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_values: Option<FieldValues>,
    /// Links to items in other lists, keyed by `list.<list_id>`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_item_ids: Option<LinkedItemIds>,
}

impl RestResource for ListItem {
    type Id = String;

    const NAME: &'static str = "ListItem";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Create,
            &["list_id"],
            "lists/{list_id}/listitems",
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
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["list_id", "id"],
            "lists/{list_id}/listitems/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Put,
            ResourceOperation::Update,
            &["list_id", "id"],
            "lists/{list_id}/listitems/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["list_id", "id"],
            "lists/{list_id}/listitems/{id}",
        ),
    ];

    fn get_id(&self) -> Option<Self::Id> {
        self.id.clone()
    }

    /// Deletes this item from its own list.
    ///
    /// Requires both `list_id` and `id` to be set; returns
    /// [`ResourceError::InvalidInput`] otherwise.
    async fn delete(&self, client: &RestClient) -> Result<(), ResourceError> {
        let list_id = self
            .list_id
            .clone()
            .ok_or_else(|| ResourceError::InvalidInput {
                resource: Self::NAME,
                reason: "cannot delete a list item without a list id".to_string(),
            })?;
        let id = self.get_id().ok_or_else(|| ResourceError::InvalidInput {
            resource: Self::NAME,
            reason: "cannot delete a resource without an id".to_string(),
        })?;

        Self::delete_with_parent(client, "list_id", list_id, id).await
    }
}

impl ListItem {
    /// Adds an item to a list.
    ///
    /// Sends `POST /v2/lists/{list_id}/listitems` and returns the created
    /// item with its server-assigned ID.
    ///
    /// # Arguments
    ///
    /// * `client` - The REST client to use for the request
    /// * `list_id` - The owning list's ID
    /// * `new_item` - The item payload
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidInput`] if `list_id` is empty or
    /// whitespace. No network call is made in that case.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let mut new_item = NewListItem::default();
    /// new_item.account_id = Some(account_id);
    /// let item = ListItem::create(&client, &list_id, &new_item).await?;
    /// ```
    pub async fn create(
        client: &RestClient,
        list_id: &str,
        new_item: &NewListItem,
    ) -> Result<Self, ResourceError> {
        if list_id.trim().is_empty() {
            return Err(ResourceError::InvalidInput {
                resource: Self::NAME,
                reason: "list id cannot be empty".to_string(),
            });
        }

        let path = get_path(Self::PATHS, ResourceOperation::Create, &["list_id"]).ok_or(
            ResourceError::UnsupportedOperation {
                resource: Self::NAME,
                operation: "create",
            },
        )?;

        let mut ids = HashMap::new();
        ids.insert("list_id", list_id);
        let rendered = build_path(path.template, &ids);

        let body = serde_json::to_value(new_item).map_err(|e| ResourceError::InvalidInput {
            resource: Self::NAME,
            reason: format!("could not serialize payload: {e}"),
        })?;

        let response = client
            .post(&rendered, body)
            .await
            .map_err(|e| ResourceError::from_rest(e, Self::NAME, None))?;

        decode_resource(response.body, Self::NAME)
    }

    /// Fetches items from a list.
    ///
    /// Sends `GET /v2/lists/{list_id}/listitems`. The optional `query` is a
    /// pre-encoded string appended verbatim, so pagination and
    /// modification-date windows go through untouched:
    ///
    /// ```rust,ignore
    /// let page = ListItem::all(&client, &list_id, Some("_start=0&_limit=5")).await?;
    /// assert!(page.len() <= 5);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// decoded.
    pub async fn all(
        client: &RestClient,
        list_id: &str,
        query: Option<&str>,
    ) -> Result<Vec<Self>, ResourceError> {
        Self::all_with_parent(client, "list_id", list_id, query).await
    }

    /// Fetches a single item from a list.
    ///
    /// Sends `GET /v2/lists/{list_id}/listitems/{item_id}`. A missing item
    /// maps to [`ResourceError::NotFound`].
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// decoded.
    pub async fn find(
        client: &RestClient,
        list_id: &str,
        item_id: &str,
    ) -> Result<Self, ResourceError> {
        Self::find_with_parent(client, "list_id", list_id, item_id.to_string()).await
    }

    /// Finds items in a list that reference a contact.
    ///
    /// Sends `GET /v2/lists/{list_id}/listitems?contact_ids=<contact_id>`.
    /// An empty result is a normal outcome, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// decoded.
    pub async fn find_by_contact(
        client: &RestClient,
        list_id: &str,
        contact_id: &str,
    ) -> Result<Vec<Self>, ResourceError> {
        let filter = format!("contact_ids={contact_id}");
        Self::find_by_with_parent(client, "list_id", list_id, &filter).await
    }

    /// Replaces an item in a list.
    ///
    /// Sends `PUT /v2/lists/{list_id}/listitems/{item_id}` with the full
    /// item as the body. The API treats this as a whole-object replace, so
    /// pass the complete item, not a patch.
    ///
    /// # Arguments
    ///
    /// * `client` - The REST client to use for the request
    /// * `list_id` - The owning list's ID
    /// * `item_id` - The item's ID
    /// * `item` - The full replacement item
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// decoded.
    pub async fn update(
        client: &RestClient,
        list_id: &str,
        item_id: &str,
        item: &Self,
    ) -> Result<Self, ResourceError> {
        let path = get_path(Self::PATHS, ResourceOperation::Update, &["list_id", "id"]).ok_or(
            ResourceError::UnsupportedOperation {
                resource: Self::NAME,
                operation: "update",
            },
        )?;

        let mut ids = HashMap::new();
        ids.insert("list_id", list_id);
        ids.insert("id", item_id);
        let rendered = build_path(path.template, &ids);

        let body = serde_json::to_value(item).map_err(|e| ResourceError::InvalidInput {
            resource: Self::NAME,
            reason: format!("could not serialize payload: {e}"),
        })?;

        let response = client
            .put(&rendered, body)
            .await
            .map_err(|e| ResourceError::from_rest(e, Self::NAME, Some(item_id)))?;

        decode_resource(response.body, Self::NAME)
    }

    /// Removes an item from a list.
    ///
    /// Sends `DELETE /v2/lists/{list_id}/listitems/{item_id}`. Deleting an
    /// item that is already gone maps to [`ResourceError::NotFound`].
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn delete(
        client: &RestClient,
        list_id: &str,
        item_id: &str,
    ) -> Result<(), ResourceError> {
        Self::delete_with_parent(client, "list_id", list_id, item_id.to_string()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiKey, ApiSecretKey, IqConfig};
    use crate::rest::get_path;
    use crate::rest::resources::{list_link_key, FieldValue, LinkedItem};
    use serde_json::json;

    fn create_test_client() -> RestClient {
        let config = IqConfig::builder()
            .api_key(ApiKey::new("test-key").unwrap())
            .api_secret_key(ApiSecretKey::new("test-secret").unwrap())
            .build()
            .unwrap();
        RestClient::new(&config)
    }

    #[test]
    fn test_new_list_item_serializes_field_values_and_links() {
        let mut field_values = FieldValues::new();
        field_values.insert("10".to_string(), FieldValue::single("1"));

        let mut linked_item_ids = LinkedItemIds::new();
        linked_item_ids.insert(
            list_link_key("5726274692317184"),
            LinkedItem::single("5663847046046720"),
        );

        let new_item = NewListItem {
            account_id: Some("5629499534213120".to_string()),
            field_values: Some(field_values),
            linked_item_ids: Some(linked_item_ids),
            ..Default::default()
        };

        let json = serde_json::to_value(&new_item).unwrap();

        assert_eq!(
            json,
            json!({
                "accountId": "5629499534213120",
                "fieldValues": {"10": [{"raw": "1"}]},
                "linkedItemIds": {
                    "list.5726274692317184": [{"itemId": "5663847046046720"}]
                }
            })
        );
    }

    #[test]
    fn test_list_item_deserializes_full_wire_shape() {
        let item: ListItem = serde_json::from_value(json!({
            "id": "5681034041491456",
            "listId": "5726274692317184",
            "name": "Test - Sigma Software",
            "accountId": "5629499534213120",
            "contactIds": ["5644406560391168"],
            "fieldValues": {"10": [{"raw": "1"}]},
            "linkedItemIds": {"list.111": [{"itemId": "222"}]},
            "createdDate": 1_443_736_521_324_i64,
            "modifiedDate": 1_443_736_599_000_i64
        }))
        .unwrap();

        assert_eq!(item.id.as_deref(), Some("5681034041491456"));
        assert_eq!(item.list_id.as_deref(), Some("5726274692317184"));
        assert_eq!(item.contact_ids, vec!["5644406560391168".to_string()]);
        assert_eq!(item.field_values["10"][0].raw, "1");
        assert_eq!(item.linked_item_ids["list.111"][0].item_id, "222");
        assert_eq!(
            item.created_date.unwrap().timestamp_millis(),
            1_443_736_521_324
        );
        assert_eq!(
            item.modified_date.unwrap().timestamp_millis(),
            1_443_736_599_000
        );
    }

    #[test]
    fn test_list_item_always_serializes_collections() {
        let item = ListItem {
            name: Some("Bare".to_string()),
            ..Default::default()
        };

        // Empty collections stay on the wire so a replace can clear them;
        // only the optional scalars are omitted.
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            json!({
                "name": "Bare",
                "contactIds": [],
                "fieldValues": {},
                "linkedItemIds": {}
            })
        );
    }

    #[test]
    fn test_list_item_path_constants_are_correct() {
        let create_path = get_path(ListItem::PATHS, ResourceOperation::Create, &["list_id"]);
        assert_eq!(create_path.unwrap().template, "lists/{list_id}/listitems");
        assert_eq!(create_path.unwrap().http_method, HttpMethod::Post);

        let all_path = get_path(ListItem::PATHS, ResourceOperation::All, &["list_id"]);
        assert_eq!(all_path.unwrap().template, "lists/{list_id}/listitems");

        let find_path = get_path(ListItem::PATHS, ResourceOperation::Find, &["list_id", "id"]);
        assert_eq!(
            find_path.unwrap().template,
            "lists/{list_id}/listitems/{id}"
        );

        let update_path = get_path(ListItem::PATHS, ResourceOperation::Update, &["list_id", "id"]);
        assert_eq!(update_path.unwrap().http_method, HttpMethod::Put);

        let delete_path = get_path(ListItem::PATHS, ResourceOperation::Delete, &["list_id", "id"]);
        assert_eq!(delete_path.unwrap().http_method, HttpMethod::Delete);
    }

    #[test]
    fn test_list_item_paths_require_the_list_id() {
        assert!(get_path(ListItem::PATHS, ResourceOperation::Find, &["id"]).is_none());
        assert!(get_path(ListItem::PATHS, ResourceOperation::Delete, &["id"]).is_none());
        assert!(get_path(ListItem::PATHS, ResourceOperation::All, &[]).is_none());
    }

    #[tokio::test]
    async fn test_create_rejects_empty_list_id_before_any_request() {
        let client = create_test_client();

        let result = ListItem::create(&client, "", &NewListItem::default()).await;

        assert!(matches!(
            result,
            Err(ResourceError::InvalidInput {
                resource: "ListItem",
                ..
            })
        ));
    }

    #[tokio::test]
    async fn test_instance_delete_requires_list_id_and_id() {
        let client = create_test_client();

        let missing_list = ListItem {
            id: Some("5681034041491456".to_string()),
            ..Default::default()
        };
        let result = RestResource::delete(&missing_list, &client).await;
        assert!(matches!(result, Err(ResourceError::InvalidInput { .. })));

        let missing_id = ListItem {
            list_id: Some("5726274692317184".to_string()),
            ..Default::default()
        };
        let result = RestResource::delete(&missing_id, &client).await;
        assert!(matches!(result, Err(ResourceError::InvalidInput { .. })));
    }
}
