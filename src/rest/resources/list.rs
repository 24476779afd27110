//! List resource implementation.

use serde::{Deserialize, Serialize};

use crate::rest::{ResourceOperation, ResourcePath, RestResource};
use crate::HttpMethod;

use super::common::SchemaField;

/// A SalesforceIQ list, the workspace container for [`ListItem`]s.
///
/// Lists are managed in the SalesforceIQ UI; the API only reads them. Fetch
/// them with the [`RestResource::all`] default:
///
/// ```rust,ignore
/// let lists = List::all(&client, None).await?;
/// ```
///
/// [`ListItem`]: super::ListItem
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct List {
    /// Server-assigned object ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The list title as shown in the UI.
    pub title: String,
    /// The kind of objects the list holds, such as `"contact"` or
    /// `"account"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_type: Option<String>,
    /// The list's column schema. Field IDs here key the `field_values` of
    /// the list's items.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<SchemaField>>,
}

impl RestResource for List {
    type Id = String;

    const NAME: &'static str = "List";

    const PATHS: &'static [ResourcePath] =
        &[ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "lists")];

    fn get_id(&self) -> Option<Self::Id> {
        self.id.clone()
    }
}

impl List {
    /// Looks up a field in the list schema by its display name.
    #[must_use]
    pub fn field_by_name(&self, name: &str) -> Option<&SchemaField> {
        self.fields
            .as_deref()
            .and_then(|fields| fields.iter().find(|field| field.name == name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::get_path;
    use serde_json::json;

    #[test]
    fn test_list_deserializes_with_field_schema() {
        let list: List = serde_json::from_value(json!({
            "id": "5726274692317184",
            "title": "Customers",
            "listType": "account",
            "fields": [
                {
                    "id": "10",
                    "name": "Licenses",
                    "dataType": "List",
                    "isMultiSelect": false,
                    "listOptions": [
                        {"id": "0", "display": "Trial"},
                        {"id": "1", "display": "Paid"}
                    ]
                }
            ]
        }))
        .unwrap();

        assert_eq!(list.id.as_deref(), Some("5726274692317184"));
        assert_eq!(list.title, "Customers");
        assert_eq!(list.list_type.as_deref(), Some("account"));
        let fields = list.fields.as_deref().unwrap();
        assert_eq!(fields[0].name, "Licenses");
        assert_eq!(fields[0].list_options.len(), 2);
    }

    #[test]
    fn test_list_field_by_name_finds_schema_field() {
        let list: List = serde_json::from_value(json!({
            "id": "1",
            "title": "Customers",
            "fields": [{"id": "10", "name": "Licenses"}]
        }))
        .unwrap();

        assert_eq!(list.field_by_name("Licenses").unwrap().id, "10");
        assert!(list.field_by_name("Missing").is_none());
    }

    #[test]
    fn test_list_path_constants_are_correct() {
        let all_path = get_path(List::PATHS, ResourceOperation::All, &[]);
        assert_eq!(all_path.unwrap().template, "lists");
        assert_eq!(all_path.unwrap().http_method, HttpMethod::Get);

        assert_eq!(List::NAME, "List");
    }

    #[test]
    fn test_list_is_read_only() {
        assert!(get_path(List::PATHS, ResourceOperation::Find, &["id"]).is_none());
        assert!(get_path(List::PATHS, ResourceOperation::Create, &[]).is_none());
        assert!(get_path(List::PATHS, ResourceOperation::Update, &["id"]).is_none());
        assert!(get_path(List::PATHS, ResourceOperation::Delete, &["id"]).is_none());
    }

    #[test]
    fn test_list_get_id_returns_correct_value() {
        let list = List {
            id: Some("5726274692317184".to_string()),
            title: "Customers".to_string(),
            ..Default::default()
        };
        assert_eq!(list.get_id(), Some("5726274692317184".to_string()));
    }
}
