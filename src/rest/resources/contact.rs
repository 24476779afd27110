//! Contact resource implementation.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::RestClient;
use crate::rest::resource::decode_resource;
use crate::rest::{get_path, ResourceError, ResourceOperation, ResourcePath, RestResource};
use crate::HttpMethod;

use super::common::PropertyValue;

/// Multi-valued contact properties keyed by attribute name.
///
/// Every property is a list of [`PropertyValue`] wrappers on the wire, even
/// when a contact has a single name or email. The provider uses standard
/// keys (`name`, `email`, `phone`, `address`, `company`, `title`) but the
/// key set is open; provider-defined keys outside the standard set pass
/// through unchanged in both directions.
///
/// ```json
/// { "name": [ { "value": "Jane Doe" } ], "email": [ { "value": "jane@example.com" } ] }
/// ```
pub type ContactProperties = HashMap<String, Vec<PropertyValue>>;

/// Builds [`ContactProperties`] from flat key/value pairs.
///
/// Each value is wrapped in the one-element list the API expects; repeated
/// keys append, so multi-valued properties can be given pair by pair.
///
/// # Example
///
/// ```rust
/// use salesforceiq_api::rest::resources::properties_from_pairs;
///
/// let properties = properties_from_pairs([
///     ("name", "Jane Doe"),
///     ("email", "jane@example.com"),
///     ("email", "jane@work.example.com"),
/// ]);
///
/// assert_eq!(properties["name"][0].value, "Jane Doe");
/// assert_eq!(properties["email"].len(), 2);
/// ```
#[must_use]
pub fn properties_from_pairs<K, V, I>(pairs: I) -> ContactProperties
where
    K: Into<String>,
    V: Into<String>,
    I: IntoIterator<Item = (K, V)>,
{
    let mut properties = ContactProperties::new();
    for (key, value) in pairs {
        properties
            .entry(key.into())
            .or_default()
            .push(PropertyValue::new(value));
    }
    properties
}

/// A person tracked in SalesforceIQ.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Server-assigned object ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The contact's properties.
    #[serde(default)]
    pub properties: ContactProperties,
    /// Last modification time, epoch milliseconds on the wire.
    #[serde(
        default,
        with = "chrono::serde::ts_milliseconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub modified_date: Option<DateTime<Utc>>,
}

/// Payload for creating a contact.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewContact {
    /// The contact's properties.
    pub properties: ContactProperties,
}

impl NewContact {
    /// Creates a new contact payload with the given properties.
    #[must_use]
    pub fn new(properties: ContactProperties) -> Self {
        Self { properties }
    }
}

impl RestResource for Contact {
    type Id = String;

    const NAME: &'static str = "Contact";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "contacts"),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::FindBy, &[], "contacts"),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["id"],
            "contacts/{id}",
        ),
    ];

    fn get_id(&self) -> Option<Self::Id> {
        self.id.clone()
    }
}

impl Contact {
    /// Creates a contact.
    ///
    /// Sends `POST /v2/contacts` with the payload as a bare JSON object and
    /// returns the created contact with its server-assigned ID.
    ///
    /// # Arguments
    ///
    /// * `client` - The REST client to use for the request
    /// * `new_contact` - The contact payload
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// decoded.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let mut properties = ContactProperties::new();
    /// properties.insert("name".to_string(), PropertyValue::single("Jane Doe"));
    /// properties.insert("email".to_string(), PropertyValue::single("jane@example.com"));
    /// let contact = Contact::create(&client, &NewContact::new(properties)).await?;
    /// ```
    pub async fn create(
        client: &RestClient,
        new_contact: &NewContact,
    ) -> Result<Self, ResourceError> {
        let path = get_path(Self::PATHS, ResourceOperation::Create, &[]).ok_or(
            ResourceError::UnsupportedOperation {
                resource: Self::NAME,
                operation: "create",
            },
        )?;

        let body =
            serde_json::to_value(new_contact).map_err(|e| ResourceError::InvalidInput {
                resource: Self::NAME,
                reason: format!("could not serialize payload: {e}"),
            })?;

        let response = client
            .post(path.template, body)
            .await
            .map_err(|e| ResourceError::from_rest(e, Self::NAME, None))?;

        decode_resource(response.body, Self::NAME)
    }

    /// Finds contacts by exact email address.
    ///
    /// Sends `GET /v2/contacts?properties.email=<email>` with the address
    /// percent-encoded. A contact whose email is not registered yields an
    /// empty vector, not an error.
    ///
    /// # Arguments
    ///
    /// * `client` - The REST client to use for the request
    /// * `email` - The email address to match
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// decoded.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let matches = Contact::find_by_email(&client, "jane@example.com").await?;
    /// if matches.is_empty() {
    ///     println!("no contact with that address");
    /// }
    /// ```
    pub async fn find_by_email(
        client: &RestClient,
        email: &str,
    ) -> Result<Vec<Self>, ResourceError> {
        let filter = format!("properties.email={}", urlencoding::encode(email));
        Self::find_by(client, &filter).await
    }
}
