//! Account resource implementation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::RestClient;
use crate::rest::resource::decode_resource;
use crate::rest::{get_path, ResourceError, ResourceOperation, ResourcePath, RestResource};
use crate::HttpMethod;

use super::common::{FieldValues, SchemaField};

/// A company or organization tracked in SalesforceIQ.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Server-assigned object ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The account name.
    pub name: String,
    /// Custom field values keyed by field ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_values: Option<FieldValues>,
    /// Last modification time, epoch milliseconds on the wire.
    #[serde(
        default,
        with = "chrono::serde::ts_milliseconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub modified_date: Option<DateTime<Utc>>,
}

/// Payload for creating an account.
///
/// The API requires a non-empty name; [`Account::create`] rejects blank
/// names before any network call.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewAccount {
    /// The account name. Must not be empty.
    pub name: String,
    /// Custom field values keyed by field ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_values: Option<FieldValues>,
}

impl NewAccount {
    /// Creates a new account payload with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_values: None,
        }
    }
}

/// The account custom-field schema.
///
/// Returned by [`Account::fields`]; the wire shape is `{"fields": [...]}`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AccountFieldSchema {
    /// The custom fields defined for accounts.
    #[serde(default)]
    pub fields: Vec<SchemaField>,
}

impl RestResource for Account {
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

impl Account {
    /// Creates an account.
    ///
    /// Sends `POST /v2/accounts` with the payload as a bare JSON object and
    /// returns the created account with its server-assigned ID.
    ///
    /// # Arguments
    ///
    /// * `client` - The REST client to use for the request
    /// * `new_account` - The account payload
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidInput`] if the name is empty or
    /// whitespace. No network call is made in that case.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let account = Account::create(&client, &NewAccount::new("Test - Sigma Software")).await?;
    /// assert!(account.id.is_some());
    /// ```
    pub async fn create(
        client: &RestClient,
        new_account: &NewAccount,
    ) -> Result<Self, ResourceError> {
        if new_account.name.trim().is_empty() {
            return Err(ResourceError::InvalidInput {
                resource: Self::NAME,
                reason: "name cannot be empty".to_string(),
            });
        }

        let path = get_path(Self::PATHS, ResourceOperation::Create, &[]).ok_or(
            ResourceError::UnsupportedOperation {
                resource: Self::NAME,
                operation: "create",
            },
        )?;

        let body =
            serde_json::to_value(new_account).map_err(|e| ResourceError::InvalidInput {
                resource: Self::NAME,
                reason: format!("could not serialize payload: {e}"),
            })?;

        let response = client
            .post(path.template, body)
            .await
            .map_err(|e| ResourceError::from_rest(e, Self::NAME, None))?;

        decode_resource(response.body, Self::NAME)
    }

    /// Fetches the account custom-field schema.
    ///
    /// Sends `GET /v2/accounts/fields`.
    ///
    /// # Arguments
    ///
    /// * `client` - The REST client to use for the request
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] for HTTP-level errors and
    /// [`ResourceError::Decode`] if the response does not match the schema
    /// shape.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let schema = Account::fields(&client).await?;
    /// for field in &schema.fields {
    ///     println!("{}: {}", field.id, field.name);
    /// }
    /// ```
    pub async fn fields(client: &RestClient) -> Result<AccountFieldSchema, ResourceError> {
        let response = client
            .get("accounts/fields", None)
            .await
            .map_err(|e| ResourceError::from_rest(e, Self::NAME, None))?;

        decode_resource(response.body, Self::NAME)
    }
}
