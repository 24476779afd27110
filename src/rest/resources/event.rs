//! Event resource implementation.

use serde::{Deserialize, Serialize};

use crate::clients::RestClient;
use crate::rest::{get_path, ResourceError, ResourceOperation, ResourcePath, RestResource};
use crate::HttpMethod;

/// A participant in an event, identified by address type and value.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Participant {
    /// The address type, `"email"` for email participants.
    #[serde(rename = "type")]
    pub kind: String,
    /// The address value.
    pub value: String,
}

impl Participant {
    /// Creates an email participant.
    #[must_use]
    pub fn email(address: impl Into<String>) -> Self {
        Self {
            kind: "email".to_string(),
            value: address.into(),
        }
    }
}

/// An activity-feed event, such as an email or a meeting.
///
/// Events are write-only: the API accepts them with `PUT /v2/events` and
/// answers `204 No Content`. They cannot be fetched back, so [`Event`]
/// declares no read or delete paths.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Short event summary.
    pub subject: String,
    /// Event body text.
    pub body: String,
    /// The contacts involved in the event.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub participant_ids: Vec<Participant>,
}

impl Event {
    /// Creates an event with the given subject and body.
    #[must_use]
    pub fn new(subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            body: body.into(),
            participant_ids: Vec::new(),
        }
    }

    /// Records an event in the activity feed.
    ///
    /// Sends `PUT /v2/events`. The API returns `204 No Content`, so there is
    /// no created object to return.
    ///
    /// # Arguments
    ///
    /// * `client` - The REST client to use for the request
    /// * `event` - The event payload
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let mut event = Event::new("Intro call", "Discussed the Q4 rollout.");
    /// event.participant_ids.push(Participant::email("jane@example.com"));
    /// Event::create(&client, &event).await?;
    /// ```
    pub async fn create(client: &RestClient, event: &Self) -> Result<(), ResourceError> {
        let path = get_path(Self::PATHS, ResourceOperation::Create, &[]).ok_or(
            ResourceError::UnsupportedOperation {
                resource: Self::NAME,
                operation: "create",
            },
        )?;

        let body = serde_json::to_value(event).map_err(|e| ResourceError::InvalidInput {
            resource: Self::NAME,
            reason: format!("could not serialize payload: {e}"),
        })?;

        client
            .put(path.template, body)
            .await
            .map_err(|e| ResourceError::from_rest(e, Self::NAME, None))?;

        Ok(())
    }
}

impl RestResource for Event {
    type Id = String;

    const NAME: &'static str = "Event";

    const PATHS: &'static [ResourcePath] =
        &[ResourcePath::new(HttpMethod::Put, ResourceOperation::Create, &[], "events")];

    fn get_id(&self) -> Option<Self::Id> {
        None
    }
}
