//! Typed SalesforceIQ REST resources.
//!
//! Each resource module pairs a wire struct with its
//! [`RestResource`](crate::rest::RestResource) path table. The structs
//! mirror the API's camelCase JSON; shared wire shapes (multi-valued
//! properties, custom field values, linked items, field schemas) live in
//! [`common`] and are re-exported here.
//!
//! # Available Resources
//!
//! ## Account Resource
//!
//! Accounts are the companies tracked in SalesforceIQ.
//!
//! ```rust,ignore
//! use salesforceiq_api::rest::resources::{Account, NewAccount};
//! use salesforceiq_api::rest::RestResource;
//!
//! let account = Account::create(&client, &NewAccount::new("Acme Corp")).await?;
//! let fetched = Account::find(&client, account.id.clone().unwrap()).await?;
//! let schema = Account::fields(&client).await?;
//! ```
//!
//! ## Contact Resource
//!
//! Contacts are people, with multi-valued properties.
//!
//! ```rust,ignore
//! use salesforceiq_api::rest::resources::{properties_from_pairs, Contact, NewContact};
//!
//! let properties = properties_from_pairs([
//!     ("name", "Jane Doe"),
//!     ("email", "jane@example.com"),
//! ]);
//! let contact = Contact::create(&client, &NewContact::new(properties)).await?;
//! let matches = Contact::find_by_email(&client, "jane@example.com").await?;
//! ```
//!
//! ## Event Resource
//!
//! Events are write-only activity-feed entries.
//!
//! ```rust,ignore
//! use salesforceiq_api::rest::resources::{Event, Participant};
//!
//! let mut event = Event::new("Intro call", "Discussed the Q4 rollout.");
//! event.participant_ids.push(Participant::email("jane@example.com"));
//! Event::create(&client, &event).await?;
//! ```
//!
//! ## List and ListItem Resources
//!
//! Lists are read-only containers; their rows are list items, addressed
//! through the owning list.
//!
//! ```rust,ignore
//! use salesforceiq_api::rest::resources::{List, ListItem, NewListItem};
//! use salesforceiq_api::rest::RestResource;
//!
//! let lists = List::all(&client, None).await?;
//! let list_id = lists[0].id.clone().unwrap();
//!
//! let item = ListItem::create(&client, &list_id, &NewListItem::default()).await?;
//! let page = ListItem::all(&client, &list_id, Some("_start=0&_limit=5")).await?;
//! ListItem::delete(&client, &list_id, &item.id.unwrap()).await?;
//! ```

pub mod common;

mod account;
mod contact;
mod event;
mod list;
mod list_item;

pub use account::{Account, AccountFieldSchema, NewAccount};
pub use common::{
    list_link_key, FieldOption, FieldValue, FieldValues, LinkedItem, LinkedItemIds, PropertyValue,
    SchemaField,
};
pub use contact::{properties_from_pairs, Contact, ContactProperties, NewContact};
pub use event::{Event, Participant};
pub use list::List;
pub use list_item::{ListItem, NewListItem};
