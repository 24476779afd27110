//! REST resource infrastructure for the SalesforceIQ API.
//!
//! This module provides the foundational infrastructure for REST resources:
//!
//! - **[`RestResource`] trait**: A standardized interface over each
//!   resource's supported operations
//! - **Path tables**: [`ResourcePath`] entries mapping operations to URL
//!   templates, with nested-resource support
//! - **[`ResourceError`]**: Semantic error types for resource operations
//!
//! # Overview
//!
//! Each resource declares a table of [`ResourcePath`] entries. The trait
//! defaults look up the requested [`ResourceOperation`] in that table,
//! render the template, and issue exactly one HTTP request through
//! [`RestClient`](crate::clients::RestClient). An operation a resource does
//! not declare fails with [`ResourceError::UnsupportedOperation`] before
//! anything goes on the wire, so the supported-operation matrix lives in
//! one place per resource.
//!
//! # Example: Using a Resource
//!
//! ```rust,ignore
//! use salesforceiq_api::rest::RestResource;
//! use salesforceiq_api::rest::resources::{Account, NewAccount};
//! use salesforceiq_api::{IqConfig, RestClient};
//!
//! let config = IqConfig::builder()
//!     .api_key(api_key)
//!     .api_secret_key(api_secret_key)
//!     .build()?;
//! let client = RestClient::new(&config);
//!
//! // Create, then read back through the trait defaults
//! let account = Account::create(&client, &NewAccount::new("Acme Corp")).await?;
//! let id = account.id.clone().unwrap();
//! let fetched = Account::find(&client, id).await?;
//!
//! // Collection reads take an optional pre-encoded query string
//! let page = Account::all(&client, Some("_start=0&_limit=50")).await?;
//!
//! // Delete through the instance
//! fetched.delete(&client).await?;
//! ```
//!
//! # Key Types
//!
//! - [`ResourceError`]: Error types for resource operations
//! - [`ResourcePath`] and [`ResourceOperation`]: Path building infrastructure
//! - [`RestResource`]: Trait defining the operations a resource supports
//! - [`resources`]: The typed resource implementations (Account, Contact,
//!   Event, List, `ListItem`)

mod errors;
mod path;
mod resource;

pub mod resources;

// Public exports
pub use errors::ResourceError;
pub use path::{build_path, get_path, ResourceOperation, ResourcePath};
pub use resource::{decode_collection, decode_resource, RestResource};
