//! Configuration types for the SalesforceIQ API SDK.
//!
//! This module provides the core configuration types used to initialize
//! and configure the SDK for API communication with SalesforceIQ.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`IqConfig`]: The main configuration struct holding all SDK settings
//! - [`IqConfigBuilder`]: A builder for constructing [`IqConfig`] instances
//! - [`ApiKey`]: A validated API key newtype
//! - [`ApiSecretKey`]: A validated API secret key newtype with masked debug output
//! - [`ApiUrl`]: A validated API base URL
//!
//! # Example
//!
//! ```rust
//! use salesforceiq_api::{IqConfig, ApiKey, ApiSecretKey};
//!
//! let config = IqConfig::builder()
//!     .api_key(ApiKey::new("my-api-key").unwrap())
//!     .api_secret_key(ApiSecretKey::new("my-secret").unwrap())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{ApiKey, ApiSecretKey, ApiUrl};

use crate::error::ConfigError;

/// Configuration for the SalesforceIQ API SDK.
///
/// This struct holds all configuration needed for SDK operations: the
/// two-legged API credentials and the base URL of the provider.
///
/// # Thread Safety
///
/// `IqConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use salesforceiq_api::{IqConfig, ApiKey, ApiSecretKey};
///
/// let config = IqConfig::builder()
///     .api_key(ApiKey::new("your-api-key").unwrap())
///     .api_secret_key(ApiSecretKey::new("your-secret").unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(config.api_url().as_ref(), "https://api.salesforceiq.com");
/// ```
#[derive(Clone, Debug)]
pub struct IqConfig {
    api_key: ApiKey,
    api_secret_key: ApiSecretKey,
    api_url: ApiUrl,
    user_agent_prefix: Option<String>,
}

impl IqConfig {
    /// Creates a new builder for constructing an `IqConfig`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use salesforceiq_api::{IqConfig, ApiKey, ApiSecretKey};
    ///
    /// let config = IqConfig::builder()
    ///     .api_key(ApiKey::new("key").unwrap())
    ///     .api_secret_key(ApiSecretKey::new("secret").unwrap())
    ///     .build()
    ///     .unwrap();
    /// ```
    #[must_use]
    pub fn builder() -> IqConfigBuilder {
        IqConfigBuilder::new()
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the API secret key.
    #[must_use]
    pub const fn api_secret_key(&self) -> &ApiSecretKey {
        &self.api_secret_key
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn api_url(&self) -> &ApiUrl {
        &self.api_url
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify IqConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<IqConfig>();
};

/// Builder for constructing [`IqConfig`] instances.
///
/// This builder provides a fluent API for configuring the SDK. Required fields
/// are `api_key` and `api_secret_key`. All other fields have sensible defaults.
///
/// # Defaults
///
/// - `api_url`: the production API (`https://api.salesforceiq.com`)
/// - `user_agent_prefix`: `None`
///
/// # Example
///
/// ```rust
/// use salesforceiq_api::{IqConfig, ApiKey, ApiSecretKey, ApiUrl};
///
/// let config = IqConfig::builder()
///     .api_key(ApiKey::new("key").unwrap())
///     .api_secret_key(ApiSecretKey::new("secret").unwrap())
///     .api_url(ApiUrl::new("https://api.example.test").unwrap())
///     .user_agent_prefix("MyApp/1.0")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct IqConfigBuilder {
    api_key: Option<ApiKey>,
    api_secret_key: Option<ApiSecretKey>,
    api_url: Option<ApiUrl>,
    user_agent_prefix: Option<String>,
}

impl IqConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the API secret key (required).
    #[must_use]
    pub fn api_secret_key(mut self, key: ApiSecretKey) -> Self {
        self.api_secret_key = Some(key);
        self
    }

    /// Sets the API base URL.
    ///
    /// Defaults to the production API. Override this to point the client at
    /// a mock server in tests.
    #[must_use]
    pub fn api_url(mut self, url: ApiUrl) -> Self {
        self.api_url = Some(url);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`IqConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_key` or
    /// `api_secret_key` are not set.
    pub fn build(self) -> Result<IqConfig, ConfigError> {
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;
        let api_secret_key = self
            .api_secret_key
            .ok_or(ConfigError::MissingRequiredField {
                field: "api_secret_key",
            })?;

        Ok(IqConfig {
            api_key,
            api_secret_key,
            api_url: self.api_url.unwrap_or_default(),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
