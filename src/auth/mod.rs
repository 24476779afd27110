//! Authentication for the SalesforceIQ API SDK.
//!
//! SalesforceIQ uses two-legged authentication: a credential is derived
//! from an API key/secret pair alone, with no user-authorization step. The
//! signer stamps each outgoing request with a signed header set.
//!
//! # Overview
//!
//! - [`RequestSigner`]: computes per-request credentials from the configured
//!   key and secret
//! - [`RequestCredential`]: one signed credential (key, timestamp, nonce,
//!   signature) ready to attach as headers
//!
//! # Example
//!
//! ```rust
//! use salesforceiq_api::auth::RequestSigner;
//! use salesforceiq_api::{ApiKey, ApiSecretKey};
//!
//! let signer = RequestSigner::new(
//!     ApiKey::new("my-key").unwrap(),
//!     ApiSecretKey::new("my-secret").unwrap(),
//! );
//!
//! // Deterministic signing given explicit timestamp and nonce
//! let a = signer.credential_at("get", "/v2/lists", 1443736521324, "nonce");
//! let b = signer.credential_at("get", "/v2/lists", 1443736521324, "nonce");
//! assert_eq!(a, b);
//! ```

mod signer;

pub use signer::{
    compute_signature, RequestCredential, RequestSigner, API_KEY_HEADER, NONCE_HEADER,
    SIGNATURE_HEADER, TIMESTAMP_HEADER,
};
