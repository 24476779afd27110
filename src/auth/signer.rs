//! Request signing for the SalesforceIQ API.
//!
//! Every API call carries a per-request credential derived from the API key
//! and secret. The credential covers the HTTP method, the request path, a
//! millisecond timestamp, and a random nonce, so a captured request cannot
//! be replayed.
//!
//! # Canonical message
//!
//! The signed message is four lines joined by `\n`:
//!
//! ```text
//! {METHOD}      uppercase HTTP method
//! {PATH}        the path as sent on the wire, query string excluded
//! {TIMESTAMP}   epoch milliseconds
//! {NONCE}       15-character alphanumeric string
//! ```
//!
//! The signature is the lowercase hex HMAC-SHA256 of that message keyed by
//! the API secret.
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
//! let credential = signer.credential("get", "/v2/accounts");
//! assert_eq!(credential.signature.len(), 64);
//! assert_eq!(credential.nonce.len(), 15);
//! ```

use chrono::Utc;
use hmac::{Hmac, Mac};
use rand::distributions::Alphanumeric;
use rand::Rng;
use sha2::Sha256;

use crate::config::{ApiKey, ApiSecretKey, IqConfig};

type HmacSha256 = Hmac<Sha256>;

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "X-Api-Key";
/// Header carrying the signing timestamp (epoch milliseconds).
pub const TIMESTAMP_HEADER: &str = "X-Api-Timestamp";
/// Header carrying the request nonce.
pub const NONCE_HEADER: &str = "X-Api-Nonce";
/// Header carrying the hex HMAC-SHA256 signature.
pub const SIGNATURE_HEADER: &str = "X-Api-Signature";

/// Computes an HMAC-SHA256 signature for the given message.
///
/// The signature is returned as a lowercase hexadecimal string.
///
/// # Arguments
///
/// * `message` - The message to sign (the canonical request string)
/// * `secret` - The secret key (API secret key)
///
/// # Example
///
/// ```rust
/// use salesforceiq_api::auth::compute_signature;
///
/// let sig = compute_signature("test-message", "secret-key");
/// assert_eq!(sig.len(), 64); // SHA256 produces 32 bytes = 64 hex chars
/// ```
#[must_use]
#[allow(clippy::missing_panics_doc)] // HMAC accepts any key size, so this never panics
pub fn compute_signature(message: &str, secret: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(message.as_bytes());
    let result = mac.finalize();
    hex::encode(result.into_bytes())
}

/// A per-request authentication credential.
///
/// Produced by [`RequestSigner`] and attached to the outgoing request as
/// four headers. The same inputs always produce the same credential; the
/// timestamp and nonce make each dispatched credential single-use.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestCredential {
    /// The API key identifying the caller.
    pub api_key: String,
    /// Signing time in epoch milliseconds.
    pub timestamp: i64,
    /// Random alphanumeric nonce.
    pub nonce: String,
    /// Lowercase hex HMAC-SHA256 over the canonical message.
    pub signature: String,
}

impl RequestCredential {
    /// Returns the credential as header name/value pairs.
    #[must_use]
    pub fn headers(&self) -> [(&'static str, String); 4] {
        [
            (API_KEY_HEADER, self.api_key.clone()),
            (TIMESTAMP_HEADER, self.timestamp.to_string()),
            (NONCE_HEADER, self.nonce.clone()),
            (SIGNATURE_HEADER, self.signature.clone()),
        ]
    }
}

/// Signs outgoing requests with the configured API credentials.
///
/// The signer holds validated credentials; construction of [`ApiKey`] and
/// [`ApiSecretKey`] already rejects empty values, so a signer can only
/// exist with usable credentials.
///
/// Credential computation is a pure function of its inputs: no network, no
/// mutable state. [`RequestSigner::credential`] stamps the current time and
/// a fresh nonce; [`RequestSigner::credential_at`] takes both explicitly
/// and is fully deterministic.
#[derive(Clone, Debug)]
pub struct RequestSigner {
    api_key: ApiKey,
    api_secret_key: ApiSecretKey,
}

impl RequestSigner {
    /// Length of generated nonces.
    const NONCE_LENGTH: usize = 15;

    /// Creates a signer from validated credentials.
    #[must_use]
    pub const fn new(api_key: ApiKey, api_secret_key: ApiSecretKey) -> Self {
        Self {
            api_key,
            api_secret_key,
        }
    }

    /// Creates a signer from an [`IqConfig`].
    #[must_use]
    pub fn from_config(config: &IqConfig) -> Self {
        Self::new(config.api_key().clone(), config.api_secret_key().clone())
    }

    /// Signs a request with the current time and a fresh nonce.
    ///
    /// `path` must be the path as sent on the wire (base path included,
    /// query string excluded). `method` is case-insensitive.
    #[must_use]
    pub fn credential(&self, method: &str, path: &str) -> RequestCredential {
        let nonce: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(Self::NONCE_LENGTH)
            .map(char::from)
            .collect();

        self.credential_at(method, path, Utc::now().timestamp_millis(), &nonce)
    }

    /// Signs a request with an explicit timestamp and nonce.
    ///
    /// Deterministic: the same inputs always yield the same credential.
    #[must_use]
    pub fn credential_at(
        &self,
        method: &str,
        path: &str,
        timestamp: i64,
        nonce: &str,
    ) -> RequestCredential {
        let message = canonical_message(method, path, timestamp, nonce);
        let signature = compute_signature(&message, self.api_secret_key.as_ref());

        RequestCredential {
            api_key: self.api_key.as_ref().to_string(),
            timestamp,
            nonce: nonce.to_string(),
            signature,
        }
    }
}

// Verify RequestSigner is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RequestSigner>();
};

fn canonical_message(method: &str, path: &str, timestamp: i64, nonce: &str) -> String {
    format!(
        "{}\n{}\n{}\n{}",
        method.to_uppercase(),
        path,
        timestamp,
        nonce
    )
}

// Internal hex encoding since we don't want to add another dependency
mod hex {
    const HEX_CHARS: &[u8; 16] = b"0123456789abcdef";

    pub fn encode(bytes: impl AsRef<[u8]>) -> String {
        let bytes = bytes.as_ref();
        let mut result = String::with_capacity(bytes.len() * 2);
        for &byte in bytes {
            result.push(HEX_CHARS[(byte >> 4) as usize] as char);
            result.push(HEX_CHARS[(byte & 0x0f) as usize] as char);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_signer() -> RequestSigner {
        RequestSigner::new(
            ApiKey::new("test-key").unwrap(),
            ApiSecretKey::new("test-secret").unwrap(),
        )
    }

    #[test]
    fn test_compute_signature_produces_correct_hex() {
        let sig = compute_signature("test", "secret");

        // Should be 64 characters (32 bytes * 2 hex chars)
        assert_eq!(sig.len(), 64);
        // Should be lowercase hex
        assert!(sig.chars().all(|c| c.is_ascii_hexdigit()));
        assert!(sig.chars().all(|c| !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_compute_signature_matches_known_value() {
        // Known HMAC-SHA256 test vector
        // HMAC-SHA256("message", "key") = 6e9ef29b75fffc5b7abae527d58fdadb2fe42e7219011976917343065f58ed4a
        let sig = compute_signature("message", "key");
        assert_eq!(
            sig,
            "6e9ef29b75fffc5b7abae527d58fdadb2fe42e7219011976917343065f58ed4a"
        );
    }

    #[test]
    fn test_compute_signature_with_empty_message() {
        let sig = compute_signature("", "secret");
        assert_eq!(sig.len(), 64);
    }

    #[test]
    fn test_credential_at_is_deterministic() {
        let signer = test_signer();
        let a = signer.credential_at("get", "/v2/accounts", 1_443_736_521_324, "abc123");
        let b = signer.credential_at("get", "/v2/accounts", 1_443_736_521_324, "abc123");
        assert_eq!(a, b);
    }

    #[test]
    fn test_credential_at_signs_canonical_message() {
        let signer = test_signer();
        let credential = signer.credential_at("get", "/v2/accounts", 1_443_736_521_324, "abc123");

        let expected = compute_signature(
            "GET\n/v2/accounts\n1443736521324\nabc123",
            "test-secret",
        );
        assert_eq!(credential.signature, expected);
        assert_eq!(credential.api_key, "test-key");
        assert_eq!(credential.timestamp, 1_443_736_521_324);
        assert_eq!(credential.nonce, "abc123");
    }

    #[test]
    fn test_credential_at_uppercases_method() {
        let signer = test_signer();
        let lower = signer.credential_at("delete", "/v2/accounts/1", 1, "n");
        let upper = signer.credential_at("DELETE", "/v2/accounts/1", 1, "n");
        assert_eq!(lower.signature, upper.signature);
    }

    #[test]
    fn test_credential_varies_with_each_input() {
        let signer = test_signer();
        let base = signer.credential_at("get", "/v2/accounts", 1, "n");

        assert_ne!(
            base.signature,
            signer.credential_at("post", "/v2/accounts", 1, "n").signature
        );
        assert_ne!(
            base.signature,
            signer.credential_at("get", "/v2/contacts", 1, "n").signature
        );
        assert_ne!(
            base.signature,
            signer.credential_at("get", "/v2/accounts", 2, "n").signature
        );
        assert_ne!(
            base.signature,
            signer.credential_at("get", "/v2/accounts", 1, "m").signature
        );
    }

    #[test]
    fn test_credential_varies_with_secret() {
        let a = test_signer().credential_at("get", "/v2/accounts", 1, "n");
        let b = RequestSigner::new(
            ApiKey::new("test-key").unwrap(),
            ApiSecretKey::new("other-secret").unwrap(),
        )
        .credential_at("get", "/v2/accounts", 1, "n");
        assert_ne!(a.signature, b.signature);
    }

    #[test]
    fn test_credential_generates_fresh_nonce() {
        let signer = test_signer();
        let a = signer.credential("get", "/v2/accounts");
        let b = signer.credential("get", "/v2/accounts");

        assert_eq!(a.nonce.len(), 15);
        assert!(a.nonce.chars().all(|c| c.is_ascii_alphanumeric()));
        // Two credentials for the same request must not be identical
        assert_ne!(a.nonce, b.nonce);
    }

    #[test]
    fn test_credential_headers_carry_all_parts() {
        let signer = test_signer();
        let credential = signer.credential_at("put", "/v2/events", 42, "nonce-value");
        let headers = credential.headers();

        assert_eq!(headers[0], (API_KEY_HEADER, "test-key".to_string()));
        assert_eq!(headers[1], (TIMESTAMP_HEADER, "42".to_string()));
        assert_eq!(headers[2], (NONCE_HEADER, "nonce-value".to_string()));
        assert_eq!(headers[3].0, SIGNATURE_HEADER);
        assert_eq!(headers[3].1, credential.signature);
    }

    #[test]
    fn test_hex_encoding() {
        assert_eq!(hex::encode([0x00u8, 0xff, 0xab, 0xcd]), "00ffabcd");
        assert_eq!(hex::encode(b""), "");
        assert_eq!(hex::encode([0x12u8, 0x34]), "1234");
    }
}
