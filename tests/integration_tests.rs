//! Integration tests for the SalesforceIQ API SDK.
//!
//! These tests verify end-to-end functionality of the SDK configuration
//! and signing system.

use salesforceiq_api::auth::compute_signature;
use salesforceiq_api::{ApiKey, ApiSecretKey, ApiUrl, ConfigError, IqConfig, RequestSigner};

#[test]
fn test_full_workflow_create_newtypes_build_config_access_fields() {
    // Create validated newtypes
    let api_key = ApiKey::new("test-api-key").unwrap();
    let api_secret = ApiSecretKey::new("test-api-secret").unwrap();
    let api_url = ApiUrl::new("https://api.salesforceiq.com").unwrap();

    // Build configuration
    let config = IqConfig::builder()
        .api_key(api_key.clone())
        .api_secret_key(api_secret)
        .api_url(api_url)
        .user_agent_prefix("TestApp/1.0")
        .build()
        .unwrap();

    // Access fields and verify
    assert_eq!(config.api_key().as_ref(), "test-api-key");
    assert_eq!(config.api_url().as_ref(), "https://api.salesforceiq.com");
    assert_eq!(config.api_url().host_name(), Some("api.salesforceiq.com"));
    assert_eq!(config.user_agent_prefix(), Some("TestApp/1.0"));
}

#[test]
fn test_multi_tenant_scenario_multiple_independent_configs() {
    // Create configuration for Org A
    let config_a = IqConfig::builder()
        .api_key(ApiKey::new("org-a-key").unwrap())
        .api_secret_key(ApiSecretKey::new("org-a-secret").unwrap())
        .build()
        .unwrap();

    // Create configuration for Org B against a staging host
    let config_b = IqConfig::builder()
        .api_key(ApiKey::new("org-b-key").unwrap())
        .api_secret_key(ApiSecretKey::new("org-b-secret").unwrap())
        .api_url(ApiUrl::new("https://staging.example.test").unwrap())
        .build()
        .unwrap();

    // Verify configurations are independent
    assert_eq!(config_a.api_key().as_ref(), "org-a-key");
    assert_eq!(config_b.api_key().as_ref(), "org-b-key");
    assert_eq!(config_a.api_url().as_ref(), "https://api.salesforceiq.com");
    assert_eq!(config_b.api_url().as_ref(), "https://staging.example.test");

    // Identical requests signed by different orgs produce different signatures
    let cred_a = RequestSigner::from_config(&config_a).credential_at("get", "/v2/lists", 1, "n");
    let cred_b = RequestSigner::from_config(&config_b).credential_at("get", "/v2/lists", 1, "n");
    assert_ne!(cred_a.signature, cred_b.signature);
}

#[test]
fn test_error_handling_invalid_inputs_produce_correct_errors() {
    // Empty API key
    let result = ApiKey::new("");
    assert!(matches!(result, Err(ConfigError::EmptyApiKey)));

    // Empty API secret key
    let result = ApiSecretKey::new("");
    assert!(matches!(result, Err(ConfigError::EmptyApiSecretKey)));

    // Invalid API URL
    let result = ApiUrl::new("not-a-valid-url");
    assert!(matches!(result, Err(ConfigError::InvalidApiUrl { .. })));

    // Missing required fields in builder
    let result = IqConfig::builder()
        .api_key(ApiKey::new("key").unwrap())
        .build();
    assert!(matches!(
        result,
        Err(ConfigError::MissingRequiredField {
            field: "api_secret_key"
        })
    ));
}

#[test]
fn test_signing_workflow_produces_wire_ready_credential() {
    let config = IqConfig::builder()
        .api_key(ApiKey::new("integration-key").unwrap())
        .api_secret_key(ApiSecretKey::new("integration-secret").unwrap())
        .build()
        .unwrap();

    let signer = RequestSigner::from_config(&config);
    let credential = signer.credential_at("get", "/v2/accounts/123", 1_443_736_521_324, "abc123xyz456pqr");

    // The signature covers method, wire path, timestamp, and nonce
    let expected = compute_signature(
        "GET\n/v2/accounts/123\n1443736521324\nabc123xyz456pqr",
        "integration-secret",
    );
    assert_eq!(credential.signature, expected);

    // Headers are ready to attach to a request
    let headers = credential.headers();
    assert_eq!(headers[0].0, "X-Api-Key");
    assert_eq!(headers[1].0, "X-Api-Timestamp");
    assert_eq!(headers[2].0, "X-Api-Nonce");
    assert_eq!(headers[3].0, "X-Api-Signature");
}

#[test]
fn test_config_can_be_cloned_and_shared() {
    let config = IqConfig::builder()
        .api_key(ApiKey::new("key").unwrap())
        .api_secret_key(ApiSecretKey::new("secret").unwrap())
        .build()
        .unwrap();

    // Clone the config
    let config_clone = config.clone();

    // Both should have the same values
    assert_eq!(config.api_key().as_ref(), config_clone.api_key().as_ref());
    assert_eq!(config.api_url(), config_clone.api_url());

    // Verify Send + Sync by moving to thread (compile-time check)
    let handle = std::thread::spawn(move || {
        let _ = config_clone.api_key().as_ref();
    });
    handle.join().unwrap();
}
