use crate::Provider;

use std::str::FromStr;

#[test]
fn test_provider_as_str() {
    assert_eq!(Provider::Password.as_str(), "password");
    assert_eq!(Provider::Google.as_str(), "google");
}

#[test]
fn test_provider_from_str() {
    assert_eq!(Provider::from_str("password").unwrap(), Provider::Password);
    assert_eq!(Provider::from_str("google").unwrap(), Provider::Google);
    assert!(Provider::from_str("github").is_err());
}

#[test]
fn test_provider_from_str_accepts_legacy_email_value() {
    assert_eq!(Provider::from_str("email").unwrap(), Provider::Password);
}

#[test]
fn test_provider_from_sign_in_provider() {
    assert_eq!(
        Provider::from_sign_in_provider(Some("google.com")),
        Provider::Google
    );
    assert_eq!(
        Provider::from_sign_in_provider(Some("password")),
        Provider::Password
    );
    assert_eq!(
        Provider::from_sign_in_provider(Some("anonymous")),
        Provider::Password
    );
    assert_eq!(Provider::from_sign_in_provider(None), Provider::Password);
}

#[test]
fn test_provider_serializes_lowercase() {
    assert_eq!(
        serde_json::to_string(&Provider::Google).unwrap(),
        "\"google\""
    );
}
