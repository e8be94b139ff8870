use crate::{MAX_EMAIL_LENGTH, normalize_email, validate_email};

use proptest::prelude::*;

#[test]
fn test_normalize_email_trims_and_lowercases() {
    assert_eq!(
        normalize_email("  SuperAdmin@Example.COM "),
        "superadmin@example.com"
    );
}

#[test]
fn test_validate_email_accepts_plain_address() {
    assert!(validate_email("newadmin@example.com").is_ok());
    assert!(validate_email("first.last+tag@mail.example.org").is_ok());
}

#[test]
fn test_validate_email_rejects_malformed_addresses() {
    assert!(validate_email("").is_err());
    assert!(validate_email("no-at-sign.example.com").is_err());
    assert!(validate_email("@example.com").is_err());
    assert!(validate_email("user@localhost").is_err());
    assert!(validate_email("user@example..com").is_err());
    assert!(validate_email("user@@example.com").is_err());
    assert!(validate_email("us er@example.com").is_err());
}

#[test]
fn test_validate_email_rejects_overlong_address() {
    let local = "a".repeat(MAX_EMAIL_LENGTH);
    let email = format!("{}@example.com", local);
    assert!(validate_email(&email).is_err());
}

proptest! {
    #[test]
    fn prop_normalize_email_is_idempotent(raw in "\\PC{0,40}") {
        let once = normalize_email(&raw);
        prop_assert_eq!(normalize_email(&once), once);
    }
}
