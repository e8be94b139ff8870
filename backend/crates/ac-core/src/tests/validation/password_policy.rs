use crate::{FieldErrors, PasswordPolicy, PolicyViolation};

use googletest::prelude::*;

#[test]
fn given_strong_password_when_validated_then_ok() {
    let policy = PasswordPolicy::default();

    let result = policy.validate("TempPassword123!", &[("email", "newadmin")]);

    assert_that!(result, ok(anything()));
}

#[test]
fn given_short_password_when_validated_then_too_short() {
    let policy = PasswordPolicy::default();

    let result = policy.validate("Ab1!", &[]);

    assert!(result.unwrap_err().contains(&PolicyViolation::TooShort { min: 8 }));
}

#[test]
fn given_password_over_bcrypt_limit_when_validated_then_too_long() {
    let policy = PasswordPolicy::default();
    let password = "Xy7!".repeat(20);

    let result = policy.validate(&password, &[]);

    assert!(result.unwrap_err().contains(&PolicyViolation::TooLong { max: 72 }));
}

#[test]
fn given_common_password_in_any_case_when_validated_then_common() {
    let policy = PasswordPolicy::default();

    let result = policy.validate("PassWord123", &[]);

    assert!(result.unwrap_err().contains(&PolicyViolation::Common));
}

#[test]
fn given_numeric_password_when_validated_then_reports_every_violation() {
    let policy = PasswordPolicy::default();

    let result = policy.validate("12345678", &[]);

    let violations = result.unwrap_err();
    assert!(violations.contains(&PolicyViolation::Common));
    assert!(violations.contains(&PolicyViolation::EntirelyNumeric));
}

#[test]
fn given_password_containing_email_local_part_when_validated_then_too_similar() {
    let policy = PasswordPolicy::default();

    let result = policy.validate("jdoe-2024-secure", &[("email", "jdoe")]);

    assert_eq!(
        result.unwrap_err(),
        vec![PolicyViolation::TooSimilar {
            attribute: "email".to_string()
        }]
    );
}

#[test]
fn given_short_attribute_when_validated_then_similarity_ignored() {
    let policy = PasswordPolicy::default();

    let result = policy.validate("JoCorrectHorse9", &[("first_name", "Jo")]);

    assert_that!(result, ok(anything()));
}

#[test]
fn given_disabled_rules_when_validated_then_only_length_applies() {
    let policy = PasswordPolicy {
        reject_common: false,
        reject_numeric: false,
        reject_similar_to_user: false,
        ..PasswordPolicy::default()
    };

    assert_that!(policy.validate("12345678", &[]), ok(anything()));
    assert_that!(policy.validate("1234", &[]), err(anything()));
}

#[test]
fn given_weak_password_when_check_field_then_errors_recorded_under_field() {
    let policy = PasswordPolicy::default();
    let mut errors = FieldErrors::new();

    policy.check_field("new_password", "short", &[], &mut errors);

    assert_that!(errors.contains("new_password"), eq(true));
    assert_that!(errors.contains("confirm_password"), eq(false));
}
