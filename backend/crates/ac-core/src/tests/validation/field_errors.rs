use crate::{CoreError, FieldErrors};

use googletest::prelude::*;

#[test]
fn given_no_errors_when_into_result_then_ok() {
    let errors = FieldErrors::new();
    assert!(errors.into_result().is_ok());
}

#[test]
fn given_errors_when_into_result_then_validation_error_keeps_fields() {
    let mut errors = FieldErrors::new();
    errors.add("new_password", "too short");
    errors.add("confirm_password", "mismatch");

    let result = errors.into_result();

    let Err(CoreError::Validation { errors, .. }) = result else {
        panic!("expected validation error");
    };
    assert_that!(errors.contains("new_password"), eq(true));
    assert_that!(errors.contains("confirm_password"), eq(true));
    assert_that!(errors.first_field(), some(eq("confirm_password")));
}

#[test]
fn given_repeated_field_when_added_then_messages_accumulate() {
    let mut errors = FieldErrors::new();
    errors.add("temporary_password", "too short");
    errors.add("temporary_password", "too common");

    assert_eq!(
        errors.get("temporary_password"),
        Some(&["too short".to_string(), "too common".to_string()][..])
    );
}

#[test]
fn test_field_errors_display_lists_every_message() {
    let errors = FieldErrors::single("email", "email cannot be empty");
    assert_eq!(errors.to_string(), "email: email cannot be empty");
}
