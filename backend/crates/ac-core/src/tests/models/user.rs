use crate::{AccountState, Role, User};

use googletest::prelude::*;

#[test]
fn given_invited_user_then_must_change_password_and_pending_rotation() {
    let user = User::invited(
        "newadmin@example.com".to_string(),
        "New".to_string(),
        "Admin".to_string(),
        Role::Admin,
        "$2b$04$hash".to_string(),
    );

    assert_that!(user.must_change_password, eq(true));
    assert_that!(user.is_active, eq(true));
    assert_that!(user.role, eq(Role::Admin));
    assert_that!(user.account_state(), eq(AccountState::PendingRotation));
}

#[test]
fn given_superuser_then_active_without_forced_rotation() {
    let user = User::superuser(
        "superadmin@example.com".to_string(),
        "$2b$04$hash".to_string(),
    );

    assert_that!(user.role, eq(Role::SuperAdmin));
    assert_that!(user.must_change_password, eq(false));
    assert_that!(user.account_state(), eq(AccountState::Active));
    assert_that!(user.is_profile_public, eq(true));
}

#[test]
fn given_user_when_debug_formatted_then_hash_is_redacted() {
    let user = User::superuser(
        "superadmin@example.com".to_string(),
        "$2b$04$secret-hash".to_string(),
    );

    let debug = format!("{:?}", user);

    assert_that!(debug, not(contains_substring("secret-hash")));
    assert_that!(debug, contains_substring("<redacted>"));
}

#[test]
fn test_email_local_part() {
    let user = User::superuser("jane.doe@example.com".to_string(), String::new());
    assert_eq!(user.email_local_part(), "jane.doe");
}
