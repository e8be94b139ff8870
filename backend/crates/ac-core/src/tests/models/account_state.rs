use crate::AccountState;

use std::str::FromStr;

#[test]
fn test_account_state_from_flag() {
    assert_eq!(
        AccountState::from_must_change_password(true),
        AccountState::PendingRotation
    );
    assert_eq!(
        AccountState::from_must_change_password(false),
        AccountState::Active
    );
}

#[test]
fn test_account_state_from_str() {
    assert_eq!(
        AccountState::from_str("pending_rotation").unwrap(),
        AccountState::PendingRotation
    );
    assert_eq!(
        AccountState::from_str("active").unwrap(),
        AccountState::Active
    );
    assert!(AccountState::from_str("locked").is_err());
}
