use crate::{Capability, Role};

use std::str::FromStr;

use proptest::prelude::*;

#[test]
fn test_role_as_str() {
    assert_eq!(Role::SuperAdmin.as_str(), "SUPER_ADMIN");
    assert_eq!(Role::Admin.as_str(), "ADMIN");
    assert_eq!(Role::Member.as_str(), "MEMBER");
}

#[test]
fn test_role_from_str() {
    assert_eq!(Role::from_str("SUPER_ADMIN").unwrap(), Role::SuperAdmin);
    assert_eq!(Role::from_str("ADMIN").unwrap(), Role::Admin);
    assert_eq!(Role::from_str("MEMBER").unwrap(), Role::Member);
    assert!(Role::from_str("member").is_err());
    assert!(Role::from_str("OWNER").is_err());
}

#[test]
fn test_role_default_is_member() {
    assert_eq!(Role::default(), Role::Member);
}

#[test]
fn test_role_display_matches_as_str() {
    assert_eq!(Role::SuperAdmin.to_string(), "SUPER_ADMIN");
    assert_eq!(Role::Member.to_string(), "MEMBER");
}

#[test]
fn given_super_admin_when_checking_capabilities_then_has_all() {
    assert!(Role::SuperAdmin.has_capability(Capability::Admin));
    assert!(Role::SuperAdmin.has_capability(Capability::SuperAdmin));
    assert!(Role::SuperAdmin.is_admin());
    assert!(Role::SuperAdmin.is_super_admin());
}

#[test]
fn given_admin_when_checking_capabilities_then_is_admin_only() {
    assert!(Role::Admin.has_capability(Capability::Admin));
    assert!(!Role::Admin.has_capability(Capability::SuperAdmin));
}

#[test]
fn given_member_when_checking_capabilities_then_has_none() {
    assert!(!Role::Member.is_admin());
    assert!(!Role::Member.is_super_admin());
}

#[test]
fn given_target_role_when_onboarding_then_requires_expected_capability() {
    assert_eq!(
        Role::Admin.onboarding_capability(),
        Some(Capability::SuperAdmin)
    );
    assert_eq!(Role::Member.onboarding_capability(), Some(Capability::Admin));
    assert_eq!(Role::SuperAdmin.onboarding_capability(), None);
}

fn any_role() -> impl Strategy<Value = Role> {
    prop_oneof![
        Just(Role::SuperAdmin),
        Just(Role::Admin),
        Just(Role::Member)
    ]
}

proptest! {
    #[test]
    fn prop_role_string_representation_is_reversible(role in any_role()) {
        prop_assert_eq!(Role::from_str(role.as_str()).unwrap(), role);
    }

    #[test]
    fn prop_super_admin_capability_implies_admin_capability(role in any_role()) {
        if role.has_capability(Capability::SuperAdmin) {
            prop_assert!(role.has_capability(Capability::Admin));
        }
    }
}
