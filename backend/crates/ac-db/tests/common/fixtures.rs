use ac_core::{Role, User};

/// Not a real bcrypt hash; the repository stores it opaquely
pub const TEST_HASH: &str = "$2b$04$abcdefghijklmnopqrstuuJ0b2bYtV7Xx0o0V1q4N2c8Zq3uJxW5e";

pub fn create_test_user(email: &str, role: Role) -> User {
    User::new(
        email.to_string(),
        "Grace".to_string(),
        "Hopper".to_string(),
        role,
        TEST_HASH.to_string(),
    )
}

pub fn create_invited_user(email: &str, role: Role) -> User {
    User::invited(
        email.to_string(),
        "Ada".to_string(),
        "Lovelace".to_string(),
        role,
        TEST_HASH.to_string(),
    )
}
