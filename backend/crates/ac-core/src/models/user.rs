//! Identity entity - a user account with credential, role and rotation state.

use crate::{AccountState, Capability, Role};

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A user account.
///
/// `email` is stored normalized (see [`crate::normalize_email`]) and is the
/// only external identifier. `password_hash` is a bcrypt hash and is never
/// serialized; API layers convert to a public DTO instead.
#[derive(Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    /// Set at onboarding, cleared by the holder's first successful rotation
    pub must_change_password: bool,
    /// Inactive identities cannot log in
    pub is_active: bool,
    pub linkedin_url: Option<String>,
    pub graduation_year: Option<i32>,
    pub degree: String,
    pub phone: String,
    pub is_profile_public: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create an active identity with no forced rotation
    pub fn new(
        email: String,
        first_name: String,
        last_name: String,
        role: Role,
        password_hash: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email,
            password_hash,
            first_name,
            last_name,
            role,
            must_change_password: false,
            is_active: true,
            linkedin_url: None,
            graduation_year: None,
            degree: String::new(),
            phone: String::new(),
            is_profile_public: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Bootstrap super admin
    pub fn superuser(email: String, password_hash: String) -> Self {
        Self::new(
            email,
            String::new(),
            String::new(),
            Role::SuperAdmin,
            password_hash,
        )
    }

    /// Identity created through onboarding: holds a temporary credential
    /// and must rotate it.
    pub fn invited(
        email: String,
        first_name: String,
        last_name: String,
        role: Role,
        password_hash: String,
    ) -> Self {
        Self {
            must_change_password: true,
            ..Self::new(email, first_name, last_name, role, password_hash)
        }
    }

    pub fn account_state(&self) -> AccountState {
        AccountState::from_must_change_password(self.must_change_password)
    }

    pub fn has_capability(&self, capability: Capability) -> bool {
        self.role.has_capability(capability)
    }

    /// Local part of the email, used by the password similarity check
    pub fn email_local_part(&self) -> &str {
        self.email.split('@').next().unwrap_or_default()
    }
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("role", &self.role)
            .field("must_change_password", &self.must_change_password)
            .field("is_active", &self.is_active)
            .field("linkedin_url", &self.linkedin_url)
            .field("graduation_year", &self.graduation_year)
            .field("degree", &self.degree)
            .field("phone", &self.phone)
            .field("is_profile_public", &self.is_profile_public)
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .finish()
    }
}
