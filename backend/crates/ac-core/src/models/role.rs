use crate::{Capability, CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Capability tier of an identity.
///
/// Roles are flat values; what a role may do is answered by
/// [`Role::has_capability`], so adding a role means extending the enum and
/// the match table below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    SuperAdmin,
    Admin,
    #[default]
    Member,
}

impl Role {
    /// Convert to database / claim string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SuperAdmin => "SUPER_ADMIN",
            Self::Admin => "ADMIN",
            Self::Member => "MEMBER",
        }
    }

    pub fn has_capability(&self, capability: Capability) -> bool {
        matches!(
            (self, capability),
            (Self::SuperAdmin, _) | (Self::Admin, Capability::Admin)
        )
    }

    pub fn is_admin(&self) -> bool {
        self.has_capability(Capability::Admin)
    }

    pub fn is_super_admin(&self) -> bool {
        self.has_capability(Capability::SuperAdmin)
    }

    /// Capability an inviter must hold to onboard an identity with this role.
    ///
    /// `None` means the role cannot be created through onboarding at all.
    pub fn onboarding_capability(&self) -> Option<Capability> {
        match self {
            Self::SuperAdmin => None,
            Self::Admin => Some(Capability::SuperAdmin),
            Self::Member => Some(Capability::Admin),
        }
    }
}

impl FromStr for Role {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "SUPER_ADMIN" => Ok(Self::SuperAdmin),
            "ADMIN" => Ok(Self::Admin),
            "MEMBER" => Ok(Self::Member),
            _ => Err(CoreError::InvalidRole {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
