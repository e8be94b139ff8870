use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Lifecycle of an onboarded identity.
///
/// `PendingRotation -> Active` happens only through a successful password
/// rotation by the identity itself. There is no way back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountState {
    PendingRotation,
    Active,
}

impl AccountState {
    pub fn from_must_change_password(must_change_password: bool) -> Self {
        if must_change_password {
            Self::PendingRotation
        } else {
            Self::Active
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PendingRotation => "pending_rotation",
            Self::Active => "active",
        }
    }
}

impl FromStr for AccountState {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "pending_rotation" => Ok(Self::PendingRotation),
            "active" => Ok(Self::Active),
            _ => Err(CoreError::InvalidAccountState {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for AccountState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
