use crate::{Claims, Result as AuthErrorResult};

use ac_core::{Capability, Role};

use uuid::Uuid;

/// The authenticated caller, as carried by a validated access token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub user_id: Uuid,
    pub email: String,
    pub role: Role,
    pub must_change_password: bool,
}

impl Principal {
    #[track_caller]
    pub fn from_claims(claims: &Claims) -> AuthErrorResult<Self> {
        Ok(Self {
            user_id: claims.user_id()?,
            email: claims.email.clone(),
            role: claims.role,
            must_change_password: claims.must_change_password,
        })
    }

    pub fn has_capability(&self, capability: Capability) -> bool {
        self.role.has_capability(capability)
    }
}
