use crate::{AuthError, Principal, Result as AuthErrorResult};

use ac_core::Capability;

use std::panic::Location;

use error_location::ErrorLocation;

/// Capability gate. Evaluate before any side effect of the guarded operation.
///
/// No caller → `Unauthorized`; caller without `required` → `Forbidden`.
#[track_caller]
pub fn authorize(
    principal: Option<&Principal>,
    required: Capability,
) -> AuthErrorResult<&Principal> {
    let principal = principal.ok_or_else(|| AuthError::Unauthorized {
        location: ErrorLocation::from(Location::caller()),
    })?;

    if !principal.has_capability(required) {
        return Err(AuthError::Forbidden {
            capability: required,
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(principal)
}
