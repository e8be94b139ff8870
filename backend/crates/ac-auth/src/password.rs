//! bcrypt hashing on the blocking pool.
//!
//! Both entry points are plain functions returning a future so the caller's
//! location is captured before the first `.await`.

use crate::{AuthError, Result as AuthErrorResult};

use std::future::Future;
use std::panic::Location;

use error_location::ErrorLocation;

/// Hash a password with the given bcrypt cost.
#[track_caller]
pub fn hash_password(
    password: &str,
    cost: u32,
) -> impl Future<Output = AuthErrorResult<String>> + Send + use<> {
    let caller = Location::caller();
    let password = password.to_string();

    async move {
        tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| hashing_error(format!("Task join error: {}", e), caller))?
            .map_err(|e| hashing_error(e.to_string(), caller))
    }
}

/// Verify a password against a bcrypt hash.
///
/// `Ok(false)` on mismatch; `Err` only when the hash itself is unusable.
#[track_caller]
pub fn verify_password(
    password: &str,
    hash: &str,
) -> impl Future<Output = AuthErrorResult<bool>> + Send + use<> {
    let caller = Location::caller();
    let password = password.to_string();
    let hash = hash.to_string();

    async move {
        tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
            .await
            .map_err(|e| hashing_error(format!("Task join error: {}", e), caller))?
            .map_err(|e| hashing_error(e.to_string(), caller))
    }
}

fn hashing_error(message: String, caller: &'static Location<'static>) -> AuthError {
    AuthError::Hashing {
        message,
        location: ErrorLocation::from(caller),
    }
}
