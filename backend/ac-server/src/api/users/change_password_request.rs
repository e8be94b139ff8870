use ac_accounts::ChangePasswordRequest as RotationRequest;

use serde::Deserialize;

/// Plaintext passwords; never log this struct
#[derive(Deserialize)]
pub struct ChangePasswordRequest {
    #[serde(default)]
    pub new_password: String,
    #[serde(default)]
    pub confirm_password: String,
}

impl From<ChangePasswordRequest> for RotationRequest {
    fn from(r: ChangePasswordRequest) -> Self {
        Self {
            new_password: r.new_password,
            confirm_password: r.confirm_password,
        }
    }
}
