use ac_accounts::InvitationRequest;

use serde::Deserialize;

/// `temporary_password` is plaintext; never log this struct
#[derive(Deserialize)]
pub struct InviteRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub temporary_password: String,
}

impl From<InviteRequest> for InvitationRequest {
    fn from(r: InviteRequest) -> Self {
        Self {
            email: r.email,
            first_name: r.first_name,
            last_name: r.last_name,
            temporary_password: r.temporary_password,
        }
    }
}
