use serde::Deserialize;

/// `password` is plaintext; never log this struct
#[derive(Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl LoginRequest {
    /// A blank field can never match an identity
    pub fn is_blank(&self) -> bool {
        self.email.trim().is_empty() || self.password.is_empty()
    }
}
