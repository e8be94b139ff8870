use ac_core::User;

use serde::Serialize;

/// Public identity representation. Never carries credential material.
#[derive(Debug, Serialize)]
pub struct UserDto {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub must_change_password: bool,
    /// "pending_rotation" until the first password change
    pub account_state: String,
    pub is_active: bool,
    pub graduation_year: Option<i32>,
    pub degree: String,
    pub phone: String,
    pub linkedin_url: Option<String>,
    pub is_profile_public: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<User> for UserDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id.to_string(),
            account_state: u.account_state().as_str().to_string(),
            role: u.role.as_str().to_string(),
            email: u.email,
            first_name: u.first_name,
            last_name: u.last_name,
            must_change_password: u.must_change_password,
            is_active: u.is_active,
            graduation_year: u.graduation_year,
            degree: u.degree,
            phone: u.phone,
            linkedin_url: u.linkedin_url,
            is_profile_public: u.is_profile_public,
            created_at: u.created_at.timestamp(),
            updated_at: u.updated_at.timestamp(),
        }
    }
}
