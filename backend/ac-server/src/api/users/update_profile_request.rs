use ac_accounts::ProfileUpdate;

use serde::Deserialize;

/// PATCH /me body. Absent fields are left unchanged; identity, role and
/// credential fields are not accepted here.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateProfileRequest {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub graduation_year: Option<i32>,
    #[serde(default)]
    pub degree: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    /// Empty string clears the link
    #[serde(default)]
    pub linkedin_url: Option<String>,
    #[serde(default)]
    pub is_profile_public: Option<bool>,
}

impl From<UpdateProfileRequest> for ProfileUpdate {
    fn from(r: UpdateProfileRequest) -> Self {
        Self {
            first_name: r.first_name,
            last_name: r.last_name,
            graduation_year: r.graduation_year,
            degree: r.degree,
            phone: r.phone,
            linkedin_url: r.linkedin_url,
            is_profile_public: r.is_profile_public,
        }
    }
}
