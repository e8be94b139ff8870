use crate::{AccountsError, Result as AccountsErrorResult, load_active_user};

use ac_auth::Principal;
use ac_core::{FieldErrors, User};
use ac_db::UserRepository;

use chrono::Utc;
use log::info;
use sqlx::SqlitePool;

const MAX_NAME_LENGTH: usize = 150;
const MAX_DEGREE_LENGTH: usize = 255;
const MAX_PHONE_LENGTH: usize = 20;
const MAX_LINKEDIN_URL_LENGTH: usize = 200;
const MIN_GRADUATION_YEAR: i32 = 1900;
const MAX_GRADUATION_YEAR: i32 = 2100;

/// Partial update of display attributes; `None` leaves a field unchanged.
/// An empty `linkedin_url` clears it.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub graduation_year: Option<i32>,
    pub degree: Option<String>,
    pub phone: Option<String>,
    pub linkedin_url: Option<String>,
    pub is_profile_public: Option<bool>,
}

impl ProfileUpdate {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();

        for (field, value) in [("first_name", &self.first_name), ("last_name", &self.last_name)] {
            if let Some(value) = value {
                check_length(field, value.trim(), MAX_NAME_LENGTH, &mut errors);
            }
        }
        if let Some(degree) = &self.degree {
            check_length("degree", degree.trim(), MAX_DEGREE_LENGTH, &mut errors);
        }
        if let Some(phone) = &self.phone {
            check_length("phone", phone.trim(), MAX_PHONE_LENGTH, &mut errors);
        }
        #[allow(clippy::collapsible_if)]
        if let Some(year) = self.graduation_year {
            if !(MIN_GRADUATION_YEAR..=MAX_GRADUATION_YEAR).contains(&year) {
                errors.add(
                    "graduation_year",
                    format!(
                        "Ensure this value is between {MIN_GRADUATION_YEAR} and {MAX_GRADUATION_YEAR}."
                    ),
                );
            }
        }
        if let Some(url) = &self.linkedin_url {
            let url = url.trim();
            if !url.is_empty() {
                if !(url.starts_with("https://") || url.starts_with("http://")) {
                    errors.add("linkedin_url", "Enter a valid URL.");
                }
                check_length("linkedin_url", url, MAX_LINKEDIN_URL_LENGTH, &mut errors);
            }
        }

        errors
    }

    fn apply(self, user: &mut User) {
        if let Some(first_name) = self.first_name {
            user.first_name = first_name.trim().to_string();
        }
        if let Some(last_name) = self.last_name {
            user.last_name = last_name.trim().to_string();
        }
        if let Some(year) = self.graduation_year {
            user.graduation_year = Some(year);
        }
        if let Some(degree) = self.degree {
            user.degree = degree.trim().to_string();
        }
        if let Some(phone) = self.phone {
            user.phone = phone.trim().to_string();
        }
        if let Some(url) = self.linkedin_url {
            let url = url.trim();
            user.linkedin_url = (!url.is_empty()).then(|| url.to_string());
        }
        if let Some(is_public) = self.is_profile_public {
            user.is_profile_public = is_public;
        }
        user.updated_at = Utc::now();
    }
}

fn check_length(field: &str, value: &str, max: usize, errors: &mut FieldErrors) {
    if value.chars().count() > max {
        errors.add(
            field,
            format!("Ensure this field has no more than {max} characters."),
        );
    }
}

/// Self-service reads and edits of the caller's own record
pub struct ProfileService {
    pool: SqlitePool,
}

impl ProfileService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn current(&self, principal: &Principal) -> AccountsErrorResult<User> {
        load_active_user(&self.pool, principal).await
    }

    pub async fn update(
        &self,
        principal: &Principal,
        update: ProfileUpdate,
    ) -> AccountsErrorResult<User> {
        let errors = update.validate();
        if !errors.is_empty() {
            return Err(AccountsError::validation(errors));
        }

        let mut user = load_active_user(&self.pool, principal).await?;
        update.apply(&mut user);

        if !UserRepository::update_profile(&self.pool, &user).await? {
            return Err(AccountsError::unauthorized());
        }

        info!("User {} updated their profile", user.id);
        Ok(user)
    }
}
