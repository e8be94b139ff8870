use crate::{DbError, error::Result as DbErrorResult};

use ac_core::{Role, User};

use std::panic::Location;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

const USER_COLUMNS: &str = r#"
    id, email, password_hash, first_name, last_name, role,
    must_change_password, is_active, linkedin_url, graduation_year,
    degree, phone, is_profile_public, created_at, updated_at
"#;

pub struct UserRepository;

impl UserRepository {
    /// Insert a new identity. A second row with the same (case-insensitive)
    /// email fails with [`DbError::DuplicateEmail`].
    pub async fn create<'e, E>(executor: E, user: &User) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!(
            "INSERT INTO users ({USER_COLUMNS}) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"
        );

        let result = sqlx::query(&sql)
            .bind(user.id.to_string())
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(&user.first_name)
            .bind(&user.last_name)
            .bind(user.role.as_str())
            .bind(user.must_change_password)
            .bind(user.is_active)
            .bind(&user.linkedin_url)
            .bind(user.graduation_year)
            .bind(&user.degree)
            .bind(&user.phone)
            .bind(user.is_profile_public)
            .bind(user.created_at.timestamp())
            .bind(user.updated_at.timestamp())
            .execute(executor)
            .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(DbError::duplicate_email(user.email.as_str()))
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn find_by_id<'e, E>(executor: E, id: Uuid) -> DbErrorResult<Option<User>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?");

        let row = sqlx::query(&sql)
            .bind(id.to_string())
            .fetch_optional(executor)
            .await?;

        row.as_ref().map(map_row).transpose()
    }

    /// Lookup is case-insensitive through the column collation.
    pub async fn find_by_email<'e, E>(executor: E, email: &str) -> DbErrorResult<Option<User>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE email = ?");

        let row = sqlx::query(&sql)
            .bind(email)
            .fetch_optional(executor)
            .await?;

        row.as_ref().map(map_row).transpose()
    }

    /// Replace the credential and clear the forced-rotation flag.
    /// Returns false if no such identity exists.
    pub async fn update_password<'e, E>(
        executor: E,
        id: Uuid,
        password_hash: &str,
    ) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query(
            r#"
                UPDATE users
                SET password_hash = ?, must_change_password = 0, updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(password_hash)
        .bind(Utc::now().timestamp())
        .bind(id.to_string())
        .execute(executor)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Persist the self-service profile fields of `user`.
    pub async fn update_profile<'e, E>(executor: E, user: &User) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query(
            r#"
                UPDATE users
                SET first_name = ?, last_name = ?, linkedin_url = ?, graduation_year = ?,
                    degree = ?, phone = ?, is_profile_public = ?, updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.linkedin_url)
        .bind(user.graduation_year)
        .bind(&user.degree)
        .bind(&user.phone)
        .bind(user.is_profile_public)
        .bind(user.updated_at.timestamp())
        .bind(user.id.to_string())
        .execute(executor)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn set_active<'e, E>(executor: E, id: Uuid, is_active: bool) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("UPDATE users SET is_active = ?, updated_at = ? WHERE id = ?")
            .bind(is_active)
            .bind(Utc::now().timestamp())
            .bind(id.to_string())
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn count_by_role<'e, E>(executor: E, role: Role) -> DbErrorResult<i64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE role = ?")
            .bind(role.as_str())
            .fetch_one(executor)
            .await?;

        Ok(count)
    }
}

fn map_row(row: &SqliteRow) -> DbErrorResult<User> {
    let id: String = row.try_get("id")?;
    let role: String = row.try_get("role")?;
    let created_at: i64 = row.try_get("created_at")?;
    let updated_at: i64 = row.try_get("updated_at")?;

    Ok(User {
        id: Uuid::parse_str(&id).map_err(|e| DbError::Initialization {
            message: format!("Invalid UUID in users.id: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?,
        email: row.try_get("email")?,
        password_hash: row.try_get("password_hash")?,
        first_name: row.try_get("first_name")?,
        last_name: row.try_get("last_name")?,
        role: Role::from_str(&role).map_err(|e| DbError::Initialization {
            message: format!("Invalid Role in users.role: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?,
        must_change_password: row.try_get("must_change_password")?,
        is_active: row.try_get("is_active")?,
        linkedin_url: row.try_get("linkedin_url")?,
        graduation_year: row.try_get("graduation_year")?,
        degree: row.try_get("degree")?,
        phone: row.try_get("phone")?,
        is_profile_public: row.try_get("is_profile_public")?,
        created_at: timestamp(created_at, "created_at")?,
        updated_at: timestamp(updated_at, "updated_at")?,
    })
}

fn timestamp(secs: i64, column: &str) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0).ok_or_else(|| DbError::Initialization {
        message: format!("Invalid timestamp in users.{}", column),
        location: ErrorLocation::from(Location::caller()),
    })
}
