#![allow(dead_code)]

//! Test infrastructure for ac-server API tests

use ac_auth::hash_password;
use ac_config::{Config, MailTransport};
use ac_core::{Role, User};
use ac_db::UserRepository;
use ac_mail::{MailError, MailMessage, Mailer, MemoryMailer};
use ac_server::{AppState, build_router};

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower::ServiceExt;

pub const TEST_SECRET: &str = "test-secret-key-at-least-32-bytes-long";

/// Minimum bcrypt cost keeps the tests fast
pub const TEST_COST: u32 = 4;

pub const TEMP_PASSWORD: &str = "TempPassword123!";
pub const NEW_PASSWORD: &str = "NewSecurePass456!";

pub struct TestApp {
    pub state: AppState,
    pub mailer: Arc<MemoryMailer>,
}

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    ac_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Defaults plus the settings a test server needs
pub fn test_config() -> Config {
    let mut config = Config::default();
    config.auth.jwt_secret = Some(TEST_SECRET.to_string());
    config.auth.bcrypt_cost = TEST_COST;
    config.mail.transport = Some(MailTransport::Memory);
    config
}

pub async fn create_test_app() -> TestApp {
    create_test_app_with_config(test_config()).await
}

pub async fn create_test_app_with_config(config: Config) -> TestApp {
    let mailer = Arc::new(MemoryMailer::new());
    let state = AppState::new(create_test_pool().await, &config, mailer.clone());
    TestApp { state, mailer }
}

/// App whose mail transport refuses every message
pub async fn create_test_app_with_failing_mailer() -> AppState {
    AppState::new(
        create_test_pool().await,
        &test_config(),
        Arc::new(FailingMailer),
    )
}

/// Inserts an identity with a real bcrypt hash of `password`
pub async fn seed_user(
    pool: &SqlitePool,
    email: &str,
    password: &str,
    role: Role,
    must_change_password: bool,
) -> User {
    let hash = hash_password(password, TEST_COST)
        .await
        .expect("Failed to hash password");
    let mut user = User::new(
        email.to_string(),
        "Grace".to_string(),
        "Hopper".to_string(),
        role,
        hash,
    );
    user.must_change_password = must_change_password;

    UserRepository::create(pool, &user)
        .await
        .expect("Failed to seed user");
    user
}

pub async fn seed_super_admin(state: &AppState) -> User {
    seed_user(
        &state.pool,
        "superadmin@example.com",
        "SuperAdminPass1!",
        Role::SuperAdmin,
        false,
    )
    .await
}

pub async fn seed_admin(state: &AppState) -> User {
    seed_user(
        &state.pool,
        "admin@example.com",
        "AdminPass123!",
        Role::Admin,
        false,
    )
    .await
}

pub async fn seed_member(state: &AppState) -> User {
    seed_user(
        &state.pool,
        "member@example.com",
        "MemberPass123!",
        Role::Member,
        false,
    )
    .await
}

pub fn access_token_for(state: &AppState, user: &User) -> String {
    state
        .issuer
        .issue_pair(user)
        .expect("Failed to issue tokens")
        .access
}

pub fn refresh_token_for(state: &AppState, user: &User) -> String {
    state
        .issuer
        .issue_pair(user)
        .expect("Failed to issue tokens")
        .refresh
}

pub fn invite_body(email: &str) -> Value {
    serde_json::json!({
        "email": email,
        "first_name": "Ada",
        "last_name": "Lovelace",
        "temporary_password": TEMP_PASSWORD,
    })
}

/// Send one request through the real router. Non-JSON bodies come back as
/// `Value::String`; empty bodies as `Value::Null`.
pub async fn send(
    state: &AppState,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = build_router(state.clone()).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };

    (status, json)
}

pub async fn login(state: &AppState, email: &str, password: &str) -> (StatusCode, Value) {
    send(
        state,
        Method::POST,
        "/login",
        None,
        Some(serde_json::json!({ "email": email, "password": password })),
    )
    .await
}

pub async fn find_user(pool: &SqlitePool, email: &str) -> Option<User> {
    UserRepository::find_by_email(pool, email)
        .await
        .expect("Failed to query user")
}

pub async fn user_count(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await
        .expect("Failed to count users")
}

/// Transport that refuses every message
pub struct FailingMailer;

#[async_trait]
impl Mailer for FailingMailer {
    async fn send(&self, _message: &MailMessage) -> ac_mail::Result<()> {
        Err(MailError::delivery("relay unavailable"))
    }

    fn name(&self) -> &'static str {
        "failing"
    }
}
