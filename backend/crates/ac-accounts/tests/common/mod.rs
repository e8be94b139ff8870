#![allow(dead_code)]

use ac_accounts::{InvitationRequest, OnboardingService, OnboardingSettings};
use ac_auth::{Principal, hash_password};
use ac_core::{PasswordPolicy, Role, User};
use ac_db::UserRepository;
use ac_mail::{MailError, MailMessage, Mailer, MemoryMailer};

use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Minimum bcrypt cost keeps the tests fast
pub const TEST_COST: u32 = 4;

pub const FRONTEND_URL: &str = "http://localhost:4200";

pub const DISPATCH_TIMEOUT: Duration = Duration::from_secs(5);

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

/// Creates a file-backed pool that allows concurrent writers to contend
/// for SQLite's write lock
pub async fn create_file_pool(dir: &Path, busy_timeout: Duration) -> SqlitePool {
    let pool = ac_db::connect(&dir.join("alumni.db"), 4, busy_timeout)
        .await
        .expect("Failed to open file pool");

    ac_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
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

pub fn principal_for(user: &User) -> Principal {
    Principal {
        user_id: user.id,
        email: user.email.clone(),
        role: user.role,
        must_change_password: user.must_change_password,
    }
}

pub fn invitation(email: &str) -> InvitationRequest {
    InvitationRequest {
        email: email.to_string(),
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        temporary_password: "TempPassword123!".to_string(),
    }
}

pub fn onboarding_service(pool: &SqlitePool, mailer: Arc<dyn Mailer>) -> OnboardingService {
    onboarding_service_with_timeout(pool, mailer, DISPATCH_TIMEOUT)
}

pub fn onboarding_service_with_timeout(
    pool: &SqlitePool,
    mailer: Arc<dyn Mailer>,
    dispatch_timeout: Duration,
) -> OnboardingService {
    OnboardingService::new(
        pool.clone(),
        mailer,
        PasswordPolicy::default(),
        OnboardingSettings {
            frontend_url: FRONTEND_URL.to_string(),
            bcrypt_cost: TEST_COST,
            dispatch_timeout,
        },
    )
}

pub fn memory_mailer() -> Arc<MemoryMailer> {
    Arc::new(MemoryMailer::new())
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

/// Transport that takes `delay` to accept each message
pub struct SlowMailer {
    delay: Duration,
    delivered: AtomicUsize,
}

impl SlowMailer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            delivered: AtomicUsize::new(0),
        }
    }

    pub fn delivered(&self) -> usize {
        self.delivered.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Mailer for SlowMailer {
    async fn send(&self, _message: &MailMessage) -> ac_mail::Result<()> {
        tokio::time::sleep(self.delay).await;
        self.delivered.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "slow"
    }
}

pub async fn user_count(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await
        .expect("Failed to count users")
}
