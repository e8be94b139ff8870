use ac_server::error::ServerError;
use ac_server::{AppState, Cli, Command, build_mailer, build_router, logger};

use ac_accounts::{ProvisionOutcome, ensure_superuser};
use ac_config::Config;

use std::error::Error;
use std::time::Duration;

use clap::Parser;
use log::{error, info, warn};
use sqlx::SqlitePool;
use tokio::net::TcpListener;

const LIMITER_PRUNE_INTERVAL: Duration = Duration::from_secs(300);

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // .env is optional; real environment variables win
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Ensure log directory exists
    let log_file_path = config.log_file_path()?;
    if let Some(dir) = log_file_path.as_deref().and_then(|p| p.parent()) {
        std::fs::create_dir_all(dir).map_err(|e| ServerError::LogDirectory {
            path: dir.display().to_string(),
            source: e,
        })?;
    }

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting ac-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool
    let database_path = config.database_path()?;
    let pool = ac_db::connect(
        &database_path,
        config.database.max_connections,
        Duration::from_secs(config.database.busy_timeout_secs),
    )
    .await?;
    ac_db::run_migrations(&pool).await?;

    match cli.command.unwrap_or(Command::Serve) {
        Command::CreateSuperuser { email, password } => {
            create_superuser(&pool, &config, email, password).await?;
            pool.close().await;
            Ok(())
        }
        Command::Serve => serve(pool, config).await,
    }
}

async fn serve(pool: SqlitePool, config: Config) -> Result<(), Box<dyn Error>> {
    bootstrap_superuser(&pool, &config).await?;

    let mailer = build_mailer(&config.mail)?;
    let app_state = AppState::new(pool.clone(), &config, mailer);

    // Forget login quotas that have fully replenished
    let limiter = app_state.login_limiter.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(LIMITER_PRUNE_INTERVAL);
        loop {
            interval.tick().await;
            limiter.prune();
            log::debug!("Login limiter tracking {} emails", limiter.tracked_keys());
        }
    });

    let app = build_router(app_state);

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    info!("Graceful shutdown complete");

    Ok(())
}

/// Provision the configured super admin, if any
async fn bootstrap_superuser(pool: &SqlitePool, config: &Config) -> Result<(), ServerError> {
    let Some((email, password)) = config.bootstrap.superuser() else {
        info!("No bootstrap superuser configured");
        return Ok(());
    };

    if let ProvisionOutcome::Created(user) =
        ensure_superuser(pool, email, password, config.auth.bcrypt_cost).await?
    {
        info!("Bootstrap superuser {} ready", user.id);
    }
    Ok(())
}

async fn create_superuser(
    pool: &SqlitePool,
    config: &Config,
    email: Option<String>,
    password: Option<String>,
) -> Result<(), ServerError> {
    let email = email
        .or_else(|| config.bootstrap.superuser_email.clone())
        .ok_or(ServerError::MissingSuperuserField {
            field: "email",
            env: "EMAIL",
        })?;
    let password = password
        .or_else(|| config.bootstrap.superuser_password.clone())
        .ok_or(ServerError::MissingSuperuserField {
            field: "password",
            env: "PASSWORD",
        })?;

    match ensure_superuser(pool, &email, &password, config.auth.bcrypt_cost).await? {
        ProvisionOutcome::Created(user) => info!("Superuser {} created ({})", user.email, user.id),
        ProvisionOutcome::AlreadyExists => warn!("Superuser {} already exists", email),
    }
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
