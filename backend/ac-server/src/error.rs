use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] ac_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] ac_db::DbError),

    #[error("Account error: {0}")]
    Accounts(#[from] ac_accounts::AccountsError),

    #[error("Mail transport error: {0}")]
    Mail(#[from] ac_mail::MailError),

    #[error("Failed to prepare log directory {path}: {source}")]
    LogDirectory {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("Missing superuser {field}: pass --{field} or set AC_SUPERUSER_{env}")]
    MissingSuperuserField {
        field: &'static str,
        env: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, ServerError>;
