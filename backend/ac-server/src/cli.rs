use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "ac-server")]
#[command(about = "AlumniConnect authentication and onboarding server")]
#[command(version)]
pub struct Cli {
    /// Defaults to `serve`
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the HTTP server (default)
    Serve,

    /// Create the super admin account if it does not exist, then exit
    CreateSuperuser {
        /// Falls back to AC_SUPERUSER_EMAIL / bootstrap.superuser_email
        #[arg(long)]
        email: Option<String>,

        /// Falls back to AC_SUPERUSER_PASSWORD / bootstrap.superuser_password
        #[arg(long)]
        password: Option<String>,
    },
}
