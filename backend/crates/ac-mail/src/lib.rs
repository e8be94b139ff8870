//! Notification transport for outbound account mail.

pub mod error;
pub mod http_mailer;
pub mod mail_message;
pub mod mailer;
pub mod memory_mailer;

pub use error::{MailError, Result};
pub use http_mailer::HttpMailer;
pub use mail_message::MailMessage;
pub use mailer::Mailer;
pub use memory_mailer::{DEFAULT_OUTBOX_CAPACITY, MemoryMailer};
