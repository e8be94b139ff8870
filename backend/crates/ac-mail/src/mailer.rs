use crate::{MailMessage, Result as MailErrorResult};

use async_trait::async_trait;

/// Outbound mail transport.
///
/// `send` returns only once the transport has accepted the message; any
/// failure is reported, never swallowed.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, message: &MailMessage) -> MailErrorResult<()>;

    /// Transport name for logs
    fn name(&self) -> &'static str;
}
