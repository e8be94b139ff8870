use crate::{MailError, MailMessage, Mailer, Result as MailErrorResult};

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client as ReqwestClient;
use serde::Serialize;
use serde_json::Value;

/// JSON payload accepted by the mail relay
#[derive(Debug, Serialize)]
struct RelayRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    text: &'a str,
}

/// Delivers mail by POSTing JSON to an HTTP relay
pub struct HttpMailer {
    relay_url: String,
    from: String,
    api_key: Option<String>,
    client: ReqwestClient,
}

impl HttpMailer {
    /// # Arguments
    /// * `relay_url` - Relay endpoint (e.g., "http://127.0.0.1:8025/send")
    /// * `from` - Sender address
    /// * `api_key` - Optional bearer credential for the relay
    /// * `timeout` - Whole-request timeout
    pub fn new(
        relay_url: &str,
        from: &str,
        api_key: Option<&str>,
        timeout: Duration,
    ) -> MailErrorResult<Self> {
        let client = ReqwestClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| MailError::config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            relay_url: relay_url.to_string(),
            from: from.to_string(),
            api_key: api_key.map(String::from),
            client,
        })
    }
}

#[async_trait]
impl Mailer for HttpMailer {
    async fn send(&self, message: &MailMessage) -> MailErrorResult<()> {
        let payload = RelayRequest {
            from: &self.from,
            to: &message.to,
            subject: &message.subject,
            text: &message.body,
        };

        let mut req = self.client.post(&self.relay_url).json(&payload);
        if let Some(ref api_key) = self.api_key {
            req = req.bearer_auth(api_key);
        }

        let response = req.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body: Value = response.json().await.unwrap_or(Value::Null);
            let message = body
                .get("error")
                .and_then(|e| e.get("message").or(Some(e)))
                .and_then(|v| v.as_str())
                .unwrap_or("Unknown error")
                .to_string();

            warn!("Mail relay rejected message: status {}", status.as_u16());
            return Err(MailError::rejected(status.as_u16(), message));
        }

        debug!("Mail relay accepted message to {}", message.to);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
