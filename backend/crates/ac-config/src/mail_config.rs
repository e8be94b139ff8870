use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_FRONTEND_URL, DEFAULT_MAIL_FROM,
    DEFAULT_MAIL_TIMEOUT_SECS, MAX_MAIL_TIMEOUT_SECS, MIN_MAIL_TIMEOUT_SECS,
};

use std::str::FromStr;

use serde::Deserialize;

/// How invitation mail leaves the process. There is no default: the
/// operator must name one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MailTransport {
    /// Kept in a bounded in-process outbox (development)
    Memory,
    /// POSTed as JSON to `relay_url`
    Http,
}

impl MailTransport {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Memory => "memory",
            Self::Http => "http",
        }
    }
}

impl FromStr for MailTransport {
    type Err = ConfigError;

    #[track_caller]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "http" => Ok(Self::Http),
            other => Err(ConfigError::mail(format!(
                "mail.transport must be 'memory' or 'http', got '{}'",
                other
            ))),
        }
    }
}

impl std::fmt::Display for MailTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct MailConfig {
    pub transport: Option<MailTransport>,
    pub relay_url: Option<String>,
    /// Bearer credential for the relay
    pub api_key: Option<String>,
    pub from: String,
    /// Web client base URL used in invitation links
    pub frontend_url: String,
    pub timeout_secs: u64,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            transport: None,
            relay_url: None,
            api_key: None,
            from: String::from(DEFAULT_MAIL_FROM),
            frontend_url: String::from(DEFAULT_FRONTEND_URL),
            timeout_secs: DEFAULT_MAIL_TIMEOUT_SECS,
        }
    }
}

impl MailConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let Some(transport) = self.transport else {
            return Err(ConfigError::mail(
                "mail.transport must be set to 'memory' or 'http'",
            ));
        };

        if transport == MailTransport::Http {
            match &self.relay_url {
                None => {
                    return Err(ConfigError::mail(
                        "mail.relay_url is required when mail.transport = \"http\"",
                    ));
                }
                // The relay client is built without TLS
                Some(url) if !url.starts_with("http://") => {
                    return Err(ConfigError::mail(format!(
                        "mail.relay_url must be a plain http:// URL (terminate TLS in the relay), got '{}'",
                        url
                    )));
                }
                Some(_) => {}
            }
        }

        if !self.from.contains('@') {
            return Err(ConfigError::mail(format!(
                "mail.from must be an email address, got '{}'",
                self.from
            )));
        }

        if !is_http_url(&self.frontend_url) {
            return Err(ConfigError::mail(format!(
                "mail.frontend_url must be an http(s) URL, got '{}'",
                self.frontend_url
            )));
        }

        if !(MIN_MAIL_TIMEOUT_SECS..=MAX_MAIL_TIMEOUT_SECS).contains(&self.timeout_secs) {
            return Err(ConfigError::mail(format!(
                "mail.timeout_secs must be {}-{}, got {}",
                MIN_MAIL_TIMEOUT_SECS, MAX_MAIL_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        Ok(())
    }
}

fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

impl std::fmt::Debug for MailConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MailConfig")
            .field("transport", &self.transport)
            .field("relay_url", &self.relay_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("from", &self.from)
            .field("frontend_url", &self.frontend_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
