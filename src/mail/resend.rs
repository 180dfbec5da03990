use reqwest::{Client, StatusCode};
use serde::Serialize;

use crate::config::Config;

const RESEND_API_URL: &str = "https://api.resend.com/emails";

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("Resend API key not configured")]
    NotConfigured,

    #[error("Mail send failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Resend API error ({status}): {body}")]
    Api { status: StatusCode, body: String },
}

/// One-shot Resend client. A single best-effort send per call, bounded only
/// by the HTTP client defaults.
#[derive(Clone)]
pub struct ResendMailer {
    client: Client,
    api_key: Option<String>,
    from: String,
}

impl ResendMailer {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            api_key: config.resend_api_key.clone(),
            from: config.mail_from.clone(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Send one HTML email, returning the provider receipt on success.
    /// Without an API key this fails before any network I/O.
    pub async fn send(
        &self,
        to: &str,
        subject: &str,
        html: &str,
    ) -> Result<serde_json::Value, ProviderError> {
        #[derive(Serialize)]
        struct Payload<'a> {
            from: &'a str,
            to: Vec<&'a str>,
            subject: &'a str,
            html: &'a str,
        }

        let api_key = self.api_key.as_deref().ok_or(ProviderError::NotConfigured)?;

        let payload = Payload {
            from: &self.from,
            to: vec![to],
            subject,
            html,
        };

        let res = self
            .client
            .post(RESEND_API_URL)
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            return Err(ProviderError::Api { status, body });
        }

        let receipt = res.json().await?;
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(api_key: Option<&str>) -> Config {
        Config {
            server_host: "localhost".to_string(),
            server_port: 8080,
            resend_api_key: api_key.map(str::to_string),
            mail_from: "Network GPT <noreply@networkinggpt.com>".to_string(),
        }
    }

    #[tokio::test]
    async fn test_send_without_key_fails_before_network() {
        let mailer = ResendMailer::new(&test_config(None));
        assert!(!mailer.is_configured());

        let result = mailer.send("a@b.com", "subject", "<p>hi</p>").await;
        assert!(matches!(result, Err(ProviderError::NotConfigured)));
    }

    #[test]
    fn test_configured_when_key_present() {
        let mailer = ResendMailer::new(&test_config(Some("re_test_key")));
        assert!(mailer.is_configured());
    }
}
