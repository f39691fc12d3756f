use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::fmt::Debug;
use tracing::{error, info};

use crate::{message::WebhookMessage, provider::truncate_body};

/// Delivers a formatted report to a caller-supplied URL.
#[async_trait]
pub trait Notifier: Send + Sync + Debug {
    async fn notify(&self, url: &str, message: &WebhookMessage) -> Result<()>;
}

/// Posts reports as JSON. No retries.
#[derive(Debug, Clone, Default)]
pub struct WebhookNotifier {
    http: Client,
}

impl WebhookNotifier {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Notifier for WebhookNotifier {
    async fn notify(&self, url: &str, message: &WebhookMessage) -> Result<()> {
        info!(url, "posting weather report");

        let res = self
            .http
            .post(url)
            .json(message)
            .send()
            .await
            .with_context(|| format!("Failed to send weather report to {url}"))?;

        let status = res.status();
        if status.is_success() {
            return Ok(());
        }

        let body = match res.text().await {
            Ok(body) => truncate_body(&body),
            Err(err) => format!("<unreadable body: {}>", err.without_url()),
        };
        error!(url, %status, body = %body, "webhook rejected weather report");
        Err(anyhow::anyhow!("Webhook {url} failed with status {status}: {body}"))
    }
}
