use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{Local, NaiveDateTime};
use std::{fmt::Debug, sync::Arc};
use tracing::info;

use crate::{
    Config, MonitorPayload,
    message::{WebhookMessage, format_report},
    provider::{WeatherProvider, provider_from_config},
    webhook::{Notifier, WebhookNotifier},
};

/// Work performed for a single tick, off the request path.
#[async_trait]
pub trait TickHandler: Send + Sync + Debug {
    async fn handle_tick(&self, payload: MonitorPayload) -> Result<()>;
}

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Fetches weather for the tick's location and posts the report back.
#[derive(Debug, Clone)]
pub struct WeatherMonitor {
    provider: Arc<dyn WeatherProvider>,
    notifier: Arc<dyn Notifier>,
    default_location: String,
    clock: fn() -> NaiveDateTime,
}

impl WeatherMonitor {
    pub fn new(
        provider: Arc<dyn WeatherProvider>,
        notifier: Arc<dyn Notifier>,
        default_location: impl Into<String>,
    ) -> Self {
        Self { provider, notifier, default_location: default_location.into(), clock: local_now }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let provider = provider_from_config(config)?;
        Ok(Self::new(provider, Arc::new(WebhookNotifier::new()), config.default_location.clone()))
    }

    /// Overrides the time source used for the report timestamp.
    pub fn with_clock(mut self, clock: fn() -> NaiveDateTime) -> Self {
        self.clock = clock;
        self
    }

    /// The payload's `location` setting, or the configured default.
    pub fn resolve_location<'a>(&'a self, payload: &'a MonitorPayload) -> &'a str {
        payload.location().unwrap_or(&self.default_location)
    }
}

#[async_trait]
impl TickHandler for WeatherMonitor {
    async fn handle_tick(&self, payload: MonitorPayload) -> Result<()> {
        let location = self.resolve_location(&payload);
        info!(channel_id = %payload.channel_id, location, "running weather check");

        let data = self
            .provider
            .current(location)
            .await
            .with_context(|| format!("Failed to fetch weather for '{location}'"))?;

        let message = WebhookMessage::success(format_report(&data, (self.clock)()));
        self.notifier.notify(&payload.return_url, &message).await?;

        info!(channel_id = %payload.channel_id, "weather report delivered");
        Ok(())
    }
}
