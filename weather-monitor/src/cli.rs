use std::{path::PathBuf, sync::Arc};

use anyhow::Context;
use clap::Parser;
use tokio::{net::TcpListener, signal};
use tracing::info;
use weather_core::{Config, WeatherMonitor};

use crate::{routes::create_router, state::AppState};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-monitor", version, about = "Weather and air quality monitor service")]
pub struct Cli {
    /// Address to bind, overrides the config file.
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on, overrides the config file.
    #[arg(long, short)]
    pub port: Option<u16>,

    /// Config file; defaults to the platform config directory.
    #[arg(long, short)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Resolves configuration: file, then environment, then flags.
    pub fn load_config(&self) -> anyhow::Result<Config> {
        let config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };

        Ok(self.apply_overrides(config.with_env()))
    }

    fn apply_overrides(&self, mut config: Config) -> Config {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        config
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let config = self.load_config()?;
        let monitor = WeatherMonitor::from_config(&config)?;

        let addr = config.bind_address();
        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind {addr}"))?;

        info!(
            %addr,
            weather_api = %config.weather_api_url,
            default_location = %config.default_location,
            "weather monitor listening"
        );

        let app = create_router(AppState::new(config, Arc::new(monitor)));

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("HTTP server failed")?;

        Ok(())
    }
}

async fn shutdown_signal() {
    if signal::ctrl_c().await.is_ok() {
        info!("received Ctrl+C, shutting down");
    }
}
