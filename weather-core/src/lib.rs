//! Core library for the weather and air quality monitor.
//!
//! This crate defines:
//! - Configuration (file, environment)
//! - The weatherapi.com provider and its data model
//! - Report formatting and webhook delivery
//! - The integration manifest and per-tick orchestration
//!
//! It is used by `weather-monitor`, but carries no HTTP server of its own.

pub mod config;
pub mod manifest;
pub mod message;
pub mod model;
pub mod monitor;
pub mod provider;
pub mod webhook;

/// Display name used in the manifest and as the webhook username.
pub const APP_NAME: &str = "Weather and Air Quality Monitor";

pub use config::{Config, ConfigError, ServerConfig};
pub use manifest::Manifest;
pub use message::{WebhookMessage, format_report};
pub use model::{MonitorPayload, Setting, WeatherData};
pub use monitor::{TickHandler, WeatherMonitor};
pub use provider::WeatherProvider;
pub use webhook::{Notifier, WebhookNotifier};
