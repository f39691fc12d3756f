//! Self-describing integration descriptor served at `/integration.json`.

use serde::{Deserialize, Serialize};

use crate::{APP_NAME, Config, model::Setting};

const APP_DESCRIPTION: &str =
    "Periodically reports current weather and air quality for a location to a channel.";
const AUTHOR: &str = "Weather Monitor contributors";
const CREATED_AT: &str = "2025-02-18";
const UPDATED_AT: &str = "2025-02-20";
const DEFAULT_INTERVAL: &str = "* * * * *";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    pub data: ManifestData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestData {
    pub date: ManifestDates,
    pub descriptions: Descriptions,
    pub is_active: bool,
    pub integration_type: String,
    pub integration_category: String,
    pub key_features: Vec<String>,
    pub author: String,
    pub settings: Vec<Setting>,
    pub target_url: String,
    pub tick_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestDates {
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Descriptions {
    pub app_name: String,
    pub app_description: String,
    pub app_logo: String,
    pub app_url: String,
    pub background_color: String,
}

impl Manifest {
    /// Builds the descriptor for a service reachable at `base_url`.
    pub fn new(base_url: &str, config: &Config) -> Self {
        let base_url = normalize_base_url(base_url);

        Self {
            data: ManifestData {
                date: ManifestDates {
                    created_at: CREATED_AT.to_string(),
                    updated_at: UPDATED_AT.to_string(),
                },
                descriptions: Descriptions {
                    app_name: APP_NAME.to_string(),
                    app_description: APP_DESCRIPTION.to_string(),
                    app_logo: config.logo_url.clone().unwrap_or_default(),
                    app_url: base_url.clone(),
                    background_color: "#fff".to_string(),
                },
                is_active: true,
                integration_type: "interval".to_string(),
                integration_category: "Monitoring & Logging".to_string(),
                key_features: vec![
                    "Current weather conditions for a configurable location".to_string(),
                    "Air quality readings (CO, NO2, O3, SO2, PM2.5, PM10, US EPA index)"
                        .to_string(),
                    "Reports delivered to the channel on every tick".to_string(),
                ],
                author: AUTHOR.to_string(),
                settings: vec![
                    Setting::text("location", true, &config.default_location),
                    Setting::text("interval", true, DEFAULT_INTERVAL),
                ],
                target_url: String::new(),
                tick_url: format!("{base_url}tick"),
            },
        }
    }
}

/// Ensures exactly one trailing slash.
fn normalize_base_url(base_url: &str) -> String {
    format!("{}/", base_url.trim_end_matches('/'))
}
