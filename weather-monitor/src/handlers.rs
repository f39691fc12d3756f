use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode, header::HOST},
    response::IntoResponse,
};
use serde::Serialize;
use serde_json::{Value, json};
use tracing::{error, info};
use weather_core::{Config, Manifest, MonitorPayload};

use crate::state::AppState;

const FORWARDED_PROTO: &str = "x-forwarded-proto";

#[derive(Debug, Serialize)]
pub struct TickAccepted {
    pub status: &'static str,
}

pub async fn index() -> Json<Value> {
    Json(json!({
        "info": "Welcome to Weather an air quality Monitor",
        "status": "success"
    }))
}

pub async fn integration_manifest(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Json<Manifest> {
    let base = base_url(&headers, &state.config);
    Json(Manifest::new(&base, &state.config))
}

/// Accepts a tick and runs the weather check in the background. The caller
/// never sees the outcome.
pub async fn tick(
    State(state): State<AppState>,
    Json(payload): Json<MonitorPayload>,
) -> impl IntoResponse {
    info!(channel_id = %payload.channel_id, "tick accepted");

    let ticks = Arc::clone(&state.ticks);
    tokio::spawn(async move {
        let channel_id = payload.channel_id.clone();
        if let Err(err) = ticks.handle_tick(payload).await {
            error!(%channel_id, "weather check failed: {err:#}");
        }
    });

    (StatusCode::ACCEPTED, Json(TickAccepted { status: "accepted" }))
}

/// Base URL the service is reached at, always ending in `/`.
///
/// `public_url` wins; otherwise the `Host` and `X-Forwarded-Proto` headers are
/// used, falling back to the bind address over plain http.
pub fn base_url(headers: &HeaderMap, config: &Config) -> String {
    if let Some(url) = config.public_url.as_deref() {
        return format!("{}/", url.trim_end_matches('/'));
    }

    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
    };

    let host = header(HOST.as_str())
        .map(str::to_owned)
        .unwrap_or_else(|| config.bind_address());

    // Proxies may append their own scheme; the first one is the client's.
    let scheme = header(FORWARDED_PROTO)
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .unwrap_or("http");

    format!("{scheme}://{host}/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(*name, HeaderValue::from_static(value));
        }
        map
    }

    #[test]
    fn base_url_uses_host_header() {
        let url = base_url(&headers(&[("host", "monitor.example.com")]), &Config::default());
        assert_eq!(url, "http://monitor.example.com/");
    }

    #[test]
    fn base_url_honours_forwarded_proto() {
        let url = base_url(
            &headers(&[("host", "monitor.example.com"), ("x-forwarded-proto", "https, http")]),
            &Config::default(),
        );
        assert_eq!(url, "https://monitor.example.com/");
    }

    #[test]
    fn base_url_falls_back_to_bind_address() {
        let url = base_url(&HeaderMap::new(), &Config::default());
        assert_eq!(url, "http://0.0.0.0:8000/");
    }

    #[test]
    fn public_url_overrides_headers() {
        let cfg = Config {
            public_url: Some("https://weather.example.org".into()),
            ..Config::default()
        };
        let url = base_url(&headers(&[("host", "internal:8000")]), &cfg);

        assert_eq!(url, "https://weather.example.org/");
    }
}
