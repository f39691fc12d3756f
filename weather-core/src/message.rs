use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{APP_NAME, model::WeatherData};

/// Event name attached to every delivered report.
pub const EVENT_NAME: &str = "Weather and Air Quality check";

/// Format of the `Time:` line.
pub const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// JSON body posted to a tick's `return_url`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookMessage {
    pub message: String,
    pub username: String,
    pub event_name: String,
    pub status: String,
}

impl WebhookMessage {
    pub fn success(message: String) -> Self {
        Self {
            message,
            username: APP_NAME.to_string(),
            event_name: EVENT_NAME.to_string(),
            status: "success".to_string(),
        }
    }
}

/// Renders the fixed report template. Receivers match on this layout, so
/// whitespace is significant.
pub fn format_report(data: &WeatherData, at: NaiveDateTime) -> String {
    let current = &data.current;
    let aq = &current.air_quality;

    format!(
        "
    Time: {time}

    Location: {location}
    Temp.: {temp} deg. celsius
    Condition: {condition}
    Wind Speed: {wind} kmph
    Pressure: {pressure} milibar
    Air Quality:
        CO2: {co}
        NO2: {no2}
        O3: {o3}
        SO2: {so2}
        Fine Particle Matter: {pm2_5}
        Particle Matter: {pm10}
        Air Quality Index: {aqi}
    ",
        time = at.format(TIME_FORMAT),
        location = data.location.name,
        temp = current.temp_c,
        condition = current.condition.text,
        wind = current.wind_kph,
        pressure = current.pressure_mb,
        co = aq.co,
        no2 = aq.no2,
        o3 = aq.o3,
        so2 = aq.so2,
        pm2_5 = aq.pm2_5,
        pm10 = aq.pm10,
        aqi = aq.us_epa_index,
    )
}
