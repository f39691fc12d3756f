use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// A configurable field descriptor, as advertised in the manifest and echoed
/// back by the scheduler on every tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Setting {
    pub label: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub required: bool,
    pub default: Value,
}

impl Setting {
    pub fn text(label: &str, required: bool, default: &str) -> Self {
        Self {
            label: label.to_string(),
            kind: "text".to_string(),
            required,
            default: Value::String(default.to_string()),
        }
    }
}

/// Body of a tick: where to deliver the report and which settings apply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitorPayload {
    pub channel_id: String,
    pub return_url: String,
    pub settings: Vec<Setting>,
}

impl MonitorPayload {
    /// Finds a setting by label, ignoring case.
    pub fn setting(&self, label: &str) -> Option<&Setting> {
        self.settings.iter().find(|s| s.label.eq_ignore_ascii_case(label))
    }

    /// The `location` setting's value, if present and non-blank.
    pub fn location(&self) -> Option<&str> {
        self.setting("location")
            .and_then(|s| s.default.as_str())
            .map(str::trim)
            .filter(|l| !l.is_empty())
    }
}

/// Current conditions as returned by weatherapi.com `current.json?aqi=yes`.
///
/// Numbers are kept as [`Number`] so they render exactly as the API sent them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherData {
    pub location: Location,
    pub current: Current,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Current {
    pub temp_c: Number,
    pub condition: Condition,
    pub wind_kph: Number,
    pub pressure_mb: Number,
    pub air_quality: AirQuality,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirQuality {
    pub co: Number,
    pub no2: Number,
    pub o3: Number,
    pub so2: Number,
    pub pm2_5: Number,
    pub pm10: Number,
    #[serde(rename = "us-epa-index")]
    pub us_epa_index: Number,
}
