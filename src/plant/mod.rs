//! Plant status data model
//!
//! Mirrors the JSON payload served by the plant status endpoint. Every field is
//! optional on the wire; `null` and a missing key both decode to `None`.

pub mod display;
pub mod health;

pub use health::HealthStatus;

use chrono::{DateTime, Local, NaiveDateTime, Utc};
use serde::Deserialize;

/// Numeric timestamps below this are Unix seconds, at or above it Unix milliseconds.
const MILLIS_THRESHOLD: f64 = 1e12;

/// Latest status of one plant as returned by `GET {endpoint}/{plant_id}`.
///
/// The plant ID itself comes from configuration; the `plant_id` echoed by the
/// backend is ignored.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct PlantStatus {
    #[serde(default)]
    pub metrics: Option<Metrics>,
    /// URL of the most recently captured image.
    #[serde(default)]
    pub image_url: Option<String>,
    /// When the image was captured.
    #[serde(default)]
    pub timestamp: Option<CaptureTimestamp>,
}

/// AI assessment and sensor readings. Absence is distinct from a falsy value.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Metrics {
    /// Free-text health assessment, e.g. "Plant is healthy".
    #[serde(default)]
    pub ai_evaluation: Option<String>,
    /// Soil moisture in percent.
    #[serde(default)]
    pub soil_moisture: Option<f64>,
    /// `true` while the rain sensor reports rain.
    #[serde(default)]
    pub rain: Option<bool>,
    /// Light level in lux.
    #[serde(default)]
    pub light: Option<f64>,
}

impl Metrics {
    /// Whether at least one sensor reading is present.
    pub fn has_any_reading(&self) -> bool {
        self.soil_moisture.is_some() || self.rain.is_some() || self.light.is_some()
    }
}

impl PlantStatus {
    pub fn ai_evaluation(&self) -> Option<&str> {
        self.metrics.as_ref().and_then(|m| m.ai_evaluation.as_deref())
    }

    pub fn health(&self) -> HealthStatus {
        HealthStatus::classify(self.ai_evaluation())
    }

    /// Non-empty image URL, if any.
    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref().filter(|url| !url.is_empty())
    }
}

/// Capture time as sent by the backend: an ISO 8601 string or a Unix epoch number.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CaptureTimestamp {
    Epoch(f64),
    Text(String),
}

impl CaptureTimestamp {
    /// Resolve to a local date-time, or `None` when the value cannot be interpreted.
    pub fn to_local(&self) -> Option<DateTime<Local>> {
        let utc = match self {
            CaptureTimestamp::Epoch(value) => from_epoch(*value),
            CaptureTimestamp::Text(text) => from_text(text.trim()),
        }?;
        Some(utc.with_timezone(&Local))
    }
}

fn from_epoch(value: f64) -> Option<DateTime<Utc>> {
    if !value.is_finite() {
        return None;
    }
    let millis = if value.abs() < MILLIS_THRESHOLD {
        value * 1000.0
    } else {
        value
    };
    DateTime::from_timestamp_millis(millis.round() as i64)
}

fn from_text(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Some(parsed.with_timezone(&Utc));
    }
    // ISO 8601 without an offset is taken as UTC
    if let Ok(naive) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    text.parse::<f64>().ok().and_then(from_epoch)
}
