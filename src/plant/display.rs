//! Display text for plant readings
//!
//! Shared by the dashboard panels, headless mode and the `status` command.

use super::{CaptureTimestamp, Metrics, PlantStatus};
use crate::consts::cli_consts::display::{EXPECTED_METRICS, NOT_AVAILABLE, SENSOR_PLACEHOLDER};

pub fn soil_moisture_text(value: Option<f64>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), |v| format!("{}%", v))
}

pub fn rain_text(value: Option<bool>) -> String {
    match value {
        Some(true) => "Raining".to_string(),
        Some(false) => "Dry".to_string(),
        None => NOT_AVAILABLE.to_string(),
    }
}

pub fn light_text(value: Option<f64>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), |v| format!("{} lux", v))
}

/// Evaluation text shown as the health headline.
pub fn evaluation_headline(status: &PlantStatus) -> String {
    status
        .ai_evaluation()
        .filter(|e| !e.is_empty())
        .unwrap_or("Unknown")
        .to_string()
}

pub fn captured_text(timestamp: Option<&CaptureTimestamp>) -> String {
    let when = timestamp
        .and_then(CaptureTimestamp::to_local)
        .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "unknown".to_string());
    format!("Captured: {}", when)
}

/// Labelled sensor readings in display order.
pub fn sensor_rows(metrics: Option<&Metrics>) -> Vec<(&'static str, &'static str, String)> {
    let metrics = metrics.cloned().unwrap_or_default();
    vec![
        ("💧", "Soil Moisture", soil_moisture_text(metrics.soil_moisture)),
        ("🌧️", "Rain Sensor", rain_text(metrics.rain)),
        ("☀️", "Light Level", light_text(metrics.light)),
    ]
}

/// Hint lines shown under the readings when none arrived yet.
pub fn sensor_hint(metrics: Option<&Metrics>) -> Option<[&'static str; 2]> {
    match metrics {
        Some(m) if m.has_any_reading() => None,
        _ => Some([SENSOR_PLACEHOLDER, EXPECTED_METRICS]),
    }
}
