//! Health classification of the free-text AI evaluation

/// Health class derived from `metrics.ai_evaluation`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
    Unknown,
}

impl HealthStatus {
    /// Classify an evaluation by case-insensitive substring match.
    ///
    /// "unhealthy" contains "healthy", so it has to be checked first.
    pub fn classify(evaluation: Option<&str>) -> Self {
        let Some(evaluation) = evaluation.filter(|e| !e.is_empty()) else {
            return HealthStatus::Unknown;
        };
        let lower = evaluation.to_lowercase();
        if lower.contains("unhealthy") {
            HealthStatus::Unhealthy
        } else if lower.contains("healthy") {
            HealthStatus::Healthy
        } else {
            HealthStatus::Unknown
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            HealthStatus::Healthy => "✅",
            HealthStatus::Unhealthy => "⚠️",
            HealthStatus::Unknown => "❓",
        }
    }

    /// Status style tag, e.g. `status-healthy`.
    pub fn style_tag(&self) -> &'static str {
        match self {
            HealthStatus::Healthy => "status-healthy",
            HealthStatus::Unhealthy => "status-unhealthy",
            HealthStatus::Unknown => "status-unknown",
        }
    }
}
