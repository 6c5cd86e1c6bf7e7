use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Default deployment of the plant status API.
const PRODUCTION_API_ENDPOINT: &str =
    "https://your-api-id.execute-api.us-east-1.amazonaws.com/dev/plant";

/// Represents the plant status API the dashboard talks to.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Environment {
    /// The deployed API Gateway endpoint.
    #[default]
    Production,
    /// Any other endpoint, e.g. a local backend or a staging stage.
    Custom { api_endpoint: String },
}

impl Environment {
    /// Returns the plant status endpoint; plant IDs are appended as a path segment.
    pub fn api_endpoint(&self) -> String {
        match self {
            Environment::Production => PRODUCTION_API_ENDPOINT.to_string(),
            Environment::Custom { api_endpoint } => api_endpoint.clone(),
        }
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("production") {
            return Ok(Environment::Production);
        }
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            return Ok(Environment::Custom {
                api_endpoint: trimmed.trim_end_matches('/').to_string(),
            });
        }
        Err(format!(
            "Invalid API endpoint '{}': expected 'production' or an http(s) URL",
            s
        ))
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Production => write!(f, "Production"),
            Environment::Custom { .. } => write!(f, "Custom"),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, URL: {}", self, self.api_endpoint())
    }
}
