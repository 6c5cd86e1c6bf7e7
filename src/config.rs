//! Application configuration.

use crate::consts::cli_consts::{API_ENDPOINT_ENV, DEFAULT_PLANT_ID, PLANT_ID_ENV};
use crate::environment::Environment;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, path::PathBuf};

/// Persisted settings. Either field may be left out of the file.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_endpoint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plant_id: Option<String>,
}

impl Config {
    /// Create Config with the given endpoint and plant ID.
    pub fn new(api_endpoint: Option<String>, plant_id: Option<String>) -> Self {
        Config {
            api_endpoint,
            plant_id,
        }
    }

    /// Loads configuration from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, std::io::Error> {
        let buf = fs::read(path)?;
        let config: Config = serde_json::from_slice(&buf)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }

    /// Saves the configuration to a JSON file at the given path.
    ///
    /// Directories will be created if they don't exist. This method overwrites existing files.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if writing to file fails or serialization fails.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Serialization failed: {}", e),
            )
        })?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Removes the configuration file. A missing file is not an error.
    pub fn clear(path: &Path) -> Result<(), std::io::Error> {
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}

/// Path of the config file, `~/.gardenice/config.json`.
pub fn get_config_path() -> Result<PathBuf, std::io::Error> {
    let home_path = home::home_dir().ok_or(std::io::Error::new(
        std::io::ErrorKind::NotFound,
        "Home directory not found",
    ))?;
    Ok(home_path.join(".gardenice").join("config.json"))
}

/// Endpoint and plant that a session monitors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub environment: Environment,
    pub plant_id: String,
}

impl Settings {
    /// Resolve each field from, in order: command-line flag, environment
    /// variable, config file, built-in default.
    pub fn resolve(
        flag_endpoint: Option<String>,
        flag_plant_id: Option<String>,
        env_endpoint: Option<String>,
        env_plant_id: Option<String>,
        file: Option<&Config>,
    ) -> Result<Self, String> {
        let non_empty = |value: Option<String>| value.filter(|v| !v.trim().is_empty());

        let environment = non_empty(flag_endpoint)
            .or_else(|| non_empty(env_endpoint))
            .or_else(|| non_empty(file.and_then(|c| c.api_endpoint.clone())))
            .map(|endpoint| endpoint.parse::<Environment>())
            .transpose()?
            .unwrap_or_default();

        let plant_id = non_empty(flag_plant_id)
            .or_else(|| non_empty(env_plant_id))
            .or_else(|| non_empty(file.and_then(|c| c.plant_id.clone())))
            .map(|id| id.trim().to_string())
            .unwrap_or_else(|| DEFAULT_PLANT_ID.to_string());

        Ok(Settings {
            environment,
            plant_id,
        })
    }

    /// Resolve using the process environment and the config file at `config_path`.
    pub fn from_process(
        flag_endpoint: Option<String>,
        flag_plant_id: Option<String>,
        config_path: &Path,
    ) -> Result<Self, String> {
        let file = if config_path.exists() {
            Some(
                Config::load_from_file(config_path)
                    .map_err(|e| format!("Failed to load config: {}", e))?,
            )
        } else {
            None
        };
        Self::resolve(
            flag_endpoint,
            flag_plant_id,
            std::env::var(API_ENDPOINT_ENV).ok(),
            std::env::var(PLANT_ID_ENV).ok(),
            file.as_ref(),
        )
    }
}
