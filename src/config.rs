use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::warn;

use crate::scene::env::HistoricalPeriod;

/// Defaults substituted for request parameters the caller leaves out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentDefaults {
    #[serde(default = "EnvironmentDefaults::default_temperature_c")]
    pub temperature_c: f32,
    #[serde(default = "EnvironmentDefaults::default_period")]
    pub period: HistoricalPeriod,
    #[serde(default = "EnvironmentDefaults::default_time_of_day")]
    pub time_of_day: String,
    #[serde(default = "EnvironmentDefaults::default_location_type")]
    pub location_type: String,
}

impl EnvironmentDefaults {
    fn default_temperature_c() -> f32 {
        22.0
    }
    fn default_period() -> HistoricalPeriod {
        HistoricalPeriod::Roman
    }
    fn default_time_of_day() -> String {
        "midday".to_string()
    }
    fn default_location_type() -> String {
        "outdoor".to_string()
    }
}

impl Default for EnvironmentDefaults {
    fn default() -> Self {
        Self {
            temperature_c: Self::default_temperature_c(),
            period: Self::default_period(),
            time_of_day: Self::default_time_of_day(),
            location_type: Self::default_location_type(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SamplingConfig {
    /// Fixed RNG seed. Absent means a fresh OS-seeded generator per run.
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub defaults: EnvironmentDefaults,
    #[serde(default)]
    pub sampling: SamplingConfig,
}

impl EngineConfig {
    /// Read an existing config, fall back to defaults on read/parse
    /// errors, and write the default file when none exists.
    pub fn load_or_default(path: &str) -> Self {
        let path_obj = Path::new(path);
        if path_obj.exists() {
            match fs::read_to_string(path_obj) {
                Ok(contents) => match toml::from_str(&contents) {
                    Ok(cfg) => return cfg,
                    Err(err) => {
                        warn!("failed to parse config {path}: {err}. Using defaults.");
                    }
                },
                Err(err) => {
                    warn!("failed to read config {path}: {err}. Using defaults.");
                }
            }
            return Self::default();
        }

        // File does not exist: write defaults and return them.
        let default_cfg = Self::default();
        match toml::to_string_pretty(&default_cfg) {
            Ok(text) => {
                if let Err(err) = fs::write(path_obj, text) {
                    warn!("failed to write default config {path}: {err}");
                }
            }
            Err(err) => {
                warn!("failed to serialize default config: {err}");
            }
        }
        default_cfg
    }
}
