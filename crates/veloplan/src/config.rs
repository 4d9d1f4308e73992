use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use veloplan_core::filter::DEFAULT_WINDOW;

/// Defaults applied when a subcommand argument is omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Planner defaults
    #[serde(default)]
    pub planner: PlannerConfig,

    /// Speed filter defaults
    #[serde(default)]
    pub filter: FilterConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            planner: PlannerConfig::default(),
            filter: FilterConfig::default(),
        }
    }
}

/// Planner defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Acceleration rate in m/s^2
    #[serde(default = "default_accel")]
    pub accel: f64,

    /// Maximum allowable speed in m/s
    #[serde(default = "default_max_speed")]
    pub max_speed: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            accel: default_accel(),
            max_speed: default_max_speed(),
        }
    }
}

/// Speed filter defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Moving-average window size
    #[serde(default = "default_window")]
    pub window: usize,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            window: default_window(),
        }
    }
}

fn default_accel() -> f64 {
    1.5
}

fn default_max_speed() -> f64 {
    5.0
}

fn default_window() -> usize {
    DEFAULT_WINDOW
}

impl Config {
    /// Load configuration from a file, auto-detecting TOML or JSON format
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;

        // Try to determine format from extension
        let extension = path.extension().and_then(|s| s.to_str());

        match extension {
            Some("toml") => Self::from_toml(&content),
            Some("json") => Self::from_json(&content),
            _ => {
                // Try TOML first (preferred), fall back to JSON
                Self::from_toml(&content).or_else(|_| Self::from_json(&content))
            }
        }
    }

    /// Parse configuration from TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("failed to parse config as TOML")
    }

    /// Parse configuration from JSON string
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("failed to parse config as JSON")
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !self.planner.accel.is_finite() || self.planner.accel < 0.0 {
            anyhow::bail!("planner.accel must be finite and non-negative");
        }
        if !self.planner.max_speed.is_finite() || self.planner.max_speed < 0.0 {
            anyhow::bail!("planner.max_speed must be finite and non-negative");
        }
        if self.filter.window == 0 {
            anyhow::bail!("filter.window must be a positive integer");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_toml() {
        let toml = r#"
[planner]
accel = 2.0
max_speed = 8.0

[filter]
window = 5
"#;

        let config = Config::from_toml(toml).unwrap();
        assert_eq!(config.planner.accel, 2.0);
        assert_eq!(config.planner.max_speed, 8.0);
        assert_eq!(config.filter.window, 5);
    }

    #[test]
    fn test_parse_json() {
        let json = r#"{
            "planner": {
                "accel": 2.0,
                "max_speed": 8.0
            },
            "filter": {
                "window": 5
            }
        }"#;

        let config = Config::from_json(json).unwrap();
        assert_eq!(config.planner.accel, 2.0);
        assert_eq!(config.filter.window, 5);
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.planner.accel, 1.5);
        assert_eq!(config.planner.max_speed, 5.0);
        assert_eq!(config.filter.window, 3);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::default();
        config.filter.window = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.planner.accel = -1.0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.planner.max_speed = f64::NAN;
        assert!(config.validate().is_err());

        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_from_file_toml() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[filter]\nwindow = 7").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.filter.window, 7);
        // Untouched sections keep their defaults.
        assert_eq!(config.planner.accel, 1.5);
    }
}
