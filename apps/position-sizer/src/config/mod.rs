//! Configuration for the position sizer.
//!
//! Loads form defaults, field presets and logging settings from YAML with
//! environment variable interpolation. Every section is optional.
//!
//! # Usage
//!
//! ```rust,ignore
//! use position_sizer::config::load_config;
//!
//! // Read position-sizer.yaml when present, defaults otherwise
//! let config = load_config(None)?;
//!
//! // Load from custom path
//! let config = load_config(Some("custom/sizer.yaml"))?;
//!
//! println!("default entry: {}", config.form.entry_price);
//! ```

mod observability;
mod presets;

use std::path::Path;
use std::sync::OnceLock;

use regex::{Captures, Regex};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calculator::CalculatorForm;
use crate::sizing::parse_reward_ratio;

pub use observability::{LoggingConfig, ObservabilityConfig};
pub use presets::PresetsConfig;

/// Config file read when no path is given.
pub const DEFAULT_CONFIG_PATH: &str = "position-sizer.yaml";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        /// Path to the config file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("Failed to parse config YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),

    /// Configuration validation failed.
    #[error("Config validation failed: {0}")]
    ValidationError(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Initial calculator field values.
    #[serde(default)]
    pub form: CalculatorForm,
    /// Quick-pick values per field.
    #[serde(default)]
    pub presets: PresetsConfig,
    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

/// Load configuration from a YAML file.
///
/// An explicit `path` must exist. Without one, [`DEFAULT_CONFIG_PATH`] is read
/// if present and built-in defaults are used otherwise.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let path = match path {
        Some(path) => path,
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => DEFAULT_CONFIG_PATH,
        None => {
            tracing::debug!("no config file found, using defaults");
            return Ok(Config::default());
        }
    };

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_string(),
        source: e,
    })?;

    let config = load_config_from_string(&contents)?;
    tracing::debug!(path, "loaded config");
    Ok(config)
}

/// Load configuration from a YAML string (useful for testing).
pub fn load_config_from_string(yaml: &str) -> Result<Config, ConfigError> {
    let interpolated = interpolate_env_vars(yaml);
    let config: Config = serde_yaml_bw::from_str(&interpolated)?;
    validate_config(&config)?;
    Ok(config)
}

/// Replace `${VAR}` and `${VAR:-default}` with environment values.
///
/// Unset or empty variables take the default, or the empty string without one.
#[allow(clippy::expect_used)] // Regex is compile-time constant; expect() is safe here
fn interpolate_env_vars(input: &str) -> String {
    static ENV_VAR_REGEX: OnceLock<Regex> = OnceLock::new();

    let re = ENV_VAR_REGEX.get_or_init(|| {
        Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}")
            .expect("env var regex is valid")
    });

    re.replace_all(input, |caps: &Captures<'_>| {
        let default = caps.get(2).map_or("", |m| m.as_str());
        match std::env::var(&caps[1]) {
            Ok(value) if !value.is_empty() => value,
            _ => default.to_string(),
        }
    })
    .into_owned()
}

/// Validate configuration values.
fn validate_config(config: &Config) -> Result<(), ConfigError> {
    let presets = &config.presets;

    if let Some(bad) = presets.account_balance.iter().find(|b| **b <= Decimal::ZERO) {
        return Err(ConfigError::ValidationError(format!(
            "presets.account_balance must be positive, got {bad}"
        )));
    }

    if let Some(bad) = presets
        .risk_percent
        .iter()
        .find(|r| **r <= Decimal::ZERO || **r > Decimal::ONE_HUNDRED)
    {
        return Err(ConfigError::ValidationError(format!(
            "presets.risk_percent must be between 0 and 100, got {bad}"
        )));
    }

    if let Some(bad) = presets
        .risk_reward
        .iter()
        .find(|ratio| parse_reward_ratio(ratio).is_none())
    {
        return Err(ConfigError::ValidationError(format!(
            "presets.risk_reward entry '{bad}' is not a positive risk:reward ratio"
        )));
    }

    let format = config.observability.logging.format.as_str();
    if !LoggingConfig::FORMATS.contains(&format) {
        return Err(ConfigError::ValidationError(format!(
            "observability.logging.format must be one of: {:?}",
            LoggingConfig::FORMATS
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::FieldKey;
    use rust_decimal_macros::dec;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.form, CalculatorForm::default());
        assert_eq!(config.presets.account_balance.len(), 4);
        assert_eq!(config.presets.risk_percent[0], dec!(0.5));
        assert_eq!(config.presets.risk_reward, vec!["1:2", "1:3", "1:5"]);
        assert_eq!(config.observability.logging.level, "warn");
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_load_partial_config() {
        let yaml = r#"
form:
  entry_price: "250"
  stop_loss_price: 240
presets:
  risk_percent: [1, 1.5]
"#;

        let config = match load_config_from_string(yaml) {
            Ok(c) => c,
            Err(e) => panic!("should load partial config: {e}"),
        };
        assert_eq!(config.form.entry_price, "250");
        assert_eq!(config.form.stop_loss_price, "240");
        assert_eq!(config.form.account_balance, "100000"); // Default value
        assert_eq!(config.presets.risk_percent, vec![dec!(1), dec!(1.5)]);
        assert_eq!(config.presets.risk_reward.len(), 3); // Default value

        let labels: Vec<String> = config
            .presets
            .for_field(FieldKey::RiskPercent)
            .into_iter()
            .map(|p| p.label)
            .collect();
        assert_eq!(labels, vec!["1%", "1.5%"]);
    }

    #[test]
    fn test_rejects_bad_presets() {
        let err = load_config_from_string("presets:\n  account_balance: [0]\n").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));

        let err = load_config_from_string("presets:\n  risk_percent: [120]\n").unwrap_err();
        assert!(err.to_string().contains("risk_percent"));

        let err = load_config_from_string("presets:\n  risk_reward: [\"2\"]\n").unwrap_err();
        assert!(err.to_string().contains("'2'"));
    }

    #[test]
    fn test_rejects_unknown_log_format() {
        let yaml = "observability:\n  logging:\n    format: xml\n";
        let err = load_config_from_string(yaml).unwrap_err();
        assert!(err.to_string().contains("observability.logging.format"));
    }

    #[test]
    fn test_rejects_malformed_yaml() {
        let err = load_config_from_string("form: [unclosed").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_env_var_with_default_when_missing() {
        let input = "level: ${POSITION_SIZER_TEST_NONEXISTENT_VAR:-debug}";
        assert_eq!(interpolate_env_vars(input), "level: debug");
    }

    #[test]
    fn test_env_var_without_default_when_missing() {
        let input = "level: '${POSITION_SIZER_TEST_NONEXISTENT_VAR}'";
        assert_eq!(interpolate_env_vars(input), "level: ''");
    }

    #[test]
    fn test_env_var_present() {
        // PATH is set in any test environment
        let path = std::env::var("PATH").unwrap_or_default();
        if !path.is_empty() {
            assert_eq!(interpolate_env_vars("${PATH:-none}"), path);
        }
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "form:\n  risk_reward: \"1:4\"").unwrap();

        let path = file.path().to_str().unwrap();
        let config = load_config(Some(path)).unwrap();
        assert_eq!(config.form.risk_reward, "1:4");
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let err = load_config(Some("/nonexistent/position-sizer.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError { .. }));
    }
}
