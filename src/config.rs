use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: Option<u32>,
    pub min_connections: Option<u32>,
}

/// Matching weights and qualification threshold
///
/// Defaults mirror the marketplace's long-standing 50/30/20 split and the
/// 35-point cutoff.
#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
    #[serde(default = "default_min_match_score")]
    pub min_match_score: i32,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            weights: WeightsConfig::default(),
            min_match_score: default_min_match_score(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_specialty_weight")]
    pub specialty: f64,
    #[serde(default = "default_proximity_weight")]
    pub proximity: f64,
    #[serde(default = "default_rating_weight")]
    pub rating: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            specialty: default_specialty_weight(),
            proximity: default_proximity_weight(),
            rating: default_rating_weight(),
        }
    }
}

fn default_specialty_weight() -> f64 { 0.5 }
fn default_proximity_weight() -> f64 { 0.3 }
fn default_rating_weight() -> f64 { 0.2 }
fn default_min_match_score() -> i32 { crate::models::MIN_MATCH_SCORE }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with REMODEL_)
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with REMODEL_)
            // e.g., REMODEL_SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("REMODEL")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        // DATABASE_URL wins over anything from the config files
        if let Ok(database_url) = std::env::var("DATABASE_URL") {
            settings = Config::builder()
                .add_source(settings)
                .set_override("database.url", database_url)?
                .build()?;
        }

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("REMODEL")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights() {
        let weights = WeightsConfig::default();
        assert_eq!(weights.specialty, 0.5);
        assert_eq!(weights.proximity, 0.3);
        assert_eq!(weights.rating, 0.2);
    }

    #[test]
    fn test_default_threshold() {
        let matching = MatchingSettings::default();
        assert_eq!(matching.min_match_score, 35);
    }

    #[test]
    fn test_default_logging() {
        let logging = LoggingSettings::default();
        assert_eq!(logging.level, "info");
        assert_eq!(logging.format, "json");
    }

    #[test]
    fn test_logging_section_overrides_defaults() {
        use config::FileFormat;

        let cfg = Config::builder()
            .add_source(File::from_str("level = \"debug\"", FileFormat::Toml))
            .build()
            .unwrap();
        let logging: LoggingSettings = cfg.try_deserialize().unwrap();

        assert_eq!(logging.level, "debug");
        // Unset fields keep their defaults
        assert_eq!(logging.format, "json");
    }
}
