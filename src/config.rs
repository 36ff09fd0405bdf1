use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub data: DataSettings,
    #[serde(default)]
    pub search: SearchSettings,
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
pub struct DataSettings {
    #[serde(default = "default_data_root")]
    pub root: String,
    pub cache_capacity: Option<u64>,
    pub cache_ttl_secs: Option<u64>,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            root: default_data_root(),
            cache_capacity: None,
            cache_ttl_secs: None,
        }
    }
}

fn default_data_root() -> String { "data".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct SearchSettings {
    #[serde(default = "default_radius")]
    pub radius: f64,
    #[serde(default = "default_min_discount_days")]
    pub min_discount_days: i64,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            radius: default_radius(),
            min_discount_days: default_min_discount_days(),
        }
    }
}

fn default_radius() -> f64 { crate::core::DEFAULT_RADIUS }
fn default_min_discount_days() -> i64 { crate::core::pricing::DEFAULT_MIN_DISCOUNT_DAYS }

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
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with CAMPERS__)
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., CAMPERS__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("CAMPERS")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings = substitute_env_vars(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("CAMPERS")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

/// Apply unprefixed environment overrides
///
/// `DATA_ROOT` points the service at another data directory and `PORT`
/// overrides the listen port, as set by most container platforms.
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let mut builder = Config::builder().add_source(settings);

    if let Ok(root) = env::var("DATA_ROOT") {
        builder = builder.set_override("data.root", root)?;
    }
    if let Some(port) = env::var("PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
        builder = builder.set_override("server.port", i64::from(port))?;
    }

    builder.build()
}
