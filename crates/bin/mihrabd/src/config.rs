//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `mihrab.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Database settings.
    pub database: DatabaseConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Remote API settings.
    pub upstream: UpstreamConfig,
    /// Fixed location settings.
    pub location: LocationConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// `SQLite` database configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// `SQLite` connection URL or file path.
    pub url: String,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Remote API configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// aladhan.com API origin.
    pub aladhan_base_url: String,
    /// Prayer-time calculation method id.
    pub calculation_method: u8,
    /// quran.com API origin.
    pub quran_base_url: String,
    /// Language for translated chapter names.
    pub quran_language: String,
}

/// Fixed position served by the location provider.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LocationConfig {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
    /// Display city, when known.
    pub city: Option<String>,
    /// Display country, when known.
    pub country: Option<String>,
}

impl Config {
    /// Load configuration from `mihrab.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if a
    /// value fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("mihrab.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("MIHRAB_HOST") {
            self.server.host = val;
        }
        if let Ok(val) = std::env::var("MIHRAB_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("MIHRAB_BIND") {
            if let Some((host, port)) = val.rsplit_once(':') {
                self.server.host = host.to_string();
                if let Ok(port) = port.parse() {
                    self.server.port = port;
                }
            }
        }
        if let Ok(val) = std::env::var("MIHRAB_DATABASE_URL") {
            self.database.url = val;
        }
        if let Ok(val) = std::env::var("MIHRAB_LATITUDE") {
            if let Ok(latitude) = val.parse() {
                self.location.latitude = latitude;
            }
        }
        if let Ok(val) = std::env::var("MIHRAB_LONGITUDE") {
            if let Ok(longitude) = val.parse() {
                self.location.longitude = longitude;
            }
        }
        if let Ok(val) = std::env::var("MIHRAB_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if !(-90.0..=90.0).contains(&self.location.latitude) {
            return Err(ConfigError::Validation(
                "latitude must be within [-90, 90]".to_string(),
            ));
        }
        if !(-180.0..=180.0).contains(&self.location.longitude) {
            return Err(ConfigError::Validation(
                "longitude must be within [-180, 180]".to_string(),
            ));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite:mihrab.db?mode=rwc".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "mihrabd=info,mihrab=info,tower_http=debug".to_string(),
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            aladhan_base_url: "https://api.aladhan.com".to_string(),
            calculation_method: 3,
            quran_base_url: "https://api.quran.com/api/v4".to_string(),
            quran_language: "en".to_string(),
        }
    }
}

impl Default for LocationConfig {
    fn default() -> Self {
        // Istanbul, the demo default.
        Self {
            latitude: 41.0082,
            longitude: 28.9784,
            city: Some("Istanbul".to_string()),
            country: Some("Türkiye".to_string()),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
