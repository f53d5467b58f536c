use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub upstream: UpstreamConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub statistics: StatisticsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Origin allowed by the CORS layer (the frontend).
    #[serde(default = "default_cors_origin")]
    pub cors_origin: String,

    /// "development" exposes a debug block on error responses;
    /// "production" sanitizes non-operational errors.
    #[serde(default = "default_environment")]
    pub environment: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Default TTL applied when a fetch caches a response without an
    /// explicit TTL. `None` means cached entries never expire.
    #[serde(default = "default_cache_ttl_secs")]
    pub default_ttl_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// How often the background sweep purges expired entries.
    #[serde(default = "default_sweep_interval_secs")]
    pub sweep_interval_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StatisticsConfig {
    #[serde(default = "default_recompute_interval_secs")]
    pub recompute_interval_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_port() -> u16 {
    3001
}
fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}
fn default_cors_origin() -> String {
    "http://localhost:3000".to_string()
}
fn default_environment() -> String {
    "development".to_string()
}
fn default_base_url() -> String {
    "https://www.swapi.tech/api".to_string()
}
fn default_timeout_secs() -> u64 {
    10
}
fn default_cache_ttl_secs() -> Option<u64> {
    Some(300)
}
fn default_sweep_interval_secs() -> u64 {
    600
}
fn default_recompute_interval_secs() -> u64 {
    300
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            bind_address: default_bind_address(),
            cors_origin: default_cors_origin(),
            environment: default_environment(),
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            default_ttl_secs: default_cache_ttl_secs(),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            sweep_interval_secs: default_sweep_interval_secs(),
        }
    }
}

impl Default for StatisticsConfig {
    fn default() -> Self {
        Self {
            recompute_interval_secs: default_recompute_interval_secs(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            upstream: UpstreamConfig::default(),
            cache: CacheConfig::default(),
            statistics: StatisticsConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults.
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. holocron.toml in the current directory
    /// 3. /etc/holocron/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new("holocron.toml").exists() {
            Self::from_file("holocron.toml")?
        } else if std::path::Path::new("/etc/holocron/config.toml").exists() {
            Self::from_file("/etc/holocron/config.toml")?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(url) = overrides.upstream_url {
            self.upstream.base_url = url;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("server port cannot be 0".to_string()));
        }
        if self.upstream.base_url.is_empty() {
            return Err(ConfigError::Validation(
                "upstream base_url cannot be empty".to_string(),
            ));
        }
        if self.upstream.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "upstream timeout cannot be 0".to_string(),
            ));
        }
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.server.environment == "production"
    }
}

#[derive(Debug, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub bind_address: Option<String>,
    pub upstream_url: Option<String>,
    pub log_level: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    FileRead(String, String),

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Configuration validation error: {0}")]
    Validation(String),
}
