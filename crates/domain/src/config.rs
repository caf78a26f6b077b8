use serde::{Deserialize, Serialize};

use crate::resolver::ResolverDescriptor;

/// Lower bound on a per-call query timeout, in milliseconds.
pub const MIN_TIMEOUT_MS: u64 = 100;
/// Upper bound on a per-call query timeout, in milliseconds.
pub const MAX_TIMEOUT_MS: u64 = 10_000;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default = "default_resolvers")]
    pub resolvers: Vec<ResolverDescriptor>,

    #[serde(default)]
    pub query: QueryConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QueryConfig {
    /// Per-resolver timeout for `lookup`, in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Per-resolver timeout for `debug`, in milliseconds.
    #[serde(default = "default_debug_timeout_ms")]
    pub debug_timeout_ms: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_timeout_ms() -> u64 {
    500
}

fn default_debug_timeout_ms() -> u64 {
    2000
}

fn default_log_level() -> String {
    "info".to_string()
}

/// The public DoH resolvers queried when no configuration file is found.
fn default_resolvers() -> Vec<ResolverDescriptor> {
    [
        ("DNSPod", "https://doh.pub/dns-query"),
        ("Alidns", "https://dns.alidns.com/dns-query"),
        ("360", "https://doh.360.cn"),
        ("Google", "https://dns.google/dns-query"),
        ("Cloudflare", "https://cloudflare-dns.com/dns-query"),
        ("Quad9", "https://dns.quad9.net/dns-query"),
        ("DNS.SB", "https://doh.dns.sb/dns-query"),
        ("OpenDNS", "https://doh.opendns.com/dns-query"),
        ("AdGuard", "https://dns.adguard-dns.com/dns-query"),
    ]
    .into_iter()
    .map(|(name, endpoint)| ResolverDescriptor::new(name, endpoint))
    .collect()
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
            debug_timeout_ms: default_debug_timeout_ms(),
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
            resolvers: default_resolvers(),
            query: QueryConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults.
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. quorum-dns.toml in current directory
    /// 3. /etc/quorum-dns/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new("quorum-dns.toml").exists() {
            Self::from_file("quorum-dns.toml")?
        } else if std::path::Path::new("/etc/quorum-dns/config.toml").exists() {
            Self::from_file("/etc/quorum-dns/config.toml")?
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
        if let Some(timeout) = overrides.timeout_ms {
            self.query.timeout_ms = timeout;
            self.query.debug_timeout_ms = timeout;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.resolvers.is_empty() {
            return Err(ConfigError::Validation(
                "No resolvers configured".to_string(),
            ));
        }
        for resolver in &self.resolvers {
            resolver
                .validate()
                .map_err(|e| ConfigError::Validation(e.to_string()))?;
        }
        for timeout in [self.query.timeout_ms, self.query.debug_timeout_ms] {
            if !(MIN_TIMEOUT_MS..=MAX_TIMEOUT_MS).contains(&timeout) {
                return Err(ConfigError::Validation(format!(
                    "Timeout {}ms outside allowed range {}..={}ms",
                    timeout, MIN_TIMEOUT_MS, MAX_TIMEOUT_MS
                )));
            }
        }
        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub timeout_ms: Option<u64>,
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
