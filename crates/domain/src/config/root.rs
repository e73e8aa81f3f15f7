use serde::{Deserialize, Serialize};
use std::path::Path;

use super::directory::{DirectoryBackend, DirectoryConfig};
use super::dns::DnsConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::server::ServerConfig;

const LOCAL_CONFIG_PATH: &str = "tailnet-dns.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/tailnet-dns/config.toml";

/// Main configuration structure for Tailnet DNS
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Listener configuration (port, bind address)
    #[serde(default)]
    pub server: ServerConfig,

    /// Answer synthesis configuration
    #[serde(default)]
    pub dns: DnsConfig,

    /// Peer directory configuration
    #[serde(default)]
    pub directory: DirectoryConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. tailnet-dns.toml in current directory
    /// 3. /etc/tailnet-dns/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Some(path) = Self::get_config_path() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    /// Apply command-line overrides to configuration
    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.dns_port {
            self.server.dns_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if overrides.tcp {
            self.server.tcp_enabled = true;
        }
        if let Some(ttl) = overrides.ttl {
            self.dns.ttl = ttl;
        }
        if let Some(domain) = overrides.domain {
            self.dns.domain = Some(domain);
        }
        if let Some(backend) = overrides.directory_backend {
            self.directory.backend = backend;
        }
        if let Some(path) = overrides.roster_path {
            self.directory.roster_path = Some(path);
        }
        if let Some(socket) = overrides.tailscale_socket {
            self.directory.tailscale_socket = Some(socket);
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if overrides.debug {
            self.logging.debug = true;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.dns_port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }

        if self.dns.directory_timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "Directory timeout must be at least 1 second".to_string(),
            ));
        }

        // RFC 2181 §8: TTLs are unsigned but must fit in 31 bits.
        if self.dns.ttl > i32::MAX as u32 {
            return Err(ConfigError::Validation(format!(
                "TTL {} exceeds the maximum of {}",
                self.dns.ttl,
                i32::MAX
            )));
        }

        if self.directory.backend == DirectoryBackend::File
            && self.directory.roster_path.is_none()
        {
            return Err(ConfigError::Validation(
                "The file directory backend requires directory.roster_path".to_string(),
            ));
        }

        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|path| Path::new(path).exists())
            .map(str::to_string)
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub dns_port: Option<u16>,
    pub bind_address: Option<String>,
    pub tcp: bool,
    pub ttl: Option<u32>,
    pub domain: Option<String>,
    pub directory_backend: Option<DirectoryBackend>,
    pub roster_path: Option<String>,
    pub tailscale_socket: Option<String>,
    pub log_level: Option<String>,
    pub debug: bool,
}
