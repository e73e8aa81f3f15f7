use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DnsConfig {
    /// TTL applied to every synthesized record.
    #[serde(default = "default_ttl")]
    pub ttl: u32,

    /// Domain suffix enabling short-form matches. When unset, the suffix
    /// reported by the peer directory is used.
    #[serde(default)]
    pub domain: Option<String>,

    #[serde(default = "default_directory_timeout")]
    pub directory_timeout_secs: u64,
}

impl DnsConfig {
    pub fn directory_timeout(&self) -> Duration {
        Duration::from_secs(self.directory_timeout_secs)
    }

    /// The configured suffix without surrounding dots, if any remains.
    pub fn domain_suffix(&self) -> Option<&str> {
        self.domain
            .as_deref()
            .map(|domain| domain.trim_matches('.'))
            .filter(|domain| !domain.is_empty())
    }
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            ttl: default_ttl(),
            domain: None,
            directory_timeout_secs: default_directory_timeout(),
        }
    }
}

fn default_ttl() -> u32 {
    600
}

fn default_directory_timeout() -> u64 {
    5
}
