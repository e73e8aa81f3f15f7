use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log every reply in full instead of its answer count.
    #[serde(default)]
    pub debug: bool,

    #[serde(default)]
    pub json: bool,
}

impl LoggingConfig {
    pub fn effective_level(&self) -> &str {
        if self.debug {
            "debug"
        } else {
            &self.level
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            debug: false,
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
