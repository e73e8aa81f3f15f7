use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where peer snapshots come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DirectoryBackend {
    /// `tailscale status --json` from the local daemon.
    #[default]
    Tailscale,
    /// A TOML roster file, re-read on every snapshot.
    File,
}

impl fmt::Display for DirectoryBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectoryBackend::Tailscale => f.write_str("tailscale"),
            DirectoryBackend::File => f.write_str("file"),
        }
    }
}

impl FromStr for DirectoryBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tailscale" => Ok(DirectoryBackend::Tailscale),
            "file" => Ok(DirectoryBackend::File),
            other => Err(format!("Unknown directory backend: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DirectoryConfig {
    #[serde(default)]
    pub backend: DirectoryBackend,

    #[serde(default = "default_tailscale_bin")]
    pub tailscale_bin: String,

    /// Path of the tailscaled socket, passed as `--socket`.
    #[serde(default)]
    pub tailscale_socket: Option<String>,

    /// Roster file for the `file` backend.
    #[serde(default)]
    pub roster_path: Option<String>,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            backend: DirectoryBackend::default(),
            tailscale_bin: default_tailscale_bin(),
            tailscale_socket: None,
            roster_path: None,
        }
    }
}

fn default_tailscale_bin() -> String {
    "tailscale".to_string()
}
