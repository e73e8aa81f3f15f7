use super::tailscale_status::TailscaleStatus;
use async_trait::async_trait;
use std::process::Stdio;
use tailnet_dns_application::ports::PeerDirectory;
use tailnet_dns_domain::{DomainError, PeerSnapshot};
use tokio::process::Command;
use tracing::debug;

/// Reads membership from the local tailscaled through the `tailscale` CLI.
///
/// Each snapshot spawns `tailscale status --json`; the child is killed if
/// the caller gives up waiting.
pub struct TailscaleStatusDirectory {
    binary: String,
    socket: Option<String>,
}

impl TailscaleStatusDirectory {
    pub fn new(binary: impl Into<String>, socket: Option<String>) -> Self {
        Self {
            binary: binary.into(),
            socket,
        }
    }

    fn command(&self) -> Command {
        let mut command = Command::new(&self.binary);
        if let Some(socket) = &self.socket {
            command.arg("--socket").arg(socket);
        }
        command
            .args(["status", "--json"])
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        command
    }

    pub async fn status(&self) -> Result<TailscaleStatus, DomainError> {
        let output = self.command().output().await.map_err(|e| {
            DomainError::DirectoryUnavailable(format!("Failed to run {}: {}", self.binary, e))
        })?;

        if !output.status.success() {
            return Err(DomainError::DirectoryUnavailable(format!(
                "{} status exited with {}: {}",
                self.binary,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        let status = TailscaleStatus::from_json(&output.stdout)?;
        debug!(backend_state = %status.backend_state, "tailscale status read");
        Ok(status)
    }
}

#[async_trait]
impl PeerDirectory for TailscaleStatusDirectory {
    async fn snapshot(&self) -> Result<PeerSnapshot, DomainError> {
        Ok(self.status().await?.into_snapshot())
    }
}
