use async_trait::async_trait;
use serde::Deserialize;
use std::net::IpAddr;
use std::path::{Path, PathBuf};
use tailnet_dns_application::ports::PeerDirectory;
use tailnet_dns_domain::{DomainError, PeerSnapshot, RosterEntry};

/// Static roster kept in a TOML file:
///
/// ```toml
/// domain_suffix = "example.ts.net"
///
/// [[peers]]
/// name = "host1.example.ts.net"
/// addresses = ["100.64.0.1", "fd7a:115c:a1e0::1"]
/// ```
///
/// The file is read again for every snapshot, so edits apply to the next
/// query without a restart.
pub struct FileRosterDirectory {
    path: PathBuf,
}

#[derive(Debug, Deserialize)]
struct RosterFile {
    #[serde(default)]
    domain_suffix: Option<String>,

    #[serde(default)]
    peers: Vec<RosterFilePeer>,
}

#[derive(Debug, Deserialize)]
struct RosterFilePeer {
    name: String,

    #[serde(default)]
    addresses: Vec<IpAddr>,
}

impl FileRosterDirectory {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn parse(contents: &str) -> Result<PeerSnapshot, DomainError> {
        let file: RosterFile = toml::from_str(contents)
            .map_err(|e| DomainError::DirectoryUnavailable(format!("Invalid roster file: {}", e)))?;

        let entries = file
            .peers
            .into_iter()
            .map(|peer| RosterEntry::new(peer.name, peer.addresses))
            .collect();

        let snapshot = PeerSnapshot::new(entries);
        Ok(match file.domain_suffix {
            Some(suffix) => snapshot.with_domain_suffix(suffix.trim_matches('.')),
            None => snapshot,
        })
    }
}

#[async_trait]
impl PeerDirectory for FileRosterDirectory {
    async fn snapshot(&self) -> Result<PeerSnapshot, DomainError> {
        let contents = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            DomainError::DirectoryUnavailable(format!(
                "Failed to read roster {}: {}",
                self.path.display(),
                e
            ))
        })?;

        Self::parse(&contents)
    }
}
