use std::sync::Arc;
use std::time::Duration;
use tailnet_dns_domain::{DomainError, PeerSnapshot};
use tracing::{debug, instrument, warn};

use crate::ports::PeerDirectory;

/// Fetches one roster snapshot per lookup, bounded by a timeout.
///
/// When a domain suffix is configured it replaces whatever the directory
/// reports.
pub struct SnapshotFetcher {
    directory: Arc<dyn PeerDirectory>,
    timeout: Duration,
    domain_override: Option<Arc<str>>,
}

impl SnapshotFetcher {
    pub fn new(directory: Arc<dyn PeerDirectory>, timeout: Duration) -> Self {
        Self {
            directory,
            timeout,
            domain_override: None,
        }
    }

    pub fn with_domain_override(mut self, domain: Option<&str>) -> Self {
        self.domain_override = domain.map(Arc::from);
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    #[instrument(skip(self))]
    pub async fn fetch(&self) -> Result<PeerSnapshot, DomainError> {
        let mut snapshot = match tokio::time::timeout(self.timeout, self.directory.snapshot()).await
        {
            Ok(result) => result?,
            Err(_) => {
                return Err(DomainError::DirectoryTimeout(
                    u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX),
                ))
            }
        };

        if let Some(domain) = &self.domain_override {
            snapshot.domain_suffix = Some(Arc::clone(domain));
        }

        debug!(
            peers = snapshot.len(),
            domain_suffix = ?snapshot.domain_suffix(),
            "Peer snapshot fetched"
        );
        Ok(snapshot)
    }

    /// Like [`fetch`](Self::fetch), but a failure only yields `None`.
    pub async fn fetch_or_skip(&self) -> Option<PeerSnapshot> {
        match self.fetch().await {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                warn!(error = %e, "Peer directory unavailable, answering empty");
                None
            }
        }
    }
}
