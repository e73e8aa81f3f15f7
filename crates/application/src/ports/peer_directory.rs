use async_trait::async_trait;
use tailnet_dns_domain::{DomainError, PeerSnapshot};

/// Source of overlay-network membership.
///
/// Implementations must tolerate concurrent calls. Every call returns an
/// independent snapshot; callers bound the call with their own timeout.
#[async_trait]
pub trait PeerDirectory: Send + Sync {
    async fn snapshot(&self) -> Result<PeerSnapshot, DomainError>;
}
