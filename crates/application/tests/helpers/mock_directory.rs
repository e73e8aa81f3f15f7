#![allow(dead_code)]

use async_trait::async_trait;
use std::net::IpAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;
use tailnet_dns_application::ports::PeerDirectory;
use tailnet_dns_application::services::{AnswerBuilder, SnapshotFetcher};
use tailnet_dns_application::use_cases::{
    HandleDnsQueryUseCase, LookupAddressUseCase, LookupPointerUseCase,
};
use tailnet_dns_domain::{DomainError, PeerSnapshot, RosterEntry};

pub const TEST_TTL: u32 = 600;

#[derive(Clone)]
pub struct MockPeerDirectory {
    snapshot: Arc<RwLock<PeerSnapshot>>,
    error: Arc<RwLock<Option<DomainError>>>,
    delay: Arc<RwLock<Option<Duration>>>,
    calls: Arc<AtomicUsize>,
}

impl MockPeerDirectory {
    pub fn new() -> Self {
        Self {
            snapshot: Arc::new(RwLock::new(PeerSnapshot::default())),
            error: Arc::new(RwLock::new(None)),
            delay: Arc::new(RwLock::new(None)),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_snapshot(snapshot: PeerSnapshot) -> Self {
        let directory = Self::new();
        directory.set_snapshot(snapshot);
        directory
    }

    pub fn set_snapshot(&self, snapshot: PeerSnapshot) {
        *self.snapshot.write().unwrap() = snapshot;
    }

    pub fn set_error(&self, error: DomainError) {
        *self.error.write().unwrap() = Some(error);
    }

    pub fn set_delay(&self, delay: Duration) {
        *self.delay.write().unwrap() = Some(delay);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockPeerDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PeerDirectory for MockPeerDirectory {
    async fn snapshot(&self) -> Result<PeerSnapshot, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let delay = *self.delay.read().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(error) = self.error.read().unwrap().clone() {
            return Err(error);
        }

        Ok(self.snapshot.read().unwrap().clone())
    }
}

pub fn entry(name: &str, addresses: &[&str]) -> RosterEntry {
    RosterEntry::new(
        name,
        addresses
            .iter()
            .map(|addr| addr.parse::<IpAddr>().unwrap())
            .collect::<Vec<_>>(),
    )
}

pub fn tailnet_snapshot() -> PeerSnapshot {
    PeerSnapshot::new(vec![
        entry("host1.example.ts.net", &["10.0.0.5"]),
        entry("host2.example.ts.net", &["100.64.0.2", "fd7a:115c:a1e0::2"]),
        entry("v6only.example.ts.net", &["fd7a:115c:a1e0::3"]),
    ])
    .with_domain_suffix("example.ts.net")
}

pub fn make_fetcher(directory: Arc<MockPeerDirectory>, timeout: Duration) -> Arc<SnapshotFetcher> {
    Arc::new(SnapshotFetcher::new(directory, timeout))
}

pub fn make_use_case(directory: Arc<MockPeerDirectory>) -> HandleDnsQueryUseCase {
    make_use_case_with_timeout(directory, Duration::from_secs(5))
}

pub fn make_use_case_with_timeout(
    directory: Arc<MockPeerDirectory>,
    timeout: Duration,
) -> HandleDnsQueryUseCase {
    let fetcher = make_fetcher(directory, timeout);
    let answers = AnswerBuilder::new(TEST_TTL);

    HandleDnsQueryUseCase::new(
        Arc::new(LookupAddressUseCase::new(fetcher.clone(), answers)),
        Arc::new(LookupPointerUseCase::new(fetcher, answers)),
    )
}
