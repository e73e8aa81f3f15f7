use async_trait::async_trait;
use std::net::IpAddr;
use std::sync::{Arc, RwLock};
use std::time::Duration;
use tailnet_dns_application::ports::PeerDirectory;
use tailnet_dns_application::services::{AnswerBuilder, SnapshotFetcher};
use tailnet_dns_application::use_cases::{
    HandleDnsQueryUseCase, LookupAddressUseCase, LookupPointerUseCase,
};
use tailnet_dns_domain::{DomainError, PeerSnapshot, RosterEntry};
use tailnet_dns_infrastructure::dns::DnsServerHandler;

pub const TEST_TTL: u32 = 600;

pub struct StaticDirectory {
    result: RwLock<Result<PeerSnapshot, DomainError>>,
}

impl StaticDirectory {
    pub fn new(snapshot: PeerSnapshot) -> Self {
        Self {
            result: RwLock::new(Ok(snapshot)),
        }
    }

    pub fn failing(error: DomainError) -> Self {
        Self {
            result: RwLock::new(Err(error)),
        }
    }
}

#[async_trait]
impl PeerDirectory for StaticDirectory {
    async fn snapshot(&self) -> Result<PeerSnapshot, DomainError> {
        self.result.read().unwrap().clone()
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
    ])
    .with_domain_suffix("example.ts.net")
}

pub fn make_handler(directory: StaticDirectory) -> DnsServerHandler {
    let fetcher = Arc::new(SnapshotFetcher::new(
        Arc::new(directory),
        Duration::from_secs(5),
    ));
    let answers = AnswerBuilder::new(TEST_TTL);

    let use_case = HandleDnsQueryUseCase::new(
        Arc::new(LookupAddressUseCase::new(fetcher.clone(), answers)),
        Arc::new(LookupPointerUseCase::new(fetcher, answers)),
    );

    DnsServerHandler::new(Arc::new(use_case))
}
