use crate::services::{AnswerBuilder, NameMatcher, SnapshotFetcher};
use std::sync::Arc;
use tailnet_dns_domain::{DnsQuestion, ResourceRecord};
use tracing::{debug, info};

/// Answers A and AAAA questions from a fresh roster snapshot.
pub struct LookupAddressUseCase {
    fetcher: Arc<SnapshotFetcher>,
    answers: AnswerBuilder,
}

impl LookupAddressUseCase {
    pub fn new(fetcher: Arc<SnapshotFetcher>, answers: AnswerBuilder) -> Self {
        Self { fetcher, answers }
    }

    pub async fn execute(&self, question: &DnsQuestion) -> Vec<ResourceRecord> {
        let Some(snapshot) = self.fetcher.fetch_or_skip().await else {
            return Vec::new();
        };

        debug!(domain = %question.name, peers = snapshot.len(), "Looking up peer");

        let Some((entry, kind)) = NameMatcher::find(&snapshot, &question.name) else {
            info!(domain = %question.name, "No match found");
            return Vec::new();
        };

        let records = self
            .answers
            .address_records(&question.name, entry, question.record_type);

        info!(
            domain = %question.name,
            peer = %entry.name,
            match_kind = ?kind,
            addresses = ?entry.addresses,
            answers = records.len(),
            "Found match"
        );

        records
    }
}
