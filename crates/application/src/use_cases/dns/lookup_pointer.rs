use crate::services::{AnswerBuilder, SnapshotFetcher};
use std::sync::Arc;
use tailnet_dns_domain::{decode_reverse_name, DnsQuestion, ResourceRecord};
use tracing::{debug, info};

/// Answers PTR questions by decoding the reverse name and finding the peer
/// that owns the address.
pub struct LookupPointerUseCase {
    fetcher: Arc<SnapshotFetcher>,
    answers: AnswerBuilder,
}

impl LookupPointerUseCase {
    pub fn new(fetcher: Arc<SnapshotFetcher>, answers: AnswerBuilder) -> Self {
        Self { fetcher, answers }
    }

    pub async fn execute(&self, question: &DnsQuestion) -> Vec<ResourceRecord> {
        let addr = match decode_reverse_name(&question.name) {
            Ok(addr) => addr,
            Err(e) => {
                debug!(domain = %question.name, error = %e, "Invalid PTR query format");
                return Vec::new();
            }
        };

        info!(domain = %question.name, ip = %addr, "PTR lookup");

        let Some(snapshot) = self.fetcher.fetch_or_skip().await else {
            return Vec::new();
        };

        match snapshot.owner_of(&addr) {
            Some(entry) => {
                debug!(ip = %addr, peer = %entry.name, "PTR owner found");
                vec![self.answers.pointer_record(&question.name, entry)]
            }
            None => {
                debug!(ip = %addr, "No peer owns address");
                Vec::new()
            }
        }
    }
}
