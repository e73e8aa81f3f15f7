use std::sync::Arc;
use tailnet_dns_domain::dns_name::to_fqdn;
use tailnet_dns_domain::{RecordType, ResourceRecord, RosterEntry};

/// Turns matched roster entries into answer records carrying a fixed TTL.
#[derive(Debug, Clone, Copy)]
pub struct AnswerBuilder {
    ttl: u32,
}

impl AnswerBuilder {
    pub fn new(ttl: u32) -> Self {
        Self { ttl }
    }

    pub fn ttl(&self) -> u32 {
        self.ttl
    }

    /// One record per address of the requested family, in roster order.
    ///
    /// Only A and AAAA are meaningful here.
    pub fn address_records(
        &self,
        owner: &Arc<str>,
        entry: &RosterEntry,
        record_type: RecordType,
    ) -> Vec<ResourceRecord> {
        match record_type {
            RecordType::A => entry
                .ipv4_addresses()
                .map(|address| ResourceRecord::A {
                    name: Arc::clone(owner),
                    address,
                    ttl: self.ttl,
                })
                .collect(),
            RecordType::AAAA => entry
                .ipv6_addresses()
                .map(|address| ResourceRecord::AAAA {
                    name: Arc::clone(owner),
                    address,
                    ttl: self.ttl,
                })
                .collect(),
            other => {
                debug_assert!(false, "address records requested for {}", other);
                Vec::new()
            }
        }
    }

    pub fn pointer_record(&self, owner: &Arc<str>, entry: &RosterEntry) -> ResourceRecord {
        ResourceRecord::PTR {
            name: Arc::clone(owner),
            target: to_fqdn(&entry.name).into(),
            ttl: self.ttl,
        }
    }
}
