#![allow(dead_code)]
use tailnet_dns_domain::{PeerSnapshot, RosterEntry};
use std::net::IpAddr;

pub struct RosterEntryBuilder {
    name: String,
    addresses: Vec<IpAddr>,
}

impl RosterEntryBuilder {
    pub fn new() -> Self {
        Self {
            name: "host1.example.ts.net".to_string(),
            addresses: vec![],
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn address(mut self, addr: &str) -> Self {
        self.addresses.push(addr.parse().unwrap());
        self
    }

    pub fn build(self) -> RosterEntry {
        RosterEntry::new(self.name, self.addresses)
    }
}

impl Default for RosterEntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn snapshot_of(entries: Vec<RosterEntry>) -> PeerSnapshot {
    PeerSnapshot::new(entries)
}
