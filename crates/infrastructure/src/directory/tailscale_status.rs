//! Subset of the JSON document printed by `tailscale status --json`.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::net::IpAddr;
use tailnet_dns_domain::{DomainError, PeerSnapshot, RosterEntry};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TailscaleStatus {
    #[serde(default)]
    pub backend_state: String,

    #[serde(rename = "Self", default)]
    pub self_node: Option<NodeStatus>,

    /// Keyed by node public key. The CLI emits keys sorted, which is the
    /// order peers are scanned in.
    #[serde(default)]
    pub peer: Option<BTreeMap<String, NodeStatus>>,

    #[serde(rename = "MagicDNSSuffix", default)]
    pub magic_dns_suffix: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NodeStatus {
    #[serde(rename = "DNSName", default)]
    pub dns_name: String,

    #[serde(rename = "TailscaleIPs", default)]
    pub tailscale_ips: Option<Vec<IpAddr>>,
}

impl NodeStatus {
    pub fn to_roster_entry(&self) -> RosterEntry {
        RosterEntry::new(
            self.dns_name.trim_end_matches('.'),
            self.tailscale_ips.clone().unwrap_or_default(),
        )
    }
}

impl TailscaleStatus {
    pub fn from_json(bytes: &[u8]) -> Result<Self, DomainError> {
        serde_json::from_slice(bytes).map_err(|e| {
            DomainError::DirectoryUnavailable(format!("Invalid tailscale status JSON: {}", e))
        })
    }

    /// The tailnet's MagicDNS suffix, falling back to everything after the
    /// first label of this node's own DNS name.
    pub fn domain_suffix(&self) -> Option<String> {
        let suffix = self.magic_dns_suffix.trim_matches('.');
        if !suffix.is_empty() {
            return Some(suffix.to_string());
        }

        self.self_node
            .as_ref()
            .map(|node| node.dns_name.trim_end_matches('.'))
            .and_then(|name| name.split_once('.'))
            .map(|(_, rest)| rest.to_string())
            .filter(|rest| !rest.is_empty())
    }

    /// Peers only; the local node is not part of the roster.
    pub fn into_snapshot(self) -> PeerSnapshot {
        let domain_suffix = self.domain_suffix();
        let entries = self
            .peer
            .unwrap_or_default()
            .values()
            .map(NodeStatus::to_roster_entry)
            .collect();

        let snapshot = PeerSnapshot::new(entries);
        match domain_suffix {
            Some(suffix) => snapshot.with_domain_suffix(suffix),
            None => snapshot,
        }
    }
}
