use std::net::IpAddr;
use std::sync::Arc;

/// One host of the overlay network as reported by the peer directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    pub name: Arc<str>,
    pub addresses: Vec<IpAddr>,
}

impl RosterEntry {
    /// Builds an entry, dropping repeated addresses while keeping the
    /// directory's order for the first occurrence of each.
    pub fn new(name: impl Into<Arc<str>>, addresses: impl IntoIterator<Item = IpAddr>) -> Self {
        let mut unique: Vec<IpAddr> = Vec::new();
        for addr in addresses {
            if !unique.contains(&addr) {
                unique.push(addr);
            }
        }

        Self {
            name: name.into(),
            addresses: unique,
        }
    }

    /// Entries without a DNS name are never answered for.
    pub fn is_named(&self) -> bool {
        !self.name.trim_end_matches('.').is_empty()
    }

    pub fn owns(&self, addr: &IpAddr) -> bool {
        self.addresses.contains(addr)
    }

    pub fn ipv4_addresses(&self) -> impl Iterator<Item = std::net::Ipv4Addr> + '_ {
        self.addresses.iter().filter_map(|addr| match addr {
            IpAddr::V4(v4) => Some(*v4),
            IpAddr::V6(_) => None,
        })
    }

    pub fn ipv6_addresses(&self) -> impl Iterator<Item = std::net::Ipv6Addr> + '_ {
        self.addresses.iter().filter_map(|addr| match addr {
            IpAddr::V6(v6) => Some(*v6),
            IpAddr::V4(_) => None,
        })
    }
}

/// Membership view returned by one directory fetch.
///
/// A snapshot is never mutated after it is produced; every request works on
/// its own value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PeerSnapshot {
    pub entries: Vec<RosterEntry>,
    pub domain_suffix: Option<Arc<str>>,
}

impl PeerSnapshot {
    pub fn new(entries: Vec<RosterEntry>) -> Self {
        Self {
            entries,
            domain_suffix: None,
        }
    }

    pub fn with_domain_suffix(mut self, suffix: impl Into<Arc<str>>) -> Self {
        self.domain_suffix = Some(suffix.into());
        self
    }

    /// The shared suffix, ignoring an empty or root-only value.
    pub fn domain_suffix(&self) -> Option<&str> {
        self.domain_suffix
            .as_deref()
            .filter(|suffix| !suffix.trim_matches('.').is_empty())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First named entry owning `addr`, in snapshot order.
    pub fn owner_of(&self, addr: &IpAddr) -> Option<&RosterEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.is_named())
            .find(|entry| entry.owns(addr))
    }
}
