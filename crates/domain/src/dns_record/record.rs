use super::RecordType;
use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::Arc;

/// A synthesized answer record.
///
/// `name` is the owner name exactly as it appeared in the question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceRecord {
    A {
        name: Arc<str>,
        address: Ipv4Addr,
        ttl: u32,
    },
    AAAA {
        name: Arc<str>,
        address: Ipv6Addr,
        ttl: u32,
    },
    PTR {
        name: Arc<str>,
        target: Arc<str>,
        ttl: u32,
    },
}

impl ResourceRecord {
    pub fn name(&self) -> &str {
        match self {
            ResourceRecord::A { name, .. }
            | ResourceRecord::AAAA { name, .. }
            | ResourceRecord::PTR { name, .. } => name,
        }
    }

    pub fn ttl(&self) -> u32 {
        match self {
            ResourceRecord::A { ttl, .. }
            | ResourceRecord::AAAA { ttl, .. }
            | ResourceRecord::PTR { ttl, .. } => *ttl,
        }
    }

    pub fn record_type(&self) -> RecordType {
        match self {
            ResourceRecord::A { .. } => RecordType::A,
            ResourceRecord::AAAA { .. } => RecordType::AAAA,
            ResourceRecord::PTR { .. } => RecordType::PTR,
        }
    }
}

impl fmt::Display for ResourceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceRecord::A { name, address, ttl } => {
                write!(f, "{}\t{}\tIN\tA\t{}", name, ttl, address)
            }
            ResourceRecord::AAAA { name, address, ttl } => {
                write!(f, "{}\t{}\tIN\tAAAA\t{}", name, ttl, address)
            }
            ResourceRecord::PTR { name, target, ttl } => {
                write!(f, "{}\t{}\tIN\tPTR\t{}", name, ttl, target)
            }
        }
    }
}
