//! Reverse-lookup names (`in-addr.arpa` / `ip6.arpa`) to addresses.
//!
//! Decoding is strict: an IPv4 name carries exactly four decimal labels and
//! an IPv6 name exactly thirty-two single hex-digit labels. Anything else is
//! rejected with [`DomainError::InvalidReverseName`].

use crate::dns_name::normalize_name;
use crate::errors::DomainError;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

pub const IPV4_REVERSE_SUFFIX: &str = "in-addr.arpa";
pub const IPV6_REVERSE_SUFFIX: &str = "ip6.arpa";

const IPV4_LABELS: usize = 4;
const IPV6_LABELS: usize = 32;
const NIBBLES_PER_BLOCK: usize = 4;

/// Decodes a PTR query name into the address it encodes.
///
/// Matching of the suffix is case-insensitive and the trailing dot is
/// optional, so `5.0.0.10.IN-ADDR.ARPA.` decodes to `10.0.0.5`.
pub fn decode_reverse_name(name: &str) -> Result<IpAddr, DomainError> {
    let normalized = normalize_name(name);

    let decoded = if let Some(labels) = strip_reverse_suffix(&normalized, IPV4_REVERSE_SUFFIX) {
        decode_ipv4(labels).map(IpAddr::V4)
    } else if let Some(labels) = strip_reverse_suffix(&normalized, IPV6_REVERSE_SUFFIX) {
        decode_ipv6(labels).map(IpAddr::V6)
    } else {
        None
    };

    decoded.ok_or_else(|| DomainError::InvalidReverseName(name.to_string()))
}

/// Builds the fully-qualified reverse-lookup name for `addr`.
pub fn to_reverse_name(addr: &IpAddr) -> String {
    match addr {
        IpAddr::V4(v4) => {
            let [a, b, c, d] = v4.octets();
            format!("{}.{}.{}.{}.{}.", d, c, b, a, IPV4_REVERSE_SUFFIX)
        }
        IpAddr::V6(v6) => {
            let mut labels: Vec<String> = Vec::with_capacity(IPV6_LABELS);
            for block in v6.segments() {
                let digits = format!("{:04x}", block);
                labels.extend(digits.chars().rev().map(String::from));
            }
            format!("{}.{}.", labels.join("."), IPV6_REVERSE_SUFFIX)
        }
    }
}

fn strip_reverse_suffix<'a>(name: &'a str, suffix: &str) -> Option<&'a str> {
    name.strip_suffix(suffix)?.strip_suffix('.')
}

fn decode_ipv4(labels: &str) -> Option<Ipv4Addr> {
    let mut octets: Vec<&str> = labels.split('.').collect();
    if octets.len() != IPV4_LABELS {
        return None;
    }

    octets.reverse();
    octets.join(".").parse().ok()
}

// Each run of four labels, read backwards, is one 16-bit block. Blocks keep
// the order of their runs in the name.
fn decode_ipv6(labels: &str) -> Option<Ipv6Addr> {
    let nibbles: Vec<&str> = labels.split('.').collect();
    if nibbles.len() != IPV6_LABELS || !nibbles.iter().all(|label| is_hex_nibble(label)) {
        return None;
    }

    let blocks: Vec<String> = nibbles
        .chunks(NIBBLES_PER_BLOCK)
        .map(|run| run.iter().rev().copied().collect::<String>())
        .collect();

    blocks.join(":").parse().ok()
}

fn is_hex_nibble(label: &str) -> bool {
    let mut chars = label.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_ascii_hexdigit())
}
