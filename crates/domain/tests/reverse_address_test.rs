use std::net::IpAddr;
use tailnet_dns_domain::{decode_reverse_name, to_reverse_name, DomainError};

fn ip(s: &str) -> IpAddr {
    s.parse().unwrap()
}

// ── IPv4 ───────────────────────────────────────────────────────────────────

#[test]
fn test_ipv4_reverse_name_decodes_to_address() {
    assert_eq!(
        decode_reverse_name("5.0.0.10.in-addr.arpa.").unwrap(),
        ip("10.0.0.5")
    );
}

#[test]
fn test_ipv4_without_trailing_dot() {
    assert_eq!(
        decode_reverse_name("4.3.2.1.in-addr.arpa").unwrap(),
        ip("1.2.3.4")
    );
}

#[test]
fn test_ipv4_suffix_is_case_insensitive() {
    assert_eq!(
        decode_reverse_name("1.64.100.100.IN-ADDR.ARPA.").unwrap(),
        ip("100.100.64.1")
    );
}

#[test]
fn test_ipv4_round_trip() {
    for addr in ["10.0.0.5", "100.64.0.1", "0.0.0.0", "255.255.255.255", "192.168.1.20"] {
        let name = to_reverse_name(&ip(addr));
        assert_eq!(decode_reverse_name(&name).unwrap(), ip(addr), "{}", name);
    }
}

#[test]
fn test_ipv4_three_labels_rejected() {
    let result = decode_reverse_name("1.2.3.in-addr.arpa.");
    assert!(matches!(result, Err(DomainError::InvalidReverseName(_))));
}

#[test]
fn test_ipv4_five_labels_rejected() {
    assert!(decode_reverse_name("1.1.2.3.4.in-addr.arpa.").is_err());
}

#[test]
fn test_ipv4_non_numeric_label_rejected() {
    assert!(decode_reverse_name("x.0.0.10.in-addr.arpa.").is_err());
}

#[test]
fn test_ipv4_out_of_range_octet_rejected() {
    assert!(decode_reverse_name("256.0.0.10.in-addr.arpa.").is_err());
}

#[test]
fn test_ipv4_empty_label_rejected() {
    assert!(decode_reverse_name("5..0.10.in-addr.arpa.").is_err());
}

// ── IPv6 ───────────────────────────────────────────────────────────────────

#[test]
fn test_ipv6_reverse_name_decodes_to_address() {
    let name = "a.7.d.f.c.5.1.1.0.e.1.a.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.1.0.0.0.ip6.arpa.";
    assert_eq!(decode_reverse_name(name).unwrap(), ip("fd7a:115c:a1e0::1"));
}

#[test]
fn test_ipv6_blocks_keep_name_order() {
    let name = "1.0.0.2.8.b.d.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.1.0.0.0.ip6.arpa.";
    assert_eq!(decode_reverse_name(name).unwrap(), ip("2001:db8::1"));
    assert_ne!(decode_reverse_name(name).unwrap(), ip("1::db8:2001"));
}

#[test]
fn test_ipv6_tailnet_address_round_trip() {
    for addr in [
        "fd7a:115c:a1e0::1",
        "fd7a:115c:a1e0:ab12:4843:cd96:6258:b240",
        "::1",
        "::",
        "ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff",
    ] {
        let name = to_reverse_name(&ip(addr));
        assert_eq!(decode_reverse_name(&name).unwrap(), ip(addr), "{}", name);
    }
}

#[test]
fn test_ipv6_uppercase_nibbles_accepted() {
    let name = "A.7.D.F.C.5.1.1.0.E.1.A.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.1.0.0.0.IP6.ARPA.";
    assert_eq!(decode_reverse_name(name).unwrap(), ip("fd7a:115c:a1e0::1"));
}

#[test]
fn test_ipv6_wrong_label_count_rejected() {
    let name = "0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.8.b.d.0.1.0.0.2.ip6.arpa.";
    assert!(decode_reverse_name(name).is_err());
}

#[test]
fn test_ipv6_multi_digit_label_rejected() {
    let name = "10.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.8.b.d.0.1.0.0.2.ip6.arpa.";
    assert!(decode_reverse_name(name).is_err());
}

#[test]
fn test_ipv6_non_hex_label_rejected() {
    let name = "g.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.8.b.d.0.1.0.0.2.ip6.arpa.";
    assert!(decode_reverse_name(name).is_err());
}

// ── Not a reverse name ─────────────────────────────────────────────────────

#[test]
fn test_forward_name_rejected() {
    assert!(decode_reverse_name("host1.example.ts.net.").is_err());
}

#[test]
fn test_reverse_name_formatting() {
    assert_eq!(to_reverse_name(&ip("10.0.0.5")), "5.0.0.10.in-addr.arpa.");
    assert_eq!(
        to_reverse_name(&ip("fd7a:115c:a1e0::1")),
        "a.7.d.f.c.5.1.1.0.e.1.a.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.1.0.0.0.ip6.arpa."
    );
}
