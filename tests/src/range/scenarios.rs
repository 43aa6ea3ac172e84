#![cfg(test)]
use iprange_core::{Family, IpRange, RangeError};
use num_bigint::BigUint;
use std::net::IpAddr;

fn ip(s: &str) -> IpAddr {
    s.parse().unwrap()
}

/// A range whose bounds are equal holds exactly one address.
#[test]
fn single_address_v4() {
    let range = IpRange::new(ip("192.168.1.1"), ip("192.168.1.1")).expect("valid range");

    assert_eq!(range.family(), Family::V4);
    assert_eq!(range.size(), BigUint::from(1u32));
    assert!(range.contains(ip("192.168.1.1")));
    assert!(!range.contains(ip("192.168.1.2")));
    assert_eq!(range.to_string(), "192.168.1.1-192.168.1.1");
}

#[test]
fn last_octet_span_v4() {
    let range = IpRange::new(ip("10.0.0.1"), ip("10.0.0.255")).expect("valid range");
    assert_eq!(range.size(), BigUint::from(255u32));
}

#[test]
fn inverted_bounds_v4() {
    assert_eq!(IpRange::new(ip("10.0.0.5"), ip("10.0.0.1")), None);
    assert_eq!(
        IpRange::try_new(ip("10.0.0.5"), ip("10.0.0.1")),
        Err(RangeError::Inverted {
            start: ip("10.0.0.5"),
            end: ip("10.0.0.1"),
        })
    );
}

#[test]
fn low_block_v6() {
    let range = IpRange::new(ip("::1"), ip("::ffff")).expect("valid range");

    assert_eq!(range.family(), Family::V6);
    assert_eq!(range.size(), BigUint::from(65535u32));
    assert_eq!(range.to_string(), "::1-::ffff");
}

#[test]
fn family_mismatch() {
    assert_eq!(IpRange::new(ip("192.168.1.1"), ip("::1")), None);
    assert_eq!(
        IpRange::try_new(ip("192.168.1.1"), ip("::1")),
        Err(RangeError::FamilyMismatch {
            start: ip("192.168.1.1"),
            end: ip("::1"),
        })
    );
}

/// `::` through `ffff:...:ffff` is every IPv6 address: end - start + 1 = 2^128.
#[test]
fn whole_space_v6() {
    let range = IpRange::new(ip("::"), ip("ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff"))
        .expect("valid range");

    let expected: BigUint = BigUint::from(1u32) << 128usize;
    assert_eq!(range.size(), expected);
    assert_eq!(range.size(), BigUint::from(u128::MAX) + 1u32);
}

#[test]
fn whole_space_v4() {
    let range = IpRange::new(ip("0.0.0.0"), ip("255.255.255.255")).expect("valid range");
    assert_eq!(range.size(), BigUint::from(1u64 << 32));
}

#[test]
fn compressed_rendering_v6() {
    let range = IpRange::new(ip("2001:0db8:0000:0000:0000:0000:0000:0001"), ip("2001:db8::ff"))
        .expect("valid range");
    assert_eq!(range.to_string(), "2001:db8::1-2001:db8::ff");
}

/// IPv4-mapped IPv6 literals are IPv4 addresses written in 16 bytes.
#[test]
fn mapped_bounds_are_v4() {
    let range = IpRange::new(ip("::ffff:192.168.1.1"), ip("192.168.1.20")).expect("valid range");

    assert_eq!(range.family(), Family::V4);
    assert_eq!(range.size(), BigUint::from(20u32));
    assert_eq!(range.to_string(), "192.168.1.1-192.168.1.20");
    assert!(range.contains(ip("::ffff:192.168.1.20")));
    assert!(range.contains(ip("192.168.1.20")));
    assert!(!range.contains(ip("::ffff:192.168.1.21")));
}

#[test]
fn mapped_start_with_v6_end() {
    assert_eq!(IpRange::new(ip("::ffff:10.0.0.1"), ip("2001:db8::1")), None);
}

#[test]
fn v6_candidates_outside_v4_range() {
    let v4 = IpRange::new(ip("0.0.0.0"), ip("255.255.255.255")).expect("valid range");
    assert!(!v4.contains(ip("::1")));
    assert!(!v4.contains(ip("2001:db8::1")));
}

/// An IPv6 range compares IPv4 candidates in their mapped 16-byte form.
#[test]
fn v4_candidates_inside_v6_span() {
    let v6 = IpRange::new(ip("::"), ip("::1:0:0:0")).expect("valid range");
    assert!(v6.contains(ip("::ffff:10.0.0.1")));
    assert!(v6.contains(ip("10.0.0.1")));

    let low = IpRange::new(ip("::"), ip("::ffff")).expect("valid range");
    assert!(!low.contains(ip("0.0.0.1")));
    assert!(!low.contains(ip("::ffff:0.0.0.1")));
}

#[test]
fn try_from_pair() {
    let range = IpRange::try_from((ip("fe80::1"), ip("fe80::10"))).expect("valid range");
    assert_eq!(range.start(), ip("fe80::1"));
    assert_eq!(range.end(), ip("fe80::10"));
    assert_eq!(range.size(), BigUint::from(16u32));
}
