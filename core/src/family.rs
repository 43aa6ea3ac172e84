//! # Address Family
//!
//! Classifies addresses as IPv4 or IPv6. An IPv4-mapped IPv6 address
//! (`::ffff:a.b.c.d`) is an IPv4 address written in 16 bytes and is
//! classified as [`Family::V4`].

use std::fmt;
use std::net::{IpAddr, Ipv4Addr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    V4,
    V6,
}

impl Family {
    /// Returns the family of `addr` after normalization.
    pub fn of(addr: IpAddr) -> Self {
        match normalize(addr) {
            IpAddr::V4(_) => Family::V4,
            IpAddr::V6(_) => Family::V6,
        }
    }

    /// Width of an address of this family, in bits.
    pub fn bits(self) -> u32 {
        match self {
            Family::V4 => 32,
            Family::V6 => 128,
        }
    }

    /// Width of an address of this family, in bytes.
    pub fn octets(self) -> usize {
        match self {
            Family::V4 => 4,
            Family::V6 => 16,
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Family::V4 => write!(f, "IPv4"),
            Family::V6 => write!(f, "IPv6"),
        }
    }
}

/// Collapses IPv4-mapped IPv6 addresses to their 4-byte form.
///
/// IPv4-compatible addresses (`::a.b.c.d`) are deprecated and left alone,
/// otherwise `::1` would turn into `0.0.0.1`.
pub(crate) fn normalize(addr: IpAddr) -> IpAddr {
    match addr {
        IpAddr::V6(v6) => match v6.to_ipv4_mapped() {
            Some(v4) => IpAddr::V4(v4),
            None => addr,
        },
        IpAddr::V4(_) => addr,
    }
}

/// Like [`normalize`], but only yields an address that is IPv4 after it.
pub(crate) fn as_v4(addr: IpAddr) -> Option<Ipv4Addr> {
    match normalize(addr) {
        IpAddr::V4(v4) => Some(v4),
        IpAddr::V6(_) => None,
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
