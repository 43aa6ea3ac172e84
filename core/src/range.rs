//! # IP Range Model
//!
//! Inclusive, contiguous ranges of addresses within a single family, such as
//! `192.168.1.1-192.168.1.40` or `2001:db8::-2001:db8::ffff`.
//!
//! A range is only ever created through a validating constructor, so every
//! [`IpRange`] in circulation satisfies `start <= end` under byte-wise order
//! of the family's fixed-width form.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use num_bigint::BigUint;
use tracing::{debug, trace};

use crate::error::RangeError;
use crate::family::{self, Family};

/// A range of IPv4 addresses, inclusive on both ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ipv4Range {
    start: Ipv4Addr,
    end: Ipv4Addr,
}

impl Ipv4Range {
    /// Returns `None` if `start` comes after `end`.
    pub fn new(start: Ipv4Addr, end: Ipv4Addr) -> Option<Self> {
        (start.octets() <= end.octets()).then_some(Self { start, end })
    }

    pub fn start(&self) -> Ipv4Addr {
        self.start
    }

    pub fn end(&self) -> Ipv4Addr {
        self.end
    }

    pub fn family(&self) -> Family {
        Family::V4
    }

    pub fn contains(&self, addr: Ipv4Addr) -> bool {
        let octets = addr.octets();
        octets >= self.start.octets() && octets <= self.end.octets()
    }

    /// Number of addresses in the range, never zero.
    pub fn size(&self) -> BigUint {
        BigUint::from(v4_to_int(self.end) - v4_to_int(self.start)) + 1u32
    }
}

impl fmt::Display for Ipv4Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// A range of IPv6 addresses, inclusive on both ends.
///
/// Neither bound is an IPv4-mapped address; those ranges are [`Ipv4Range`]s.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ipv6Range {
    start: Ipv6Addr,
    end: Ipv6Addr,
}

impl Ipv6Range {
    /// Returns `None` if `start` comes after `end`, or if either bound is
    /// IPv4-mapped.
    pub fn new(start: Ipv6Addr, end: Ipv6Addr) -> Option<Self> {
        if start.to_ipv4_mapped().is_some() || end.to_ipv4_mapped().is_some() {
            return None;
        }
        (start.octets() <= end.octets()).then_some(Self { start, end })
    }

    pub fn start(&self) -> Ipv6Addr {
        self.start
    }

    pub fn end(&self) -> Ipv6Addr {
        self.end
    }

    pub fn family(&self) -> Family {
        Family::V6
    }

    /// Compares all 16 bytes, so IPv4-mapped candidates count when the
    /// range spans `::ffff:0:0/96`, matching [`Ipv6Range::size`].
    pub fn contains(&self, addr: Ipv6Addr) -> bool {
        let octets = addr.octets();
        octets >= self.start.octets() && octets <= self.end.octets()
    }

    /// Number of addresses in the range, up to 2^128.
    pub fn size(&self) -> BigUint {
        BigUint::from(u128::from(self.end) - u128::from(self.start)) + 1u32
    }
}

impl fmt::Display for Ipv6Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// A range of addresses of either family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IpRange {
    V4(Ipv4Range),
    V6(Ipv6Range),
}

impl IpRange {
    /// Builds a range from two addresses of the same family.
    ///
    /// Returns `None` when the families differ or `start > end`. Use
    /// [`IpRange::try_new`] to find out which.
    pub fn new(start: IpAddr, end: IpAddr) -> Option<Self> {
        Self::try_new(start, end).ok()
    }

    /// Builds a range from two addresses of the same family.
    ///
    /// IPv4-mapped IPv6 bounds are collapsed to IPv4 first, so
    /// `::ffff:10.0.0.1` and `10.0.0.9` form the IPv4 range `10.0.0.1-10.0.0.9`.
    pub fn try_new(start: IpAddr, end: IpAddr) -> Result<Self, RangeError> {
        let range = match (family::normalize(start), family::normalize(end)) {
            (IpAddr::V4(s), IpAddr::V4(e)) => Ipv4Range::new(s, e)
                .map(IpRange::V4)
                .ok_or(RangeError::Inverted { start, end }),
            (IpAddr::V6(s), IpAddr::V6(e)) => Ipv6Range::new(s, e)
                .map(IpRange::V6)
                .ok_or(RangeError::Inverted { start, end }),
            _ => Err(RangeError::FamilyMismatch { start, end }),
        };

        match &range {
            Ok(r) => trace!(range = %r, "address range created"),
            Err(e) => debug!(%start, %end, reason = %e, "address range rejected"),
        }
        range
    }

    pub fn start(&self) -> IpAddr {
        match self {
            IpRange::V4(r) => IpAddr::V4(r.start()),
            IpRange::V6(r) => IpAddr::V6(r.start()),
        }
    }

    pub fn end(&self) -> IpAddr {
        match self {
            IpRange::V4(r) => IpAddr::V4(r.end()),
            IpRange::V6(r) => IpAddr::V6(r.end()),
        }
    }

    pub fn family(&self) -> Family {
        match self {
            IpRange::V4(r) => r.family(),
            IpRange::V6(r) => r.family(),
        }
    }

    /// Reports whether `addr` lies within the range, bounds included.
    ///
    /// The candidate is brought to the range's fixed width first: an IPv4
    /// range collapses `::ffff:a.b.c.d` to `a.b.c.d`, an IPv6 range expands
    /// `a.b.c.d` to `::ffff:a.b.c.d`. Other IPv6 addresses are never inside
    /// an IPv4 range.
    pub fn contains(&self, addr: IpAddr) -> bool {
        match self {
            IpRange::V4(r) => family::as_v4(addr).is_some_and(|a| r.contains(a)),
            IpRange::V6(r) => match addr {
                IpAddr::V4(a) => r.contains(a.to_ipv6_mapped()),
                IpAddr::V6(a) => r.contains(a),
            },
        }
    }

    pub fn size(&self) -> BigUint {
        match self {
            IpRange::V4(r) => r.size(),
            IpRange::V6(r) => r.size(),
        }
    }
}

impl fmt::Display for IpRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IpRange::V4(r) => fmt::Display::fmt(r, f),
            IpRange::V6(r) => fmt::Display::fmt(r, f),
        }
    }
}

impl TryFrom<(IpAddr, IpAddr)> for IpRange {
    type Error = RangeError;

    fn try_from((start, end): (IpAddr, IpAddr)) -> Result<Self, Self::Error> {
        Self::try_new(start, end)
    }
}

impl From<Ipv4Range> for IpRange {
    fn from(range: Ipv4Range) -> Self {
        IpRange::V4(range)
    }
}

impl From<Ipv6Range> for IpRange {
    fn from(range: Ipv6Range) -> Self {
        IpRange::V6(range)
    }
}

fn v4_to_int(ip: Ipv4Addr) -> u32 {
    u32::from_be_bytes(ip.octets())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
