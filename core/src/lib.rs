//! # iprange core
//!
//! Inclusive, contiguous ranges of IP addresses that do not need to be
//! CIDR aligned.
//!
//! ## Contents
//! * **[`range`]**: [`IpRange`] and its two variants, [`Ipv4Range`] and [`Ipv6Range`].
//! * **[`family`]**: [`Family`], the address family a range belongs to.
//! * **[`error`]**: [`RangeError`], the reason a start/end pair was rejected.
//!
//! ## Characteristics
//! * **Pure Rust**: No IO. Addresses come in as [`std::net::IpAddr`].
//! * **Immutable**: A range is validated once at construction and never changes.

pub mod error;
pub mod family;
pub mod range;

pub use error::RangeError;
pub use family::Family;
pub use range::{IpRange, Ipv4Range, Ipv6Range};
