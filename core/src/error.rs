use std::net::IpAddr;

use thiserror::Error;

/// Why a start/end pair could not form a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeError {
    /// The bounds belong to different address families.
    #[error("address family mismatch: {start} and {end}")]
    FamilyMismatch { start: IpAddr, end: IpAddr },
    /// Same family, but the start comes after the end.
    #[error("start {start} is greater than end {end}")]
    Inverted { start: IpAddr, end: IpAddr },
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
