use std::net::IpAddr;

use anyhow::Context;
use iprange_core::IpRange;

use crate::config::Config;
use crate::terminal::{colors, print};
use colored::*;

pub fn contains(start: IpAddr, end: IpAddr, addrs: &[IpAddr], cfg: &Config) -> anyhow::Result<()> {
    let range = IpRange::try_new(start, end)
        .with_context(|| format!("cannot build a range from {start} to {end}"))?;

    if cfg.quiet == 0 {
        print::aligned_line("Range", range.to_string().color(colors::ADDR));
        print::separator();
    }

    for addr in addrs {
        let verdict: ColoredString = if range.contains(*addr) {
            "inside".color(colors::INSIDE)
        } else {
            "outside".color(colors::OUTSIDE)
        };
        print::aligned_line(&addr.to_string(), verdict);
    }

    check_outside(&range, addrs)
}

/// Counts the addresses that fall outside `range`.
fn count_outside(range: &IpRange, addrs: &[IpAddr]) -> usize {
    addrs.iter().filter(|addr| !range.contains(**addr)).count()
}

/// Fails when at least one address is outside, so the process exits non-zero.
fn check_outside(range: &IpRange, addrs: &[IpAddr]) -> anyhow::Result<()> {
    let outside: usize = count_outside(range, addrs);
    if outside > 0 {
        let unit: &str = if outside == 1 { "address is" } else { "addresses are" };
        anyhow::bail!("{outside} of {} {unit} outside {range}", addrs.len());
    }
    Ok(())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
