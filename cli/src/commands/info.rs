use std::net::IpAddr;

use anyhow::Context;
use iprange_core::IpRange;

use crate::config::Config;
use crate::terminal::{colors, print};
use colored::*;

pub fn info(start: IpAddr, end: IpAddr, cfg: &Config) -> anyhow::Result<()> {
    let range = IpRange::try_new(start, end)
        .with_context(|| format!("cannot build a range from {start} to {end}"))?;

    if cfg.quiet == 0 {
        print::aligned_line("Range", range.to_string().color(colors::ADDR));
    }
    print::aligned_line("Family", range.family().to_string());
    print::aligned_line("Start", range.start().to_string().color(colors::ADDR));
    print::aligned_line("End", range.end().to_string().color(colors::ADDR));
    print::aligned_line("Size", range.size().to_string().color(colors::ACCENT));

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
