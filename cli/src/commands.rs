pub mod contains;
pub mod info;

use std::net::IpAddr;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "iprange")]
#[command(about = "Inspect inclusive ranges of IPv4 and IPv6 addresses.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Reduce output (headers and separators are hidden)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the family and size of a range
    #[command(alias = "i")]
    Info { start: IpAddr, end: IpAddr },
    /// Check whether addresses fall inside a range
    #[command(alias = "c")]
    Contains {
        start: IpAddr,
        end: IpAddr,
        #[arg(required = true)]
        addrs: Vec<IpAddr>,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
