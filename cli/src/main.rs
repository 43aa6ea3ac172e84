mod commands;
mod config;
mod terminal;

use commands::{CommandLine, Commands, contains, info};
use config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    let cfg = Config {
        quiet: commands.quiet,
        no_color: commands.no_color,
    };

    logging::init_logging(&cfg);

    let result = match commands.command {
        Commands::Info { start, end } => {
            print::header("range info", cfg.quiet);
            info::info(start, end, &cfg)
        }
        Commands::Contains { start, end, addrs } => {
            print::header("membership check", cfg.quiet);
            contains::contains(start, end, &addrs, &cfg)
        }
    };

    print::end_of_program(cfg.quiet);
    result
}
