use clap::Parser;

mod cli;
mod commands;

pub(crate) type CliResult<T = ()> = pixelveil_core::Result<T>;

fn main() -> CliResult {
    env_logger::init();

    let args = cli::CliArgs::parse();
    match args.command {
        cli::Commands::Hide(cmd) => cmd.run(),
        cli::Commands::Unveil(cmd) => cmd.run(),
    }
}
