use anyhow::Result;
use clap::Parser;
use fontkern_cli::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.init_logger();
    cli.command.run()
}
