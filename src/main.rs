use clap::Parser;
use outage_dashboard::cli::{run, Cli};
use outage_dashboard::error::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}
