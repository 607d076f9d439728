use aqi_dashboard::cli::{run, Cli};
use aqi_dashboard::error::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}
