use clap::Parser;

mod adapters;
mod cli;
mod config;
mod console;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();
    cli::run(cli::Args::parse())
}
