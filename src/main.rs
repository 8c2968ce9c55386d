//! Plainsite - a minimal static site generator for plain HTML pages.

mod build;
mod cli;
mod config;
mod error;
mod init;
mod logger;
mod page;
mod template;

use anyhow::Result;
use build::build_site;
use clap::Parser;
use cli::{Cli, Commands};
use config::SiteConfig;
use init::create_site;
use page::create_page;
use std::process;

fn main() -> Result<()> {
    // clap exits with status 2 on usage errors; the CLI contract is 1.
    let cli = Cli::try_parse().unwrap_or_else(|err| {
        let _ = err.print();
        process::exit(1);
    });
    let config = SiteConfig::from_cli(&cli);

    match &cli.command {
        Commands::Init => create_site(&config)?,
        Commands::New { name } => create_page(&config, name)?,
        Commands::Build => {
            build_site(&config)?;
        }
    }

    Ok(())
}
