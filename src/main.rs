//! merge-assets - concatenate css or js sources into one cache-busted bundle.

mod bundle;
mod cli;
mod config;
mod freshness;
mod logger;
mod utils;

use anyhow::Result;
use bundle::Bundler;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::BundlerConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = BundlerConfig::load(&cli)?;
    debug!("config"; "site root {}", config.site_root().display());
    let bundler = Bundler::new(config);

    match &cli.command {
        Commands::Bundle { args } => cli::bundle::run_bundle(&bundler, args),
        Commands::Resolve { args } => cli::resolve::run_resolve(&bundler, args),
    }
}
