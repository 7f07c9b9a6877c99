//! soundsprite - compile audio directories into an inline sound registry.

#![allow(dead_code)]

mod cli;
mod codegen;
mod config;
mod core;
mod embed;
mod logger;
mod module;
mod sound;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SoundConfig;

fn main() -> Result<()> {
    // Setup global Ctrl+C handler (before any blocking operations)
    core::setup_shutdown_handler()?;

    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = SoundConfig::load(&cli)?;

    match &cli.command {
        Commands::Build { .. } => cli::build::build(&config).map(|_| ()),
        Commands::Serve { .. } => cli::serve::serve(&config),
        Commands::Ids { json, .. } => cli::ids::ids(&config, *json),
    }
}
