// src/main.rs

mod cli;
mod clock;
mod commands;
mod config;
mod error;
mod logger;
mod logging;
mod models;
mod record;

use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use error::Result;

fn run(cli: Cli) -> Result<()> {
    let config_path = match cli.config {
        Some(path) => path,
        None => config::default_config_path()?,
    };
    let config = Config::load(&config_path)?;
    logging::init(logging::select_level(cli.verbose, config.log_level.as_deref()));
    tracing::debug!(path = %config_path.display(), exists = config_path.exists(), "config resolved");

    match cli.command {
        Commands::New { path } => commands::handle_new(&config, path),
        Commands::Log { file, fields, now } => commands::handle_log(&config, file, fields, now),
        Commands::Session { path, append } => commands::handle_session(&config, path, append),
        Commands::Show { path, strict } => commands::handle_show(&config, path, strict),
        Commands::Now => commands::handle_now(),
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
