mod commands;
mod render;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use evreg_core::{EvregConfig, NewEvent, Store, User};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::commands::menu::Session;

#[derive(Parser)]
#[command(name = "evreg")]
#[command(about = "Register events, list them and confirm your attendance")]
struct Cli {
    /// Use this data file instead of the configured one
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive menu (default when no command is given)
    Menu,
    /// Register an event without prompting
    Register {
        #[arg(long)]
        name: String,

        #[arg(long)]
        address: String,

        /// PARTY, SPORT, SHOW or OTHER (any case)
        #[arg(short, long)]
        category: String,

        /// Date and time (e.g., "2024-05-01 18:30")
        #[arg(long)]
        at: String,

        #[arg(short, long, default_value = "")]
        description: String,
    },
    /// List registered events with their index
    List,
    /// Remove the event at this index; later events move up by one
    Remove {
        #[arg(allow_hyphen_values = true)]
        index: String,
    },
    /// Show where the config lives and its effective values
    Config,
}

fn main() -> Result<()> {
    // Logs go to stderr so they never interleave with menu output on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let mut config = EvregConfig::load()?;
    if let Some(path) = cli.data_file {
        config.data_file = path;
    }
    debug!(data_file = %config.data_path().display(), format = ?config.format, "configuration loaded");

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            let session = Session {
                store: open_store(&config)?,
                user: User::new(config.user_name.clone(), config.user_city.clone()),
            };
            commands::menu::run(session)
        }
        Commands::Register {
            name,
            address,
            category,
            at,
            description,
        } => {
            let new_event = NewEvent {
                name,
                address,
                category,
                timestamp: at,
                description,
            };
            commands::register::run(open_store(&config)?, new_event)
        }
        Commands::List => commands::list::run(&open_store(&config)?),
        Commands::Remove { index } => commands::remove::run(open_store(&config)?, &index),
        Commands::Config => commands::config::run(&config),
    }
}

fn open_store(config: &EvregConfig) -> Result<Store> {
    let path = config.data_path();

    Store::open(&path, config.store_options())
        .with_context(|| format!("Failed to load events from {}", path.display()))
}
