//! tokenkeep command-line interface.

pub mod commands;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tokenkeep_core::Config;
use tokenkeep_secrets::SecretStoreClient;

/// tokenkeep - typed secrets in the OS secret store
#[derive(Parser)]
#[command(name = "tokenkeep")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase logging verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to config file
    #[arg(short, long, env = "TOKENKEEP_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Log filter used when `RUST_LOG` is unset.
    pub fn default_filter(&self) -> &'static str {
        match self.verbose {
            0 => "tokenkeep=info",
            1 => "tokenkeep=debug",
            _ => "tokenkeep=trace",
        }
    }
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Print the value stored under a key
    Get(commands::store::GetArgs),

    /// Store a value under a key
    Set(commands::store::SetArgs),

    /// Remove the value stored under a key
    Remove(commands::store::RemoveArgs),

    /// Manage well-known tokens
    Token(commands::token::TokenArgs),

    /// Configuration inspection
    Config(commands::config::ConfigArgs),

    /// Show version information
    Version,
}

/// Load the configuration and build the store client it describes.
fn open_store(config_path: Option<&std::path::Path>) -> anyhow::Result<Arc<SecretStoreClient>> {
    let path = Config::resolve_path(config_path)?;
    let config = Config::load_or_default(&path)
        .with_context(|| format!("Failed to load config from {}", path.display()))?;
    let client = Arc::new(SecretStoreClient::from_config(&config.store));
    tracing::debug!(
        service = client.service(),
        backend = client.backend_name(),
        "secret store ready"
    );
    Ok(client)
}

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let config_path = cli.config.as_deref();
    match cli.command {
        Commands::Get(args) => {
            let client = open_store(config_path)?;
            commands::store::get(&client, args)
        }
        Commands::Set(args) => {
            let client = open_store(config_path)?;
            commands::store::set(&client, args)
        }
        Commands::Remove(args) => {
            let client = open_store(config_path)?;
            commands::store::remove(&client, args)
        }
        Commands::Token(args) => commands::token::run(open_store(config_path)?, args),
        Commands::Config(args) => commands::config::run(config_path, args),
        Commands::Version => {
            println!("tokenkeep {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
