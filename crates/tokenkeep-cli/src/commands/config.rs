//! Configuration inspection commands.

use std::path::Path;

use clap::Args;
use tokenkeep_core::Config;

/// Config command arguments.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(clap::Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,

    /// Show configuration file path
    Path,

    /// Write the effective configuration to the config file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

/// Run the config command.
pub fn run(explicit: Option<&Path>, args: ConfigArgs) -> anyhow::Result<()> {
    let path = Config::resolve_path(explicit)?;

    match args.command {
        ConfigCommand::Show => {
            let config = Config::load_or_default(&path)?;
            println!("{}", config.to_json5()?);
        }

        ConfigCommand::Path => {
            println!("{}", path.display());
        }

        ConfigCommand::Init { force } => {
            if path.exists() && !force {
                anyhow::bail!(
                    "Config already exists at {} (use --force to overwrite)",
                    path.display()
                );
            }
            Config::load_or_default(&path)?.save(&path)?;
            println!("Wrote {}", path.display());
        }
    }

    Ok(())
}
