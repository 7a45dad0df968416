//! Token commands.
//!
//! `tokenkeep token show|set|clear` go through [`KeychainItem`], which never
//! fails. The command installs an error hook to still tell the user when the
//! store rejected a request.

use std::sync::Arc;

use clap::Args;
use parking_lot::Mutex;
use tokenkeep_core::AccessToken;
use tokenkeep_secrets::{KeychainItem, SecretKey, SecretStoreClient};

/// Token command arguments.
#[derive(Args)]
pub struct TokenArgs {
    /// Which well-known key to operate on
    #[arg(long, default_value = "accessToken")]
    pub key: SecretKey,

    #[command(subcommand)]
    pub command: TokenCommand,
}

#[derive(clap::Subcommand)]
pub enum TokenCommand {
    /// Show the stored token (redacted unless --reveal)
    Show {
        /// Print the full token value
        #[arg(long)]
        reveal: bool,
    },

    /// Store a token
    Set {
        /// Token value (if omitted, prompts for hidden input)
        #[arg(long)]
        token: Option<String>,

        /// Token scheme, e.g. Bearer
        #[arg(long)]
        token_type: Option<String>,

        /// Lifetime in seconds from now
        #[arg(long)]
        expires_in: Option<i64>,
    },

    /// Delete the stored token
    Clear,
}

/// Run the token command.
pub fn run(client: Arc<SecretStoreClient>, args: TokenArgs) -> anyhow::Result<()> {
    let failure: Arc<Mutex<Option<String>>> = Arc::default();
    let sink = Arc::clone(&failure);
    let item: KeychainItem<AccessToken> =
        KeychainItem::new(args.key, client).with_error_hook(move |key, access, err| {
            tokenkeep_secrets::item::log_swallowed(key, access, err);
            if !err.is_not_found() {
                *sink.lock() = Some(err.to_string());
            }
        });

    match args.command {
        TokenCommand::Show { reveal } => match item.read() {
            Some(token) => print!("{}", describe(&token, reveal)),
            None => println!("No {} stored.", args.key),
        },

        TokenCommand::Set {
            token,
            token_type,
            expires_in,
        } => {
            let value = match token {
                Some(v) => v,
                None => rpassword::prompt_password(format!("Enter {}: ", args.key))
                    .map_err(|e| anyhow::anyhow!("Failed to read token: {}", e))?,
            };
            if value.is_empty() {
                anyhow::bail!("Token must not be empty");
            }

            let mut token = AccessToken::new(value);
            if let Some(token_type) = token_type {
                token = token.with_token_type(token_type);
            }
            if let Some(secs) = expires_in {
                token = token.expires_in(chrono::Duration::seconds(secs));
            }

            item.write(Some(&token));
            report(&failure)?;
            println!("{} stored.", args.key);
        }

        TokenCommand::Clear => {
            item.clear();
            report(&failure)?;
            println!("{} cleared.", args.key);
        }
    }

    report(&failure)
}

fn report(failure: &Mutex<Option<String>>) -> anyhow::Result<()> {
    match failure.lock().take() {
        Some(message) => Err(anyhow::anyhow!("{}", message)),
        None => Ok(()),
    }
}

/// Human-readable summary of a token.
pub fn describe(token: &AccessToken, reveal: bool) -> String {
    let value = if reveal {
        token.token.expose_secret().to_string()
    } else {
        token.token.preview()
    };

    let mut out = format!("token:   {value}\n");
    if let Some(token_type) = &token.token_type {
        out.push_str(&format!("type:    {token_type}\n"));
    }
    if let Some(expires_at) = token.expires_at {
        let state = if token.is_expired() { " (expired)" } else { "" };
        out.push_str(&format!(
            "expires: {}{state}\n",
            expires_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));
    }
    out
}
