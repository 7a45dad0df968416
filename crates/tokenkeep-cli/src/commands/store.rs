//! Raw key commands.
//!
//! `tokenkeep get|set|remove <key>` operate on arbitrary keys through
//! [`SecretStoreClient`] and report every store error.

use clap::Args;
use serde_json::Value;
use tokenkeep_secrets::SecretStoreClient;

#[derive(Args)]
pub struct GetArgs {
    /// Record key
    pub key: String,
}

#[derive(Args)]
pub struct SetArgs {
    /// Record key
    pub key: String,

    /// JSON value to store (if omitted, prompts for hidden input)
    #[arg(long)]
    pub value: Option<String>,

    /// Store the input as a plain string instead of parsing it as JSON
    #[arg(long)]
    pub string: bool,
}

#[derive(Args)]
pub struct RemoveArgs {
    /// Record key
    pub key: String,
}

/// Turn command-line input into the value to store.
pub fn parse_value(raw: String, as_string: bool) -> anyhow::Result<Value> {
    if as_string {
        Ok(Value::String(raw))
    } else {
        serde_json::from_str(&raw).map_err(|e| {
            anyhow::anyhow!("Value is not valid JSON (use --string for plain text): {}", e)
        })
    }
}

pub fn get(client: &SecretStoreClient, args: GetArgs) -> anyhow::Result<()> {
    let value: Option<Value> = client
        .get(&args.key)
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    match value {
        Some(value) => println!("{}", serde_json::to_string_pretty(&value)?),
        None => println!("No value stored for '{}'.", args.key),
    }
    Ok(())
}

pub fn set(client: &SecretStoreClient, args: SetArgs) -> anyhow::Result<()> {
    let raw = match args.value {
        Some(v) => v,
        None => {
            let prompt = format!("Enter value for '{}': ", args.key);
            rpassword::prompt_password(prompt)
                .map_err(|e| anyhow::anyhow!("Failed to read value: {}", e))?
        }
    };
    let value = parse_value(raw, args.string)?;

    client
        .set(Some(&value), &args.key)
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    println!("Value for '{}' stored.", args.key);
    Ok(())
}

pub fn remove(client: &SecretStoreClient, args: RemoveArgs) -> anyhow::Result<()> {
    client
        .remove(&args.key)
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    println!("Value for '{}' removed.", args.key);
    Ok(())
}
