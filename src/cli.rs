use clap::{ArgAction, Args, Parser, Subcommand};
use url::Url;

use crate::config::profile::{
    DEFAULT_BASE_URL, DEFAULT_BIND_ADDRESS, DEFAULT_FEED_URL, DEFAULT_SERVER_PORT,
    DEFAULT_SERVER_SECRET,
};

#[derive(Debug, Parser)]
#[command(name = "reticule", version, about = "Trading API client")]
pub struct Cli {
    #[arg(long, global = true, help = "Emit JSON output")]
    pub json: bool,
    #[arg(short = 'v', long, global = true, action = ArgAction::Count, help = "Verbose logging")]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    Config(ConfigArgs),
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Create a new config")]
    Create {
        #[command(subcommand)]
        target: CreateTarget,
    },
    #[command(about = "Delete a config")]
    Delete {
        #[command(subcommand)]
        target: DeleteTarget,
    },
    #[command(about = "Update an existing config")]
    Update {
        #[command(subcommand)]
        target: UpdateTarget,
    },
}

#[derive(Debug, Subcommand)]
pub enum CreateTarget {
    #[command(visible_alias = "r", about = "Create a new reticule config")]
    Reticule(CreateArgs),
}

#[derive(Debug, Subcommand)]
pub enum DeleteTarget {
    #[command(visible_alias = "r", about = "Delete an existing reticule config")]
    Reticule(DeleteArgs),
}

#[derive(Debug, Subcommand)]
pub enum UpdateTarget {
    #[command(visible_alias = "r", about = "Update an existing reticule config")]
    Reticule(UpdateArgs),
}

#[derive(Debug, Args)]
pub struct CreateArgs {
    #[arg(short = 'n', long, help = "Name of config")]
    pub name: String,
    #[arg(short = 'b', long, default_value = DEFAULT_BASE_URL, value_parser = parse_url, help = "URL of the REST API that issued the key")]
    pub base_url: String,
    #[arg(short = 'f', long, default_value = DEFAULT_FEED_URL, value_parser = parse_url, help = "URL of the websocket feed")]
    pub feed_url: String,
    #[arg(short = 'k', long, default_value = "", help = "API key")]
    pub key: String,
    #[arg(short = 'p', long, default_value = "", help = "API passphrase")]
    pub passphrase: String,
    #[arg(short = 's', long, default_value = "", help = "API secret")]
    pub secret: String,
    #[arg(short = 'u', long = "use", help = "Set as the config to use")]
    pub use_config: bool,
    #[arg(short = 't', long, default_value_t = DEFAULT_SERVER_PORT, help = "Port to use in server mode")]
    pub port: u16,
    #[arg(short = 'l', long, default_value = DEFAULT_BIND_ADDRESS, help = "IP address to use in server mode")]
    pub bind_address: String,
    #[arg(short = 'a', long, default_value = DEFAULT_SERVER_SECRET, help = "Pre-shared secret for auth in server mode")]
    pub server_auth: String,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    #[arg(short = 'n', long, help = "Name of config")]
    pub name: String,
}

#[derive(Debug, Args)]
pub struct UpdateArgs {
    #[arg(short = 'n', long, help = "Name of config")]
    pub name: String,
    #[arg(short = 'r', long, help = "New name for config")]
    pub rename: Option<String>,
    #[arg(short = 'b', long, value_parser = parse_url, help = "URL of the REST API that issued the key")]
    pub base_url: Option<String>,
    #[arg(short = 'f', long, value_parser = parse_url, help = "URL of the websocket feed")]
    pub feed_url: Option<String>,
    #[arg(short = 'k', long, help = "API key")]
    pub key: Option<String>,
    #[arg(short = 'p', long, help = "API passphrase")]
    pub passphrase: Option<String>,
    #[arg(short = 's', long, help = "API secret")]
    pub secret: Option<String>,
    #[arg(short = 'u', long = "use", help = "Set as the config to use")]
    pub use_config: bool,
    #[arg(short = 't', long, help = "Port to use in server mode")]
    pub port: Option<u16>,
    #[arg(short = 'l', long, help = "IP address to use in server mode")]
    pub bind_address: Option<String>,
    #[arg(short = 'a', long, help = "Pre-shared secret for auth in server mode")]
    pub server_auth: Option<String>,
}

/// Accepts only absolute URLs, but keeps the text exactly as given.
fn parse_url(raw: &str) -> Result<String, url::ParseError> {
    Url::parse(raw)?;
    Ok(raw.to_string())
}
