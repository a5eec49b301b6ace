//! phone-lookup - resolve a name or number into candidate phones.
//!
//! Reads contacts from a JSON file, resolves the search text and prints the
//! candidates as JSON on stdout. Logs go to stderr.

use anyhow::{Context, Result};
use clap::Parser;
use contact_phone_resolver::{Config, ContactDirectory, ContactResolver, InMemoryDirectory};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "phone-lookup", about = "Resolve a contact name or number into phones")]
struct Cli {
    /// Name fragment or phone number to resolve
    search: String,

    /// Only print mobile numbers
    #[arg(long)]
    mobile_only: bool,

    /// JSON contacts file (overrides CONTACTS_FILE)
    #[arg(long, value_name = "PATH")]
    contacts: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Configuration errors are reported once, by the returned error
    let config = Config::from_env()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let directory = match cli.contacts.as_ref().or(config.contacts_file.as_ref()) {
        Some(path) => InMemoryDirectory::from_path(path)
            .with_context(|| format!("Failed to load contacts from {}", path.display()))?,
        None => {
            info!("No contacts file configured; using an empty directory");
            InMemoryDirectory::new()
        }
    };
    info!(contacts = directory.len(), "Contact directory ready");

    let directory = Arc::new(directory) as Arc<dyn ContactDirectory>;
    let resolver = ContactResolver::new(directory, &config.plan)?;

    let result = if cli.mobile_only {
        resolver.resolve_mobile_candidates(&cli.search)
    } else {
        resolver.resolve_candidates(&cli.search)
    };

    let phones = match result {
        Ok(phones) => phones,
        Err(e) => {
            error!("Lookup failed: {}", e);
            return Err(e.into());
        }
    };

    println!("{}", serde_json::to_string_pretty(&phones)?);
    Ok(())
}
