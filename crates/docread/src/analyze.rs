use crate::prelude::{println, *};

pub mod client;
pub mod read;

/// Analyze module app - root command
#[derive(Debug, clap::Parser)]
#[command(name = "analyze")]
#[command(about = "Document Intelligence analyze operations")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Analyze a document with the prebuilt read model
    #[clap(name = "read")]
    Read(read::ReadOptions),
}

/// Environment variable holding the Document Intelligence endpoint URL.
pub const ENDPOINT_VAR: &str = "DI_ENDPOINT";
/// Environment variable holding the Document Intelligence API key.
pub const KEY_VAR: &str = "DI_KEY";

/// Sentinel values copied out of setup instructions without being replaced.
const PLACEHOLDER_VALUES: &[&str] = &["YOUR_ENDPOINT_HERE", "YOUR_KEY_HERE"];

/// Document Intelligence configuration from environment variables
///
/// Validated once at construction; the client constructor receives an
/// already-checked value and never re-validates.
#[derive(Debug, Clone)]
pub struct DiConfig {
    pub endpoint: String,
    pub key: String,
}

impl DiConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// `from_env` delegates here; tests pass a closure over fixture maps
    /// instead of mutating the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        Ok(Self {
            endpoint: require_value(&lookup, ENDPOINT_VAR)?,
            key: require_value(&lookup, KEY_VAR)?,
        })
    }
}

fn require_value(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Result<String, Error> {
    match lookup(name) {
        Some(value) if value.is_empty() || PLACEHOLDER_VALUES.contains(&value.as_str()) => Err(
            Error::Configuration(f!("{name} is set to a placeholder value; set a real one")),
        ),
        Some(value) => Ok(value),
        None => Err(Error::Configuration(f!(
            "{name} environment variable not set"
        ))),
    }
}

/// Module entry point
pub async fn run(app: App, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Running analyze module...");
    }

    match app.command {
        Commands::Read(options) => read::handler(options, global).await,
    }
}
