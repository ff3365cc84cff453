//! Command-line interface for uta-rest.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **serve**: Serve a UTA database (or a JSON fixture) over HTTP
//! - **query**: Call one operation through a server, or directly on a provider
//! - **fixture**: Write the built-in sample fixture
//!
//! ## Usage
//!
//! ```text
//! # Serve the public UTA database
//! uta-rest serve --db-url postgresql://anonymous@uta.biocommons.org/uta/uta_20210129b
//!
//! # Serve a fixture on another port
//! uta-rest serve --fixture uta.json --port 9000
//!
//! # Query a running server
//! uta-rest query get_tx_exons NM_199425.2 NC_000020.10 splign
//!
//! # The same call, straight against the fixture
//! uta-rest query tx_exons NM_199425.2 NC_000020.10 splign --fixture uta.json
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{ArgGroup, Parser, Subcommand};

use crate::provider::memory::MemoryProvider;
use crate::provider::postgres::PgConnector;
use crate::provider::Connect;

pub mod fixture;
pub mod query;

#[derive(Parser)]
#[command(name = "uta-rest")]
#[command(version)]
#[command(about = "REST server and client for the Universal Transcript Archive")]
#[command(
    long_about = "uta-rest serves UTA transcript, sequence and alignment data over HTTP/JSON.\n\nEvery provider operation is one GET route, and the bundled client returns exactly what a direct provider call would, so tools without database access see the same data."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the REST server
    Serve(ServeArgs),

    /// Call a single operation
    Query(query::QueryArgs),

    /// Write the built-in sample fixture as JSON
    Fixture(fixture::FixtureArgs),
}

#[derive(clap::Args)]
#[command(group(
    ArgGroup::new("backend")
        .required(true)
        .multiple(true)
        .args(["db_url", "fixture"])
))]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long, default_value = "8000")]
    pub port: u16,

    /// Address to bind to
    #[arg(short, long, default_value = "127.0.0.1")]
    pub address: String,

    /// UTA database URL, `postgresql://user@host:port/database/schema`
    #[arg(long, env = "UTA_DB_URL")]
    pub db_url: Option<String>,

    /// Serve a JSON fixture instead of a database
    #[arg(long)]
    pub fixture: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Backend named by `--fixture` or `--db-url`, the fixture taking precedence.
/// `None` when neither is given.
///
/// # Errors
///
/// Returns an error for an unusable database URL or an unreadable fixture.
pub fn open_backend(
    db_url: Option<&str>,
    fixture: Option<&Path>,
) -> anyhow::Result<Option<Arc<dyn Connect>>> {
    if let Some(path) = fixture {
        let provider: Arc<dyn Connect> = Arc::new(MemoryProvider::load_from_file(path)?);
        tracing::debug!("Loaded fixture {}", path.display());
        return Ok(Some(provider));
    }
    let Some(url) = db_url else {
        return Ok(None);
    };
    let connector: Arc<dyn Connect> = Arc::new(PgConnector::from_url(url)?);
    Ok(Some(connector))
}
