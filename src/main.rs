use clap::Parser;
use tracing_subscriber::EnvFilter;

use uta_rest::{cli, web};

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // RUST_LOG wins over the verbosity flag
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("uta_rest=debug,tower_http=debug,info")
        } else {
            EnvFilter::new("uta_rest=info,warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match cli.command {
        cli::Commands::Serve(args) => {
            web::server::run(args)?;
        }
        cli::Commands::Query(args) => {
            cli::query::run(args, cli.format)?;
        }
        cli::Commands::Fixture(args) => {
            cli::fixture::run(args)?;
        }
    }

    Ok(())
}
