use std::path::PathBuf;

use clap::Args;

use crate::provider::memory::MemoryProvider;

#[derive(Args)]
pub struct FixtureArgs {
    /// Output file path
    #[arg(required = true)]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

/// Write the built-in sample fixture
///
/// # Errors
///
/// Returns an error if the output exists (without `--force`) or cannot be written.
pub fn run(args: FixtureArgs) -> anyhow::Result<()> {
    if args.output.exists() && !args.force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            args.output.display()
        );
    }

    let provider = MemoryProvider::with_test_data();
    std::fs::write(&args.output, provider.to_json()?)?;

    let fixture = provider.fixture();
    eprintln!(
        "Wrote fixture ({} sequences, {} genes, {} transcripts, {} exons) to {}",
        fixture.sequences.len(),
        fixture.genes.len(),
        fixture.transcripts.len(),
        fixture.exons.len(),
        args.output.display()
    );
    Ok(())
}
