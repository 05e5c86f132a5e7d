use std::fs;

use anyhow::{Context, Result};
use clap::Parser;

use kclip::cli::Cli;
use kclip::clippings::{self, ClipKind};
use kclip::format;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        Cli::print_completions(shell);
        return Ok(());
    }

    // Clap guarantees the file is present when --completions is not.
    let file = cli.file.as_deref().context("no input file given")?;
    let input = fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;

    let kinds: Vec<ClipKind> = cli.types.iter().map(|&kind| kind.into()).collect();
    let extraction = clippings::convert(&input, &kinds);

    if !cli.quiet {
        let counts = extraction.counts();
        eprintln!(
            "Processing '{}': {} highlights, {} notes, {} bookmarks ({} records skipped)",
            file.display(),
            counts.highlights,
            counts.notes,
            counts.bookmarks,
            extraction.diagnostics.len()
        );
        for diagnostic in &extraction.diagnostics {
            eprintln!("skipped {diagnostic}");
        }
    }

    let rendered = format::render(cli.format.into(), &extraction.clips)?;
    match &cli.output {
        Some(path) => fs::write(path, rendered)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => print!("{rendered}"),
    }

    Ok(())
}
