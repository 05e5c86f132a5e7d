//! Command-line interface definitions.

use std::io;
use std::path::PathBuf;

use clap::{CommandFactory, Parser, ValueEnum};
use clap_complete::Shell;

use crate::clippings::ClipKind;
use crate::format::OutputFormat;

/// Convert a Kindle `My Clippings.txt` export into text, org-mode, or JSON.
#[derive(Debug, Parser)]
#[command(name = "kclip", version, about, long_about = None)]
pub struct Cli {
    /// The `My Clippings.txt` file to convert.
    #[arg(required_unless_present = "completions")]
    pub file: Option<PathBuf>,

    /// Write output to a file instead of stdout.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = FormatArg::Text)]
    pub format: FormatArg,

    /// Clip types to include (repeatable or comma-separated).
    /// Defaults to highlights, notes, and bookmarks.
    #[arg(short, long = "types", value_enum, value_delimiter = ',')]
    pub types: Vec<KindArg>,

    /// Suppress the summary message and skipped-record diagnostics.
    #[arg(short, long)]
    pub quiet: bool,

    /// Print a shell completion script and exit.
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

impl Cli {
    /// Write the completion script for `shell` to stdout.
    pub fn print_completions(shell: Shell) {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Text,
    Org,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Org => OutputFormat::Org,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Highlight,
    Note,
    Bookmark,
    Unknown,
}

impl From<KindArg> for ClipKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Highlight => ClipKind::Highlight,
            KindArg::Note => ClipKind::Note,
            KindArg::Bookmark => ClipKind::Bookmark,
            KindArg::Unknown => ClipKind::Unknown,
        }
    }
}
