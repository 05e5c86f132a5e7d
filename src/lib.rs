//! kclip - convert Kindle `My Clippings.txt` exports into text, org-mode,
//! or JSON.
//!
//! The library side is a pure pipeline: [`clippings::convert`] takes the
//! raw export text and returns normalized, de-duplicated clips plus
//! diagnostics for any records it had to skip. [`format::render`] turns the
//! result into the requested output. All file and terminal I/O lives in the
//! binary.

pub mod cli;
pub mod clippings;
pub mod format;

pub use clippings::{convert, extract, Clip, ClipKind, Diagnostic, Extraction, ParseError};
pub use format::{render, OutputFormat};
