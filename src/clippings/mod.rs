//! Parsing and normalization pipeline for Kindle `My Clippings.txt` exports.
//!
//! The export is a flat text file of highlight, note, and bookmark records
//! separated by `==========` lines. This module turns it into a normalized,
//! de-duplicated clip sequence:
//!
//! 1. [`split`] cuts the raw text into records at delimiter lines
//! 2. [`record`] splits each record into title, metadata, and content
//! 3. [`fields`] extracts kind, location, and timestamp from the metadata
//! 4. [`extract`] assembles clips, isolating per-record failures
//! 5. [`transforms`] collapse overlapping highlights and filter by kind
//!
//! The whole pipeline is a pure function from input text to clips plus
//! diagnostics; it performs no I/O and keeps no state between runs. One
//! malformed record never affects any other record.
//!
//! # Module structure
//!
//! - [`types`] - [`Clip`], [`ClipKind`], [`Location`], [`Extraction`]
//! - [`error`] - per-record failure taxonomy and diagnostics
//! - [`split`] - delimiter-based record splitter
//! - [`record`] - record structure and title/author parsing
//! - [`fields`] - metadata line field extractors
//! - [`transforms`] - deduplication and kind filtering

pub mod error;
pub mod fields;
pub mod record;
pub mod split;
pub mod transforms;
pub mod types;

use tracing::{debug, warn};

pub use error::{Diagnostic, ParseError};
pub use types::{Clip, ClipKind, Extraction, KindCounts, Location, Span};

use record::{parse_record, split_title_author};
use split::{split_records, RawRecord};
use transforms::{DeduplicateHighlights, FilterKinds, Transform};

/// Parse raw export text into the full clip sequence.
///
/// Hard per-record failures become [`Diagnostic`]s; everything else comes
/// back as a [`Clip`] with `source_order` set to its raw-record index.
/// Empty or whitespace-only input yields an empty extraction, not an error.
pub fn extract(input: &str) -> Extraction {
    let mut clips = Vec::new();
    let mut diagnostics = Vec::new();

    for raw in split_records(input) {
        match assemble(&raw) {
            Ok(clip) => clips.push(clip),
            Err(error) => {
                let title = raw.first_line().map(str::to_string);
                warn!(record = raw.index, %error, "skipping record");
                diagnostics.push(Diagnostic {
                    record: raw.index,
                    title,
                    error,
                });
            }
        }
    }

    debug!(
        clips = clips.len(),
        skipped = diagnostics.len(),
        "parsed export"
    );
    Extraction { clips, diagnostics }
}

/// Run the full pipeline: parse, deduplicate overlapping highlights, and
/// filter to the selected kinds (empty selection means all known kinds).
pub fn convert(input: &str, kinds: &[ClipKind]) -> Extraction {
    let mut extraction = extract(input);

    let mut dedupe = DeduplicateHighlights::new();
    dedupe.transform(&mut extraction.clips);
    debug!(removed = dedupe.removed_count(), "deduplicated highlights");

    FilterKinds::new(kinds).transform(&mut extraction.clips);
    extraction
}

/// Combine one parsed record into a clip.
fn assemble(raw: &RawRecord<'_>) -> Result<Clip, ParseError> {
    let parsed = parse_record(raw)?;
    let metadata = fields::parse_metadata(parsed.metadata_line)?;
    let (title, author) = split_title_author(parsed.title_line);

    Ok(Clip {
        title,
        author,
        kind: metadata.kind,
        location: metadata.location,
        added_at: metadata.added_at,
        content: parsed.content,
        source_order: raw.index,
    })
}
