//! Metadata line field extraction.
//!
//! The metadata line is loosely templated:
//!
//! ```text
//! - Your Highlight on pages 40-45 | Location 542-546 | Added on Thursday, November 17, 2022 12:55:54 PM
//! ```
//!
//! Rather than one monolithic pattern, each field has its own independent
//! extractor returning an `Option`; a field that fails to match leaves its
//! slot empty without affecting the others. Only a completely blank line is
//! a hard failure.

use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::Regex;

use super::error::ParseError;
use super::types::{ClipKind, Location, Span};

static KIND_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(highlight|note|bookmark)\b").unwrap());

static PAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bpages?\s+(\d+)(?:\s*-\s*(\d+))?").unwrap());

static POSITION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\blocation\s+(\d+)(?:\s*-\s*(\d+))?").unwrap());

static ADDED_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\badded on\s+(.+)$").unwrap());

/// Date-time patterns the export is known to use, most common first. The
/// default locale writes 12-hour times with a meridiem; 24-hour and
/// weekday-less variants appear in other locales.
const DATE_FORMATS: &[&str] = &[
    "%A, %B %d, %Y %I:%M:%S %p",
    "%A, %B %d, %Y %H:%M:%S",
    "%B %d, %Y %I:%M:%S %p",
    "%B %d, %Y %H:%M:%S",
];

/// Everything one metadata line yields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metadata {
    pub kind: ClipKind,
    pub location: Option<Location>,
    pub added_at: Option<NaiveDateTime>,
}

/// Parse a metadata line. Each component is independently optional; an
/// unrecognized descriptor keyword degrades to [`ClipKind::Unknown`] and
/// the rest of the line is still scanned.
pub fn parse_metadata(line: &str) -> Result<Metadata, ParseError> {
    if line.trim().is_empty() {
        return Err(ParseError::EmptyMetadata);
    }

    let location = Location {
        page: parse_span(&PAGE_RE, line),
        position: parse_span(&POSITION_RE, line),
    };

    Ok(Metadata {
        kind: parse_kind(line),
        location: (!location.is_empty()).then_some(location),
        added_at: parse_added_at(line),
    })
}

/// Earliest recognized type keyword wins; none means `Unknown`.
fn parse_kind(line: &str) -> ClipKind {
    match KIND_RE.find(line) {
        Some(m) => match m.as_str().to_ascii_lowercase().as_str() {
            "highlight" => ClipKind::Highlight,
            "note" => ClipKind::Note,
            _ => ClipKind::Bookmark,
        },
        None => ClipKind::Unknown,
    }
}

fn parse_span(re: &Regex, line: &str) -> Option<Span> {
    let caps = re.captures(line)?;
    let start: u32 = caps.get(1)?.as_str().parse().ok()?;
    match caps.get(2) {
        Some(end) => Some(Span::range(start, end.as_str().parse().ok()?)),
        None => Some(Span::single(start)),
    }
}

/// Parse the `Added on …` clause. Fails soft: any unparseable date leaves
/// the timestamp absent rather than discarding the record.
fn parse_added_at(line: &str) -> Option<NaiveDateTime> {
    let raw = ADDED_RE.captures(line)?.get(1)?.as_str().trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}
