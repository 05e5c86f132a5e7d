//! Data model for normalized clips.
//!
//! A [`Clip`] is the immutable result of parsing one raw record. All fields
//! except `title` and `kind` are optional because the export omits them
//! freely: bookmarks carry no content, some lines carry no date, and a book
//! may report pages, positions, or both.

use chrono::NaiveDateTime;
use serde::Serialize;

/// An inclusive numeric range as the export writes it: a single number
/// (`page 46`) or a dash-separated pair (`Location 694-698`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub start: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<u32>,
}

impl Span {
    /// A single-number span (`page 46`).
    pub fn single(start: u32) -> Self {
        Self { start, end: None }
    }

    /// A two-ended span (`pages 40-45`).
    pub fn range(start: u32, end: u32) -> Self {
        Self {
            start,
            end: Some(end),
        }
    }

    fn hi(&self) -> u32 {
        self.end.unwrap_or(self.start)
    }

    /// Whether `other` lies entirely within this span.
    pub fn contains(&self, other: &Span) -> bool {
        self.start <= other.start && other.hi() <= self.hi()
    }

    /// Whether the two spans share at least one point.
    pub fn overlaps(&self, other: &Span) -> bool {
        self.start <= other.hi() && other.start <= self.hi()
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.end {
            Some(end) => write!(f, "{}-{}", self.start, end),
            None => write!(f, "{}", self.start),
        }
    }
}

/// Where in the book a clip occurred. At least one component is set; which
/// ones depends on the book's own format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Location {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<Span>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Span>,
}

impl Location {
    pub fn is_empty(&self) -> bool {
        self.page.is_none() && self.position.is_none()
    }

    /// Whether this location's range fully contains `other`'s.
    ///
    /// Position spans are the authoritative comparison; page spans are only
    /// consulted when neither side reports a position (pages are too coarse
    /// to trust once positions exist).
    pub fn contains(&self, other: &Location) -> bool {
        match (self.position, other.position) {
            (Some(a), Some(b)) => a.contains(&b),
            (None, None) => match (self.page, other.page) {
                (Some(a), Some(b)) => a.contains(&b),
                _ => false,
            },
            _ => false,
        }
    }

    /// Whether the two locations' ranges intersect at all.
    pub fn overlaps(&self, other: &Location) -> bool {
        match (self.position, other.position) {
            (Some(a), Some(b)) => a.overlaps(&b),
            (None, None) => match (self.page, other.page) {
                (Some(a), Some(b)) => a.overlaps(&b),
                _ => false,
            },
            _ => false,
        }
    }
}

/// Classification of a clip, taken from the metadata line's descriptor
/// phrase. `Unknown` records survive parsing but are excluded from output
/// unless explicitly requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClipKind {
    Highlight,
    Note,
    Bookmark,
    Unknown,
}

impl ClipKind {
    /// Human-readable label for text output.
    pub fn label(&self) -> &'static str {
        match self {
            ClipKind::Highlight => "Highlight",
            ClipKind::Note => "Note",
            ClipKind::Bookmark => "Bookmark",
            ClipKind::Unknown => "Unknown",
        }
    }

    /// Lowercase tag for org-mode headings.
    pub fn tag(&self) -> &'static str {
        match self {
            ClipKind::Highlight => "highlight",
            ClipKind::Note => "note",
            ClipKind::Bookmark => "bookmark",
            ClipKind::Unknown => "unknown",
        }
    }

    /// The three kinds the export documents. `Unknown` is deliberately
    /// absent; callers opt into it.
    pub fn known() -> [ClipKind; 3] {
        [ClipKind::Highlight, ClipKind::Note, ClipKind::Bookmark]
    }
}

/// One normalized highlight, note, or bookmark.
///
/// Immutable once assembled. `source_order` is the raw-record index in the
/// original file; it is never reassigned, so it stays valid provenance even
/// after deduplication removes neighbors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Clip {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub kind: ClipKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub added_at: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub content: String,
    pub source_order: usize,
}

impl Clip {
    /// Identity of the book this clip belongs to. Two books with the same
    /// title but different (or absent) authors are distinct.
    pub fn book_key(&self) -> (&str, Option<&str>) {
        (self.title.as_str(), self.author.as_deref())
    }

    /// `Title (Author)` heading, or just the title when no author is known.
    pub fn heading(&self) -> String {
        match &self.author {
            Some(author) => format!("{} ({})", self.title, author),
            None => self.title.clone(),
        }
    }
}

/// Per-kind clip counts, for the CLI summary message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KindCounts {
    pub highlights: usize,
    pub notes: usize,
    pub bookmarks: usize,
    pub unknown: usize,
}

impl KindCounts {
    fn count(&mut self, kind: ClipKind) {
        match kind {
            ClipKind::Highlight => self.highlights += 1,
            ClipKind::Note => self.notes += 1,
            ClipKind::Bookmark => self.bookmarks += 1,
            ClipKind::Unknown => self.unknown += 1,
        }
    }
}

/// Complete result of a pipeline run: the surviving clips plus one
/// diagnostic per record that had to be skipped.
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    pub clips: Vec<Clip>,
    pub diagnostics: Vec<super::error::Diagnostic>,
}

impl Extraction {
    pub fn is_empty(&self) -> bool {
        self.clips.is_empty() && self.diagnostics.is_empty()
    }

    pub fn counts(&self) -> KindCounts {
        let mut counts = KindCounts::default();
        for clip in &self.clips {
            counts.count(clip.kind);
        }
        counts
    }
}
