//! Output rendering.
//!
//! Every formatter consumes the identical post-filter clip sequence; the
//! chosen format never influences parsing or deduplication upstream.
//!
//! - [`text`] - one plain-text block per clip
//! - [`org`] - org-mode outline, one top-level heading per book
//! - [`json`] - pretty-printed JSON array for downstream tooling

mod json;
mod org;
mod text;

use anyhow::Result;

use crate::clippings::Clip;

/// Target output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Org,
    Json,
}

/// Render the final clip sequence in the requested format.
pub fn render(format: OutputFormat, clips: &[Clip]) -> Result<String> {
    match format {
        OutputFormat::Text => text::render(clips),
        OutputFormat::Org => org::render(clips),
        OutputFormat::Json => json::render(clips),
    }
}

/// One-line location summary shared by the text and org formatters:
/// `page 12, loc. 542-546`, either half optional.
fn location_summary(clip: &Clip) -> Option<String> {
    let location = clip.location.as_ref()?;
    let mut parts = Vec::new();
    if let Some(page) = &location.page {
        let keyword = if page.end.is_some() { "pages" } else { "page" };
        parts.push(format!("{keyword} {page}"));
    }
    if let Some(position) = &location.position {
        parts.push(format!("loc. {position}"));
    }
    (!parts.is_empty()).then(|| parts.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clippings::{ClipKind, Location, Span};

    fn clip_at(page: Option<Span>, position: Option<Span>) -> Clip {
        Clip {
            title: "Dune".into(),
            author: None,
            kind: ClipKind::Highlight,
            location: Some(Location { page, position }),
            added_at: None,
            content: String::new(),
            source_order: 0,
        }
    }

    #[test]
    fn location_summary_both_parts() {
        let clip = clip_at(Some(Span::single(12)), Some(Span::range(542, 546)));
        assert_eq!(
            location_summary(&clip).as_deref(),
            Some("page 12, loc. 542-546")
        );
    }

    #[test]
    fn location_summary_pluralizes_page_ranges() {
        let clip = clip_at(Some(Span::range(40, 45)), None);
        assert_eq!(location_summary(&clip).as_deref(), Some("pages 40-45"));
    }

    #[test]
    fn location_summary_absent_without_location() {
        let mut clip = clip_at(None, None);
        clip.location = None;
        assert_eq!(location_summary(&clip), None);
    }
}
