//! Overlapping-highlight deduplication.
//!
//! Kindle re-exports a highlight every time the user extends the selection,
//! so a single passage shows up as a chain of growing records. The export
//! is append-only, which makes the record with the highest `source_order`
//! the user's final selection; everything it subsumes is noise.

use std::collections::HashMap;

use crate::clippings::types::{Clip, ClipKind};

/// Collapses duplicate and subset highlights per book, keeping the later
/// record of each duplicate pair.
///
/// Only highlights participate. A note at the same location as a highlight
/// is a distinct annotation, and bookmarks are never collapsed either.
pub struct DeduplicateHighlights {
    removed_count: usize,
}

impl DeduplicateHighlights {
    pub fn new() -> Self {
        Self { removed_count: 0 }
    }

    /// How many highlights the last run removed.
    pub fn removed_count(&self) -> usize {
        self.removed_count
    }

    /// Two highlights on the same book are duplicates when their locations
    /// are equal or one's range fully contains the other's. Highlights
    /// without any location never match.
    fn is_duplicate(a: &Clip, b: &Clip) -> bool {
        match (&a.location, &b.location) {
            (Some(la), Some(lb)) => la == lb || la.contains(lb) || lb.contains(la),
            _ => false,
        }
    }
}

impl Default for DeduplicateHighlights {
    fn default() -> Self {
        Self::new()
    }
}

impl super::Transform for DeduplicateHighlights {
    fn transform(&mut self, clips: &mut Vec<Clip>) {
        // Arena of candidate indices per book key; clips are compared but
        // never moved until the final retain, so indices stay stable.
        let mut by_book: HashMap<(String, Option<String>), Vec<usize>> = HashMap::new();
        for (i, clip) in clips.iter().enumerate() {
            if clip.kind == ClipKind::Highlight {
                let (title, author) = clip.book_key();
                by_book
                    .entry((title.to_string(), author.map(str::to_string)))
                    .or_default()
                    .push(i);
            }
        }

        let mut removed = vec![false; clips.len()];
        for indices in by_book.values() {
            for (pos, &earlier) in indices.iter().enumerate() {
                for &later in &indices[pos + 1..] {
                    // Vector order is source order, so `later` always wins.
                    if Self::is_duplicate(&clips[earlier], &clips[later]) {
                        removed[earlier] = true;
                        break;
                    }
                }
            }
        }

        self.removed_count = removed.iter().filter(|r| **r).count();
        let mut index = 0;
        clips.retain(|_| {
            let keep = !removed[index];
            index += 1;
            keep
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clippings::transforms::Transform;
    use crate::clippings::types::{Location, Span};

    fn highlight(title: &str, position: Span, content: &str, source_order: usize) -> Clip {
        Clip {
            title: title.to_string(),
            author: Some("Author".to_string()),
            kind: ClipKind::Highlight,
            location: Some(Location {
                page: None,
                position: Some(position),
            }),
            added_at: None,
            content: content.to_string(),
            source_order,
        }
    }

    fn dedupe(clips: &mut Vec<Clip>) -> usize {
        let mut transform = DeduplicateHighlights::new();
        transform.transform(clips);
        transform.removed_count()
    }

    #[test]
    fn keeps_later_of_contained_pair() {
        let mut clips = vec![
            highlight("Dune", Span::range(100, 110), "Fear", 0),
            highlight("Dune", Span::range(100, 130), "Fear is the mind-killer.", 1),
        ];
        assert_eq!(dedupe(&mut clips), 1);
        assert_eq!(clips.len(), 1);
        assert_eq!(clips[0].source_order, 1);
        assert_eq!(clips[0].content, "Fear is the mind-killer.");
    }

    #[test]
    fn keeps_later_even_when_it_shrank() {
        let mut clips = vec![
            highlight("Dune", Span::range(100, 130), "long selection", 0),
            highlight("Dune", Span::range(105, 110), "short", 1),
        ];
        assert_eq!(dedupe(&mut clips), 1);
        assert_eq!(clips[0].source_order, 1);
    }

    #[test]
    fn growing_chain_collapses_to_final_selection() {
        let mut clips = vec![
            highlight("Dune", Span::range(100, 105), "a", 0),
            highlight("Dune", Span::range(100, 120), "ab", 1),
            highlight("Dune", Span::range(100, 140), "abc", 2),
        ];
        assert_eq!(dedupe(&mut clips), 2);
        assert_eq!(clips.len(), 1);
        assert_eq!(clips[0].source_order, 2);
    }

    #[test]
    fn equal_locations_are_duplicates() {
        let mut clips = vec![
            highlight("Dune", Span::range(100, 110), "same", 0),
            highlight("Dune", Span::range(100, 110), "same", 1),
        ];
        assert_eq!(dedupe(&mut clips), 1);
        assert_eq!(clips[0].source_order, 1);
    }

    #[test]
    fn overlap_without_containment_is_not_a_duplicate() {
        let mut clips = vec![
            highlight("Dune", Span::range(100, 110), "left", 0),
            highlight("Dune", Span::range(105, 120), "right", 1),
        ];
        assert_eq!(dedupe(&mut clips), 0);
        assert_eq!(clips.len(), 2);
    }

    #[test]
    fn different_books_never_deduplicate() {
        let mut clips = vec![
            highlight("Dune", Span::range(100, 110), "x", 0),
            highlight("Hyperion", Span::range(100, 110), "x", 1),
        ];
        assert_eq!(dedupe(&mut clips), 0);
    }

    #[test]
    fn same_title_different_author_is_a_different_book() {
        let mut clips = vec![
            highlight("Collected Poems", Span::range(10, 20), "x", 0),
            highlight("Collected Poems", Span::range(10, 20), "x", 1),
        ];
        clips[1].author = Some("Someone Else".to_string());
        assert_eq!(dedupe(&mut clips), 0);
        assert_eq!(clips.len(), 2);
    }

    #[test]
    fn notes_and_bookmarks_always_survive() {
        let mut clips = vec![
            highlight("Dune", Span::range(100, 110), "passage", 0),
            highlight("Dune", Span::range(100, 120), "passage more", 1),
        ];
        let mut note = highlight("Dune", Span::range(100, 110), "my thought", 2);
        note.kind = ClipKind::Note;
        let mut bookmark = highlight("Dune", Span::range(100, 110), "", 3);
        bookmark.kind = ClipKind::Bookmark;
        clips.push(note);
        clips.push(bookmark);

        assert_eq!(dedupe(&mut clips), 1);
        let kinds: Vec<_> = clips.iter().map(|c| c.kind).collect();
        assert_eq!(
            kinds,
            vec![ClipKind::Highlight, ClipKind::Note, ClipKind::Bookmark]
        );
    }

    #[test]
    fn highlights_without_location_never_match() {
        let mut clips = vec![
            highlight("Dune", Span::single(1), "a", 0),
            highlight("Dune", Span::single(1), "b", 1),
        ];
        clips[0].location = None;
        clips[1].location = None;
        assert_eq!(dedupe(&mut clips), 0);
        assert_eq!(clips.len(), 2);
    }

    #[test]
    fn deduplication_is_idempotent() {
        let mut clips = vec![
            highlight("Dune", Span::range(100, 105), "a", 0),
            highlight("Dune", Span::range(100, 120), "ab", 1),
            highlight("Hyperion", Span::range(5, 9), "c", 2),
        ];
        dedupe(&mut clips);
        let once = clips.clone();
        assert_eq!(dedupe(&mut clips), 0);
        assert_eq!(clips, once);
    }

    #[test]
    fn relative_order_and_source_order_are_preserved() {
        let mut clips = vec![
            highlight("Dune", Span::range(1, 5), "a", 0),
            highlight("Hyperion", Span::range(1, 5), "b", 1),
            highlight("Dune", Span::range(1, 9), "ab", 2),
            highlight("Hyperion", Span::range(7, 9), "c", 3),
        ];
        dedupe(&mut clips);
        let orders: Vec<_> = clips.iter().map(|c| c.source_order).collect();
        assert_eq!(orders, vec![1, 2, 3]);
    }
}
