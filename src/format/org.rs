//! Org-mode outline formatter.
//!
//! One top-level heading per distinct book, in first-appearance order; each
//! clip becomes a second-level entry tagged with its kind, carrying an
//! inactive timestamp when the clip has one and the content as body text.

use std::fmt::Write;

use anyhow::Result;

use crate::clippings::Clip;

pub fn render(clips: &[Clip]) -> Result<String> {
    let mut out = String::new();

    for (book_index, book) in group_by_book(clips).iter().enumerate() {
        if book_index > 0 {
            writeln!(out)?;
        }
        writeln!(out, "* {}", book[0].heading())?;
        for clip in book {
            write!(out, "** {}", clip.kind.label())?;
            if let Some(location) = super::location_summary(clip) {
                write!(out, " at {location}")?;
            }
            writeln!(out, " :{}:", clip.kind.tag())?;
            if let Some(added_at) = &clip.added_at {
                writeln!(out, "[{}]", added_at.format("%Y-%m-%d %a %H:%M"))?;
            }
            if !clip.content.is_empty() {
                writeln!(out)?;
                writeln!(out, "{}", clip.content)?;
            }
        }
    }

    Ok(out)
}

/// Group clips by book, preserving both the books' first-appearance order
/// and the clips' order within each book.
fn group_by_book<'a>(clips: &'a [Clip]) -> Vec<Vec<&'a Clip>> {
    let mut books: Vec<Vec<&'a Clip>> = Vec::new();
    let mut keys: Vec<(&str, Option<&str>)> = Vec::new();

    for clip in clips {
        let key = clip.book_key();
        match keys.iter().position(|k| *k == key) {
            Some(i) => books[i].push(clip),
            None => {
                keys.push(key);
                books.push(vec![clip]);
            }
        }
    }
    books
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clippings::{ClipKind, Location, Span};
    use chrono::NaiveDate;

    fn clip(title: &str, kind: ClipKind, content: &str, source_order: usize) -> Clip {
        Clip {
            title: title.into(),
            author: Some("Author".into()),
            kind,
            location: Some(Location {
                page: Some(Span::single(12)),
                position: None,
            }),
            added_at: NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_hms_opt(13, 0, 0),
            content: content.into(),
            source_order,
        }
    }

    #[test]
    fn one_heading_per_book_in_first_appearance_order() {
        let clips = vec![
            clip("Dune", ClipKind::Highlight, "Fear", 0),
            clip("Hyperion", ClipKind::Highlight, "The tree", 1),
            clip("Dune", ClipKind::Note, "my thought", 2),
        ];
        let out = render(&clips).unwrap();

        let dune = out.find("* Dune (Author)").unwrap();
        let hyperion = out.find("* Hyperion (Author)").unwrap();
        assert!(dune < hyperion);
        assert_eq!(out.matches("* Dune (Author)").count(), 1);

        // Both Dune clips sit under the one Dune heading.
        let dune_section = &out[dune..hyperion];
        assert!(dune_section.contains("** Highlight at page 12 :highlight:"));
        assert!(dune_section.contains("** Note at page 12 :note:"));
        assert!(dune_section.contains("my thought"));
    }

    #[test]
    fn renders_entry_with_timestamp_and_body() {
        let clips = vec![clip("Dune", ClipKind::Highlight, "Fear", 0)];
        let out = render(&clips).unwrap();
        insta::assert_snapshot!(out, @r"
        * Dune (Author)
        ** Highlight at page 12 :highlight:
        [2024-01-01 Mon 13:00]

        Fear
        ");
    }

    #[test]
    fn bookmark_entry_has_no_body() {
        let mut bookmark = clip("Dune", ClipKind::Bookmark, "", 0);
        bookmark.added_at = None;
        let out = render(&[bookmark]).unwrap();
        insta::assert_snapshot!(out, @r"
        * Dune (Author)
        ** Bookmark at page 12 :bookmark:
        ");
    }

    #[test]
    fn empty_sequence_renders_empty_output() {
        assert_eq!(render(&[]).unwrap(), "");
    }
}
