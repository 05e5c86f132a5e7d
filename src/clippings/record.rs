//! Record parsing.
//!
//! A well-formed record is a title line, a metadata line, a blank line, and
//! the clipped text:
//!
//! ```text
//! Common LISP: A Gentle Introduction to Symbolic Computation (David S. Touretzky)
//! - Your Highlight on page 46 | Location 694-694 | Added on Sunday, August 27, 2023 1:37:08 PM
//!
//! The length of a list is the number of elements it has
//! ```
//!
//! Bookmarks omit the text, and real exports drift from the template, so
//! the parser commits only to "first non-blank line is the title, the next
//! line is the metadata" and treats everything after that as content.

use super::error::ParseError;
use super::split::RawRecord;

/// A record split into its three parts, not yet interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRecord<'a> {
    pub title_line: &'a str,
    pub metadata_line: &'a str,
    pub content: String,
}

/// Split a raw record into title line, metadata line, and content.
///
/// Fails with [`ParseError::MalformedRecord`] when fewer than two lines are
/// usable. A blank metadata line is passed through; the metadata extractor
/// reports it as [`ParseError::EmptyMetadata`] so the diagnostic names the
/// actual problem.
pub fn parse_record<'a>(record: &RawRecord<'a>) -> Result<ParsedRecord<'a>, ParseError> {
    let mut lines = record.lines.iter();

    let title_line = lines
        .by_ref()
        .map(|line| strip_bom(line))
        .find(|line| !line.trim().is_empty())
        .ok_or(ParseError::MalformedRecord)?;

    let metadata_line = lines.next().copied().ok_or(ParseError::MalformedRecord)?;

    let content = lines
        .filter(|line| !line.trim().is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string();

    Ok(ParsedRecord {
        title_line: title_line.trim(),
        metadata_line,
        content,
    })
}

/// Real exports start with a UTF-8 BOM; it lands on the first record's
/// title line.
fn strip_bom(line: &str) -> &str {
    line.strip_prefix('\u{feff}').unwrap_or(line)
}

/// Split a title line into title and author.
///
/// The export appends the author as a trailing parenthetical:
/// `Dune (Herbert, Frank)`. Titles may themselves contain parentheses
/// (`Book (Series #3) (Surname, Name)`), so only the last balanced
/// parenthetical counts, and only when it leaves a non-empty title behind.
pub fn split_title_author(line: &str) -> (String, Option<String>) {
    let trimmed = line.trim();

    if !trimmed.ends_with(')') {
        return (trimmed.to_string(), None);
    }

    let mut depth = 0usize;
    for (i, ch) in trimmed.char_indices().rev() {
        match ch {
            ')' => depth += 1,
            '(' => {
                depth -= 1;
                if depth == 0 {
                    let title = trimmed[..i].trim();
                    let author = trimmed[i + 1..trimmed.len() - 1].trim();
                    if title.is_empty() || author.is_empty() {
                        break;
                    }
                    return (title.to_string(), Some(author.to_string()));
                }
            }
            _ => {}
        }
        if depth == 0 {
            break;
        }
    }

    // Unbalanced or degenerate parenthetical: the whole line is the title.
    (trimmed.to_string(), None)
}
