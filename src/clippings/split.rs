//! Record splitting.
//!
//! The export separates records with a delimiter line of repeated `=`
//! characters (`==========`). The splitter walks the file line by line and
//! yields each non-empty block between delimiters, CRLF or LF alike.

/// Minimum run of `=` characters for a line to count as a delimiter.
const DELIMITER_MIN_LEN: usize = 10;

/// Whether a line is a record delimiter. Surrounding whitespace is
/// tolerated; anything else on the line disqualifies it.
fn is_delimiter(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.len() >= DELIMITER_MIN_LEN && trimmed.bytes().all(|b| b == b'=')
}

/// One block of lines between two delimiters, still unparsed.
///
/// Ephemeral: produced here, consumed immediately by the record parser.
/// `index` is the block's position in the file and becomes the assembled
/// clip's `source_order`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord<'a> {
    pub index: usize,
    pub lines: Vec<&'a str>,
}

impl RawRecord<'_> {
    /// The first non-blank line, trimmed. Used for diagnostics when the
    /// record itself cannot be parsed.
    pub fn first_line(&self) -> Option<&str> {
        self.lines
            .iter()
            .map(|line| line.trim())
            .find(|line| !line.is_empty())
    }

    fn is_blank(&self) -> bool {
        self.lines.iter().all(|line| line.trim().is_empty())
    }
}

/// Iterator over the raw records of an export.
pub struct RawRecords<'a> {
    lines: std::str::Lines<'a>,
    next_index: usize,
}

impl<'a> Iterator for RawRecords<'a> {
    type Item = RawRecord<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut lines = Vec::new();

        for line in self.lines.by_ref() {
            if is_delimiter(line) {
                let record = RawRecord {
                    index: self.next_index,
                    lines: std::mem::take(&mut lines),
                };
                // Consecutive delimiters produce empty blocks; skip them
                // without consuming a record index.
                if !record.is_blank() {
                    self.next_index += 1;
                    return Some(record);
                }
                continue;
            }
            lines.push(line);
        }

        // Trailing content after the last delimiter: emitted unless it is
        // only whitespace (files may or may not end with a delimiter).
        let record = RawRecord {
            index: self.next_index,
            lines,
        };
        if record.is_blank() {
            None
        } else {
            self.next_index += 1;
            Some(record)
        }
    }
}

/// Split raw export text into records. Lazy; preserves file order.
pub fn split_records(input: &str) -> RawRecords<'_> {
    RawRecords {
        lines: input.lines(),
        next_index: 0,
    }
}
