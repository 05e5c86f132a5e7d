//! Per-record parse failures.
//!
//! These are the hard failures only: soft problems (an unparseable date, an
//! unrecognized clip type) degrade a field instead of producing an error.

/// A reason to discard one raw record. Never aborts the rest of the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("record has fewer than two usable lines")]
    MalformedRecord,

    #[error("metadata line is missing or blank")]
    EmptyMetadata,
}

/// A skipped record: which one, which book it seemed to belong to, and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Zero-based index of the raw record in the export file.
    pub record: usize,
    /// The record's title line, when one was readable.
    pub title: Option<String>,
    pub error: ParseError,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.title {
            Some(title) => write!(f, "record {} ({}): {}", self.record, title, self.error),
            None => write!(f, "record {}: {}", self.record, self.error),
        }
    }
}
