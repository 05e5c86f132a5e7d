//! Plain-text formatter.
//!
//! One block per clip: heading, metadata summary, blank line, content (when
//! any), blank separator line. Deterministic and input-ordered.

use std::fmt::Write;

use anyhow::Result;

use crate::clippings::Clip;

pub fn render(clips: &[Clip]) -> Result<String> {
    let mut out = String::new();
    for clip in clips {
        writeln!(out, "{}", clip.heading())?;
        writeln!(out, "{}", summary(clip))?;
        writeln!(out)?;
        if !clip.content.is_empty() {
            writeln!(out, "{}", clip.content)?;
            writeln!(out)?;
        }
    }
    Ok(out)
}

/// `Highlight | page 12, loc. 542-546 | 2024-01-01 13:00`, the location and
/// date parts present only when known.
fn summary(clip: &Clip) -> String {
    let mut parts = vec![clip.kind.label().to_string()];
    if let Some(location) = super::location_summary(clip) {
        parts.push(location);
    }
    if let Some(added_at) = &clip.added_at {
        parts.push(added_at.format("%Y-%m-%d %H:%M").to_string());
    }
    parts.join(" | ")
}
