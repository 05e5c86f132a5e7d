//! Structured JSON formatter.
//!
//! Emits the post-filter sequence as a pretty-printed JSON array, one
//! object per clip. Absent fields are omitted rather than null-padded, and
//! `source_order` is included so downstream tooling can see provenance.

use anyhow::{Context, Result};

use crate::clippings::Clip;

pub fn render(clips: &[Clip]) -> Result<String> {
    let mut out = serde_json::to_string_pretty(clips).context("failed to serialize clips")?;
    out.push('\n');
    Ok(out)
}
