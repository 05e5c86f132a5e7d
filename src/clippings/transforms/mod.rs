//! Sequence-narrowing transforms.
//!
//! The parsing stages produce the full clip sequence; transforms then
//! narrow it. Each transform rewrites the vector in place but never mutates
//! an individual clip, so `source_order` values stay valid provenance.
//!
//! - [`DeduplicateHighlights`] - collapses re-exported overlapping
//!   highlights down to the most recent selection
//! - [`FilterKinds`] - restricts the sequence to caller-selected kinds

mod dedupe;
mod filter;

pub use dedupe::DeduplicateHighlights;
pub use filter::FilterKinds;

use super::types::Clip;

/// A pass over the clip sequence. Transforms are constructed fresh per run;
/// none retains state across calls.
pub trait Transform {
    fn transform(&mut self, clips: &mut Vec<Clip>);
}
