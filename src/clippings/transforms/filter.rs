//! Kind filtering.

use crate::clippings::types::{Clip, ClipKind};

/// Restricts the sequence to the selected clip kinds, order preserved.
///
/// An empty selection means "all known kinds": highlights, notes, and
/// bookmarks. [`ClipKind::Unknown`] is only ever kept when named
/// explicitly.
pub struct FilterKinds {
    keep: Vec<ClipKind>,
}

impl FilterKinds {
    pub fn new(kinds: &[ClipKind]) -> Self {
        let keep = if kinds.is_empty() {
            ClipKind::known().to_vec()
        } else {
            kinds.to_vec()
        };
        Self { keep }
    }
}

impl super::Transform for FilterKinds {
    fn transform(&mut self, clips: &mut Vec<Clip>) {
        clips.retain(|clip| self.keep.contains(&clip.kind));
    }
}
