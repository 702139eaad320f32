use log::debug;
use vitae_types::{BlockId, ContentBlock};

/// Section that always starts the second group when present.
pub const DEFAULT_BREAK_SECTION: &str = "projects";

/// Where the split falls when the break section is absent.
pub const DEFAULT_FALLBACK_BOUNDARY: usize = 4;

/// Splits the block sequence into two groups at a forced page break.
///
/// The first block whose id matches `marker` opens the second group. Without
/// a match the split falls after `fallback_boundary` blocks (or after all of
/// them when there are fewer).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionGrouper {
    marker: BlockId,
    fallback_boundary: usize,
}

impl SectionGrouper {
    pub fn new(marker: impl Into<BlockId>, fallback_boundary: usize) -> Self {
        Self {
            marker: marker.into(),
            fallback_boundary,
        }
    }

    pub fn marker(&self) -> &BlockId {
        &self.marker
    }

    /// Index of the first block of the second group.
    pub fn boundary(&self, blocks: &[ContentBlock]) -> usize {
        match blocks.iter().position(|b| b.id == self.marker) {
            Some(index) => {
                debug!("Break section '{}' found at index {}", self.marker, index);
                index
            }
            None => {
                let index = self.fallback_boundary.min(blocks.len());
                debug!(
                    "Break section '{}' absent, splitting {} blocks at {}",
                    self.marker,
                    blocks.len(),
                    index
                );
                index
            }
        }
    }

    /// Returns `(first, second)`; together they are exactly `blocks`, in order.
    pub fn split<'a>(&self, blocks: &'a [ContentBlock]) -> (&'a [ContentBlock], &'a [ContentBlock]) {
        blocks.split_at(self.boundary(blocks))
    }
}

impl Default for SectionGrouper {
    fn default() -> Self {
        Self::new(DEFAULT_BREAK_SECTION, DEFAULT_FALLBACK_BOUNDARY)
    }
}
