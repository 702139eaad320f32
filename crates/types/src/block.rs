use crate::ids::{BlockId, ResourceUri};

/// One renderable section of the resume.
///
/// The engine only inspects `id` (to find the forced page break) and keeps
/// `position` for diagnostics; `source` is handed to the rasterizer untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentBlock {
    pub id: BlockId,
    pub position: usize,
    pub source: ResourceUri,
}

impl ContentBlock {
    pub fn new(id: impl Into<BlockId>, position: usize, source: impl Into<ResourceUri>) -> Self {
        Self {
            id: id.into(),
            position,
            source: source.into(),
        }
    }

    /// Builds blocks from `(id, source)` pairs, numbering them in order.
    pub fn sequence<I, S, U>(items: I) -> Vec<ContentBlock>
    where
        I: IntoIterator<Item = (S, U)>,
        S: Into<BlockId>,
        U: Into<ResourceUri>,
    {
        items
            .into_iter()
            .enumerate()
            .map(|(position, (id, source))| ContentBlock::new(id, position, source))
            .collect()
    }
}
