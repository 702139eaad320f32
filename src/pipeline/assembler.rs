use crate::error::PipelineError;
use log::debug;
use std::sync::Arc;
use vitae_layout::{Document, PageScaler, Paginator, Placement, SectionGrouper};
use vitae_traits::{RasterOptions, Rasterizer};
use vitae_types::{ContentBlock, PageFormat};

/// Turns content blocks into a numbered [`Document`].
///
/// The blocks are split into two groups at the section break. Each group is
/// rasterized into one image, which is scaled to the page width and cut into
/// page windows. Groups are rendered one after the other; the second render
/// is not issued until the first has resolved. Page numbers are assigned
/// only after both groups are placed, so every footer knows the final count.
#[derive(Debug)]
pub struct DocumentAssembler<R> {
    rasterizer: R,
    grouper: SectionGrouper,
    format: PageFormat,
    options: RasterOptions,
}

impl<R: Rasterizer> DocumentAssembler<R> {
    pub fn new(rasterizer: R, grouper: SectionGrouper) -> Self {
        Self {
            rasterizer,
            grouper,
            format: PageFormat::A4,
            options: RasterOptions::default(),
        }
    }

    pub fn rasterizer(&self) -> &R {
        &self.rasterizer
    }

    pub fn grouper(&self) -> &SectionGrouper {
        &self.grouper
    }

    pub fn format(&self) -> PageFormat {
        self.format
    }

    pub async fn assemble(&self, blocks: &[ContentBlock]) -> Result<Document, PipelineError> {
        let (first, second) = self.grouper.split(blocks);
        debug!("Split {} block(s) into groups of {} and {}", blocks.len(), first.len(), second.len());

        let mut placements = self.place_group(first).await?;
        // The second group always starts on a fresh page: every placement is a page of its own.
        placements.extend(self.place_group(second).await?);

        Ok(Document::number(self.format, placements))
    }

    async fn place_group(&self, group: &[ContentBlock]) -> Result<Vec<Placement>, PipelineError> {
        let image = self.rasterizer.render(group, &self.options).await?;
        let scaled = image.map(|image| PageScaler::new(self.format).scale(Arc::new(image)));
        let placements = Paginator::new(self.format).paginate(scaled);
        debug!("Group of {} block(s) produced {} page(s)", group.len(), placements.len());
        Ok(placements)
    }
}
