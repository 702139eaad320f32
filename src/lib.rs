//! Resume export engine.
//!
//! Renders an ordered list of resume sections into a paginated A4 PDF. The
//! sections are split into two groups at a fixed section break, each group
//! is rasterized through a [`Rasterizer`], and tall images are cut into
//! overlapping page windows. Pages are numbered `Page i of N` only after
//! every page exists.

pub mod error;
pub mod pipeline;

pub use error::PipelineError;
pub use pipeline::{
    ContentRoot, DocumentAssembler, ExportArtifact, ExportConfig, ExportPipeline, ExportPipelineBuilder, Manifest,
    SectionEntry, export_filename,
};

pub use vitae_layout::{Document, Page, Placement, SectionGrouper};
pub use vitae_raster::SnapshotRasterizer;
pub use vitae_render_lopdf::{DocumentInfo, PdfDocumentWriter};
pub use vitae_resource::FilesystemResourceProvider;
pub use vitae_traits::{RasterError, RasterOptions, Rasterizer, ResourceProvider};
pub use vitae_types::{ContentBlock, PageFormat, RasterImage};
