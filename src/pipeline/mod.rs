//! Export pipeline orchestration.
//!
//! - [`ExportPipelineBuilder`]: fluent builder for an [`ExportPipeline`]
//! - [`DocumentAssembler`]: rasterizes both section groups and numbers the pages
//! - [`Manifest`] / [`ContentRoot`]: where the blocks to export come from
//!
//! # Example
//!
//! ```ignore
//! use vitae::{ExportPipelineBuilder, Manifest};
//! use vitae_raster::SnapshotRasterizer;
//! use vitae_resource::FilesystemResourceProvider;
//!
//! let manifest = Manifest::load("resume/manifest.json")?;
//! let rasterizer = SnapshotRasterizer::new(FilesystemResourceProvider::new("resume"));
//! let pipeline = ExportPipelineBuilder::new()
//!     .with_config(manifest.config.clone())
//!     .build(rasterizer)?;
//!
//! let artifact = pipeline.export(Some(&manifest.content_root())).await?;
//! ```

mod assembler;
mod builder;
pub mod config;
mod export;
mod filename;
pub mod manifest;

pub use assembler::DocumentAssembler;
pub use builder::ExportPipelineBuilder;
pub use config::ExportConfig;
pub use export::{ExportArtifact, ExportPipeline};
pub use filename::export_filename;
pub use manifest::{ContentRoot, Manifest, SectionEntry};
