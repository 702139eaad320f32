//! The rasterizer contract.
//!
//! Turning a content block into pixels is the caller's business. The export
//! engine only needs something that takes an ordered run of blocks and hands
//! back one image for the whole run.

use crate::resource::ResourceError;
use std::future::Future;
use thiserror::Error;
use vitae_types::{Color, ContentBlock, RasterImage, RasterImageError};

/// Errors raised while rendering a group of blocks.
#[derive(Error, Debug)]
pub enum RasterError {
    #[error("Failed to load content for block '{block}': {source}")]
    Resource {
        block: String,
        #[source]
        source: ResourceError,
    },

    #[error("Failed to decode content for block '{block}': {message}")]
    Decode { block: String, message: String },

    #[error("Render surface error: {0}")]
    Surface(String),

    #[error(transparent)]
    Image(#[from] RasterImageError),

    #[error("{0}")]
    Other(String),
}

/// Options every export passes to the rasterizer.
///
/// The values are fixed by the export engine; `Default` is the only
/// configuration it ever uses.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterOptions {
    /// Resolution multiplier applied to the displayed size.
    pub scale: f32,
    /// Fetch content hosted on other origins instead of dropping it.
    pub use_cors: bool,
    /// Keep going when embedded content cannot be verified or decoded.
    pub allow_taint: bool,
    /// Opaque fill behind all content.
    pub background: Color,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            scale: 2.0,
            use_cors: true,
            allow_taint: true,
            background: Color::WHITE,
        }
    }
}

/// Renders an ordered list of blocks into a single raster image.
///
/// Implementations must return `Ok(None)` for an empty slice and must not
/// retain their drawing surface between calls. Callers await one call at a
/// time, so an implementation is free to drive a single shared surface.
pub trait Rasterizer {
    fn render(
        &self,
        blocks: &[ContentBlock],
        options: &RasterOptions,
    ) -> impl Future<Output = Result<Option<RasterImage>, RasterError>> + Send;
}
