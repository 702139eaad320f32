use std::sync::Arc;
use vitae_types::{PageFormat, RasterImage};

/// A raster image together with its size once fitted to the page width.
#[derive(Debug, Clone)]
pub struct ScaledImage {
    pub image: Arc<RasterImage>,
    pub width: f32,
    pub height: f32,
}

/// Fits images to the page width, keeping their aspect ratio.
///
/// The scaled height is allowed to exceed the page height; that is what
/// sends an image to the paginator.
#[derive(Debug, Clone, Copy)]
pub struct PageScaler {
    page_width: f32,
}

impl PageScaler {
    pub fn new(format: PageFormat) -> Self {
        Self {
            page_width: format.width_units,
        }
    }

    pub fn scaled_height(&self, image: &RasterImage) -> f32 {
        image.height_px() as f32 * self.page_width / image.width_px() as f32
    }

    pub fn scale(&self, image: Arc<RasterImage>) -> ScaledImage {
        let height = self.scaled_height(&image);
        ScaledImage {
            image,
            width: self.page_width,
            height,
        }
    }
}
