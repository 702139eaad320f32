use image::imageops::{self, FilterType};
use image::{Rgb, RgbImage, RgbaImage};
use vitae_traits::{RasterError, RasterOptions};
use vitae_types::RasterImage;

/// Largest surface the compositor will allocate (about 120 MB of RGB).
pub(crate) const MAX_SURFACE_PIXELS: u64 = 40_000_000;

fn scaled_dim(px: u32, scale: f32) -> u32 {
    ((px as f32 * scale).round() as u32).max(1)
}

/// Stacks `snapshots` top to bottom on a fresh surface filled with the
/// background colour. Each snapshot is resized by `options.scale` and left
/// aligned; transparent pixels are flattened onto the background.
pub(crate) fn compose(snapshots: &[RgbaImage], options: &RasterOptions) -> Result<RasterImage, RasterError> {
    let dims: Vec<(u32, u32)> = snapshots
        .iter()
        .map(|snap| {
            (
                scaled_dim(snap.width(), options.scale),
                scaled_dim(snap.height(), options.scale),
            )
        })
        .collect();
    let width = dims.iter().map(|d| d.0).max().unwrap_or(0);
    let height: u64 = dims.iter().map(|d| d.1 as u64).sum();
    if width as u64 * height > MAX_SURFACE_PIXELS {
        return Err(RasterError::Surface(format!(
            "{}x{} exceeds the {} pixel limit",
            width, height, MAX_SURFACE_PIXELS
        )));
    }

    let resized: Vec<RgbaImage> = snapshots
        .iter()
        .zip(&dims)
        .map(|(snap, &(w, h))| {
            if w == snap.width() && h == snap.height() {
                snap.clone()
            } else {
                imageops::resize(snap, w, h, FilterType::Triangle)
            }
        })
        .collect();

    // Bounded by MAX_SURFACE_PIXELS, so it fits in u32.
    let height = height as u32;
    let bg = options.background;
    let mut surface = RgbImage::from_pixel(width, height, Rgb([bg.r, bg.g, bg.b]));
    let mut top = 0;
    for snap in &resized {
        for (x, y, px) in snap.enumerate_pixels() {
            let [r, g, b, a] = px.0;
            surface.put_pixel(x, top + y, Rgb(bg.blend(r, g, b, a)));
        }
        top += snap.height();
    }

    Ok(RasterImage::from_rgb(width, height, surface.into_raw())?)
}
