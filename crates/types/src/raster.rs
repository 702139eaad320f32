use crate::color::Color;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RasterImageError {
    #[error("Raster dimensions must be positive, got {width}x{height}")]
    ZeroDimension { width: u32, height: u32 },
    #[error("Pixel buffer holds {actual} bytes, expected {expected}")]
    BufferSize { expected: usize, actual: usize },
}

/// A fixed-size RGB8 image produced by a rasterizer.
///
/// Pixels are stored row-major, top row first. The buffer is shared, so
/// cloning a `RasterImage` is cheap and pages cut from the same image all
/// point at one allocation.
#[derive(Clone, PartialEq, Eq)]
pub struct RasterImage {
    width_px: u32,
    height_px: u32,
    pixels: Arc<[u8]>,
}

impl RasterImage {
    pub const CHANNELS: usize = 3;

    pub fn from_rgb(width_px: u32, height_px: u32, pixels: Vec<u8>) -> Result<Self, RasterImageError> {
        if width_px == 0 || height_px == 0 {
            return Err(RasterImageError::ZeroDimension {
                width: width_px,
                height: height_px,
            });
        }
        let expected = width_px as usize * height_px as usize * Self::CHANNELS;
        if pixels.len() != expected {
            return Err(RasterImageError::BufferSize {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width_px,
            height_px,
            pixels: pixels.into(),
        })
    }

    /// A single-colour image.
    pub fn filled(width_px: u32, height_px: u32, color: Color) -> Result<Self, RasterImageError> {
        let count = width_px as usize * height_px as usize;
        let mut pixels = Vec::with_capacity(count * Self::CHANNELS);
        for _ in 0..count {
            pixels.extend_from_slice(&[color.r, color.g, color.b]);
        }
        Self::from_rgb(width_px, height_px, pixels)
    }

    pub fn width_px(&self) -> u32 {
        self.width_px
    }

    pub fn height_px(&self) -> u32 {
        self.height_px
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width_px || y >= self.height_px {
            return None;
        }
        let i = (y as usize * self.width_px as usize + x as usize) * Self::CHANNELS;
        Some([self.pixels[i], self.pixels[i + 1], self.pixels[i + 2]])
    }
}

impl fmt::Debug for RasterImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RasterImage")
            .field("width_px", &self.width_px)
            .field("height_px", &self.height_px)
            .field("bytes", &self.pixels.len())
            .finish()
    }
}
