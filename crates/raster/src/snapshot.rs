use crate::compose::compose;
use image::RgbaImage;
use log::{debug, warn};
use vitae_traits::{RasterError, RasterOptions, Rasterizer, ResourceProvider};
use vitae_types::{ContentBlock, RasterImage};

/// Renders a group by compositing one snapshot image per block.
///
/// Each block's `source` names a PNG or JPEG in the provider. The drawing
/// surface is allocated inside [`Rasterizer::render`] and dropped before it
/// returns, so nothing is shared between calls.
///
/// Snapshots are expected at 1x, the size the section is displayed at.
/// Every one is resampled by [`RasterOptions::scale`] to reach the export
/// resolution, so a snapshot captured at 2x ends up twice as large.
#[derive(Debug)]
pub struct SnapshotRasterizer<P> {
    provider: P,
}

impl<P: ResourceProvider> SnapshotRasterizer<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Loads and decodes the snapshots for `blocks`, in order.
    ///
    /// A missing snapshot is always fatal. Undecodable content is skipped
    /// when `allow_taint` is set, and remote content is skipped unless
    /// `use_cors` is set.
    fn load_snapshots(&self, blocks: &[ContentBlock], options: &RasterOptions) -> Result<Vec<RgbaImage>, RasterError> {
        let mut snapshots = Vec::with_capacity(blocks.len());
        for block in blocks {
            if block.source.is_remote() && !options.use_cors {
                warn!("Skipping cross-origin content for block '{}': {}", block.id, block.source);
                continue;
            }

            let bytes = self.provider.load(&block.source).map_err(|source| RasterError::Resource {
                block: block.id.to_string(),
                source,
            })?;

            match image::load_from_memory(&bytes) {
                Ok(decoded) => {
                    debug!(
                        "Decoded snapshot for block '{}' ({}x{})",
                        block.id,
                        decoded.width(),
                        decoded.height()
                    );
                    snapshots.push(decoded.to_rgba8());
                }
                Err(e) if options.allow_taint => {
                    warn!("Skipping undecodable content for block '{}': {}", block.id, e);
                }
                Err(e) => {
                    return Err(RasterError::Decode {
                        block: block.id.to_string(),
                        message: e.to_string(),
                    });
                }
            }
        }
        Ok(snapshots)
    }
}

impl<P: ResourceProvider> Rasterizer for SnapshotRasterizer<P> {
    async fn render(&self, blocks: &[ContentBlock], options: &RasterOptions) -> Result<Option<RasterImage>, RasterError> {
        if blocks.is_empty() {
            return Ok(None);
        }

        let snapshots = self.load_snapshots(blocks, options)?;
        if snapshots.is_empty() {
            warn!("No renderable content in {} block(s)", blocks.len());
            return Ok(None);
        }

        let image = compose(&snapshots, options)?;
        debug!(
            "Rasterized {} block(s) via {} into {}x{}px",
            blocks.len(),
            self.provider.name(),
            image.width_px(),
            image.height_px()
        );
        Ok(Some(image))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba};
    use std::io::Cursor;
    use vitae_traits::InMemoryResourceProvider;

    fn png(w: u32, h: u32, px: [u8; 4]) -> Vec<u8> {
        let mut bytes = Vec::new();
        RgbaImage::from_pixel(w, h, Rgba(px))
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    fn rasterizer() -> SnapshotRasterizer<InMemoryResourceProvider> {
        let _ = env_logger::builder().is_test(true).try_init();
        let provider = InMemoryResourceProvider::new();
        provider.insert("profile.png", png(100, 40, [10, 20, 30, 255])).unwrap();
        provider.insert("about.png", png(80, 20, [200, 0, 0, 255])).unwrap();
        provider.insert("broken.png", b"not an image".to_vec()).unwrap();
        SnapshotRasterizer::new(provider)
    }

    #[tokio::test]
    async fn empty_group_renders_nothing() {
        let r = rasterizer();
        let out = r.render(&[], &RasterOptions::default()).await.unwrap();
        assert!(out.is_none());
    }

    #[tokio::test]
    async fn composites_blocks_at_double_scale() {
        let r = rasterizer();
        let blocks = ContentBlock::sequence([("profile", "profile.png"), ("about", "about.png")]);
        let img = r.render(&blocks, &RasterOptions::default()).await.unwrap().unwrap();

        assert_eq!(img.width_px(), 200);
        assert_eq!(img.height_px(), 120);
        assert_eq!(img.pixel(5, 5), Some([10, 20, 30]));
        assert_eq!(img.pixel(5, 100), Some([200, 0, 0]));
        assert_eq!(img.pixel(190, 100), Some([255, 255, 255]));
    }

    #[tokio::test]
    async fn missing_snapshot_fails() {
        let r = rasterizer();
        let blocks = ContentBlock::sequence([("skills", "skills.png")]);
        let err = r.render(&blocks, &RasterOptions::default()).await.unwrap_err();
        assert!(matches!(err, RasterError::Resource { ref block, .. } if block == "skills"));
    }

    #[tokio::test]
    async fn tainted_content_is_skipped_when_allowed() {
        let r = rasterizer();
        let blocks = ContentBlock::sequence([("broken", "broken.png"), ("about", "about.png")]);
        let img = r.render(&blocks, &RasterOptions::default()).await.unwrap().unwrap();
        assert_eq!(img.height_px(), 40);
    }

    #[tokio::test]
    async fn tainted_content_fails_when_not_allowed() {
        let r = rasterizer();
        let blocks = ContentBlock::sequence([("broken", "broken.png")]);
        let options = RasterOptions {
            allow_taint: false,
            ..RasterOptions::default()
        };
        let err = r.render(&blocks, &options).await.unwrap_err();
        assert!(matches!(err, RasterError::Decode { .. }));
    }

    #[tokio::test]
    async fn remote_content_requires_cors() {
        let r = rasterizer();
        r.provider()
            .insert("https://cdn.example.com/avatar.png", png(10, 10, [0, 0, 0, 255]))
            .unwrap();
        let blocks = ContentBlock::sequence([("profile", "https://cdn.example.com/avatar.png")]);

        let with_cors = r.render(&blocks, &RasterOptions::default()).await.unwrap();
        assert!(with_cors.is_some());

        let without = RasterOptions {
            use_cors: false,
            ..RasterOptions::default()
        };
        assert!(r.render(&blocks, &without).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn rendering_is_deterministic() {
        let r = rasterizer();
        let blocks = ContentBlock::sequence([("profile", "profile.png")]);
        let a = r.render(&blocks, &RasterOptions::default()).await.unwrap();
        let b = r.render(&blocks, &RasterOptions::default()).await.unwrap();
        assert_eq!(a, b);
    }
}
