use crate::document::Placement;
use crate::scaler::ScaledImage;
use log::{debug, warn};
use vitae_types::PageFormat;

/// Each page window starts this fraction of a page below the previous one,
/// so consecutive pages repeat the bottom tenth of the previous window.
pub const OVERLAP_STEP_RATIO: f32 = 0.9;

/// Hard limit on pages cut from one image. Content below the last window
/// is dropped.
pub const MAX_PAGES_PER_IMAGE: usize = 6;

/// Vertical offsets of the page windows for an image of `scaled_height`.
///
/// * Content that fits yields a single window at `0.0`.
/// * Otherwise windows start at `i * 0.9 * page_height` while the window
///   top is still inside the image, up to [`MAX_PAGES_PER_IMAGE`].
pub fn page_offsets(scaled_height: f32, page_height: f32) -> Vec<f32> {
    if scaled_height <= page_height {
        return vec![0.0];
    }

    let step = page_height * OVERLAP_STEP_RATIO;
    let mut offsets = Vec::new();
    loop {
        let offset = step * offsets.len() as f32;
        if offset >= scaled_height {
            break;
        }
        if offsets.len() == MAX_PAGES_PER_IMAGE {
            warn!(
                "Content of height {:.1} needs more than {} pages; truncating at offset {:.1}",
                scaled_height, MAX_PAGES_PER_IMAGE, offset
            );
            break;
        }
        offsets.push(offset);
    }
    offsets
}

/// Cuts scaled images into page placements.
///
/// The paginator never crops the raster: every placement references the
/// whole image and only records where the page window starts. Clipping to
/// the page happens when the document is written.
#[derive(Debug, Clone, Copy)]
pub struct Paginator {
    page_height: f32,
}

impl Paginator {
    pub fn new(format: PageFormat) -> Self {
        Self {
            page_height: format.height_units,
        }
    }

    /// An absent image (empty group) yields no placements.
    pub fn paginate(&self, scaled: Option<ScaledImage>) -> Vec<Placement> {
        let Some(scaled) = scaled else {
            return Vec::new();
        };

        let offsets = page_offsets(scaled.height, self.page_height);
        debug!(
            "Paginated {}x{}px image (scaled height {:.1}) into {} page(s)",
            scaled.image.width_px(),
            scaled.image.height_px(),
            scaled.height,
            offsets.len()
        );

        offsets
            .into_iter()
            .map(|offset_y| Placement {
                image: scaled.image.clone(),
                offset_y,
                width: scaled.width,
                height: scaled.height,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scaler::PageScaler;
    use std::sync::Arc;
    use vitae_types::{Color, RasterImage};

    const H: f32 = 297.0;

    fn assert_offsets(actual: &[f32], expected: &[f32]) {
        assert_eq!(actual.len(), expected.len(), "offsets were {:?}", actual);
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-2, "expected {e}, got {a} in {actual:?}");
        }
    }

    #[test]
    fn fitting_content_is_one_page_at_zero() {
        for height in [1.0, 100.0, 296.9, H] {
            assert_eq!(page_offsets(height, H), vec![0.0]);
        }
    }

    #[test]
    fn integer_multiples_of_page_height() {
        for k in 2..=8u32 {
            let height = k as f32 * H;
            let expected = ((height / (OVERLAP_STEP_RATIO * H)).ceil() as usize).min(MAX_PAGES_PER_IMAGE);
            let offsets = page_offsets(height, H);
            assert_eq!(offsets.len(), expected, "k = {k}");
            for (i, offset) in offsets.iter().enumerate() {
                assert!((offset - i as f32 * 0.9 * H).abs() < 1e-2);
            }
        }
    }

    #[test]
    fn offsets_are_strictly_increasing() {
        let offsets = page_offsets(1500.0, H);
        assert!(offsets.windows(2).all(|w| w[0] < w[1]));
        assert!(offsets.iter().all(|o| *o >= 0.0));
    }

    #[test]
    fn nine_hundred_units_gives_four_pages() {
        assert_offsets(&page_offsets(900.0, H), &[0.0, 267.3, 534.6, 801.9]);
    }

    #[test]
    fn cap_engages_for_very_tall_content() {
        // Known limitation: everything below the sixth window is dropped.
        let offsets = page_offsets(10_000.0, H);
        assert_eq!(offsets.len(), MAX_PAGES_PER_IMAGE);
        assert!((offsets[5] - 5.0 * 267.3).abs() < 1e-2);
    }

    #[test]
    fn cap_applies_only_above_six_windows() {
        // 7H needs ceil(7 / 0.9) = 8 windows; only 6 are emitted.
        assert_eq!(page_offsets(7.0 * H, H).len(), 6);
        // 5H needs ceil(5 / 0.9) = 6 windows; the cap is not hit.
        assert_eq!(page_offsets(5.0 * H, H).len(), 6);
    }

    #[test]
    fn just_over_one_page_takes_two() {
        assert_offsets(&page_offsets(H + 0.5, H), &[0.0, 267.3]);
    }

    #[test]
    fn paginate_shares_one_image_across_pages() {
        let image = Arc::new(RasterImage::filled(420, 1800, Color::WHITE).unwrap());
        let scaled = PageScaler::new(PageFormat::A4).scale(image.clone());
        let placements = Paginator::new(PageFormat::A4).paginate(Some(scaled));

        assert_eq!(placements.len(), 4);
        for p in &placements {
            assert!(Arc::ptr_eq(&p.image, &image));
            assert_eq!(p.width, 210.0);
        }
    }

    #[test]
    fn absent_image_yields_no_pages() {
        assert!(Paginator::new(PageFormat::A4).paginate(None).is_empty());
    }
}
