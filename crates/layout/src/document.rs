use std::sync::Arc;
use vitae_types::{Color, PageFormat, Point, RasterImage, Rect};

/// Distance of the footer text from the right page edge, in page units.
pub const FOOTER_RIGHT_MARGIN: f32 = 25.0;
/// Distance of the footer baseline from the bottom page edge, in page units.
pub const FOOTER_BOTTOM_MARGIN: f32 = 10.0;
pub const FOOTER_FONT_SIZE: f32 = 8.0;
pub const FOOTER_COLOR: Color = Color::gray(128);

pub fn footer_text(page_number: usize, total_pages: usize) -> String {
    format!("Page {} of {}", page_number, total_pages)
}

/// One page window onto a raster image. Produced by the paginator before
/// the page count is known.
#[derive(Debug, Clone)]
pub struct Placement {
    pub image: Arc<RasterImage>,
    /// Distance from the image top to the page top, in page units.
    pub offset_y: f32,
    /// Scaled image size, in page units.
    pub width: f32,
    pub height: f32,
}

impl Placement {
    /// Where the whole image lands relative to the page's top-left corner.
    /// Anything outside the page bounds is clipped by the writer.
    pub fn image_rect(&self) -> Rect {
        Rect::new(0.0, -self.offset_y, self.width, self.height)
    }
}

/// Footer stamped on a page during numbering.
#[derive(Debug, Clone, PartialEq)]
pub struct Footer {
    pub text: String,
    /// Baseline start of the text, measured from the page's top-left corner.
    pub position: Point,
    pub font_size: f32,
    pub color: Color,
}

#[derive(Debug, Clone)]
pub struct Page {
    pub placement: Placement,
    /// 1-based.
    pub page_number: usize,
    pub footer: Footer,
}

/// The finished, numbered page sequence of one export.
#[derive(Debug, Clone)]
pub struct Document {
    format: PageFormat,
    pages: Vec<Page>,
}

impl Document {
    /// Second pass: assigns page numbers and footers once every placement exists.
    pub fn number(format: PageFormat, placements: Vec<Placement>) -> Self {
        let total = placements.len();
        let footer_position = Point::new(
            format.width_units - FOOTER_RIGHT_MARGIN,
            format.height_units - FOOTER_BOTTOM_MARGIN,
        );
        let pages = placements
            .into_iter()
            .enumerate()
            .map(|(i, placement)| Page {
                placement,
                page_number: i + 1,
                footer: Footer {
                    text: footer_text(i + 1, total),
                    position: footer_position,
                    font_size: FOOTER_FONT_SIZE,
                    color: FOOTER_COLOR,
                },
            })
            .collect();
        Self { format, pages }
    }

    pub fn format(&self) -> PageFormat {
        self.format
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn total_pages(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Distinct images referenced by the document, in first-use order.
    pub fn images(&self) -> Vec<Arc<RasterImage>> {
        let mut seen: Vec<Arc<RasterImage>> = Vec::new();
        for page in &self.pages {
            if !seen.iter().any(|img| Arc::ptr_eq(img, &page.placement.image)) {
                seen.push(page.placement.image.clone());
            }
        }
        seen
    }
}
