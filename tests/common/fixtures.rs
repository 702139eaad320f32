use image::{ImageFormat, Rgba, RgbaImage};
use std::collections::HashMap;
use std::io::Cursor;
use std::sync::Mutex;
use vitae::{ContentBlock, ContentRoot, RasterError, RasterImage, RasterOptions, Rasterizer};
use vitae_types::Color;

/// Section ids of the resume site, in display order.
pub const RESUME_SECTIONS: [&str; 8] = [
    "profile",
    "about",
    "skills",
    "experience",
    "projects",
    "education",
    "languages",
    "contact",
];

/// Raster width that scales 1:2 onto an A4 page (2 px per millimetre).
pub const PX_PER_PAGE_WIDTH: u32 = 420;

pub fn resume_root() -> ContentRoot {
    root_of(&RESUME_SECTIONS)
}

pub fn root_of(ids: &[&str]) -> ContentRoot {
    ContentRoot::new(ContentBlock::sequence(
        ids.iter().map(|id| (id.to_string(), format!("{id}.png"))),
    ))
}

/// Returns one solid raster per group, sized by the group's first block id.
/// Heights are given in millimetres at A4 width.
#[derive(Default)]
pub struct ScriptedRasterizer {
    heights_mm: HashMap<String, u32>,
    failure: Option<String>,
    pub calls: Mutex<Vec<Vec<String>>>,
}

impl ScriptedRasterizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn group(mut self, first_block: &str, height_mm: u32) -> Self {
        self.heights_mm.insert(first_block.to_string(), height_mm);
        self
    }

    pub fn failing_on(mut self, first_block: &str) -> Self {
        self.failure = Some(first_block.to_string());
        self
    }
}

impl Rasterizer for ScriptedRasterizer {
    async fn render(&self, blocks: &[ContentBlock], _: &RasterOptions) -> Result<Option<RasterImage>, RasterError> {
        self.calls
            .lock()
            .unwrap()
            .push(blocks.iter().map(|b| b.id.to_string()).collect());
        let Some(first) = blocks.first() else {
            return Ok(None);
        };
        if self.failure.as_deref() == Some(first.id.as_str()) {
            return Err(RasterError::Surface("canvas allocation failed".into()));
        }
        let height_mm = self.heights_mm.get(first.id.as_str()).copied().unwrap_or(100);
        Ok(Some(RasterImage::filled(PX_PER_PAGE_WIDTH, height_mm * 2, Color::WHITE)?))
    }
}

/// Encodes a solid PNG snapshot.
pub fn png(width: u32, height: u32, rgba: [u8; 4]) -> Vec<u8> {
    let mut bytes = Vec::new();
    RgbaImage::from_pixel(width, height, Rgba(rgba))
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .expect("encode png");
    bytes
}
