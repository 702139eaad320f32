pub mod block;
pub mod color;
pub mod geometry;
pub mod ids;
pub mod page;
pub mod raster;

pub use block::ContentBlock;
pub use color::Color;
pub use geometry::{Point, Rect};
pub use ids::{BlockId, ResourceUri};
pub use page::PageFormat;
pub use raster::{RasterImage, RasterImageError};
