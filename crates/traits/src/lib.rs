pub mod rasterizer;
pub mod resource;

pub use rasterizer::{RasterError, RasterOptions, Rasterizer};
pub use resource::{InMemoryResourceProvider, ResourceError, ResourceProvider, SharedResourceData};
